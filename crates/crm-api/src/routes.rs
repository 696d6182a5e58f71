//! API routes

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::{catalog, dashboard, projects, session, stock, system, users};

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(system::ping))
        .route("/demo", get(system::demo))
        .nest("/projects", projects_router())
        .route("/pipeline", get(projects::pipeline))
        .route("/calendar", get(projects::calendar))
        .nest("/stock", stock_router())
        .nest("/users", users_router())
        .route("/catalog", get(catalog::list_catalog))
        .route("/catalog/kinds", get(catalog::list_kinds))
        .route("/catalog/suggestions", get(catalog::suggestions))
        .route("/materials/cost", post(catalog::material_cost))
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/session",
            get(session::current_session).delete(session::logout),
        )
        .route("/session/login", post(session::login))
}

fn projects_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/:id/progress", put(projects::set_progress))
        .route("/:id/status", put(projects::move_project))
        .route("/:id/cost", get(projects::project_cost))
}

fn stock_router() -> Router<AppState> {
    Router::new()
        .route("/", get(stock::list_stock).post(stock::create_stock_item))
        .route("/summary", get(stock::stock_summary))
        .route("/categories", get(stock::stock_categories))
        .route(
            "/:id",
            get(stock::get_stock_item)
                .put(stock::update_stock_item)
                .delete(stock::delete_stock_item),
        )
        .route("/:id/restock", post(stock::restock))
}

fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/:id/status", put(users::set_user_status))
        .route("/:id/toggle-status", post(users::toggle_user_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use crm_core::config::AppConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        router().with_state(AppState::from_config(AppConfig::default()))
    }

    fn empty_app() -> Router {
        let mut config = AppConfig::default();
        config.instance.seed_demo_data = false;
        router().with_state(AppState::from_config(config))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    #[tokio::test]
    async fn test_ping_and_demo() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

        let (_, body) = get_json(&app, "/api/demo").await;
        assert_eq!(body["message"], "Hello from the demo API endpoint!");
    }

    #[tokio::test]
    async fn test_list_and_filter_projects() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/projects?search=&status=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (_, body) = get_json(&app, "/api/projects?search=MIGRATE").await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["status"], "done");

        let (status, body) = get_json(&app, "/api/projects?status=someday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorIdentifier"], "invalid_value");
    }

    #[tokio::test]
    async fn test_create_project_reports_missing_fields() {
        let app = empty_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/projects",
            Some(json!({ "title": "Poster run" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errorIdentifier"], "validation_failed");
        assert_eq!(
            body["message"],
            "Please fill in the required fields: startDate, endDate, personInCharge"
        );
        assert_eq!(
            body["missingFields"],
            json!(["startDate", "endDate", "personInCharge"])
        );
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let app = empty_app();
        let today = AppState::today();
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/projects",
            Some(json!({
                "title": "Shop window banner",
                "startDate": today.to_string(),
                "endDate": (today + chrono::Duration::days(10)).to_string(),
                "personInCharge": "Ana",
                "team": "Ana, Marco",
                "progress": 20,
                "materials": [{
                    "type": "Material",
                    "name": "Vinyl Banner",
                    "quantity": 2,
                    "unit": "piece",
                    "hasArea": true,
                    "width": 2,
                    "height": 3,
                    "areaUnit": "m²"
                }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "in-progress");
        assert_eq!(created["team"], json!(["Ana", "Marco"]));
        let id = created["id"].as_str().unwrap().to_string();

        let (_, cost) = get_json(&app, &format!("/api/projects/{}/cost", id)).await;
        assert!((cost["total"].as_f64().unwrap() - 551.88).abs() < 1e-9);

        let (_, moved) = send(
            &app,
            Method::PUT,
            &format!("/api/projects/{}/status", id),
            Some(json!({ "status": "review" })),
        )
        .await;
        assert_eq!(moved["status"], "review");

        let (_, done) = send(
            &app,
            Method::PUT,
            &format!("/api/projects/{}/progress", id),
            Some(json!({ "progress": 100 })),
        )
        .await;
        assert_eq!(done["status"], "done");

        let (_, columns) = get_json(&app, "/api/pipeline?search=marco").await;
        assert_eq!(columns.as_array().unwrap().len(), 5);
        assert_eq!(columns[3]["title"], "Done");
        assert_eq!(columns[3]["projects"][0]["id"], id.as_str());

        let (_, on_day) = get_json(&app, &format!("/api/calendar?date={}", today)).await;
        assert_eq!(on_day.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/projects/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = get_json(&app, &format!("/api/projects/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorIdentifier"], "not_found");
    }

    #[tokio::test]
    async fn test_stock_endpoints() {
        let app = test_app();
        let (_, summary) = get_json(&app, "/api/stock/summary").await;
        assert_eq!(summary["totalItems"], 6);
        assert_eq!(summary["lowStockCount"], 3);

        let (_, ascending) = get_json(&app, "/api/stock").await;
        assert_eq!(ascending[0]["name"], "A4 Premium Paper");
        let (_, descending) = get_json(&app, "/api/stock?direction=desc").await;
        assert_eq!(descending[0]["name"], "Vinyl Roll White 1.5m");
        let (status, body) = get_json(&app, "/api/stock?direction=sideways").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("direction:"));

        let (_, low) = get_json(&app, "/api/stock?level=low&category=ink").await;
        assert_eq!(low.as_array().unwrap().len(), 2);
        assert_eq!(low[0]["stockStatus"], "Low Stock");

        let id = low[0]["id"].as_str().unwrap().to_string();
        let (status, item) = send(
            &app,
            Method::POST,
            &format!("/api/stock/{}/restock", id),
            Some(json!({ "quantity": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(item["stockStatus"], "Low Stock");

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/stock/{}/restock", id),
            Some(json!({ "quantity": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_user_endpoints() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({ "firstName": "Lena", "lastName": "Ortiz", "email": "lena@" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("email"));

        let (status, user) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({
                "firstName": "Lena",
                "lastName": "Ortiz",
                "email": "lena@company.com",
                "role": "Designer"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            user["permissions"],
            json!(["View Projects", "Create Projects", "Edit Projects"])
        );

        let id = user["id"].as_str().unwrap();
        let (_, toggled) =
            send(&app, Method::POST, &format!("/api/users/{}/toggle-status", id), None).await;
        assert_eq!(toggled["status"], "inactive");

        let (_, designers) = get_json(&app, "/api/users?role=Designer&status=all").await;
        assert_eq!(designers.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_catalog_and_material_cost() {
        let app = test_app();
        let (status, kinds) = get_json(&app, "/api/catalog/kinds").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(kinds[0], "Material");
        assert!(kinds.as_array().unwrap().contains(&json!("Hardware")));

        let (_, names) = get_json(&app, "/api/catalog/suggestions?q=vinyl&type=Material").await;
        assert_eq!(
            names,
            json!(["Vinyl Banner", "Vinyl Banner Material", "Adhesive Vinyl"])
        );

        let (status, breakdown) = send(
            &app,
            Method::POST,
            "/api/materials/cost",
            Some(json!({ "materials": [
                { "type": "Software", "name": "Figma", "quantity": 2, "unit": "license" },
                { "type": "Material", "name": "Gold Leaf", "quantity": 1, "unit": "sheet" }
            ]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(breakdown["total"], 30.0);
        assert_eq!(breakdown["unknownMaterials"].as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/materials/cost",
            Some(json!({ "materials": [{ "type": "Software", "name": "Figma", "quantity": -2, "unit": "license" }]})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("materials[0].quantity"));
    }

    #[tokio::test]
    async fn test_dashboard() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["appTitle"], "Print Shop CRM");
        assert_eq!(body["totalProjects"], 5);
        assert!(body["totalMaterialCostDisplay"]
            .as_str()
            .unwrap()
            .starts_with('$'));
    }

    #[tokio::test]
    async fn test_session_flow() {
        let app = test_app();
        let (status, _) = get_json(&app, "/api/session").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/session/login",
            Some(json!({ "email": "admin@company.com", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, user) = send(
            &app,
            Method::POST,
            "/api/session/login",
            Some(json!({ "email": "ADMIN@company.com", "password": "admin123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["role"], "Administrator");

        let (status, current) = get_json(&app, "/api/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(current["name"], "Admin User");

        let (status, _) = send(&app, Method::DELETE, "/api/session", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = get_json(&app, "/api/session").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
