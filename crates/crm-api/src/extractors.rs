//! Application state and request extractors

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use chrono::{Local, NaiveDate};
use crm_auth::{Authenticator, MemoryStorage, SessionUser};
use crm_core::config::AppConfig;
use crm_costs::Catalog;
use crm_services::{SharedWorkspace, Workspace};

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub workspace: SharedWorkspace,
    pub auth: Arc<Authenticator<MemoryStorage>>,
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Workspace built from `config`, builtin catalog, in-memory session.
    pub fn from_config(config: AppConfig) -> Self {
        let catalog = Arc::new(Catalog::builtin());
        let workspace = Workspace::from_config(&config, catalog.clone(), Self::today()).shared();
        let auth = Authenticator::new(MemoryStorage::new(), config.auth.session_key.clone());
        Self {
            workspace,
            auth: Arc::new(auth),
            catalog,
            config: Arc::new(config),
        }
    }

    /// Calendar date used for every derivation.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

/// The logged-in session user; rejects with 401 when nobody is logged in.
pub struct AuthenticatedUser(pub SessionUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        app_state
            .auth
            .current_user()
            .map(AuthenticatedUser)
            .ok_or_else(|| ApiError::unauthorized("Not logged in"))
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = SessionUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Parse an optional query value, `None` and `""` falling back to the default.
pub fn parse_param<T>(name: &str, value: Option<&str>) -> Result<T, ApiError>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match value {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| ApiError::bad_request(format!("{}: {}", name, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_models::ProjectStatus;
    use crm_queries::Selection;

    #[test]
    fn test_parse_param() {
        let all: Selection<ProjectStatus> = parse_param("status", None).unwrap();
        assert_eq!(all, Selection::All);
        let done: Selection<ProjectStatus> = parse_param("status", Some("done")).unwrap();
        assert_eq!(done, Selection::Only(ProjectStatus::Done));
        assert!(parse_param::<Selection<ProjectStatus>>("status", Some("later")).is_err());
    }
}
