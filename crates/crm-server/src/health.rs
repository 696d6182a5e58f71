//! Health Check System
//!
//! Reports whether the workspace lock can be taken in time and whether the
//! price catalog is loaded.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crm_costs::Catalog;
use crm_services::SharedWorkspace;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }

    /// The worse of two statuses.
    fn worst(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unhealthy, _) | (_, Self::Unhealthy) => Self::Unhealthy,
            (Self::Degraded, _) | (_, Self::Degraded) => Self::Degraded,
            _ => Self::Healthy,
        }
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// How long the workspace lock may take before it counts as stuck
    pub check_timeout: Duration,
    pub cache_duration: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_timeout: Duration::from_secs(2),
            cache_duration: Duration::from_secs(10),
        }
    }
}

struct CachedHealth {
    report: HealthReport,
    cached_at: Instant,
}

pub struct HealthChecker {
    config: HealthConfig,
    start_time: Instant,
    cache: RwLock<Option<CachedHealth>>,
    workspace: SharedWorkspace,
    catalog: Arc<Catalog>,
}

impl HealthChecker {
    pub fn new(config: HealthConfig, workspace: SharedWorkspace, catalog: Arc<Catalog>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            cache: RwLock::new(None),
            workspace,
            catalog,
        }
    }

    /// Get cached health or perform checks
    pub async fn check(&self) -> HealthReport {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.cached_at.elapsed() < self.config.cache_duration {
                    debug!("Returning cached health report");
                    return cached.report.clone();
                }
            }
        }

        let report = self.perform_checks().await;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedHealth {
            report: report.clone(),
            cached_at: Instant::now(),
        });
        report
    }

    async fn perform_checks(&self) -> HealthReport {
        let components = vec![self.check_workspace().await, self.check_catalog()];
        let status = components
            .iter()
            .fold(HealthStatus::Healthy, |acc, c| acc.worst(c.status));

        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components,
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_workspace(&self) -> ComponentHealth {
        let start = Instant::now();
        let (status, message, details) =
            match tokio::time::timeout(self.config.check_timeout, self.workspace.read()).await {
                Ok(workspace) => (
                    HealthStatus::Healthy,
                    "Workspace available".to_string(),
                    Some(serde_json::json!({
                        "projects": workspace.projects.len(),
                        "stock_items": workspace.stock.len(),
                        "users": workspace.users.len(),
                    })),
                ),
                Err(_) => {
                    warn!("Workspace lock not acquired within health check timeout");
                    (
                        HealthStatus::Unhealthy,
                        "Workspace lock timed out".to_string(),
                        None,
                    )
                }
            };

        ComponentHealth {
            name: "workspace".to_string(),
            status,
            message: Some(message),
            response_time_ms: start.elapsed().as_millis() as u64,
            details,
        }
    }

    fn check_catalog(&self) -> ComponentHealth {
        let start = Instant::now();
        let (status, message) = if self.catalog.is_empty() {
            (HealthStatus::Degraded, "Catalog is empty; every material costs zero")
        } else {
            (HealthStatus::Healthy, "Catalog loaded")
        };

        ComponentHealth {
            name: "catalog".to_string(),
            status,
            message: Some(message.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
            details: Some(serde_json::json!({ "entries": self.catalog.len() })),
        }
    }
}

/// Liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness check: ready once the workspace answers
pub async fn readiness(State(checker): State<Arc<HealthChecker>>) -> StatusCode {
    if checker.check().await.status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Full health check
pub async fn health(State(checker): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = checker.check().await;
    let status = report.http_status();
    (status, Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::config::AppConfig;
    use crm_services::Workspace;

    fn checker(catalog: Catalog, config: HealthConfig) -> HealthChecker {
        let catalog = Arc::new(catalog);
        let workspace = Workspace::from_config(
            &AppConfig::default(),
            catalog.clone(),
            chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
        .shared();
        HealthChecker::new(config, workspace, catalog)
    }

    #[tokio::test]
    async fn test_health_check() {
        let report = checker(Catalog::builtin(), HealthConfig::default()).check().await;
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.components[0].details.as_ref().unwrap()["projects"], 5);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_degraded() {
        let report = checker(Catalog::default(), HealthConfig::default()).check().await;
        assert_eq!(report.status, HealthStatus::Degraded);
        assert_eq!(report.http_status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stuck_workspace_is_unhealthy() {
        let checker = checker(
            Catalog::builtin(),
            HealthConfig {
                check_timeout: Duration::from_millis(20),
                ..Default::default()
            },
        );
        let _guard = checker.workspace.write().await;
        let report = checker.check().await;
        assert_eq!(report.status, HealthStatus::Unhealthy);
        assert_eq!(report.http_status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_cache() {
        let checker = checker(
            Catalog::builtin(),
            HealthConfig {
                cache_duration: Duration::from_secs(60),
                ..Default::default()
            },
        );
        let report1 = checker.check().await;
        let report2 = checker.check().await;
        assert_eq!(report1.timestamp, report2.timestamp);
    }
}
