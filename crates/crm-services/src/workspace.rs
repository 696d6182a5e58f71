//! The shared in-memory workspace

use std::sync::Arc;

use chrono::NaiveDate;
use crm_core::config::AppConfig;
use crm_costs::Catalog;
use crm_status::StatusDeriver;
use tokio::sync::RwLock;

use crate::projects::ProjectBoard;
use crate::seed;
use crate::stock::StockRoom;
use crate::users::UserDirectory;

/// Workspace handle shared by the HTTP handlers and the recheck task.
pub type SharedWorkspace = Arc<RwLock<Workspace>>;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub projects: ProjectBoard,
    pub stock: StockRoom,
    pub users: UserDirectory,
}

impl Workspace {
    pub fn empty(catalog: Arc<Catalog>, deriver: StatusDeriver) -> Self {
        Self {
            projects: ProjectBoard::new(catalog, deriver),
            stock: StockRoom::new(),
            users: UserDirectory::new(),
        }
    }

    /// Demo records dated around `today`, statuses and prices derived.
    pub fn demo(catalog: Arc<Catalog>, deriver: StatusDeriver, today: NaiveDate) -> Self {
        let mut projects =
            ProjectBoard::new(catalog, deriver).with_projects(seed::projects(today));
        projects.price_materials();
        projects.recheck(today);
        Self {
            projects,
            stock: StockRoom::with_items(seed::stock_items(today)),
            users: UserDirectory::with_users(seed::users(today)),
        }
    }

    /// Empty or demo workspace, as configured.
    pub fn from_config(config: &AppConfig, catalog: Arc<Catalog>, today: NaiveDate) -> Self {
        let deriver = StatusDeriver::new(config.status.precedence);
        if config.instance.seed_demo_data {
            Self::demo(catalog, deriver, today)
        } else {
            Self::empty(catalog, deriver)
        }
    }

    pub fn shared(self) -> SharedWorkspace {
        Arc::new(RwLock::new(self))
    }
}
