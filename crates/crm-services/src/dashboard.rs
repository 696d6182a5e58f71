//! Dashboard rollup

use chrono::NaiveDate;
use crm_models::{Project, ProjectStatus};
use crm_status::calendar;
use serde::Serialize;

use crate::stock::StockSummary;
use crate::workspace::Workspace;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineEntry {
    pub id: String,
    pub title: String,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
    pub status: ProjectStatus,
}

impl DeadlineEntry {
    fn new(project: &Project, today: NaiveDate) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            end_date: project.end_date,
            days_remaining: calendar::days_remaining(project.end_date, today),
            status: project.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    /// In progress or in review
    pub active_projects: usize,
    pub completed_projects: usize,
    /// Overdue status or past the end date without completion
    pub overdue_projects: usize,
    pub upcoming_deadlines: Vec<DeadlineEntry>,
    pub total_material_cost: f64,
    pub stock: StockSummary,
    pub active_users: usize,
}

impl DashboardStats {
    pub fn collect(workspace: &Workspace, today: NaiveDate, horizon_days: i64) -> Self {
        let board = &workspace.projects;
        let projects = board.list();
        let count = |pred: &dyn Fn(&Project) -> bool| projects.iter().filter(|p| pred(*p)).count();

        Self {
            total_projects: projects.len(),
            active_projects: count(&|p| p.status.is_working()),
            completed_projects: count(&|p| p.is_done()),
            overdue_projects: count(&|p| {
                p.status == ProjectStatus::Overdue || calendar::is_past_due(p, today)
            }),
            upcoming_deadlines: board
                .upcoming(today, horizon_days)
                .into_iter()
                .map(|p| DeadlineEntry::new(p, today))
                .collect(),
            total_material_cost: projects.iter().map(|p| board.total_cost(p)).sum(),
            stock: workspace.stock.summary(),
            active_users: workspace.users.active_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crm_costs::Catalog;
    use crm_status::StatusDeriver;

    #[test]
    fn test_demo_rollup() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let workspace =
            Workspace::demo(Arc::new(Catalog::builtin()), StatusDeriver::default(), today);
        let stats = DashboardStats::collect(&workspace, today, 7);

        assert_eq!(stats.total_projects, 5);
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.completed_projects, 1);
        assert_eq!(stats.overdue_projects, 0);
        assert_eq!(stats.upcoming_deadlines.len(), 1);
        assert_eq!(stats.upcoming_deadlines[0].title, "Storefront Vinyl Banner");
        assert_eq!(stats.upcoming_deadlines[0].days_remaining, 4);

        let expected = 15.0 + 350.0 + 25.0 + 551.88 + 32.5;
        assert!((stats.total_material_cost - expected).abs() < 1e-9);
        assert_eq!(stats.stock.total_items, 6);
        assert_eq!(stats.active_users, 4);
    }
}
