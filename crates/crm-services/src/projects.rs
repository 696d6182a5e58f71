//! Project board service
//!
//! Owns the project list. Create and update run the project contract, price
//! every material line against the catalog and re-derive the status. Manual
//! pipeline moves set the status as given; the next recheck reconciles it.

use std::sync::Arc;

use chrono::NaiveDate;
use crm_contracts::{Contract, ProjectContract};
use crm_core::error::ValidationErrors;
use crm_core::result::{CrmResult, ServiceResult};
use crm_core::traits::index_of;
use crm_costs::{calculate_project_cost, Catalog, CostBreakdown, CostCalculator};
use crm_models::{Project, ProjectDraft, ProjectStatus};
use crm_queries::{ProjectFilter, ViewFilter};
use crm_status::{calendar, StatusDeriver};
use serde::Serialize;

/// A project as shown on the pipeline board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCard {
    #[serde(flatten)]
    pub project: Project,
    pub days_remaining: i64,
    /// End date passed without completion
    pub past_due: bool,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineColumn {
    pub status: ProjectStatus,
    pub title: &'static str,
    pub projects: Vec<PipelineCard>,
}

#[derive(Debug, Clone)]
pub struct ProjectBoard {
    projects: Vec<Project>,
    catalog: Arc<Catalog>,
    deriver: StatusDeriver,
}

impl ProjectBoard {
    pub fn new(catalog: Arc<Catalog>, deriver: StatusDeriver) -> Self {
        Self {
            projects: Vec::new(),
            catalog,
            deriver,
        }
    }

    /// Load existing projects as-is; call [`ProjectBoard::recheck`] to derive.
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn deriver(&self) -> StatusDeriver {
        self.deriver
    }

    pub fn calculator(&self) -> CostCalculator<'_> {
        CostCalculator::new(&self.catalog)
    }

    fn index_of(&self, id: &str) -> CrmResult<usize> {
        index_of(&self.projects, id)
    }

    pub fn get(&self, id: &str) -> CrmResult<&Project> {
        self.index_of(id).map(|index| &self.projects[index])
    }

    /// Price materials and derive status after an edit.
    fn refresh(&self, project: &mut Project, today: NaiveDate) {
        for material in project.materials.iter_mut() {
            if self.catalog.autofill_unit(material) {
                tracing::debug!(name = %material.name, unit = %material.unit, "Unit filled from catalog");
            }
        }
        self.calculator().price_all(&mut project.materials);
        project.status = self.deriver.derive(project, today);
    }

    pub fn create(&mut self, draft: ProjectDraft, today: NaiveDate) -> ServiceResult<Project> {
        if let Err(errors) = ProjectContract.validate(&draft) {
            tracing::debug!(errors = %errors, "Project rejected");
            return ServiceResult::failure(errors);
        }

        let mut project = match draft.into_project() {
            Ok(project) => project,
            Err(errors) => return ServiceResult::failure(errors),
        };
        self.refresh(&mut project, today);

        tracing::info!(
            project_id = %project.id,
            title = %project.title,
            status = %project.status,
            "Project created"
        );
        self.projects.push(project.clone());
        ServiceResult::success(project)
    }

    pub fn update(
        &mut self,
        id: &str,
        draft: ProjectDraft,
        today: NaiveDate,
    ) -> CrmResult<Project> {
        let index = self.index_of(id)?;
        ProjectContract.validate(&draft)?;

        let mut project = self.projects[index].clone();
        draft.apply_to(&mut project)?;
        self.refresh(&mut project, today);

        tracing::info!(project_id = %id, status = %project.status, "Project updated");
        self.projects[index] = project.clone();
        Ok(project)
    }

    pub fn delete(&mut self, id: &str) -> CrmResult<Project> {
        let index = self.index_of(id)?;
        let project = self.projects.remove(index);
        tracing::info!(project_id = %id, title = %project.title, "Project deleted");
        Ok(project)
    }

    /// Record progress and re-derive the status.
    pub fn set_progress(&mut self, id: &str, progress: u8, today: NaiveDate) -> CrmResult<Project> {
        if progress > 100 {
            let mut errors = ValidationErrors::new();
            errors.add("progress", "must be between 0 and 100");
            return Err(errors.into());
        }
        let index = self.index_of(id)?;
        let deriver = self.deriver;
        let project = &mut self.projects[index];
        project.progress = progress;
        project.status = deriver.derive(project, today);
        tracing::debug!(project_id = %id, progress, status = %project.status, "Progress recorded");
        Ok(project.clone())
    }

    /// Drop a project into another pipeline column.
    pub fn move_to(&mut self, id: &str, status: ProjectStatus) -> CrmResult<Project> {
        let index = self.index_of(id)?;
        let project = &mut self.projects[index];
        tracing::debug!(project_id = %id, from = %project.status, to = %status, "Project moved");
        project.status = status;
        Ok(project.clone())
    }

    /// Refresh cached material prices on every project.
    pub fn price_materials(&mut self) {
        let calculator = CostCalculator::new(&self.catalog);
        for project in self.projects.iter_mut() {
            calculator.price_all(&mut project.materials);
        }
    }

    /// Recompute every cached status. Returns how many changed.
    pub fn recheck(&mut self, today: NaiveDate) -> usize {
        self.deriver.recheck(&mut self.projects, today)
    }

    pub fn filtered(&self, filter: &ProjectFilter) -> Vec<&Project> {
        filter.apply(&self.projects)
    }

    pub fn total_cost(&self, project: &Project) -> f64 {
        calculate_project_cost(&self.catalog, &project.materials)
    }

    pub fn cost_breakdown(&self, id: &str) -> CrmResult<CostBreakdown> {
        let project = self.get(id)?;
        let breakdown = self.calculator().breakdown(&project.materials);
        if !breakdown.is_fully_priced() {
            tracing::warn!(
                project_id = %id,
                unknown = breakdown.unknown_materials.len(),
                "Project has materials missing from the catalog"
            );
        }
        Ok(breakdown)
    }

    fn card(&self, project: &Project, today: NaiveDate) -> PipelineCard {
        PipelineCard {
            days_remaining: calendar::days_remaining(project.end_date, today),
            past_due: calendar::is_past_due(project, today),
            total_cost: self.total_cost(project),
            project: project.clone(),
        }
    }

    /// One column per status, in board order; the filter searches team names too.
    pub fn pipeline(&self, filter: &ProjectFilter, today: NaiveDate) -> Vec<PipelineColumn> {
        let filter = filter.clone().with_team();
        let visible = self.filtered(&filter);
        ProjectStatus::ALL
            .into_iter()
            .map(|status| PipelineColumn {
                status,
                title: status.title(),
                projects: visible
                    .iter()
                    .filter(|p| p.status == status)
                    .map(|p| self.card(p, today))
                    .collect(),
            })
            .collect()
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&Project> {
        calendar::projects_on(&self.projects, date)
    }

    pub fn upcoming(&self, today: NaiveDate, horizon_days: i64) -> Vec<&Project> {
        calendar::upcoming_deadlines(&self.projects, today, horizon_days)
    }
}
