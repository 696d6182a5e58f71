//! Status derivation
//!
//! Two rules feed a project's status:
//!
//! - progress: 100 is done, 0 is todo, anything between keeps
//!   in-progress/review or becomes in-progress;
//! - deadline: a project past its end date that is neither done nor overdue
//!   becomes overdue.
//!
//! They disagree for a started project past its deadline. [`StatusPrecedence`]
//! picks the winner; with the default (`Progress`) such a project keeps its
//! working status and the pipeline flags it as past due instead.

use chrono::NaiveDate;
use crm_core::types::StatusPrecedence;
use crm_models::{Project, ProjectStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusDeriver {
    precedence: StatusPrecedence,
}

impl StatusDeriver {
    pub fn new(precedence: StatusPrecedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> StatusPrecedence {
        self.precedence
    }

    /// The progress rule on its own.
    pub fn by_progress(progress: u8, current: ProjectStatus) -> ProjectStatus {
        match progress {
            p if p >= 100 => ProjectStatus::Done,
            0 => ProjectStatus::Todo,
            _ if current.is_working() => current,
            _ => ProjectStatus::InProgress,
        }
    }

    /// The deadline rule on its own.
    pub fn by_deadline(
        current: ProjectStatus,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> ProjectStatus {
        match current {
            ProjectStatus::Done | ProjectStatus::Overdue => current,
            _ if end_date < today => ProjectStatus::Overdue,
            _ => current,
        }
    }

    pub fn derive(&self, project: &Project, today: NaiveDate) -> ProjectStatus {
        let by_progress = Self::by_progress(project.progress, project.status);
        match self.precedence {
            StatusPrecedence::Progress => by_progress,
            StatusPrecedence::Deadline => {
                if by_progress == ProjectStatus::Done {
                    by_progress
                } else {
                    Self::by_deadline(by_progress, project.end_date, today)
                }
            }
        }
    }

    /// Recompute every cached status. Returns how many changed.
    pub fn recheck(&self, projects: &mut [Project], today: NaiveDate) -> usize {
        let mut changed = 0;
        for project in projects.iter_mut() {
            let status = self.derive(project, today);
            if status != project.status {
                tracing::debug!(
                    project_id = %project.id,
                    from = %project.status,
                    to = %status,
                    "Project status changed"
                );
                project.status = status;
                changed += 1;
            }
        }
        changed
    }
}

/// Derive with the default precedence.
pub fn derive_status(project: &Project, today: NaiveDate) -> ProjectStatus {
    StatusDeriver::default().derive(project, today)
}
