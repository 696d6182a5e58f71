//! Project model
//!
//! `status` is a cached value: the status deriver recomputes it from progress
//! and dates, so it may lag behind until the next recheck.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use crm_core::error::ValidationErrors;
use crm_core::traits::{new_id, Entity, Id, Identifiable};
use crm_core::types::DateRange;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::material::Material;

/// Lifecycle column a project sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
    Overdue,
}

impl ProjectStatus {
    /// Pipeline column order.
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Todo,
        ProjectStatus::InProgress,
        ProjectStatus::Review,
        ProjectStatus::Done,
        ProjectStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
            Self::Overdue => "overdue",
        }
    }

    /// Column heading on the pipeline board.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
            Self::Overdue => "Overdue",
        }
    }

    /// Statuses the progress rule keeps untouched for a started project.
    pub fn is_working(&self) -> bool {
        matches!(self, Self::InProgress | Self::Review)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown project status '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub materials: Vec<Material>,
    pub person_in_charge: String,
    /// Completion percentage, 0 to 100
    #[serde(default)]
    pub progress: u8,
}

impl Identifiable for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Project {
    const TYPE_NAME: &'static str = "Project";
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        person_in_charge: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: String::new(),
            status: ProjectStatus::Todo,
            start_date,
            end_date,
            team: Vec::new(),
            priority: Priority::Medium,
            materials: Vec::new(),
            person_in_charge: person_in_charge.into(),
            progress: 0,
        }
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn is_done(&self) -> bool {
        self.status == ProjectStatus::Done
    }

    /// Scheduled on `date` (start and end inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.date_range().contains(date)
    }
}

/// Split a comma-separated team field into trimmed, non-empty names.
pub fn parse_team(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Team as typed into the form (`"Ana, Ben"`) or already split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamInput {
    Names(Vec<String>),
    Text(String),
}

impl Default for TeamInput {
    fn default() -> Self {
        TeamInput::Names(Vec::new())
    }
}

impl TeamInput {
    pub fn into_names(self) -> Vec<String> {
        match self {
            TeamInput::Text(text) => parse_team(&text),
            TeamInput::Names(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Project form state used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub team: TeamInput,
    pub priority: Option<Priority>,
    pub materials: Vec<Material>,
    pub person_in_charge: String,
    #[validate(range(max = 100, message = "must be between 0 and 100"))]
    pub progress: Option<u8>,
}

impl ProjectDraft {
    fn dates(&self) -> Result<(NaiveDate, NaiveDate), ValidationErrors> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Ok((start, end)),
            (start, end) => {
                let mut errors = ValidationErrors::new();
                if start.is_none() {
                    errors.add_blank("startDate");
                }
                if end.is_none() {
                    errors.add_blank("endDate");
                }
                Err(errors)
            }
        }
    }

    /// Build a new project with a fresh id.
    pub fn into_project(self) -> Result<Project, ValidationErrors> {
        let (start_date, end_date) = self.dates()?;
        Ok(Project {
            id: new_id(),
            title: self.title.trim().to_string(),
            description: self.description,
            status: self.status.unwrap_or_default(),
            start_date,
            end_date,
            team: self.team.into_names(),
            priority: self.priority.unwrap_or_default(),
            materials: self.materials,
            person_in_charge: self.person_in_charge.trim().to_string(),
            progress: self.progress.unwrap_or(0),
        })
    }

    /// Replace the editable fields of `project`; id is kept, progress only
    /// changes when the draft carries one.
    pub fn apply_to(self, project: &mut Project) -> Result<(), ValidationErrors> {
        let (start_date, end_date) = self.dates()?;
        project.title = self.title.trim().to_string();
        project.description = self.description;
        if let Some(status) = self.status {
            project.status = status;
        }
        project.start_date = start_date;
        project.end_date = end_date;
        project.team = self.team.into_names();
        project.priority = self.priority.unwrap_or(project.priority);
        project.materials = self.materials;
        project.person_in_charge = self.person_in_charge.trim().to_string();
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        Ok(())
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status: Some(project.status),
            start_date: Some(project.start_date),
            end_date: Some(project.end_date),
            team: TeamInput::Names(project.team.clone()),
            priority: Some(project.priority),
            materials: project.materials.clone(),
            person_in_charge: project.person_in_charge.clone(),
            progress: Some(project.progress),
        }
    }
}
