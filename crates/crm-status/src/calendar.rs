//! Calendar helpers over project date ranges

use chrono::{Duration, NaiveDate};
use crm_models::Project;

/// Whole days until `end`; negative once it has passed.
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days()
}

/// End date has passed and the project is not done.
pub fn is_past_due(project: &Project, today: NaiveDate) -> bool {
    days_remaining(project.end_date, today) < 0 && !project.is_done()
}

/// Projects scheduled on `date`, start and end inclusive.
pub fn projects_on(projects: &[Project], date: NaiveDate) -> Vec<&Project> {
    projects.iter().filter(|p| p.is_active_on(date)).collect()
}

/// Unfinished projects ending within `horizon_days` from today, soonest first.
pub fn upcoming_deadlines(
    projects: &[Project],
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<&Project> {
    let horizon = today + Duration::days(horizon_days);
    let mut upcoming: Vec<&Project> = projects
        .iter()
        .filter(|p| !p.is_done() && p.end_date >= today && p.end_date <= horizon)
        .collect();
    upcoming.sort_by_key(|p| p.end_date);
    upcoming
}
