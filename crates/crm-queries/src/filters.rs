//! View filters
//!
//! Search is a case-insensitive substring match, OR across an entity's text
//! fields and AND with the selection filters.

use std::fmt::Display;
use std::str::FromStr;

use crm_models::{Project, ProjectStatus, StockItem, User, UserRole, UserStatus};

/// Selection value that disables a filter.
pub const ALL: &str = "all";

/// A single-value filter that can be switched off with `"all"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = String;

    /// `"all"` or an empty value select everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            Ok(Selection::All)
        } else {
            s.parse::<T>()
                .map(Selection::Only)
                .map_err(|e| e.to_string())
        }
    }
}

/// Lowercased search needle; empty matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(input: &str) -> Self {
        Self(input.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, field: &str) -> bool {
        self.0.is_empty() || field.to_lowercase().contains(&self.0)
    }

    /// True when any of `fields` contains the term.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.0.is_empty() || fields.into_iter().any(|field| self.matches(field))
    }
}

/// A predicate over one entity type.
pub trait ViewFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching items in input order.
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Project list: search over title and description, optional status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub search: SearchTerm,
    pub status: Selection<ProjectStatus>,
    /// Also search team member names (pipeline board)
    pub include_team: bool,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, input: &str) -> Self {
        self.search = SearchTerm::new(input);
        self
    }

    pub fn status(mut self, status: Selection<ProjectStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_team(mut self) -> Self {
        self.include_team = true;
        self
    }
}

impl ViewFilter<Project> for ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        let text = [project.title.as_str(), project.description.as_str()];
        let team = project.team.iter().map(String::as_str);
        let found = if self.include_team {
            self.search.matches_any(text.into_iter().chain(team))
        } else {
            self.search.matches_any(text)
        };
        found && self.status.matches(&project.status)
    }
}

/// Stock level filter on the stock page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockLevel {
    #[default]
    All,
    /// At or under the minimum, empty items included
    Low,
    /// Nothing left
    Out,
}

impl StockLevel {
    pub fn matches(&self, item: &StockItem) -> bool {
        match self {
            StockLevel::All => true,
            StockLevel::Low => item.is_at_or_below_min(),
            StockLevel::Out => item.is_out(),
        }
    }
}

impl FromStr for StockLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | ALL => Ok(StockLevel::All),
            "low" => Ok(StockLevel::Low),
            "out" => Ok(StockLevel::Out),
            other => Err(format!("unknown stock level '{}'", other)),
        }
    }
}

/// Stock list: search over name, supplier and category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFilter {
    pub search: SearchTerm,
    pub category: Selection<String>,
    pub level: StockLevel,
}

impl StockFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, input: &str) -> Self {
        self.search = SearchTerm::new(input);
        self
    }

    pub fn category(mut self, category: Selection<String>) -> Self {
        self.category = category;
        self
    }

    pub fn level(mut self, level: StockLevel) -> Self {
        self.level = level;
        self
    }
}

impl ViewFilter<StockItem> for StockFilter {
    fn matches(&self, item: &StockItem) -> bool {
        self.search.matches_any([
            item.name.as_str(),
            item.supplier.as_str(),
            item.category.as_str(),
        ]) && self.category.matches(&item.category)
            && self.level.matches(item)
    }
}

/// User list: search over first/last name, email and department.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: SearchTerm,
    pub role: Selection<UserRole>,
    pub status: Selection<UserStatus>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, input: &str) -> Self {
        self.search = SearchTerm::new(input);
        self
    }

    pub fn role(mut self, role: Selection<UserRole>) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: Selection<UserStatus>) -> Self {
        self.status = status;
        self
    }
}

impl ViewFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        let name = user.full_name();
        self.search.matches_any([
            name.as_str(),
            user.email.as_str(),
            user.department.as_str(),
        ]) && self.role.matches(&user.role)
            && self.status.matches(&user.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crm_models::{Project, StockDraft, UserDraft};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn projects() -> Vec<Project> {
        let mut brochure = Project::new("Brochure redesign", date(1), date(20), "Ana");
        brochure.description = "Tri-fold for the dental clinic".into();
        brochure.status = ProjectStatus::InProgress;
        brochure.team = vec!["Ana".into(), "Marco".into()];

        let mut banner = Project::new("Storefront banner", date(3), date(9), "Ben");
        banner.status = ProjectStatus::Review;

        let signage = Project::new("Event signage", date(5), date(30), "Chris");
        vec![brochure, banner, signage]
    }

    fn stock() -> Vec<StockItem> {
        let today = date(1);
        let item = |name: &str, category: &str, supplier: &str, current: f64, min: f64| {
            StockDraft {
                name: name.into(),
                category: category.into(),
                supplier: supplier.into(),
                current_stock: current,
                min_stock: min,
                max_stock: 100.0,
                ..Default::default()
            }
            .into_item(today)
        };
        vec![
            item("Gloss Paper A4", "Paper", "PaperCo", 40.0, 10.0),
            item("Vinyl Roll", "Vinyl", "SignPro", 5.0, 10.0),
            item("Black Ink", "Ink", "InkWorks", 0.0, 2.0),
        ]
    }

    fn users() -> Vec<User> {
        let today = date(1);
        let user = |first: &str, last: &str, dept: &str, role: UserRole, status: UserStatus| {
            UserDraft {
                first_name: first.into(),
                last_name: last.into(),
                email: format!("{}@company.com", first.to_lowercase()),
                department: dept.into(),
                role,
                status,
                ..Default::default()
            }
            .into_user(today)
        };
        vec![
            user("John", "Doe", "Management", UserRole::Admin, UserStatus::Active),
            user("Sarah", "Wilson", "Design", UserRole::Designer, UserStatus::Active),
            user("Mike", "Chen", "Engineering", UserRole::Developer, UserStatus::Pending),
        ]
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<Selection<ProjectStatus>>(), Ok(Selection::All));
        assert_eq!(
            "in-progress".parse::<Selection<ProjectStatus>>(),
            Ok(Selection::Only(ProjectStatus::InProgress))
        );
        assert!("someday".parse::<Selection<ProjectStatus>>().is_err());
        assert_eq!(
            "Paper".parse::<Selection<String>>(),
            Ok(Selection::Only("Paper".to_string()))
        );
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let projects = projects();
        let filtered: Vec<Project> = ProjectFilter::new()
            .search("")
            .status("all".parse().unwrap())
            .apply(&projects)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered, projects);

        let stock = stock();
        let filtered: Vec<StockItem> = StockFilter::new().apply(&stock).into_iter().cloned().collect();
        assert_eq!(filtered, stock);

        let users = users();
        let filtered: Vec<User> = UserFilter::new().apply(&users).into_iter().cloned().collect();
        assert_eq!(filtered, users);
    }

    #[test]
    fn test_project_search_covers_title_and_description() {
        let projects = projects();
        let by_description = ProjectFilter::new().search("DENTAL").apply(&projects);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "Brochure redesign");

        let by_title = ProjectFilter::new().search("banner").apply(&projects);
        assert_eq!(by_title.len(), 1);
    }

    #[test]
    fn test_project_search_and_status_combine() {
        let projects = projects();
        let hits = ProjectFilter::new()
            .search("e")
            .status(Selection::Only(ProjectStatus::Review))
            .apply(&projects);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Storefront banner");
    }

    #[test]
    fn test_team_search_only_on_board() {
        let projects = projects();
        assert!(ProjectFilter::new().search("marco").apply(&projects).is_empty());
        assert_eq!(
            ProjectFilter::new().search("marco").with_team().apply(&projects).len(),
            1
        );
    }

    #[test]
    fn test_stock_search_and_levels() {
        let stock = stock();
        assert_eq!(StockFilter::new().search("signpro").apply(&stock).len(), 1);
        assert_eq!(StockFilter::new().search("ink").apply(&stock).len(), 1);
        assert_eq!(
            StockFilter::new().level(StockLevel::Low).apply(&stock).len(),
            2
        );
        let out = StockFilter::new().level(StockLevel::Out).apply(&stock);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Black Ink");
        assert_eq!(
            StockFilter::new()
                .category(Selection::Only("Vinyl".into()))
                .apply(&stock)
                .len(),
            1
        );
    }

    #[test]
    fn test_user_filters() {
        let users = users();
        assert_eq!(UserFilter::new().search("design").apply(&users).len(), 1);
        assert_eq!(UserFilter::new().search("CHEN").apply(&users).len(), 1);
        assert_eq!(UserFilter::new().search("sarah wil").apply(&users).len(), 1);
        assert_eq!(
            UserFilter::new()
                .role(Selection::Only(UserRole::Admin))
                .apply(&users)
                .len(),
            1
        );
        assert_eq!(
            UserFilter::new()
                .status(Selection::Only(UserStatus::Active))
                .apply(&users)
                .len(),
            2
        );
    }
}
