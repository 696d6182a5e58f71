//! Common types used throughout the CRM

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar range, start to end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Start is after end. Tolerated, but worth a warning.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Which recompute pass wins when progress and deadline disagree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusPrecedence {
    /// Progress decides; a started project past its end date keeps its status.
    #[default]
    Progress,
    /// A project that is not done turns overdue once its end date passes.
    Deadline,
}

impl FromStr for StatusPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "progress" => Ok(Self::Progress),
            "deadline" => Ok(Self::Deadline),
            other => Err(format!("unknown status precedence '{}'", other)),
        }
    }
}

impl fmt::Display for StatusPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Progress => write!(f, "progress"),
            Self::Deadline => write!(f, "deadline"),
        }
    }
}

/// Two-decimal rendering used for every displayed amount.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}
