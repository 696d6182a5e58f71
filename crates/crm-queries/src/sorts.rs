//! Sort orders
//!
//! String ordering follows the usual UI collation: base letters compare first
//! with accents and case ignored, then unaccented before accented, then
//! lowercase before uppercase.

use std::cmp::Ordering;
use std::str::FromStr;

use crm_models::StockItem;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z)
    #[default]
    Asc,
    /// Descending order (Z-A)
    Desc,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Collation key levels, compared in order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<char>>()
    };
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<char>>();
    let upper = |s: &str| s.nfd().map(char::is_uppercase).collect::<Vec<bool>>();

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| upper(a).cmp(&upper(b)))
        .then_with(|| a.cmp(b))
}

/// Stock list order: type, then name.
pub fn sort_stock(items: &mut [&StockItem], direction: SortDirection) {
    items.sort_by(|a, b| {
        direction.apply(locale_cmp(&a.kind, &b.kind).then_with(|| locale_cmp(&a.name, &b.name)))
    });
}
