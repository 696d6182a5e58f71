//! Static price catalog
//!
//! Lookups are case-insensitive on both name and unit. Names repeat under
//! different units ("Vinyl Banner" per piece, "Vinyl Banner Material" per
//! roll), so the key is always the pair. Duplicate pairs are tolerated and the
//! first row wins.

use crm_models::{CatalogEntry, Material};

/// Maximum names returned by [`Catalog::suggestions`].
pub const SUGGESTION_LIMIT: usize = 10;

/// Unit a new material line starts with before one is picked.
pub const DEFAULT_UNIT: &str = "item";

const BUILTIN_ROWS: &[(&str, f64, &str, &str)] = &[
    ("Vinyl Banner", 45.99, "piece", "Material"),
    ("Vinyl Banner Material", 45.99, "roll", "Material"),
    ("Adhesive Vinyl", 32.50, "roll", "Material"),
    ("Figma", 15.00, "license", "Software"),
    ("React", 0.00, "library", "Library"),
    ("React Native", 0.00, "framework", "Framework"),
    ("Expo", 0.00, "platform", "Platform"),
    ("PostgreSQL", 200.00, "instance", "Software"),
    ("AWS RDS", 150.00, "service", "Service"),
    ("Next.js", 0.00, "framework", "Framework"),
    ("Stripe API", 25.00, "service", "Service"),
    ("Mailchimp API", 20.00, "service", "Service"),
    ("Google Analytics", 0.00, "license", "License"),
    ("OWASP ZAP", 0.00, "license", "Tool"),
    ("Burp Suite", 399.00, "license", "Tool"),
    ("Zendesk API", 49.00, "service", "Service"),
    ("Socket.io", 0.00, "library", "Library"),
    ("Java Spring Boot", 0.00, "framework", "Framework"),
    ("Docker", 0.00, "platform", "Platform"),
    ("Tableau", 70.00, "license", "Software"),
    ("Python", 0.00, "language", "Software"),
    ("Arduino", 25.00, "piece", "Hardware"),
    ("Raspberry Pi", 75.00, "piece", "Hardware"),
];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The shop's standard price list.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ROWS
            .iter()
            .map(|&(name, unit_cost, unit, kind)| CatalogEntry::new(name, unit, unit_cost, kind))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry matching (name, unit), ignoring case on both.
    pub fn lookup(&self, name: &str, unit: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.matches(name, unit))
    }

    pub fn unit_cost(&self, name: &str, unit: &str) -> Option<f64> {
        self.lookup(name, unit).map(|entry| entry.unit_cost)
    }

    /// First entry with this name under any unit.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == name)
    }

    /// Copy the catalog unit onto a line still on a blank or [`DEFAULT_UNIT`]
    /// unit whose name is a catalog name. Returns whether the unit was filled.
    pub fn autofill_unit(&self, material: &mut Material) -> bool {
        let unit = material.unit.trim();
        if !unit.is_empty() && !unit.eq_ignore_ascii_case(DEFAULT_UNIT) {
            return false;
        }
        match self.find_by_name(&material.name) {
            Some(entry) => {
                material.unit = entry.unit.clone();
                true
            }
            None => false,
        }
    }

    /// Autocomplete names for a material line.
    ///
    /// With a `kind`, only entries of exactly that type are offered. An empty
    /// input lists the first names of that type; otherwise names containing
    /// the input (ignoring case). Catalog order, at most [`SUGGESTION_LIMIT`].
    pub fn suggestions(&self, input: &str, kind: Option<&str>) -> Vec<&str> {
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| match kind {
                Some(kind) if !kind.is_empty() => entry.kind == kind,
                _ => true,
            })
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .map(|entry| entry.name.as_str())
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Distinct entry types in first-seen order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !kinds.contains(&entry.kind.as_str()) {
                kinds.push(entry.kind.as_str());
            }
        }
        kinds
    }
}
