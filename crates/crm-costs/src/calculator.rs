//! Material cost calculation
//!
//! `line cost = catalog unit cost × effective quantity`, where the effective
//! quantity is `width × height × quantity` for area lines with both
//! dimensions non-zero, and `quantity` otherwise. Unknown (name, unit) pairs
//! cost zero; [`CostCalculator::breakdown`] reports them separately. Nothing is
//! rounded here.

use crm_models::{AreaUnit, Material};
use serde::Serialize;

use crate::catalog::Catalog;

/// One priced material line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub material_id: String,
    pub name: String,
    pub unit: String,
    /// `None` when the catalog has no entry for (name, unit)
    pub unit_cost: Option<f64>,
    pub effective_quantity: f64,
    /// Square meters across the whole line; area lines only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    pub total: f64,
}

/// Priced lines plus their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub lines: Vec<CostLine>,
    pub total: f64,
    /// Ids of lines the catalog could not price
    pub unknown_materials: Vec<String>,
}

impl CostBreakdown {
    pub fn is_fully_priced(&self) -> bool {
        self.unknown_materials.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CostCalculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> CostCalculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn unit_cost(&self, material: &Material) -> Option<f64> {
        self.catalog.unit_cost(&material.name, &material.unit)
    }

    pub fn cost_of(&self, material: &Material) -> f64 {
        let unit_cost = self.unit_cost(material).unwrap_or_else(|| {
            tracing::debug!(
                name = %material.name,
                unit = %material.unit,
                "No catalog entry, pricing at zero"
            );
            0.0
        });
        unit_cost * material.effective_quantity()
    }

    pub fn project_cost(&self, materials: &[Material]) -> f64 {
        materials.iter().map(|m| self.cost_of(m)).sum()
    }

    pub fn line(&self, material: &Material) -> CostLine {
        let unit_cost = self.unit_cost(material);
        let effective_quantity = material.effective_quantity();
        CostLine {
            material_id: material.id.clone(),
            name: material.name.clone(),
            unit: material.unit.clone(),
            unit_cost,
            effective_quantity,
            total_area: self.total_area(material, AreaUnit::SquareMeter),
            total: unit_cost.unwrap_or(0.0) * effective_quantity,
        }
    }

    pub fn breakdown(&self, materials: &[Material]) -> CostBreakdown {
        let lines: Vec<CostLine> = materials.iter().map(|m| self.line(m)).collect();
        let total = lines.iter().map(|line| line.total).sum();
        let unknown_materials = lines
            .iter()
            .filter(|line| line.unit_cost.is_none())
            .map(|line| line.material_id.clone())
            .collect();
        CostBreakdown {
            lines,
            total,
            unknown_materials,
        }
    }

    /// Refresh the cached `unit_cost` / `total_cost` on a line.
    pub fn price(&self, material: &mut Material) {
        material.unit_cost = self.unit_cost(material);
        material.total_cost = Some(self.cost_of(material));
    }

    pub fn price_all(&self, materials: &mut [Material]) {
        for material in materials.iter_mut() {
            self.price(material);
        }
    }

    /// Total area of an area line (per-unit area × quantity) in `unit`.
    /// Display only; pricing uses the raw dimensions.
    pub fn total_area(&self, material: &Material, unit: AreaUnit) -> Option<f64> {
        let area = material.area_per_unit()? * material.quantity;
        let from = material.area_unit.unwrap_or_default();
        Some(from.convert(area, unit))
    }
}

/// Line cost against `catalog`, zero when the pair is unknown.
pub fn cost_of(catalog: &Catalog, material: &Material) -> f64 {
    CostCalculator::new(catalog).cost_of(material)
}

/// Sum of line costs.
pub fn calculate_project_cost(catalog: &Catalog, materials: &[Material]) -> f64 {
    CostCalculator::new(catalog).project_cost(materials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn banner(quantity: f64, width: f64, height: f64) -> Material {
        Material::new("Material", "Vinyl Banner", quantity, "piece").with_area(
            width,
            height,
            AreaUnit::SquareMeter,
        )
    }

    #[test]
    fn test_area_line_example() {
        let catalog = Catalog::builtin();
        let cost = cost_of(&catalog, &banner(2.0, 2.0, 3.0));
        assert!(close(cost, 551.88), "got {}", cost);
    }

    #[test]
    fn test_plain_line_is_unit_cost_times_quantity() {
        let catalog = Catalog::builtin();
        for (name, unit, quantity) in [
            ("Figma", "license", 3.0),
            ("Raspberry Pi", "piece", 4.0),
            ("adhesive vinyl", "Roll", 2.5),
        ] {
            let material = Material::new("Material", name, quantity, unit);
            let expected = catalog.unit_cost(name, unit).unwrap() * quantity;
            assert!(close(cost_of(&catalog, &material), expected));
        }
    }

    #[test]
    fn test_area_line_is_unit_cost_times_area_times_quantity() {
        let catalog = Catalog::builtin();
        for (q, w, h) in [(1.0, 0.5, 0.5), (3.0, 1.2, 2.4), (10.0, 2.0, 1.0)] {
            let expected = 45.99 * w * h * q;
            assert!(close(cost_of(&catalog, &banner(q, w, h)), expected));
        }
    }

    #[test]
    fn test_area_flag_with_zero_dimension_uses_quantity() {
        let catalog = Catalog::builtin();
        assert!(close(cost_of(&catalog, &banner(2.0, 0.0, 3.0)), 91.98));
    }

    #[test]
    fn test_unknown_material_costs_zero() {
        let catalog = Catalog::builtin();
        let material = Material::new("Material", "Gold Leaf", 5.0, "sheet");
        let calc = CostCalculator::new(&catalog);
        assert_eq!(calc.cost_of(&material), 0.0);
        assert_eq!(calc.unit_cost(&material), None);
    }

    #[test]
    fn test_project_cost_is_sum_of_lines() {
        let catalog = Catalog::builtin();
        let materials = vec![
            banner(2.0, 2.0, 3.0),
            Material::new("Software", "Figma", 2.0, "license"),
            Material::new("Material", "Gold Leaf", 5.0, "sheet"),
            Material::new("Hardware", "Arduino", 1.0, "piece"),
        ];
        let sum: f64 = materials.iter().map(|m| cost_of(&catalog, m)).sum();
        assert!(close(calculate_project_cost(&catalog, &materials), sum));
        assert!(close(sum, 551.88 + 30.0 + 25.0));
    }

    #[test]
    fn test_breakdown_reports_unknown_lines() {
        let catalog = Catalog::builtin();
        let unknown = Material::new("Material", "Gold Leaf", 5.0, "sheet");
        let unknown_id = unknown.id.clone();
        let breakdown =
            CostCalculator::new(&catalog).breakdown(&[banner(1.0, 1.0, 1.0), unknown]);
        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.unknown_materials, vec![unknown_id]);
        assert!(!breakdown.is_fully_priced());
        assert!(close(breakdown.total, 45.99));
        assert_eq!(breakdown.lines[0].total_area, Some(1.0));
        assert_eq!(breakdown.lines[1].total_area, None);
    }

    #[test]
    fn test_price_refreshes_cached_fields() {
        let catalog = Catalog::builtin();
        let mut material = banner(2.0, 2.0, 3.0);
        CostCalculator::new(&catalog).price(&mut material);
        assert_eq!(material.unit_cost, Some(45.99));
        assert!(close(material.total_cost.unwrap(), 551.88));
    }

    #[test]
    fn test_total_area_conversion() {
        let catalog = Catalog::builtin();
        let calc = CostCalculator::new(&catalog);
        let material = Material::new("Material", "Vinyl Banner", 2.0, "piece").with_area(
            100.0,
            50.0,
            AreaUnit::SquareCentimeter,
        );
        let m2 = calc.total_area(&material, AreaUnit::SquareMeter).unwrap();
        assert!(close(m2, 1.0));
        assert_eq!(
            calc.total_area(&Material::new("Tool", "Figma", 1.0, "license"), AreaUnit::SquareMeter),
            None
        );
    }
}
