//! Project and material contracts

use crm_core::error::ValidationErrors;
use crm_core::types::DateRange;
use crm_models::{Material, ProjectDraft};
use validator::Validate;

use crate::base::{merge_derived, require_text, Contract, ValidationResult};

/// Material line rules: non-negative quantity; area lines need non-negative
/// dimensions and an area unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialContract;

impl Contract<Material> for MaterialContract {
    fn validate(&self, material: &Material) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        merge_derived(&mut errors, material.validate());

        if material.has_area {
            for (field, value) in [("width", material.width), ("height", material.height)] {
                match value {
                    None => errors.add_blank(field),
                    Some(v) if v < 0.0 => errors.add(field, "must not be negative"),
                    Some(_) => {}
                }
            }
            if material.area_unit.is_none() {
                errors.add_blank("areaUnit");
            }
        }

        errors.into_result()
    }
}

/// Project form rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectContract;

impl Contract<ProjectDraft> for ProjectContract {
    fn validate(&self, draft: &ProjectDraft) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "title", &draft.title);
        if draft.start_date.is_none() {
            errors.add_blank("startDate");
        }
        if draft.end_date.is_none() {
            errors.add_blank("endDate");
        }
        require_text(&mut errors, "personInCharge", &draft.person_in_charge);

        merge_derived(&mut errors, draft.validate());

        for (index, material) in draft.materials.iter().enumerate() {
            if let Err(material_errors) = MaterialContract.validate(material) {
                errors.merge_scoped(&format!("materials[{}]", index), material_errors);
            }
        }

        if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
            if DateRange::new(start, end).is_inverted() {
                tracing::warn!(title = %draft.title, %start, %end, "Project ends before it starts");
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crm_models::AreaUnit;

    fn valid_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Shop window decals".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            person_in_charge: "Ana".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_project() {
        assert!(ProjectContract.validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_listed_together() {
        let draft = ProjectDraft {
            description: "No title or dates yet".into(),
            ..Default::default()
        };
        let errors = ProjectContract.validate(&draft).unwrap_err();
        assert_eq!(
            errors.required_fields_message().as_deref(),
            Some("Please fill in the required fields: title, startDate, endDate, personInCharge")
        );
    }

    #[test]
    fn test_progress_out_of_range() {
        let draft = ProjectDraft {
            progress: Some(101),
            ..valid_draft()
        };
        let errors = ProjectContract.validate(&draft).unwrap_err();
        assert!(errors.has_error("progress"));
        assert!(errors.missing_fields().is_empty());
    }

    #[test]
    fn test_inverted_dates_are_tolerated() {
        let draft = ProjectDraft {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..valid_draft()
        };
        assert!(ProjectContract.validate(&draft).is_ok());
    }

    #[test]
    fn test_material_errors_are_scoped() {
        let mut bad = Material::new("Material", "Vinyl Banner", -2.0, "piece");
        bad.has_area = true;
        let draft = ProjectDraft {
            materials: vec![Material::new("Software", "Figma", 1.0, "license"), bad],
            ..valid_draft()
        };
        let errors = ProjectContract.validate(&draft).unwrap_err();
        assert!(errors.has_error("materials[1].quantity"));
        assert!(errors.has_error("materials[1].width"));
        assert!(errors.has_error("materials[1].areaUnit"));
        assert!(!errors.has_error("materials[0].quantity"));
    }

    #[test]
    fn test_area_material_rules() {
        let ok = Material::new("Material", "Vinyl Banner", 2.0, "piece").with_area(
            2.0,
            3.0,
            AreaUnit::SquareMeter,
        );
        assert!(MaterialContract.validate(&ok).is_ok());

        let negative = Material::new("Material", "Vinyl Banner", 2.0, "piece").with_area(
            -1.0,
            3.0,
            AreaUnit::SquareMeter,
        );
        let errors = MaterialContract.validate(&negative).unwrap_err();
        assert_eq!(errors.get("width").unwrap(), &vec!["must not be negative".to_string()]);
    }
}
