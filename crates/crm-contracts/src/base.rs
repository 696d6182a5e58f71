//! Base contract system

use crm_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Record `field` as blank when `value` is empty or whitespace.
pub fn require_text(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add_blank(field);
    }
}

/// Fold `validator` derive errors in, with camelCase field names.
pub fn merge_derived(
    errors: &mut ValidationErrors,
    result: Result<(), validator::ValidationErrors>,
) {
    let Err(derived) = result else {
        return;
    };
    let mut fields: Vec<_> = derived.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);
    for (field, field_errors) in fields {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("is invalid ({})", error.code));
            errors.add(camel_case(field), message);
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("current_stock"), "currentStock");
        assert_eq!(camel_case("progress"), "progress");
    }

    #[test]
    fn test_require_text() {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "title", "   ");
        require_text(&mut errors, "supplier", "PaperCo");
        assert_eq!(errors.missing_fields(), vec!["title"]);
    }
}
