//! User contract

use std::sync::LazyLock;

use crm_core::error::ValidationErrors;
use crm_models::UserDraft;
use regex::Regex;

use crate::base::{require_text, Contract, ValidationResult};

/// Valid email pattern
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Digits with the usual separators, e.g. `+1 (555) 123-4567`
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()./-]{7,20}$").unwrap());

#[derive(Debug, Default, Clone, Copy)]
pub struct UserContract;

impl UserContract {
    pub fn validate_email(&self, email: &str, errors: &mut ValidationErrors) {
        let email = email.trim();
        if email.is_empty() {
            errors.add_blank("email");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.add("email", "is not a valid email address");
        }
    }

    pub fn validate_phone(&self, phone: &str, errors: &mut ValidationErrors) {
        let phone = phone.trim();
        if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
            errors.add("phone", "is not a valid phone number");
        }
    }
}

impl Contract<UserDraft> for UserContract {
    fn validate(&self, draft: &UserDraft) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "firstName", &draft.first_name);
        require_text(&mut errors, "lastName", &draft.last_name);
        self.validate_email(&draft.email, &mut errors);
        self.validate_phone(&draft.phone, &mut errors);
        errors.into_result()
    }
}
