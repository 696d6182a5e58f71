//! Result type aliases and the service result pattern

use crate::error::{CrmError, ValidationErrors};

/// Standard Result type for CRM operations
pub type CrmResult<T> = Result<T, CrmError>;

/// Outcome of a create/update service call: either the stored value or the
/// validation errors that blocked it.
#[derive(Debug)]
pub struct ServiceResult<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_result(self) -> CrmResult<T> {
        if self.is_success() {
            self.result.ok_or_else(|| {
                CrmError::Internal("ServiceResult success but no result value".into())
            })
        } else {
            Err(CrmError::Validation(self.errors))
        }
    }
}

impl<T> From<CrmResult<T>> for ServiceResult<T> {
    fn from(result: CrmResult<T>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(CrmError::Validation(errors)) => ServiceResult::failure(errors),
            Err(e) => ServiceResult::failure_with_message(e.to_string()),
        }
    }
}

impl<T> From<ServiceResult<T>> for CrmResult<T> {
    fn from(result: ServiceResult<T>) -> Self {
        result.into_result()
    }
}
