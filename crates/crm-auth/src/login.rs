//! Demo login against a fixed account list
//!
//! Email matches case-insensitively, password exactly. The stored session
//! record never carries the password.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{SessionStorage, StorageError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Session encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The logged-in user as kept in session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl DemoAccount {
    fn matches(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim()) && self.password == password
    }

    fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role.to_string(),
            avatar: None,
        }
    }
}

pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: "1",
        email: "admin@company.com",
        password: "admin123",
        name: "Admin User",
        role: "Administrator",
    },
    DemoAccount {
        id: "2",
        email: "manager@company.com",
        password: "manager123",
        name: "Project Manager",
        role: "Manager",
    },
    DemoAccount {
        id: "3",
        email: "user@company.com",
        password: "user123",
        name: "Team Member",
        role: "User",
    },
];

pub struct Authenticator<S> {
    storage: S,
    session_key: String,
    accounts: &'static [DemoAccount],
}

impl<S: SessionStorage> Authenticator<S> {
    pub fn new(storage: S, session_key: impl Into<String>) -> Self {
        Self {
            storage,
            session_key: session_key.into(),
            accounts: &DEMO_ACCOUNTS,
        }
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.matches(email, password))
            .ok_or_else(|| {
                tracing::debug!(email = %email, "Login rejected");
                AuthError::InvalidCredentials
            })?;

        let user = account.session_user();
        self.storage
            .set_item(&self.session_key, serde_json::to_string(&user)?)?;
        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(user)
    }

    pub fn logout(&self) {
        if self.storage.remove_item(&self.session_key).is_some() {
            tracing::info!("User logged out");
        }
    }

    /// The stored user; an unreadable record is dropped and reads as anonymous.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get_item(&self.session_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::error!(error = %e, "Error parsing saved user data");
                self.storage.remove_item(&self.session_key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn auth() -> Authenticator<MemoryStorage> {
        Authenticator::new(MemoryStorage::new(), "projectManager_user")
    }

    #[test]
    fn test_login_is_case_insensitive_on_email() {
        let auth = auth();
        let user = auth.login("Admin@Company.com", "admin123").unwrap();
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.role, "Administrator");
        assert_eq!(auth.current_user(), Some(user));
    }

    #[test]
    fn test_wrong_password() {
        let auth = auth();
        assert!(matches!(
            auth.login("manager@company.com", "Manager123"),
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_session_record_has_no_password() {
        let auth = auth();
        auth.login("user@company.com", "user123").unwrap();
        let raw = auth.storage.get_item("projectManager_user").unwrap();
        assert!(!raw.contains("user123"));
        assert!(raw.contains("Team Member"));
    }

    #[test]
    fn test_logout() {
        let auth = auth();
        auth.login("user@company.com", "user123").unwrap();
        auth.logout();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_corrupt_record_is_removed() {
        let auth = auth();
        auth.storage
            .set_item("projectManager_user", "{not json".into())
            .unwrap();
        assert_eq!(auth.current_user(), None);
        assert_eq!(auth.storage.get_item("projectManager_user"), None);
    }
}
