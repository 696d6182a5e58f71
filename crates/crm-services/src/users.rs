//! User directory service

use chrono::{DateTime, Utc};
use crm_contracts::{Contract, UserContract};
use crm_core::result::{CrmResult, ServiceResult};
use crm_core::traits::index_of;
use crm_models::{User, UserDraft, UserStatus};
use crm_queries::{UserFilter, ViewFilter};

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn index_of(&self, id: &str) -> CrmResult<usize> {
        index_of(&self.users, id)
    }

    pub fn get(&self, id: &str) -> CrmResult<&User> {
        self.index_of(id).map(|index| &self.users[index])
    }

    /// Append a new user; join date and last login are stamped from `now`.
    pub fn create(&mut self, draft: UserDraft, now: DateTime<Utc>) -> ServiceResult<User> {
        if let Err(errors) = UserContract.validate(&draft) {
            return ServiceResult::failure(errors);
        }
        let mut user = draft.into_user(now.date_naive());
        user.last_login = Some(now);
        tracing::info!(user_id = %user.id, role = %user.role, "User added");
        self.users.push(user.clone());
        ServiceResult::success(user)
    }

    pub fn update(&mut self, id: &str, draft: UserDraft) -> CrmResult<User> {
        let index = self.index_of(id)?;
        UserContract.validate(&draft)?;
        let user = &mut self.users[index];
        draft.apply_to(user);
        tracing::info!(user_id = %id, role = %user.role, "User updated");
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: &str) -> CrmResult<User> {
        let index = self.index_of(id)?;
        let user = self.users.remove(index);
        tracing::info!(user_id = %id, "User removed");
        Ok(user)
    }

    pub fn set_status(&mut self, id: &str, status: UserStatus) -> CrmResult<User> {
        let index = self.index_of(id)?;
        let user = &mut self.users[index];
        user.status = status;
        tracing::debug!(user_id = %id, status = status.as_str(), "User status set");
        Ok(user.clone())
    }

    /// Active becomes inactive; any other status becomes active.
    pub fn toggle_status(&mut self, id: &str) -> CrmResult<User> {
        let next = match self.get(id)?.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive | UserStatus::Pending => UserStatus::Active,
        };
        self.set_status(id, next)
    }

    pub fn filtered(&self, filter: &UserFilter) -> Vec<&User> {
        filter.apply(&self.users)
    }

    pub fn active_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::error::CrmError;
    use chrono::TimeZone;
    use crm_models::{Permission, UserRole};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap()
    }

    fn draft(first: &str, email: &str, role: UserRole) -> UserDraft {
        UserDraft {
            first_name: first.into(),
            last_name: "Doe".into(),
            email: email.into(),
            role,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_appends_and_stamps() {
        let mut users = UserDirectory::new();
        users
            .create(draft("Ann", "ann@shop.com", UserRole::Admin), now())
            .into_result()
            .unwrap();
        let user = users
            .create(draft("Ben", "ben@shop.com", UserRole::Designer), now())
            .into_result()
            .unwrap();

        assert_eq!(users.list()[1].id, user.id);
        assert_eq!(user.join_date, now().date_naive());
        assert_eq!(user.last_login, Some(now()));
        assert!(user.permissions.contains(&Permission::EditProjects));
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let mut users = UserDirectory::new();
        let result = users.create(draft("Ann", "not-an-email", UserRole::Viewer), now());
        assert!(!result.is_success());
        assert!(result.errors.has_error("email"));
        assert!(users.is_empty());
    }

    #[test]
    fn test_update_rederives_permissions() {
        let mut users = UserDirectory::new();
        let user = users
            .create(draft("Ann", "ann@shop.com", UserRole::Viewer), now())
            .into_result()
            .unwrap();
        let updated = users
            .update(&user.id, draft("Ann", "ann@shop.com", UserRole::ProjectManager))
            .unwrap();
        assert!(updated.permissions.contains(&Permission::DeleteProjects));
        assert_eq!(updated.join_date, user.join_date);
    }

    #[test]
    fn test_toggle_status() {
        let mut users = UserDirectory::new();
        let user = users
            .create(draft("Ann", "ann@shop.com", UserRole::Viewer), now())
            .into_result()
            .unwrap();
        assert_eq!(users.toggle_status(&user.id).unwrap().status, UserStatus::Inactive);
        assert_eq!(users.toggle_status(&user.id).unwrap().status, UserStatus::Active);

        users.set_status(&user.id, UserStatus::Pending).unwrap();
        assert_eq!(users.toggle_status(&user.id).unwrap().status, UserStatus::Active);
        assert_eq!(users.active_count(), 1);
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut users = UserDirectory::new();
        assert!(matches!(users.delete("nope"), Err(CrmError::NotFound { .. })));
    }
}
