//! User model
//!
//! Permissions are a function of the role and are re-derived whenever the
//! role changes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use crm_core::traits::{new_id, Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    Admin,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    Designer,
    Developer,
    Client,
    #[default]
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::Admin,
        UserRole::ProjectManager,
        UserRole::Designer,
        UserRole::Developer,
        UserRole::Client,
        UserRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ProjectManager => "Project Manager",
            Self::Designer => "Designer",
            Self::Developer => "Developer",
            Self::Client => "Client",
            Self::Viewer => "Viewer",
        }
    }

    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Self::Admin => &Permission::ALL,
            Self::ProjectManager => &[
                ViewProjects,
                CreateProjects,
                EditProjects,
                DeleteProjects,
                ViewReports,
            ],
            Self::Designer | Self::Developer => &[ViewProjects, CreateProjects, EditProjects],
            Self::Client | Self::Viewer => &[ViewProjects],
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown user status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "View Projects")]
    ViewProjects,
    #[serde(rename = "Create Projects")]
    CreateProjects,
    #[serde(rename = "Edit Projects")]
    EditProjects,
    #[serde(rename = "Delete Projects")]
    DeleteProjects,
    #[serde(rename = "Manage Users")]
    ManageUsers,
    #[serde(rename = "Manage Stock")]
    ManageStock,
    #[serde(rename = "View Reports")]
    ViewReports,
    #[serde(rename = "Admin Access")]
    AdminAccess,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::ViewProjects,
        Permission::CreateProjects,
        Permission::EditProjects,
        Permission::DeleteProjects,
        Permission::ManageUsers,
        Permission::ManageStock,
        Permission::ViewReports,
        Permission::AdminAccess,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: UserRole,
    #[serde(default)]
    pub department: String,
    pub status: UserStatus,
    pub join_date: NaiveDate,
    pub last_login: Option<DateTime<Utc>>,
    pub permissions: Vec<Permission>,
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Change role and re-derive the permission set.
    pub fn assign_role(&mut self, role: UserRole) {
        self.role = role;
        self.permissions = role.permissions().to_vec();
    }
}

/// User form state used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub department: String,
    pub status: UserStatus,
}

impl UserDraft {
    pub fn into_user(self, join_date: NaiveDate) -> User {
        User {
            id: new_id(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone,
            role: self.role,
            department: self.department,
            status: self.status,
            join_date,
            last_login: None,
            permissions: self.role.permissions().to_vec(),
        }
    }

    pub fn apply_to(self, user: &mut User) {
        user.first_name = self.first_name.trim().to_string();
        user.last_name = self.last_name.trim().to_string();
        user.email = self.email.trim().to_string();
        user.phone = self.phone;
        user.department = self.department;
        user.status = self.status;
        user.assign_role(self.role);
    }
}
