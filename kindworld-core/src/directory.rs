//! Admin-facing user directory
use crate::model::Role;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub hours: u32,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub joined: String,
}

/// A validated edit from the edit-user modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEdit {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("no directory user with id {0}")]
    UnknownUser(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserDirectory {
    users: Vec<DirectoryUser>,
}

impl UserDirectory {
    #[must_use]
    pub const fn new(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn all(&self) -> &[DirectoryUser] {
        &self.users
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&DirectoryUser> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn count_by_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    #[must_use]
    pub fn total_hours(&self) -> u64 {
        self.users.iter().map(|u| u64::from(u.hours)).sum()
    }

    /// Overwrite the editable fields of one row; `joined` is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownUser`] when the id is absent.
    pub fn apply(&mut self, edit: UserEdit) -> Result<&DirectoryUser, DirectoryError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == edit.id)
            .ok_or(DirectoryError::UnknownUser(edit.id))?;
        user.name = edit.name;
        user.email = edit.email;
        user.role = edit.role;
        user.status = edit.status;
        user.hours = edit.hours;
        Ok(user)
    }
}
