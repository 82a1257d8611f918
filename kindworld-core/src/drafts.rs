//! Scratch records behind the create-activity, certificate-template, and edit-user modals
//!
//! Every draft stores raw input strings so a form field maps one-to-one onto a
//! draft field. Validation turns a draft into the typed record the catalogs accept.
use crate::certificates::{CertificateKind, NewCertificate};
use crate::directory::{DirectoryUser, UserEdit, UserStatus};
use crate::missions::{Difficulty, NewMission};
use crate::model::Role;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a positive whole number (got \"{value}\")")]
    NotPositive { field: &'static str, value: String },
    #[error("{field} is not valid (got \"{value}\")")]
    Invalid { field: &'static str, value: String },
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn positive(field: &'static str, value: &str) -> Result<u32, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::Missing(field));
    }
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DraftError::NotPositive {
            field,
            value: trimmed.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityField {
    Title,
    Description,
    Location,
    Date,
    Duration,
    Capacity,
    Category,
    Difficulty,
}

pub const ACTIVITY_CATEGORIES: [&str; 7] = [
    "Community",
    "Environment",
    "Education",
    "Health",
    "Animals",
    "Emergency",
    "Arts",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub duration: String,
    pub capacity: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            date: String::new(),
            duration: String::new(),
            capacity: String::new(),
            category: String::from(ACTIVITY_CATEGORIES[0]),
            difficulty: Difficulty::Easy,
        }
    }
}

impl ActivityDraft {
    /// Bind one form input. An unparseable difficulty keeps the previous value.
    pub fn set(&mut self, field: ActivityField, value: String) {
        match field {
            ActivityField::Title => self.title = value,
            ActivityField::Description => self.description = value,
            ActivityField::Location => self.location = value,
            ActivityField::Date => self.date = value,
            ActivityField::Duration => self.duration = value,
            ActivityField::Capacity => self.capacity = value,
            ActivityField::Category => self.category = value,
            ActivityField::Difficulty => {
                if let Ok(d) = value.parse() {
                    self.difficulty = d;
                }
            }
        }
    }

    /// # Errors
    ///
    /// Returns the first missing or non-positive field.
    pub fn validate(&self) -> Result<NewMission, DraftError> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let location = required("location", &self.location)?;
        let date = required("date", &self.date)?;
        let duration_hours = positive("duration", &self.duration)?;
        let max_participants = positive("capacity", &self.capacity)?;
        let category = match self.category.trim() {
            "" => String::from(ACTIVITY_CATEGORIES[0]),
            c => c.to_string(),
        };
        Ok(NewMission {
            title,
            description,
            location,
            date,
            duration_hours,
            max_participants,
            category,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateField {
    Name,
    RequiredHours,
    Company,
    Description,
    Icon,
    Kind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDraft {
    pub name: String,
    pub required_hours: String,
    pub company: String,
    pub description: String,
    pub icon: String,
    pub kind: CertificateKind,
}

impl Default for CertificateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            required_hours: String::new(),
            company: String::new(),
            description: String::new(),
            icon: String::from("🏅"),
            kind: CertificateKind::Certificate,
        }
    }
}

impl CertificateDraft {
    pub fn set(&mut self, field: CertificateField, value: String) {
        match field {
            CertificateField::Name => self.name = value,
            CertificateField::RequiredHours => self.required_hours = value,
            CertificateField::Company => self.company = value,
            CertificateField::Description => self.description = value,
            CertificateField::Icon => self.icon = value,
            CertificateField::Kind => {
                if let Ok(k) = value.parse() {
                    self.kind = k;
                }
            }
        }
    }

    /// # Errors
    ///
    /// Returns the first missing or non-positive field.
    pub fn validate(&self) -> Result<NewCertificate, DraftError> {
        let name = required("name", &self.name)?;
        let required_hours = positive("required hours", &self.required_hours)?;
        let company = required("company", &self.company)?;
        let description = required("description", &self.description)?;
        let icon = match self.icon.trim() {
            "" => String::from("🏅"),
            i => i.to_string(),
        };
        Ok(NewCertificate {
            name,
            required_hours,
            company,
            description,
            icon,
            kind: self.kind,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserField {
    Name,
    Email,
    Role,
    Status,
    Hours,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserEditDraft {
    pub user_id: Option<u32>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub hours: String,
}

impl UserEditDraft {
    #[must_use]
    pub fn from_user(user: &DirectoryUser) -> Self {
        Self {
            user_id: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            hours: user.hours.to_string(),
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Role => {
                if let Ok(r) = value.parse() {
                    self.role = r;
                }
            }
            UserField::Status => {
                if let Ok(s) = value.parse() {
                    self.status = s;
                }
            }
            UserField::Hours => self.hours = value,
        }
    }

    /// # Errors
    ///
    /// Returns an error when no user is targeted, a field is blank (hours
    /// included), the email is malformed, or hours are not a whole number.
    pub fn validate(&self) -> Result<UserEdit, DraftError> {
        let id = self.user_id.ok_or(DraftError::Missing("user"))?;
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let email_ok = EMAIL_RE.as_ref().is_none_or(|re| re.is_match(&email));
        if !email_ok {
            return Err(DraftError::Invalid {
                field: "email",
                value: email,
            });
        }
        let hours_raw = self.hours.trim();
        if hours_raw.is_empty() {
            return Err(DraftError::Missing("hours"));
        }
        let hours = hours_raw.parse::<u32>().map_err(|_| DraftError::Invalid {
            field: "hours",
            value: hours_raw.to_string(),
        })?;
        Ok(UserEdit {
            id,
            name,
            email,
            role: self.role,
            status: self.status,
            hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_activity() -> ActivityDraft {
        let mut draft = ActivityDraft::default();
        draft.set(ActivityField::Title, "River Cleanup".into());
        draft.set(ActivityField::Description, "Clear the banks".into());
        draft.set(ActivityField::Location, "Napa".into());
        draft.set(ActivityField::Date, "2024-09-14".into());
        draft.set(ActivityField::Duration, "3".into());
        draft.set(ActivityField::Capacity, "25".into());
        draft.set(ActivityField::Difficulty, "hard".into());
        draft
    }

    #[test]
    fn complete_activity_validates() {
        let mission = filled_activity().validate().unwrap();
        assert_eq!(mission.title, "River Cleanup");
        assert_eq!(mission.duration_hours, 3);
        assert_eq!(mission.max_participants, 25);
        assert_eq!(mission.difficulty, Difficulty::Hard);
        assert_eq!(mission.category, "Community");
    }

    #[test]
    fn each_required_activity_field_is_enforced() {
        let fields = [
            ActivityField::Title,
            ActivityField::Description,
            ActivityField::Location,
            ActivityField::Date,
            ActivityField::Duration,
            ActivityField::Capacity,
        ];
        for field in fields {
            let mut draft = filled_activity();
            draft.set(field, "   ".into());
            assert!(draft.validate().is_err(), "{field:?} should be required");
        }
    }

    #[test]
    fn zero_or_garbage_numbers_are_rejected() {
        let mut draft = filled_activity();
        draft.set(ActivityField::Capacity, "0".into());
        assert!(matches!(
            draft.validate(),
            Err(DraftError::NotPositive {
                field: "capacity",
                ..
            })
        ));
        draft.set(ActivityField::Capacity, "-4".into());
        assert!(draft.validate().is_err());
        draft.set(ActivityField::Capacity, "ten".into());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn unknown_difficulty_keeps_previous() {
        let mut draft = filled_activity();
        draft.set(ActivityField::Difficulty, "extreme".into());
        assert_eq!(draft.difficulty, Difficulty::Hard);
    }

    #[test]
    fn certificate_draft_requires_positive_hours() {
        let mut draft = CertificateDraft::default();
        draft.set(CertificateField::Name, "River Keeper".into());
        draft.set(CertificateField::Company, "Napa Trust".into());
        draft.set(CertificateField::Description, "For river work".into());
        assert_eq!(draft.validate(), Err(DraftError::Missing("required hours")));
        draft.set(CertificateField::RequiredHours, "40".into());
        draft.set(CertificateField::Kind, "medal".into());
        draft.set(CertificateField::Icon, String::new());
        let new = draft.validate().unwrap();
        assert_eq!(new.required_hours, 40);
        assert_eq!(new.kind, CertificateKind::Medal);
        assert_eq!(new.icon, "🏅");
    }

    #[test]
    fn user_draft_checks_email_shape() {
        let mut draft = UserEditDraft {
            user_id: Some(2),
            name: String::from("Michael Chen"),
            email: String::from("michael.chen@example.com"),
            role: Role::Volunteer,
            status: UserStatus::Active,
            hours: String::from("342"),
        };
        assert_eq!(draft.validate().unwrap().hours, 342);
        draft.set(UserField::Email, "not-an-email".into());
        assert!(matches!(
            draft.validate(),
            Err(DraftError::Invalid { field: "email", .. })
        ));
        draft.set(UserField::Email, "m@example.com".into());
        draft.set(UserField::Role, "organization".into());
        draft.set(UserField::Status, "inactive".into());
        let edit = draft.validate().unwrap();
        assert_eq!(edit.role, Role::Organization);
        assert_eq!(edit.status, UserStatus::Inactive);
    }

    #[test]
    fn user_draft_without_target_is_rejected() {
        assert_eq!(
            UserEditDraft::default().validate(),
            Err(DraftError::Missing("user"))
        );
    }

    #[test]
    fn user_draft_hours_must_be_filled_in() {
        let mut draft = UserEditDraft {
            user_id: Some(2),
            name: String::from("Michael Chen"),
            email: String::from("michael.chen@example.com"),
            role: Role::Volunteer,
            status: UserStatus::Active,
            hours: String::from("  "),
        };
        assert_eq!(draft.validate(), Err(DraftError::Missing("hours")));
        draft.set(UserField::Hours, "0".into());
        assert_eq!(draft.validate().unwrap().hours, 0);
        draft.set(UserField::Hours, "lots".into());
        assert!(matches!(
            draft.validate(),
            Err(DraftError::Invalid { field: "hours", .. })
        ));
    }
}
