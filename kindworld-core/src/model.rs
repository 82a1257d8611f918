//! People, badges, and read-only dashboard figures
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three canned identities a visitor can sign in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Volunteer,
    Organization,
    Administrator,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Volunteer, Self::Organization, Self::Administrator];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Organization => "organization",
            Self::Administrator => "administrator",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer",
            Self::Organization => "Organization",
            Self::Administrator => "Administrator",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Volunteer => "🙋",
            Self::Organization => "🏢",
            Self::Administrator => "🛡️",
        }
    }

    /// Only organizations publish activities and certificate templates.
    #[must_use]
    pub const fn can_publish(self) -> bool {
        matches!(self, Self::Organization)
    }

    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volunteer" => Ok(Self::Volunteer),
            "organization" | "organisation" => Ok(Self::Organization),
            "administrator" | "admin" => Ok(Self::Administrator),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub icon: String,
    pub date: String,
    pub company: String,
}

/// The signed-in person. Synthesized from a [`Role`] at sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub hours: u32,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub member_since: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub completed_missions: u32,
    #[serde(default)]
    pub organizations_helped: u32,
    #[serde(default)]
    pub rating: f32,
}

impl User {
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn initials(&self) -> String {
        if !self.avatar.is_empty() {
            return self.avatar.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyHours {
    pub month: String,
    pub hours: u32,
}

/// Scale each month against the busiest one, as a 0..=100 bar height.
#[must_use]
pub fn monthly_bar_heights(months: &[MonthlyHours]) -> Vec<u8> {
    let peak = months.iter().map(|m| m.hours).max().unwrap_or(0);
    months
        .iter()
        .map(|m| {
            if peak == 0 {
                0
            } else {
                let pct = u64::from(m.hours) * 100 / u64::from(peak);
                u8::try_from(pct).unwrap_or(100)
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlatformStats {
    pub volunteers: u32,
    pub organizations: u32,
    pub hours_logged: u32,
    pub missions_completed: u32,
}
