//! Static catalog the app boots from
use crate::certificates::Certificate;
use crate::directory::DirectoryUser;
use crate::missions::Mission;
use crate::model::{MonthlyHours, PlatformStats, Role, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SEED_DATA: &str = include_str!("../assets/seed.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("seed catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed catalog has no identity for the {0} role")]
    MissingIdentity(Role),
    #[error("seed catalog repeats mission id {0}")]
    DuplicateMission(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeedCatalog {
    pub users: Vec<User>,
    pub missions: Vec<Mission>,
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub directory: Vec<DirectoryUser>,
    #[serde(default)]
    pub monthly_hours: Vec<MonthlyHours>,
    #[serde(default)]
    pub stats: PlatformStats,
}

impl SeedCatalog {
    /// Parse and sanity-check a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed, a role has no canned
    /// identity, or two missions share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for role in Role::ALL {
            if !catalog.users.iter().any(|u| u.role == role) {
                return Err(CatalogError::MissingIdentity(role));
            }
        }
        let mut ids: Vec<u32> = catalog.missions.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(CatalogError::DuplicateMission(pair[0]));
        }
        Ok(catalog)
    }

    /// The embedded catalog, or an empty one if it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(SEED_DATA) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("embedded seed catalog rejected: {err}");
                Self::default()
            }
        }
    }

    /// Canned identity for a role, or a bare placeholder when the catalog lacks one.
    #[must_use]
    pub fn identity(&self, role: Role) -> User {
        identity_in(&self.users, role)
    }
}

pub(crate) fn identity_in(users: &[User], role: Role) -> User {
    users
        .iter()
        .find(|u| u.role == role)
        .cloned()
        .unwrap_or_else(|| placeholder_user(role))
}

fn placeholder_user(role: Role) -> User {
    User {
        id: format!("user-{}", role.key()),
        name: role.label().to_string(),
        role,
        hours: 0,
        email: String::new(),
        phone: String::new(),
        location: String::new(),
        avatar: role.icon().to_string(),
        member_since: String::new(),
        bio: String::new(),
        badges: Vec::new(),
        completed_missions: 0,
        organizations_helped: 0,
        rating: 0.0,
    }
}
