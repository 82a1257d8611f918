//! Timing and presentation knobs for the app shell
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_DATA: &str = include_str!("../assets/config.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated latency between pressing "Sign In" and landing on the dashboard.
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u32,
    /// How long a toast stays on screen before it expires on its own.
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u32,
    /// Oldest toasts are evicted once the queue grows past this length.
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
    /// Organizer name stamped on activities created without a signed-in user.
    #[serde(default = "default_organizer")]
    pub default_organizer: String,
}

const fn default_sign_in_delay_ms() -> u32 {
    1_500
}

const fn default_notification_ttl_ms() -> u32 {
    3_000
}

const fn default_max_notifications() -> usize {
    5
}

fn default_organizer() -> String {
    String::from("KindWorld Community")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: default_sign_in_delay_ms(),
            notification_ttl_ms: default_notification_ttl_ms(),
            max_notifications: default_max_notifications(),
            default_organizer: default_organizer(),
        }
    }
}

impl AppConfig {
    /// Parse the embedded config, falling back to built-in defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CONFIG_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
