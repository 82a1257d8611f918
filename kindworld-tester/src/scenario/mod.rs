use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;
use crate::logic::ScriptPlan;

pub mod catalog;
pub mod certificates;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

/// Logic half of a scenario: a named script plan.
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: ScriptPlan,
}

impl TestScenario {
    #[must_use]
    pub fn script(name: impl Into<String>, plan: ScriptPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

/// Scenario that may run against the store, the browser, or both.
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Store-only scenario; asking it to drive a browser is an error.
#[derive(Clone)]
pub struct ScriptScenario {
    name: &'static str,
    plan: ScriptPlan,
}

impl ScriptScenario {
    pub const fn new(name: &'static str, plan: ScriptPlan) -> Self {
        Self { name, plan }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ScriptScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser steps", self.name)
    }
}

impl CombinedScenario for ScriptScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::script(self.name, self.plan.clone()))
    }
}

/// Every scenario key with its display name, in run order for `all`.
pub const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", smoke::NAME),
    ("certificate-journey", certificates::NAME),
    ("navigation-guard", catalog::NAVIGATION_GUARD),
    ("abandoned-sign-in", catalog::ABANDONED_SIGN_IN),
    ("role-permissions", catalog::ROLE_PERMISSIONS),
    ("mission-toggle", catalog::MISSION_TOGGLE),
    ("mission-capacity", catalog::MISSION_CAPACITY),
    ("mission-filters", catalog::MISSION_FILTERS),
    ("activity-publish", catalog::ACTIVITY_PUBLISH),
    ("certificate-template", catalog::CERTIFICATE_TEMPLATE),
    ("admin-edit", catalog::ADMIN_EDIT),
    ("admin-edit-cancel", catalog::ADMIN_EDIT_CANCEL),
    ("notification-queue", catalog::NOTIFICATION_QUEUE),
    ("logout-reset", catalog::LOGOUT_RESET),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.trim().to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "certificate-journey" | "certificates" => {
            Some(Box::new(certificates::CertificateJourneyScenario))
        }
        other => catalog::find(other)
            .map(|s| Box::new(s) as Box<dyn CombinedScenario + Send + Sync>),
    }
}

pub fn list_scenarios() -> &'static [(&'static str, &'static str)] {
    SCENARIOS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves_with_logic() {
        for (key, name) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} should resolve"));
            let logic = scenario.as_logic_scenario().expect("logic half");
            assert_eq!(logic.name, *name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_rejects_unknown() {
        assert!(get_scenario(" SMOKE ").is_some());
        assert!(get_scenario("certificates").is_some());
        assert!(get_scenario("space-travel").is_none());
    }

    #[test]
    fn catalog_lookup_returns_named_scenario() {
        let scenario = catalog::find("mission-capacity").expect("catalog entry");
        assert_eq!(scenario.name(), catalog::MISSION_CAPACITY);
    }
}
