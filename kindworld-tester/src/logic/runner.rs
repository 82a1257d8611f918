//! Drives an [`AppStore`] through a scripted list of actions
use kindworld_core::{Action, AppConfig, AppStore, Page, SeedCatalog};
use std::sync::Arc;

/// Builds the action script for one iteration seed.
pub type ScriptFn = fn(u64) -> Vec<Action>;
/// Checks the end state of a run; the error text lands in the report.
pub type ExpectationFn = fn(&ScriptSummary) -> anyhow::Result<()>;

#[derive(Clone)]
pub struct ScriptPlan {
    pub script: ScriptFn,
    pub expectations: Vec<ExpectationFn>,
}

impl std::fmt::Debug for ScriptPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptPlan")
            .field("expectations", &self.expectations.len())
            .finish_non_exhaustive()
    }
}

impl ScriptPlan {
    #[must_use]
    pub fn new(script: ScriptFn) -> Self {
        Self {
            script,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: ExpectationFn) -> Self {
        self.expectations.push(expectation);
        self
    }
}

/// One line of the run trace: the action and the page it left the store on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: String,
    pub page: Page,
}

#[derive(Debug, Clone)]
pub struct ScriptSummary {
    pub seed: u64,
    pub initial_state: AppStore,
    pub final_state: AppStore,
    pub steps: Vec<Step>,
}

impl ScriptSummary {
    /// Last few steps, newest first, for failure messages.
    pub fn recent_steps(&self, count: usize) -> String {
        if self.steps.is_empty() {
            return String::from("no actions applied");
        }
        self.steps
            .iter()
            .rev()
            .take(count)
            .map(|s| format!("{} -> {:?}", s.action, s.page))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Config and seed catalog shared by every run.
#[derive(Debug, Clone, Default)]
pub struct TesterAssets {
    pub config: AppConfig,
    pub catalog: SeedCatalog,
}

impl TesterAssets {
    pub fn load_default() -> Self {
        Self {
            config: AppConfig::load_from_static(),
            catalog: SeedCatalog::load_from_static(),
        }
    }
}

/// Runs plans against fresh stores built from shared assets.
#[derive(Debug, Clone)]
pub struct StoreRunner {
    assets: Arc<TesterAssets>,
    verbose: bool,
}

impl StoreRunner {
    pub const fn new(assets: Arc<TesterAssets>, verbose: bool) -> Self {
        Self { assets, verbose }
    }

    /// Fresh store for `seed`: the shared catalog with its own id generator.
    pub fn fresh_store(&self, seed: u64) -> AppStore {
        AppStore::new(
            self.assets.config.clone(),
            self.assets.catalog.clone(),
            seed,
        )
    }

    pub fn run_plan(&self, plan: &ScriptPlan, seed: u64) -> ScriptSummary {
        let initial_state = self.fresh_store(seed);
        let mut store = initial_state.clone();
        let mut steps = Vec::new();
        for action in (plan.script)(seed) {
            let label = format!("{action:?}");
            store.apply(action);
            if self.verbose {
                log::debug!("{label} -> {:?}", store.page());
            }
            steps.push(Step {
                action: label,
                page: store.page(),
            });
        }
        ScriptSummary {
            seed,
            initial_state,
            final_state: store,
            steps,
        }
    }
}
