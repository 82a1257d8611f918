pub mod reports;
pub mod runner;
pub mod tester;

pub use runner::{ScriptPlan, ScriptSummary, StoreRunner, TesterAssets};
pub use tester::*;
