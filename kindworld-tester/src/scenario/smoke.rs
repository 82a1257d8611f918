use anyhow::{Context, Result};
use kindworld_core::{Page, Role, StoreSnapshot};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::catalog::sign_in_as;
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{ScriptPlan, ScriptSummary};

pub const NAME: &str = "Smoke Test";

/// Slack on top of the configured sign-in delay before giving up.
const SIGN_IN_GRACE: Duration = Duration::from_secs(5);

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> ScriptPlan {
        ScriptPlan::new(|_| sign_in_as(Role::Volunteer))
            .with_expectation(landing_is_pristine)
            .with_expectation(volunteer_reaches_dashboard)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        driver
            .find(By::Id("main"))
            .await
            .context("main landmark should render")?;
        ctx.bridge.ensure_available().await?;

        let start = ctx.bridge.snapshot().await?;
        anyhow::ensure!(
            start.page == Page::Landing,
            "app should open on the landing page, got {:?}",
            start.page
        );

        let dashboard = sign_in_via_ui(ctx, Role::Volunteer).await?;
        anyhow::ensure!(
            dashboard.role == Some(Role::Volunteer),
            "expected a volunteer session, got {:?}",
            dashboard.role
        );
        anyhow::ensure!(
            dashboard.hours == 530,
            "volunteer should log 530 hours, got {}",
            dashboard.hours
        );
        driver
            .find(By::Id("stat-hours"))
            .await
            .context("dashboard hours card should render")?;

        if ctx.verbose {
            println!("  📊 Final snapshot: {dashboard:?}");
        }
        Ok(())
    }
}

/// Landing → sign-in → dashboard through the real buttons.
pub async fn sign_in_via_ui(ctx: &ScenarioCtx<'_>, role: Role) -> Result<StoreSnapshot> {
    ctx.bridge.click("#get-started-btn").await?;
    ctx.bridge
        .wait_for_page(Page::SignIn, Duration::from_secs(2))
        .await?;
    ctx.bridge.click(&format!("#role-{}", role.key())).await?;
    ctx.bridge.click("#sign-in-btn").await?;
    if ctx.verbose {
        let pending = ctx.bridge.snapshot().await?;
        println!("  ⏳ Signing in as {role} (pending: {})", pending.signing_in);
    }
    ctx.bridge
        .wait_for_page(Page::Dashboard, SIGN_IN_GRACE)
        .await
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::script(NAME, Self::plan()))
    }
}

fn landing_is_pristine(summary: &ScriptSummary) -> Result<()> {
    let start = &summary.initial_state;
    anyhow::ensure!(start.page() == Page::Landing, "store should boot on landing");
    anyhow::ensure!(!start.is_signed_in(), "store should boot signed out");
    anyhow::ensure!(
        start.notifications().is_empty(),
        "no toasts before interaction"
    );
    anyhow::ensure!(
        start.missions().len() == 7 && start.certificates().len() == 6,
        "seed catalog should hold 7 missions and 6 certificates"
    );
    Ok(())
}

fn volunteer_reaches_dashboard(summary: &ScriptSummary) -> Result<()> {
    let store = &summary.final_state;
    anyhow::ensure!(
        store.page() == Page::Dashboard,
        "sign-in should land on the dashboard, got {:?}",
        store.page()
    );
    let user = store.user().context("signed-in user")?;
    anyhow::ensure!(user.role == Role::Volunteer, "wrong role {}", user.role);
    anyhow::ensure!(user.hours == 530, "expected 530 hours, got {}", user.hours);
    let messages = store.notifications().messages();
    anyhow::ensure!(
        messages.first() == Some(&"Welcome back, Sarah!"),
        "unexpected welcome toast: {messages:?}"
    );
    anyhow::ensure!(messages.len() == 2, "expected two toasts, got {messages:?}");
    Ok(())
}
