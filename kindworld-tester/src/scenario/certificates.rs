use anyhow::{Context, Result};
use kindworld_core::{Action, Page, Role, certificate_file_name};
use std::collections::HashSet;
use std::time::Duration;
use thirtyfour::prelude::*;

use super::catalog::sign_in_as;
use super::smoke::sign_in_via_ui;
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{ScriptPlan, ScriptSummary};

pub const NAME: &str = "Certificate Journey";

const VOLUNTEER_HOURS: u32 = 530;
const ISSUED_ON: &str = "2024-07-20";
/// Every download in the script shares one clock reading.
const FROZEN_NOW_MS: u64 = 1_720_000_000_000;

pub struct CertificateJourneyScenario;

fn script(_seed: u64) -> Vec<Action> {
    let mut actions = sign_in_as(Role::Volunteer);
    actions.push(Action::Navigate(Page::Certificates));
    for id in [
        "cert-starter",
        "cert-helping-hand",
        "cert-green-leader",
        "cert-gold-medal",
        "cert-community-hero",
        "cert-lifetime-impact",
    ] {
        actions.push(Action::DownloadCertificate {
            id: id.to_string(),
            issued_on: ISSUED_ON.to_string(),
            now_ms: FROZEN_NOW_MS,
        });
    }
    actions
}

impl CertificateJourneyScenario {
    fn plan() -> ScriptPlan {
        ScriptPlan::new(script)
            .with_expectation(earned_status_follows_hours)
            .with_expectation(only_earned_certificates_download)
            .with_expectation(serials_are_unique)
    }
}

fn earned_status_follows_hours(summary: &ScriptSummary) -> Result<()> {
    let store = &summary.final_state;
    anyhow::ensure!(store.page() == Page::Certificates, "should end on certificates");
    anyhow::ensure!(store.viewer_hours() == VOLUNTEER_HOURS, "viewer hours drifted");
    for status in store.certificate_statuses() {
        let required = status.certificate.required_hours;
        let expected = VOLUNTEER_HOURS >= required;
        anyhow::ensure!(
            status.earned == expected,
            "{} earned={} but requires {required}",
            status.certificate.id,
            status.earned
        );
        let deficit = required.saturating_sub(VOLUNTEER_HOURS);
        anyhow::ensure!(
            status.deficit == deficit,
            "{} deficit {} != {deficit}",
            status.certificate.id,
            status.deficit
        );
        anyhow::ensure!(status.progress_pct <= 100, "progress over 100%");
    }
    Ok(())
}

fn only_earned_certificates_download(summary: &ScriptSummary) -> Result<()> {
    let store = &summary.final_state;
    let expected: Vec<String> = store
        .certificates()
        .all()
        .iter()
        .filter(|c| c.required_hours <= VOLUNTEER_HOURS)
        .map(|c| certificate_file_name(&c.name))
        .collect();
    let got: Vec<String> = store.downloads().iter().map(|d| d.file_name.clone()).collect();
    anyhow::ensure!(got == expected, "downloads {got:?} != {expected:?}");
    for doc in store.downloads() {
        anyhow::ensure!(
            doc.body.contains("Sarah Johnson") && doc.body.contains(&doc.serial),
            "{} is missing holder or serial",
            doc.file_name
        );
    }
    let last = store.notifications().messages().last().map(|m| (*m).to_string());
    anyhow::ensure!(
        last.as_deref() == Some("Certificate \"Gold Volunteer Medal\" downloaded!"),
        "last toast was {last:?}"
    );
    Ok(())
}

fn serials_are_unique(summary: &ScriptSummary) -> Result<()> {
    let downloads = summary.final_state.downloads();
    let serials: HashSet<&str> = downloads.iter().map(|d| d.serial.as_str()).collect();
    anyhow::ensure!(
        serials.len() == downloads.len(),
        "same-millisecond downloads produced duplicate serials"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for CertificateJourneyScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;
        sign_in_via_ui(ctx, Role::Volunteer).await?;

        ctx.bridge.click("#tab-certificates").await?;
        let snapshot = ctx
            .bridge
            .wait_for_page(Page::Certificates, Duration::from_secs(2))
            .await?;
        let earned = snapshot.certificates.iter().filter(|c| c.earned).count();
        anyhow::ensure!(earned == 4, "expected 4 earned certificates, saw {earned}");
        let hero = snapshot
            .certificates
            .iter()
            .find(|c| c.id == "cert-community-hero")
            .context("community hero certificate in snapshot")?;
        anyhow::ensure!(hero.deficit == 220, "hero deficit {}", hero.deficit);

        let summary = driver
            .find(By::Id("certificate-summary"))
            .await?
            .text()
            .await?;
        if ctx.verbose {
            println!("  🏅 {summary}");
        }

        ctx.bridge
            .click("button[data-certificate='cert-starter']")
            .await?;
        let wanted = certificate_file_name("Community Starter");
        for _ in 0..20 {
            let snapshot = ctx.bridge.snapshot().await?;
            if snapshot.downloads.contains(&wanted) {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("{wanted} never showed up in downloads")
    }
}

impl CombinedScenario for CertificateJourneyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::script(NAME, Self::plan()))
    }
}
