use anyhow::{Context, Result, bail};
use kindworld_core::{Page, StoreSnapshot};
use std::time::Duration;
use thirtyfour::prelude::*;

/// Reads the JSON string the app publishes after every render in test mode.
pub const SNAPSHOT_SCRIPT: &str =
    "return window.__kindworldTest ? window.__kindworldTest.snapshot : null";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Decode the raw value returned by [`SNAPSHOT_SCRIPT`].
pub fn parse_snapshot(raw: &serde_json::Value) -> Result<StoreSnapshot> {
    let Some(text) = raw.as_str() else {
        bail!("__kindworldTest.snapshot is missing. Did you pass ?test=1?");
    };
    serde_json::from_str(text).context("parsing store snapshot")
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__kindworldTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("__kindworldTest is not available. Did you pass ?test=1?");
        }
        Ok(())
    }

    pub async fn snapshot(&self) -> Result<StoreSnapshot> {
        let result = self.driver.execute(SNAPSHOT_SCRIPT, vec![]).await?;
        parse_snapshot(result.json())
    }

    /// Poll the snapshot until the store reports `page`, or give up after `timeout`.
    pub async fn wait_for_page(&self, page: Page, timeout: Duration) -> Result<StoreSnapshot> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let snapshot = self.snapshot().await?;
            if snapshot.page == page {
                return Ok(snapshot);
            }
            if tokio::time::Instant::now() >= deadline {
                bail!(
                    "timed out after {timeout:?} waiting for {page:?}; still on {:?}",
                    snapshot.page
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("finding {css}"))?
            .click()
            .await
            .with_context(|| format!("clicking {css}"))?;
        Ok(())
    }
}
