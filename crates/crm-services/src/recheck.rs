//! Daily status recheck task
//!
//! Runs once on start, then at every local midnight, until the shutdown
//! channel flips to `true` or its sender is dropped.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use crm_status::{until_next_midnight, RECHECK_PERIOD};
use tokio::sync::watch;
use tokio::time::Instant;

use crate::workspace::SharedWorkspace;

#[derive(Clone)]
pub struct DailyRecheck {
    workspace: SharedWorkspace,
}

impl DailyRecheck {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    /// Recheck every project against `today`. Returns how many changed.
    pub async fn run_once(&self, today: NaiveDate) -> usize {
        let changed = self.workspace.write().await.projects.recheck(today);
        tracing::info!(%today, changed, "Project statuses rechecked");
        changed
    }

    /// Run the recheck loop
    pub async fn run(&self, shutdown: watch::Receiver<bool>) {
        self.run_with(shutdown, || match until_next_midnight(&Local::now()) {
            d if d.is_zero() => RECHECK_PERIOD,
            d => d,
        })
        .await
    }

    /// The loop with the gap between runs supplied by `next_delay`. The
    /// deadline survives wakeups from the shutdown channel that don't stop it.
    async fn run_with<F>(&self, mut shutdown: watch::Receiver<bool>, next_delay: F)
    where
        F: Fn() -> Duration,
    {
        let sleep = tokio::time::sleep_until(Instant::now());
        tokio::pin!(sleep);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                () = &mut sleep => {
                    self.run_once(Local::now().date_naive()).await;
                    let delay = next_delay();
                    sleep.as_mut().reset(Instant::now() + delay);
                    tracing::debug!(next_in_secs = delay.as_secs(), "Next status recheck scheduled");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Daily recheck stopped");
    }
}
