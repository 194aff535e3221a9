use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::{ClockError, Result};
use crate::services::world_clock::WorldClock;

/// Periodically recomputes a clock's snapshots until stopped
pub struct Refresher {
    clock: Arc<WorldClock>,
    period: Duration,
    scheduler: Option<JobScheduler>,
}

impl Refresher {
    /// A stopped refresher for `clock`
    pub fn new(clock: Arc<WorldClock>, period: Duration) -> Self {
        Self {
            clock,
            period,
            scheduler: None,
        }
    }

    /// Schedules `update_times` every period. Starting twice is a no-op.
    pub async fn start(&mut self) -> Result<()> {
        if self.scheduler.is_some() {
            return Ok(());
        }

        let scheduler = JobScheduler::new().await.map_err(scheduler_error)?;

        let clock = self.clock.clone();
        let refresh_job = Job::new_repeated_async(self.period, move |_uuid, _l| {
            let clock = clock.clone();
            Box::pin(async move {
                clock.update_times();
            })
        })
        .map_err(scheduler_error)?;

        scheduler.add(refresh_job).await.map_err(scheduler_error)?;
        scheduler.start().await.map_err(scheduler_error)?;
        self.scheduler = Some(scheduler);

        tracing::info!("Refresher started - updating times every {:?}", self.period);
        Ok(())
    }

    /// Cancels the scheduled refresh. Stopping a stopped refresher is a no-op.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.shutdown().await.map_err(scheduler_error)?;
            tracing::info!("Refresher stopped");
        }
        Ok(())
    }

    /// True between `start` and `stop`
    pub fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    /// The refresh period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Refreshes immediately, outside the schedule
    pub fn tick_now(&self) {
        self.clock.update_times();
    }
}

fn scheduler_error(e: impl std::fmt::Display) -> ClockError {
    ClockError::Scheduler(e.to_string())
}
