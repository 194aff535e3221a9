use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::environment::Environment;
use crate::error::{ClockError, Result};
use crate::models::{default_timezones, parse_timezone, TimezoneConfig, TimezoneSnapshot};
use crate::services::refresher::Refresher;
use crate::state::Observable;
use crate::storage::{PersistenceStore, SELECTED_TIMEZONES_KEY};
use crate::utils::datetime::{format_date, format_time, hour_in, UNKNOWN_DATE, UNKNOWN_TIME};
use crate::utils::logging::{log_invalid_timezone, log_selection_change, log_system_event};

/// Refresher period for a live clock
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Selected timezones and their rendered clock faces
pub struct WorldClock {
    timezones: Observable<Vec<TimezoneConfig>>,
    current_times: Observable<Vec<TimezoneSnapshot>>,
    env: Environment,
    mutation: Mutex<()>,
}

impl WorldClock {
    /// A clock holding the default selection and no snapshots yet
    pub fn new(env: Environment) -> Self {
        Self {
            timezones: Observable::new(default_timezones()),
            current_times: Observable::new(Vec::new()),
            env,
            mutation: Mutex::new(()),
        }
    }

    /// Starts a clock session.
    ///
    /// In an interactive environment the persisted selection replaces the
    /// defaults, snapshots are computed once and a [`Refresher`] is started
    /// with `period`. A malformed persisted selection is logged and the
    /// defaults are kept. Headless environments return no refresher.
    pub async fn init(env: Environment, period: Duration) -> Result<(Arc<Self>, Option<Refresher>)> {
        let clock = Arc::new(Self::new(env));

        if !clock.env.is_interactive() {
            log_system_event("Headless session", Some("keeping default selection"));
            return Ok((clock, None));
        }

        match clock.load_selection() {
            Ok(true) => info!("Loaded {} persisted timezones", clock.len()),
            Ok(false) => info!("No persisted selection, using defaults"),
            Err(ClockError::MalformedSelection(e)) => {
                warn!("Ignoring malformed persisted selection: {}", e);
            }
            Err(e) => return Err(e),
        }

        clock.update_times();

        let mut refresher = Refresher::new(clock.clone(), period);
        refresher.start().await?;
        log_system_event("Clock session started", Some(&format!("{} timezones", clock.len())));

        Ok((clock, Some(refresher)))
    }

    /// Replaces the selection with the persisted one.
    ///
    /// Returns `Ok(false)` outside an interactive environment or when nothing
    /// (or an empty string) was stored.
    pub fn load_selection(&self) -> Result<bool> {
        let Some(store) = self.store() else {
            return Ok(false);
        };
        let stored = match store.get(SELECTED_TIMEZONES_KEY)? {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(false),
        };
        let selection: Vec<TimezoneConfig> = serde_json::from_str(&stored)?;
        self.timezones.set(selection);
        Ok(true)
    }

    /// Selected timezones in display order
    pub fn get_timezones(&self) -> Vec<TimezoneConfig> {
        self.timezones.get()
    }

    /// Latest snapshots, one per selected timezone
    pub fn get_current_times(&self) -> Vec<TimezoneSnapshot> {
        self.current_times.get()
    }

    /// Number of selected timezones
    pub fn len(&self) -> usize {
        self.timezones.get().len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notified on every change to the selection
    pub fn subscribe_timezones(&self) -> watch::Receiver<Vec<TimezoneConfig>> {
        self.timezones.subscribe()
    }

    /// Notified on every refresh
    pub fn subscribe_current_times(&self) -> watch::Receiver<Vec<TimezoneSnapshot>> {
        self.current_times.subscribe()
    }

    /// Appends `cfg` to the selection. Duplicates and unknown identifiers are
    /// accepted.
    pub fn add_timezone(&self, cfg: TimezoneConfig) -> Result<()> {
        let _guard = self.lock_mutation();

        if cfg.tz().is_err() {
            log_invalid_timezone(&cfg.timezone, "add");
        }
        let id = cfg.timezone.clone();
        self.timezones.update(|list| list.push(cfg));
        log_selection_change("ADD", &id, self.len());

        self.persist_and_refresh()
    }

    /// Removes every entry whose identifier equals `timezone_id`
    pub fn remove_timezone(&self, timezone_id: &str) -> Result<()> {
        let _guard = self.lock_mutation();

        let mut removed = 0;
        self.timezones.update(|list| {
            let before = list.len();
            list.retain(|tz| tz.timezone != timezone_id);
            removed = before - list.len();
        });
        log_selection_change(&format!("REMOVE({})", removed), timezone_id, self.len());

        self.persist_and_refresh()
    }

    /// Recomputes every snapshot from the clock. No-op without a clock.
    pub fn update_times(&self) {
        let _guard = self.lock_mutation();
        self.refresh_snapshots();
    }

    // Caller holds the mutation lock.
    fn refresh_snapshots(&self) {
        let Some(now) = self.env.clock.as_ref().map(|c| c.now_utc()) else {
            return;
        };
        let snapshots = self
            .timezones
            .get()
            .into_iter()
            .map(|cfg| snapshot_at(cfg, now))
            .collect();
        self.current_times.set(snapshots);
    }

    /// Current hour of day (0-23) in `timezone_id`
    pub fn get_current_hour(&self, timezone_id: &str) -> Result<u32> {
        let tz = parse_timezone(timezone_id).inspect_err(|_| {
            log_invalid_timezone(timezone_id, "hour query");
        })?;
        Ok(hour_in(self.now(), &tz))
    }

    fn now(&self) -> DateTime<Utc> {
        self.env
            .clock
            .as_ref()
            .map_or_else(Utc::now, |c| c.now_utc())
    }

    fn lock_mutation(&self) -> MutexGuard<'_, ()> {
        self.mutation.lock().unwrap_or_else(|e| e.into_inner())
    }

    // Storage is only read or written in an interactive environment.
    fn store(&self) -> Option<&Arc<dyn PersistenceStore>> {
        if self.env.is_interactive() {
            self.env.store.as_ref()
        } else {
            None
        }
    }

    // Outside an interactive environment the change stays in memory and no
    // refresh happens. Caller holds the mutation lock.
    fn persist_and_refresh(&self) -> Result<()> {
        let Some(store) = self.store() else {
            return Ok(());
        };
        let json = serde_json::to_string(&self.timezones.get())?;
        let written = store.set(SELECTED_TIMEZONES_KEY, &json);
        self.refresh_snapshots();
        written
    }
}

/// Renders one clock face at `now`
pub fn snapshot_at(cfg: TimezoneConfig, now: DateTime<Utc>) -> TimezoneSnapshot {
    let (time, date) = match cfg.tz() {
        Ok(tz) => {
            let local = now.with_timezone(&tz);
            (format_time(&local), format_date(&local))
        }
        Err(_) => (UNKNOWN_TIME.to_string(), UNKNOWN_DATE.to_string()),
    };
    TimezoneSnapshot {
        city: cfg.city,
        timezone: cfg.timezone,
        time,
        date,
    }
}
