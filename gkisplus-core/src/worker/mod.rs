// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Periodic background refresh.
//!
//! The scheduler sleeps until the next local refresh tick (default 04:00),
//! runs one update cycle, records the run, and goes back to sleep. A small
//! random jitter keeps the whole congregation from hitting the server in
//! the same second. Shutdown is cooperative through a watch channel; the
//! loop also exits when the shutdown sender is dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::watch;

use crate::content::{ContentSet, DataUpdater, UpdateSummary};
use crate::storage::{PrefKey, PrefValue, Storage};

/// When and how the background refresh fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Local wall-clock hour of the daily tick.
    pub hour: u32,
    /// Minute of the tick hour.
    pub minute: u32,
    /// Maximum random delay added after the tick.
    pub jitter: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        RefreshPolicy {
            hour: 4,
            minute: 0,
            jitter: Duration::from_secs(15 * 60),
        }
    }
}

impl RefreshPolicy {
    /// Builds a policy from the persisted refresh-hour/minute preferences.
    pub fn from_storage(storage: &Storage) -> Self {
        let defaults = RefreshPolicy::default();
        let hour = storage
            .pref_int(PrefKey::RefreshHour)
            .map(|h| h.clamp(0, 23) as u32)
            .unwrap_or(defaults.hour);
        let minute = storage
            .pref_int(PrefKey::RefreshMinute)
            .map(|m| m.clamp(0, 59) as u32)
            .unwrap_or(defaults.minute);
        RefreshPolicy {
            hour,
            minute,
            ..defaults
        }
    }
}

/// Time from `now` until the next tick of `policy`, excluding jitter.
///
/// A tick exactly at `now` counts as already passed, so the result is
/// always strictly positive.
pub fn delay_until_next(now: DateTime<Local>, policy: &RefreshPolicy) -> Duration {
    let hour = policy.hour.min(23);
    let minute = policy.minute.min(59);

    let today = now
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| now.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default());

    let mut tick = today;
    if Local
        .from_local_datetime(&tick)
        .earliest()
        .map(|t| t <= now)
        .unwrap_or(true)
    {
        tick += chrono::Duration::days(1);
    }

    match Local.from_local_datetime(&tick).earliest() {
        Some(t) => (t - now).to_std().unwrap_or(Duration::from_secs(60)),
        // Tick falls in a DST gap; try again in an hour.
        None => Duration::from_secs(3600),
    }
}

/// Long-running task driving scheduled content refreshes.
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    updater: Arc<DataUpdater>,
    content: Arc<ContentSet>,
    storage: Arc<Mutex<Storage>>,
    shutdown: watch::Receiver<bool>,
}

impl RefreshScheduler {
    /// Creates the scheduler and the sender that stops it.
    pub fn new(
        policy: RefreshPolicy,
        updater: Arc<DataUpdater>,
        content: Arc<ContentSet>,
        storage: Arc<Mutex<Storage>>,
    ) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        (
            RefreshScheduler {
                policy,
                updater,
                content,
                storage,
                shutdown: rx,
            },
            tx,
        )
    }

    /// Runs the schedule loop until shutdown is signalled.
    ///
    /// Cycle failures are logged and the loop keeps going; the next tick
    /// retries from scratch.
    pub async fn run(mut self) {
        loop {
            let base = delay_until_next(Local::now(), &self.policy);
            let jitter_ms = self.policy.jitter.as_millis() as u64;
            let jitter = if jitter_ms > 0 {
                Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
            } else {
                Duration::ZERO
            };
            let delay = base + jitter;
            tracing::debug!(?delay, "scheduler sleeping until next refresh tick");

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = self.shutdown.changed() => {
                    match changed {
                        Ok(()) if *self.shutdown.borrow() => {
                            tracing::debug!("scheduler shutdown requested");
                            return;
                        }
                        Ok(()) => continue,
                        // Sender dropped; the app is gone.
                        Err(_) => return,
                    }
                }
            }

            let summary = self.updater.run_cycle(&self.content).await;
            match &summary {
                UpdateSummary::Disabled => {
                    tracing::debug!("remote updates disabled, scheduler idle");
                }
                UpdateSummary::Offline(reason) => {
                    tracing::warn!(reason, "scheduled refresh skipped, offline");
                }
                UpdateSummary::Completed {
                    applied,
                    failed,
                    skipped,
                } => {
                    tracing::info!(
                        applied = applied.len(),
                        failed = failed.len(),
                        skipped = skipped.len(),
                        "scheduled refresh cycle finished"
                    );
                }
            }

            let stamp = PrefValue::Long(chrono::Utc::now().timestamp());
            if let Err(e) = self
                .storage
                .lock()
                .set_pref(PrefKey::LastBackgroundRun, stamp)
            {
                tracing::warn!(error = %e, "failed to record background run");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(y, mo, d)
                    .unwrap()
                    .and_hms_opt(h, mi, s)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_tick_later_today() {
        let policy = RefreshPolicy::default();
        let now = local(2026, 3, 10, 2, 0, 0);
        assert_eq!(
            delay_until_next(now, &policy),
            Duration::from_secs(2 * 3600)
        );
    }

    #[test]
    fn test_tick_exactly_now_rolls_to_tomorrow() {
        let policy = RefreshPolicy::default();
        let now = local(2026, 3, 10, 4, 0, 0);
        assert_eq!(
            delay_until_next(now, &policy),
            Duration::from_secs(24 * 3600)
        );
    }

    #[test]
    fn test_tick_already_passed_rolls_to_tomorrow() {
        let policy = RefreshPolicy::default();
        let now = local(2026, 3, 10, 4, 0, 1);
        assert_eq!(
            delay_until_next(now, &policy),
            Duration::from_secs(24 * 3600 - 1)
        );
    }

    #[test]
    fn test_out_of_range_policy_is_clamped() {
        let policy = RefreshPolicy {
            hour: 99,
            minute: 99,
            jitter: Duration::ZERO,
        };
        let now = local(2026, 3, 10, 12, 0, 0);
        // Clamped to 23:59
        assert_eq!(
            delay_until_next(now, &policy),
            Duration::from_secs(11 * 3600 + 59 * 60)
        );
    }

    #[test]
    fn test_policy_from_storage_prefs() {
        let storage = Storage::in_memory().unwrap();
        storage
            .set_pref(PrefKey::RefreshHour, PrefValue::Int(6))
            .unwrap();
        storage
            .set_pref(PrefKey::RefreshMinute, PrefValue::Int(30))
            .unwrap();

        let policy = RefreshPolicy::from_storage(&storage);
        assert_eq!(policy.hour, 6);
        assert_eq!(policy.minute, 30);
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_loop() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = crate::content::ContentConfig {
            storage_path: temp.path().to_path_buf(),
            ..Default::default()
        };
        let content = Arc::new(ContentSet::open(&config).unwrap());
        let updater = Arc::new(DataUpdater::new(
            config,
            crate::connectivity::ConnectivitySignal::new(),
        ));
        let storage = Arc::new(Mutex::new(Storage::in_memory().unwrap()));

        let (scheduler, shutdown) =
            RefreshScheduler::new(RefreshPolicy::default(), updater, content, storage);
        let handle = tokio::spawn(scheduler.run());

        shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("scheduler should stop promptly")
            .unwrap();
    }
}
