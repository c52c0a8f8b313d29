//! Periodic feed refresh driving the repository.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::feed::client::SignalFeed;
use crate::feed::parser::parse_feed;
use crate::signals::record::Direction;
use crate::signals::repository::SignalRepository;

/// Owns one polling loop over a feed.
///
/// Each consumer creates and owns its own service; there is no cross-view
/// coordination. Stopping the service cancels the timer and suppresses the
/// side effect of any fetch still in flight. A stopped service stays
/// stopped.
pub struct RefreshService {
    feed: Arc<dyn SignalFeed>,
    repository: SignalRepository,
    interval: Duration,
    cancelled: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshService {
    pub fn new(
        feed: Arc<dyn SignalFeed>,
        repository: SignalRepository,
        interval: Duration,
    ) -> Self {
        Self {
            feed,
            repository,
            interval,
            cancelled: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
        }
    }

    /// Runs one cycle immediately, then one per interval.
    ///
    /// A tick that fires while the previous cycle is still in flight is
    /// skipped rather than overlapped, so cycles within one service are
    /// strictly sequential.
    pub fn start(&self) {
        let feed = self.feed.clone();
        let repository = self.repository.clone();
        let cancelled = self.cancelled.clone();
        let period = self.interval;

        let handle = tokio::spawn(async move {
            info!("[REFRESH] 🔄 Started (every {:?})", period);
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                run_cycle(&*feed, &repository, &cancelled).await;
            }
        });

        let mut slot = self.handle.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(handle);
    }

    /// Cancels the pending timer.
    ///
    /// Cancellation is cooperative: an in-flight fetch is not aborted
    /// mid-request, but its completion no longer reaches the repository.
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.lock().unwrap().take() {
            handle.abort();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for RefreshService {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One fetch-parse-replace iteration. Failure keeps the previously held
/// set and the timer running.
async fn run_cycle(feed: &dyn SignalFeed, repository: &SignalRepository, cancelled: &AtomicBool) {
    match feed.fetch_raw().await {
        Ok(body) => {
            let records = parse_feed(&body);

            // The consumer may have torn down while the fetch was in
            // flight; a stale completion must not overwrite live state.
            if cancelled.load(Ordering::SeqCst) {
                return;
            }

            repository.replace(records);
            info!(
                "[REFRESH] ✅ {} signals ({} buy / {} sell)",
                repository.total_count(),
                repository.count_by_direction(Direction::Long),
                repository.count_by_direction(Direction::Short),
            );
        }
        Err(e) => {
            warn!("[REFRESH] ⚠️ Fetch failed, keeping last snapshot: {}", e);
        }
    }
}
