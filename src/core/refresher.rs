use crate::core::status::StatusSnapshot;
use crate::domain::ports::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// How often the open/closed badge is recomputed.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// Background task recomputing the [`StatusSnapshot`] on a fixed period.
pub struct StatusRefresher {
    clock: Arc<dyn Clock>,
    period: Duration,
    status_tx: watch::Sender<StatusSnapshot>,
    shutdown_rx: oneshot::Receiver<()>,
}

impl StatusRefresher {
    /// Computes the first snapshot right away, then spawns the periodic task.
    /// Must be called inside a tokio runtime.
    pub fn spawn(clock: Arc<dyn Clock>, period: Duration) -> RefresherHandle {
        let initial = StatusSnapshot::from_clock(clock.as_ref(), 0);
        let (status_tx, status_rx) = watch::channel(initial);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = Self {
            clock,
            period,
            status_tx,
            shutdown_rx,
        };
        let join = tokio::spawn(task.run());

        RefresherHandle {
            status_rx,
            shutdown_tx: Some(shutdown_tx),
            join: Some(join),
        }
    }

    async fn run(self) {
        let Self {
            clock,
            period,
            status_tx,
            mut shutdown_rx,
        } = self;

        info!(period_secs = period.as_secs(), "Status refresher started");

        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sequence = 1u64;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown_rx => {
                    info!("Status refresher shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let snapshot = StatusSnapshot::from_clock(clock.as_ref(), sequence);
                    debug!(
                        sequence,
                        hour = snapshot.local_hour,
                        status = snapshot.label(),
                        "Office status refreshed"
                    );
                    status_tx.send_replace(snapshot);
                    sequence += 1;
                }
            }
        }
    }
}

/// Owner side of a running [`StatusRefresher`]. Dropping it aborts the task.
pub struct RefresherHandle {
    status_rx: watch::Receiver<StatusSnapshot>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    pub fn current(&self) -> StatusSnapshot {
        self.status_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.status_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.join
            .as_ref()
            .map(|join| !join.is_finished())
            .unwrap_or(false)
    }

    /// Stops the task and waits for it to exit. No tick fires afterwards.
    pub async fn shutdown(mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "Status refresher ended abnormally");
                }
            }
        }
    }
}

impl Drop for RefresherHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}
