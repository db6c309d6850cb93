//! Self-rescheduling fetch loop.
//!
//! Each cycle fetches one snapshot, hands it to the consumer as a
//! [`Delivery`] and waits until the consumer has completed it. Only then
//! does it sleep for the interval, so cycles never overlap and the delay is
//! measured from the moment the previous outcome was applied. Failures are
//! logged and the loop carries on.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::fetch::{FetchError, SnapshotSource};
use crate::types::Snapshot;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub enum PollEvent {
    Snapshot(Box<Snapshot>),
    Failed(FetchError),
}

/// One cycle's outcome. The poller schedules the next cycle once this is
/// completed or dropped.
#[derive(Debug)]
pub struct Delivery {
    event: PollEvent,
    done: oneshot::Sender<()>,
}

impl Delivery {
    fn new(event: PollEvent) -> (Self, oneshot::Receiver<()>) {
        let (done, rx) = oneshot::channel();
        (Self { event, done }, rx)
    }

    /// Hands the event to `apply`, then releases the poller.
    pub fn complete<R>(self, apply: impl FnOnce(PollEvent) -> R) -> R {
        let out = apply(self.event);
        let _ = self.done.send(());
        out
    }
}

pub struct Poller<S> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            interval,
        }
    }

    /// Spawns the loop; the first fetch happens immediately.
    pub fn start(self, tx: mpsc::Sender<Delivery>) -> PollerHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(run(self.source, self.interval, tx, stop_rx));
        PollerHandle { stop_tx, task }
    }
}

async fn run<S: SnapshotSource>(
    source: Arc<S>,
    interval: Duration,
    tx: mpsc::Sender<Delivery>,
    mut stop: watch::Receiver<bool>,
) {
    info!(interval_ms = interval.as_millis() as u64, "poller started");
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        let outcome = tokio::select! {
            res = source.fetch() => res,
            _ = stop.changed() => break,
        };
        let event = match outcome {
            Ok(s) => {
                debug!(cycle, cpu = s.cpu.percent, "snapshot received");
                PollEvent::Snapshot(Box::new(s))
            }
            Err(e) => {
                warn!(cycle, kind = ?e.kind(), "stats fetch failed: {e}");
                PollEvent::Failed(e)
            }
        };
        let (delivery, applied) = Delivery::new(event);
        tokio::select! {
            res = tx.send(delivery) => {
                if res.is_err() {
                    debug!("consumer gone; stopping poller");
                    break;
                }
            }
            _ = stop.changed() => break,
        }
        // Err means the delivery was dropped unapplied; still counts as done
        tokio::select! {
            _ = applied => {}
            _ = stop.changed() => break,
        }
        tokio::select! {
            _ = sleep(interval) => {}
            _ = stop.changed() => break,
        }
    }
    info!(cycles = cycle, "poller stopped");
}

/// Returned by [`Poller::start`]; stopping prevents any further cycle.
pub struct PollerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn join(self) {
        if let Err(e) = self.task.await {
            warn!("poller task ended abnormally: {e}");
        }
    }
}
