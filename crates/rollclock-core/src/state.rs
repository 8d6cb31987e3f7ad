//! Shared clock state and the background ticker that refreshes it.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};

use crate::time::{SystemTimeSource, Time, TimeSource};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Queue depth per subscriber; a slower reader misses publishes, never blocks the ticker.
pub const SUBSCRIBER_CAPACITY: usize = 8;

const TICKER_THREAD_NAME: &str = "rollclock-ticker";

#[derive(Debug)]
pub enum ClockError {
    /// The OS refused to create the ticker thread.
    Spawn(std::io::Error),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Spawn(e) => write!(f, "failed to spawn clock ticker: {e}"),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::Spawn(e) => Some(e),
        }
    }
}

struct Shared {
    latest: RwLock<Time>,
    subscribers: Mutex<Vec<Sender<Time>>>,
}

impl Shared {
    fn publish(&self, time: Time) {
        *self.latest.write() = time;

        self.subscribers.lock().retain(|tx| match tx.try_send(time) {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

struct Ticker {
    /// Dropping the sender wakes the ticker and ends its loop.
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Latest sampled time plus the ticker that keeps it fresh.
///
/// Only `start` and the ticker thread write; any thread may read `latest()`
/// or hold a subscription.
pub struct ClockState {
    shared: Arc<Shared>,
    source: Arc<dyn TimeSource>,
    interval: Duration,
    ticker: Mutex<Option<Ticker>>,
}

impl ClockState {
    /// Stopped clock over `source`, primed with one sample.
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self::with_interval(source, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(source: Arc<dyn TimeSource>, interval: Duration) -> Self {
        let initial = source.sample();
        Self {
            shared: Arc::new(Shared {
                latest: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
            }),
            source,
            interval,
            ticker: Mutex::new(None),
        }
    }

    /// Stopped clock over the local wall clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Most recently published time.
    pub fn latest(&self) -> Time {
        *self.shared.latest.read()
    }

    /// Receiver for every future publish.
    pub fn subscribe(&self) -> Receiver<Time> {
        let (tx, rx) = bounded(SUBSCRIBER_CAPACITY);
        self.shared.subscribers.lock().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.lock().is_some()
    }

    /// Publishes a fresh sample and starts the ticker. Does nothing if it is
    /// already running.
    ///
    /// `latest()` is current as soon as this returns.
    pub fn start(&self) -> Result<(), ClockError> {
        let mut ticker = self.ticker.lock();
        if ticker.is_some() {
            return Ok(());
        }

        self.shared.publish(self.source.sample());

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let shared = Arc::clone(&self.shared);
        let source = Arc::clone(&self.source);
        let interval = self.interval;

        let handle = thread::Builder::new()
            .name(TICKER_THREAD_NAME.into())
            .spawn(move || run_ticker(&shared, source.as_ref(), interval, &stop_rx))
            .map_err(ClockError::Spawn)?;

        log::debug!("clock ticker started ({} ms)", interval.as_millis());
        *ticker = Some(Ticker { stop_tx, handle });
        Ok(())
    }

    /// Stops and joins the ticker. Safe to call any number of times.
    pub fn stop(&self) {
        let Some(Ticker { stop_tx, handle }) = self.ticker.lock().take() else {
            return;
        };

        drop(stop_tx);
        if handle.join().is_err() {
            log::error!("clock ticker panicked");
        } else {
            log::debug!("clock ticker stopped");
        }
    }
}

impl Drop for ClockState {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockState")
            .field("latest", &self.latest())
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

fn run_ticker(shared: &Shared, source: &dyn TimeSource, interval: Duration, stop: &Receiver<()>) {
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = source.sample();
        log::trace!("tick {now}");
        shared.publish(now);
    }
}
