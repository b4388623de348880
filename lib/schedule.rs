use crate::vote::{Lobby, Verdict};
use rand::Rng;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::sleep;
use tracing::{field::display, info, instrument, Span};

/// Something whose turns are resolved periodically.
#[cfg_attr(test, mockall::automock)]
pub trait Resolve {
    /// Resolves the current turn, returning the [`Verdict`] if the game has ended.
    fn resolve(&self) -> Option<Verdict>;

    /// Announces when the current turn is due to be resolved.
    fn set_deadline(&self, deadline: SystemTime);
}

impl<R: Rng> Resolve for Lobby<R> {
    fn resolve(&self) -> Option<Verdict> {
        Lobby::resolve(self)
    }

    fn set_deadline(&self, deadline: SystemTime) {
        Lobby::set_deadline(self, deadline)
    }
}

/// The first multiple of `period` since the Unix epoch that comes strictly after `now`.
///
/// With a period of one day, that is the next midnight UTC.
pub fn next_deadline(now: SystemTime, period: Duration) -> SystemTime {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let period = period.as_nanos().max(1);
    let elapsed = now.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let next = (elapsed / period + 1) * period;

    let secs = (next / NANOS_PER_SEC).min(u64::MAX as u128) as u64;
    let nanos = (next % NANOS_PER_SEC) as u32;
    UNIX_EPOCH + Duration::new(secs, nanos)
}

/// Resolves turns at fixed wall clock boundaries.
#[derive(Debug)]
pub struct Scheduler<T> {
    target: T,
    period: Duration,
    last: Option<SystemTime>,
}

impl<T: Resolve> Scheduler<T> {
    /// Constructs a [`Scheduler`] that resolves a turn every `period`.
    pub fn new(target: T, period: Duration) -> Self {
        Scheduler {
            target,
            period,
            last: None,
        }
    }

    /// Waits for the next deadline and resolves the current turn.
    ///
    /// Returns the [`Verdict`] if the game has ended.
    #[instrument(level = "debug", skip(self), fields(deadline, verdict))]
    pub async fn tick(&mut self) -> Option<Verdict> {
        let now = SystemTime::now();
        let deadline = next_deadline(self.last.map_or(now, |last| last.max(now)), self.period);
        Span::current().record("deadline", display(humantime::format_rfc3339_seconds(deadline)));

        self.target.set_deadline(deadline);
        sleep(deadline.duration_since(now).unwrap_or_default()).await;
        self.last = Some(deadline);

        let verdict = self.target.resolve();
        if let Some(v) = verdict {
            Span::current().record("verdict", display(v));
        }

        info!("turn resolved");
        verdict
    }
}
