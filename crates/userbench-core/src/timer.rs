//! Request timing.
//!
//! A [`RequestTimer`] reads a monotonic clock when it starts and again when
//! it is finished; the elapsed span is rendered as `"12.34ms"`.

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn finish(self) -> Elapsed {
        Elapsed(self.start.elapsed())
    }
}

/// Elapsed wall time of one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}ms", self.0.as_secs_f64() * 1000.0)
    }
}

/// Run `work` to completion and measure it, awaited time included.
/// The span is measured whether `work` yields a success or an error value.
pub async fn timed<F, T>(work: F) -> (T, Elapsed)
where
    F: Future<Output = T>,
{
    let timer = RequestTimer::start();
    let out = work.await;
    (out, timer.finish())
}

/// Synchronous counterpart of [`timed`].
pub fn timed_sync<T>(work: impl FnOnce() -> T) -> (T, Elapsed) {
    let timer = RequestTimer::start();
    let out = work();
    (out, timer.finish())
}
