//! Wall-clock timing of an algorithm run.
//!
//! Only the synchronous engine run is measured. Step capture happens inside
//! that window; animation replay happens after it and is never timed.

use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed wall-clock time.
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Seconds with four decimals, e.g. `0.0012`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.4}", elapsed.as_secs_f64())
}
