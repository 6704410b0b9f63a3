//! Time source for TSID generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use chrono::Utc;

/// Source of the current time in Unix milliseconds
///
/// The generator reads it once per call. Readings may go backwards; the
/// generator clamps them.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
