//! Generator state: last timestamp and last sequence
//!
//! The transition is a pure function of the previous state, the clock reading
//! and a source of random sequences, so it can be tested without a clock.

use crate::layout::MAX_SEQUENCE;

/// What a transition did with the clock reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tick {
    /// Clock moved into a new millisecond
    Advanced,
    /// Same millisecond as the previous identifier
    Same,
    /// Clock went backwards and was clamped to the last timestamp
    Regressed { by: i64 },
    /// Sequence ran out, timestamp pushed one millisecond forward
    Exhausted,
}

/// Last `(timestamp, sequence)` pair used to mint an identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    timestamp: i64,
    sequence: u16,
}

impl State {
    #[inline(always)]
    pub const fn new(timestamp: i64, sequence: u16) -> Self {
        Self {
            timestamp,
            sequence,
        }
    }

    #[inline(always)]
    pub const fn timestamp(self) -> i64 {
        self.timestamp
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Compute the state for the next identifier
    ///
    /// `random_sequence` must return values in `0..=MAX_SEQUENCE`.
    pub fn next<R>(self, now: i64, mut random_sequence: R) -> (Self, Tick)
    where
        R: FnMut() -> u16,
    {
        let mut timestamp = now;
        let mut sequence = u32::from(self.sequence) + 1;
        let mut tick = Tick::Same;

        if now > self.timestamp {
            sequence = u32::from(random_sequence());
            tick = Tick::Advanced;
        } else if now < self.timestamp {
            timestamp = self.timestamp;
            tick = Tick::Regressed {
                by: self.timestamp - now,
            };
        }

        if sequence > u32::from(MAX_SEQUENCE) {
            sequence = u32::from(random_sequence());
            timestamp += 1;
            tick = Tick::Exhausted;
        }

        (Self::new(timestamp, sequence as u16), tick)
    }
}
