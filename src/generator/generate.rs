//! ID generation logic

use rand::Rng;
use tracing::{debug, error, instrument};

use super::{Clock, Tick, TsidGenerator};
use crate::error::{Result, TsidError};
use crate::layout::{self, MAX_SEQUENCE, MAX_TIMESTAMP};
use crate::tsid::Tsid;

impl<C: Clock> TsidGenerator<C> {
    /// Generate a new TSID
    ///
    /// Fails with [`TsidError::ClockOverflow`] when the clock is outside the
    /// 41-bit timestamp space or earlier than the configured epoch.
    #[instrument(level = "trace", skip(self))]
    pub fn generate(&self) -> Result<Tsid> {
        let minted = {
            let mut state = self.state.lock();
            let now = self.clock.now_millis();
            if !(0..=MAX_TIMESTAMP as i64).contains(&now) {
                error!(now, "clock outside TSID timestamp space");
                return Err(TsidError::ClockOverflow { timestamp: now });
            }

            let (next, tick) = state.next(now, random_sequence);
            match tick {
                Tick::Regressed { by } => {
                    debug!(by, last = state.timestamp(), "clock moved backwards, clamping")
                }
                Tick::Exhausted => {
                    debug!(timestamp = next.timestamp(), "sequence exhausted, moving to next millisecond")
                }
                Tick::Advanced | Tick::Same => {}
            }
            *state = next;
            next
        };

        self.assemble(minted.timestamp(), minted.sequence())
    }

    /// Pack an absolute timestamp and sequence with this generator's node
    pub(crate) fn assemble(&self, timestamp: i64, sequence: u16) -> Result<Tsid> {
        let delta = timestamp - self.config().epoch() as i64;
        if !(0..=MAX_TIMESTAMP as i64).contains(&delta) {
            error!(
                timestamp,
                epoch = self.config().epoch(),
                "timestamp does not fit after the configured epoch"
            );
            return Err(TsidError::ClockOverflow { timestamp });
        }
        let raw = layout::compose(delta as u64, self.config().node(), sequence);
        Ok(Tsid::from_raw(raw))
    }
}

/// Uniform draw from the thread-local CSPRNG
#[inline]
fn random_sequence() -> u16 {
    rand::rng().random_range(0..=MAX_SEQUENCE)
}
