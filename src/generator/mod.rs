//! Core TSID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp/sequence and the transition between them
//! - `time` - Clock abstraction and the system clock
//! - `generate` - ID generation under the state lock
//! - `global` - Optional process-wide instance

mod generate;
pub mod global;
mod state;
mod time;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::{thread_node, TsidConfig, DEFAULT_EPOCH};
use crate::error::Result;

pub(crate) use state::{State, Tick};
pub use time::{Clock, SystemClock};

/// TSID generator bound to one configuration
///
/// Safe to share between threads; calls to [`TsidGenerator::generate`] are
/// serialized on an internal lock.
#[derive(Debug)]
pub struct TsidGenerator<C = SystemClock> {
    config: TsidConfig,
    pub(crate) state: Mutex<State>,
    clock: C,
}

impl TsidGenerator<SystemClock> {
    /// Create with the system clock
    pub fn new(config: TsidConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create from `TSID_NODE` / `TSID_EPOCH`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TsidConfig::from_env()?))
    }

    /// Create with a node derived from the calling thread and the Unix epoch
    pub fn for_current_thread() -> Self {
        Self::new(TsidConfig::from_parts(thread_node(), DEFAULT_EPOCH))
    }

    /// Create with a node derived from the calling thread, keeping `config`'s epoch
    pub fn for_current_thread_with(config: TsidConfig) -> Self {
        Self::new(TsidConfig::from_parts(thread_node(), config.epoch()))
    }
}

impl<C: Clock> TsidGenerator<C> {
    /// Create with a custom clock
    pub fn with_clock(config: TsidConfig, clock: C) -> Self {
        Self::with_state(config, clock, State::default())
    }

    pub(crate) fn with_state(config: TsidConfig, clock: C, state: State) -> Self {
        debug!(
            node = config.node(),
            epoch = config.epoch(),
            "creating TSID generator"
        );
        Self {
            config,
            state: Mutex::new(state),
            clock,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &TsidConfig {
        &self.config
    }

    #[inline(always)]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
