//! Configuration for TSID generator

mod builder;
mod env;

pub use builder::TsidConfigBuilder;
pub use env::{thread_node, EPOCH_ENV, NODE_ENV};

use crate::error::{Result, TsidError};
use crate::layout::{MAX_NODE, MAX_TIMESTAMP};

/// Unix epoch, the default zero-point for timestamps
pub const DEFAULT_EPOCH: u64 = 0;

/// Validated `(node, epoch)` pair for a TSID generator
///
/// Copy-able and immutable, so one value can back any number of generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TsidConfig {
    node: u16,
    epoch: u64,
}

impl TsidConfig {
    pub const MAX_NODE: i64 = MAX_NODE as i64;
    pub const MAX_EPOCH: i64 = MAX_TIMESTAMP as i64;

    /// Create a configuration, failing if either value is out of range
    pub fn new(node: i64, epoch: i64) -> Result<Self> {
        let node = Self::validate("node", node, Self::MAX_NODE)?;
        let epoch = Self::validate("epoch", epoch, Self::MAX_EPOCH)?;
        Ok(Self {
            node: node as u16,
            epoch: epoch as u64,
        })
    }

    fn validate(field: &'static str, value: i64, max: i64) -> Result<i64> {
        if !(0..=max).contains(&value) {
            return Err(TsidError::OutOfRange { field, value, max });
        }
        Ok(value)
    }

    /// Callers guarantee `node <= MAX_NODE` and `epoch <= MAX_TIMESTAMP`.
    pub(crate) const fn from_parts(node: u16, epoch: u64) -> Self {
        Self { node, epoch }
    }

    /// Create a new configuration builder
    pub fn builder() -> TsidConfigBuilder {
        TsidConfigBuilder::new()
    }

    /// Load from `TSID_NODE` / `TSID_EPOCH`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        env::load(|key| std::env::var(key).ok())
    }

    /// Same as [`TsidConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::load(lookup)
    }

    #[inline(always)]
    pub const fn node(&self) -> u16 {
        self.node
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Default for TsidConfig {
    fn default() -> Self {
        Self {
            node: 0,
            epoch: DEFAULT_EPOCH,
        }
    }
}
