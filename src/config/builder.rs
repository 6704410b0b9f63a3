//! TsidConfig builder for constructing configuration

use super::{TsidConfig, DEFAULT_EPOCH};
use crate::error::{Result, TsidError};

/// Builder for TsidConfig
///
/// Values are only checked in [`TsidConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TsidConfigBuilder {
    node: Option<i64>,
    epoch: Option<i64>,
}

impl TsidConfigBuilder {
    /// Create a builder with no node and the Unix epoch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node ID (0-1023)
    pub const fn node(mut self, node: i64) -> Self {
        self.node = Some(node);
        self
    }

    /// Set a custom epoch timestamp in milliseconds
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Build the final TsidConfig
    pub fn build(self) -> Result<TsidConfig> {
        let node = self
            .node
            .ok_or(TsidError::NullConfiguration { field: "node" })?;
        let epoch = self.epoch.unwrap_or(DEFAULT_EPOCH as i64);
        TsidConfig::new(node, epoch)
    }
}
