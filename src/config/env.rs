//! Environment-driven configuration loading

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use tracing::debug;

use super::{TsidConfig, DEFAULT_EPOCH};
use crate::error::{Result, TsidError};
use crate::layout::MAX_NODE;

pub const NODE_ENV: &str = "TSID_NODE";
pub const EPOCH_ENV: &str = "TSID_EPOCH";

/// Node derived from the calling thread's identity
///
/// Only loosely unique: two threads may land on the same node.
pub fn thread_node() -> u16 {
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    (hasher.finish() % (MAX_NODE as u64 + 1)) as u16
}

pub(super) fn load<F>(lookup: F) -> Result<TsidConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let node = match read(&lookup, NODE_ENV)? {
        Some(node) => node,
        None => {
            let node = thread_node();
            debug!(node, "{NODE_ENV} not set, using thread-derived node");
            node as i64
        }
    };
    let epoch = read(&lookup, EPOCH_ENV)?.unwrap_or(DEFAULT_EPOCH as i64);
    TsidConfig::new(node, epoch)
}

fn read<F>(lookup: &F, key: &'static str) -> Result<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| TsidError::InvalidEnvironment { key, value })
        })
        .transpose()
}
