//! # TSID
//!
//! Time-sorted 64-bit identifiers with a 13-character Crockford Base32 form.
//!
//! Layout, most significant bit first:
//! - 1 unused bit (always 0)
//! - 41 bits of milliseconds since a configurable epoch
//! - 10 bits of node ID
//! - 12 bits of sequence, randomized at every new millisecond
//!
//! ```
//! use tsid::{TsidConfig, TsidGenerator};
//!
//! let config = TsidConfig::new(7, 0).unwrap();
//! let generator = TsidGenerator::new(config);
//! let id = generator.generate().unwrap();
//! assert_eq!(id.node(), 7);
//! assert_eq!(id.to_text().parse::<tsid::Tsid>().unwrap(), id);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod generator;
pub mod layout;
mod tsid;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{thread_node, TsidConfig, TsidConfigBuilder, DEFAULT_EPOCH, EPOCH_ENV, NODE_ENV};
pub use error::{Result, TsidError};
pub use generator::global::{global, global_generate, global_with, reset_global};
pub use generator::{Clock, SystemClock, TsidGenerator};
pub use tsid::Tsid;
