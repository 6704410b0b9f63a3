//! Process-wide default generator
//!
//! The instance is created on first use and can be dropped with
//! [`reset_global`]. Creation happens under a lock, so concurrent first callers
//! share one instance.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::info;

use super::TsidGenerator;
use crate::config::TsidConfig;
use crate::error::Result;
use crate::tsid::Tsid;

static GLOBAL: Lazy<Mutex<Option<Arc<TsidGenerator>>>> = Lazy::new(|| Mutex::new(None));

/// Global generator, created from the environment on first use
pub fn global() -> Result<Arc<TsidGenerator>> {
    let mut slot = GLOBAL.lock();
    if let Some(generator) = slot.as_ref() {
        return Ok(Arc::clone(generator));
    }
    let generator = Arc::new(TsidGenerator::new(TsidConfig::from_env()?));
    install(&mut slot, &generator);
    Ok(generator)
}

/// Global generator, created from `config` on first use
///
/// `config` is ignored when the instance already exists.
pub fn global_with(config: TsidConfig) -> Arc<TsidGenerator> {
    let mut slot = GLOBAL.lock();
    match slot.as_ref() {
        Some(generator) => Arc::clone(generator),
        None => {
            let generator = Arc::new(TsidGenerator::new(config));
            install(&mut slot, &generator);
            generator
        }
    }
}

/// Generate from the global generator
pub fn global_generate() -> Result<Tsid> {
    global()?.generate()
}

/// Drop the global generator; the next access creates a fresh one
pub fn reset_global() {
    if GLOBAL.lock().take().is_some() {
        info!("global TSID generator reset");
    }
}

fn install(slot: &mut Option<Arc<TsidGenerator>>, generator: &Arc<TsidGenerator>) {
    info!(
        node = generator.config().node(),
        epoch = generator.config().epoch(),
        "global TSID generator initialized"
    );
    *slot = Some(Arc::clone(generator));
}
