use std::sync::{Arc, OnceLock};

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from `path` (default "shorturl.toml") and `SU__*`
/// environment variables. A missing file is not an error. Only the first
/// successful call takes effect.
///
/// # Examples
/// ```no_run
/// use shorturl::config::init_config;
/// init_config(None).unwrap();
/// ```
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }
    let loaded = Arc::new(StaticConfig::load(path)?);
    Ok(CONFIG.get_or_init(|| loaded).clone())
}
