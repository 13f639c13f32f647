//! API config loader (strict parsing) and environment overrides.

pub mod schema;

use std::fs;
use std::path::Path;

use pricemon_core::error::{PriceMonError, Result};

pub use schema::{
    ApiConfig, JobsSection, ModelsSection, PriceSourceConfig, ServerSection, StoreSection,
};

/// Truthy env flag that forces background jobs off before startup.
pub const DISABLE_BACKGROUND_JOBS_ENV: &str = "DISABLE_BACKGROUND_JOBS";
/// Env override for `server.listen`.
pub const LISTEN_ENV: &str = "PRICEMON_LISTEN";
/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "pricemon.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ApiConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| PriceMonError::Config(format!("read config {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    let cfg: ApiConfig = serde_yaml::from_str(s)
        .map_err(|e| PriceMonError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the startup config: an explicit path must exist, the default
/// path falls back to built-in defaults. Env overrides are applied last and
/// the result is validated again.
pub fn load<F>(explicit: Option<&str>, lookup: F) -> Result<ApiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match explicit {
        Some(path) => load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => {
            tracing::warn!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            ApiConfig::default()
        }
    };

    apply_env_overrides(&mut cfg, lookup);
    cfg.validate()?;
    Ok(cfg)
}

/// Apply environment overrides through `lookup` (injectable for tests).
pub fn apply_env_overrides<F>(cfg: &mut ApiConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if lookup(DISABLE_BACKGROUND_JOBS_ENV).is_some_and(|v| is_truthy(&v)) {
        if cfg.jobs.enabled {
            tracing::info!("background jobs disabled by {DISABLE_BACKGROUND_JOBS_ENV}");
        }
        cfg.jobs.enabled = false;
    }

    if let Some(listen) = lookup(LISTEN_ENV).filter(|v| !v.trim().is_empty()) {
        cfg.server.listen = listen.trim().to_string();
    }

    cfg.dashboard.apply_env(&lookup);
}

pub fn is_truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
