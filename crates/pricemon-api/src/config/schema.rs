use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use pricemon_core::dashboard::DashboardSettings;
use pricemon_core::error::{PriceMonError, Result};
use pricemon_core::model::Commodity;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default = "default_commodities")]
    pub commodities: Vec<Commodity>,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub models: ModelsSection,

    #[serde(default)]
    pub jobs: JobsSection,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            commodities: default_commodities(),
            store: StoreSection::default(),
            models: ModelsSection::default(),
            jobs: JobsSection::default(),
            dashboard: DashboardSettings::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PriceMonError::UnsupportedVersion);
        }
        if self.commodities.is_empty() {
            return Err(PriceMonError::Config("commodities must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for c in &self.commodities {
            if !seen.insert(c) {
                return Err(PriceMonError::Config(format!("duplicate commodity: {c}")));
            }
        }

        self.server.validate()?;
        self.store.validate()?;
        self.models.validate()?;
        self.jobs.validate()?;
        self.dashboard.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PriceMonError::Config(format!("server.listen must be a valid socket address: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_max_records_per_commodity")]
    pub max_records_per_commodity: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self { max_records_per_commodity: default_max_records_per_commodity() }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1_000_000).contains(&self.max_records_per_commodity) {
            return Err(PriceMonError::Config(
                "store.max_records_per_commodity must be between 1 and 1000000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsSection {
    /// Number of trailing one-step forecasts scored per commodity.
    #[serde(default = "default_evaluation_window")]
    pub evaluation_window: usize,
}

impl Default for ModelsSection {
    fn default() -> Self {
        Self { evaluation_window: default_evaluation_window() }
    }
}

impl ModelsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10_000).contains(&self.evaluation_window) {
            return Err(PriceMonError::Config(
                "models.evaluation_window must be between 1 and 10000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobsSection {
    #[serde(default = "default_jobs_enabled")]
    pub enabled: bool,

    #[serde(default = "default_price_refresh_secs")]
    pub price_refresh_secs: u64,

    #[serde(default = "default_metrics_refresh_secs")]
    pub metrics_refresh_secs: u64,

    /// Price refresh is only scheduled when a source is configured.
    #[serde(default)]
    pub price_source: Option<PriceSourceConfig>,
}

impl Default for JobsSection {
    fn default() -> Self {
        Self {
            enabled: default_jobs_enabled(),
            price_refresh_secs: default_price_refresh_secs(),
            metrics_refresh_secs: default_metrics_refresh_secs(),
            price_source: None,
        }
    }
}

impl JobsSection {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("jobs.price_refresh_secs", self.price_refresh_secs),
            ("jobs.metrics_refresh_secs", self.metrics_refresh_secs),
        ] {
            if !(1..=86_400).contains(&v) {
                return Err(PriceMonError::Config(format!("{name} must be between 1 and 86400")));
            }
        }
        Ok(())
    }

    pub fn price_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.price_refresh_secs)
    }

    pub fn metrics_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_refresh_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceSourceConfig {
    /// JSON file holding an array of price records.
    pub path: PathBuf,
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_commodities() -> Vec<Commodity> {
    ["gold", "silver", "crude_oil", "natural_gas", "copper"]
        .into_iter()
        .filter_map(|c| Commodity::parse(c).ok())
        .collect()
}
fn default_max_records_per_commodity() -> usize {
    10_000
}
fn default_evaluation_window() -> usize {
    30
}
fn default_jobs_enabled() -> bool {
    true
}
fn default_price_refresh_secs() -> u64 {
    300
}
fn default_metrics_refresh_secs() -> u64 {
    600
}
