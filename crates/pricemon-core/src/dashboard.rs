//! Dashboard-facing settings.
//!
//! These values are consumed verbatim by the rendering layer: where the API
//! lives, what to call the page, and how charts are drawn and refreshed.

use serde::{Deserialize, Serialize};

use crate::error::{PriceMonError, Result};

/// Environment variable overriding `api_base_url`.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TITLE: &str = "Commodity Price Monitor";
pub const DEFAULT_ICON: &str = "📈";
pub const DEFAULT_CHART_HEIGHT: u32 = 400;
pub const DEFAULT_CHART_TEMPLATE: &str = "plotly_white";
pub const DEFAULT_AUTO_REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_icon")]
    pub icon: String,

    /// Chart height in pixels.
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    #[serde(default = "default_chart_template")]
    pub chart_template: String,

    #[serde(default = "default_auto_refresh_interval_secs")]
    pub auto_refresh_interval_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            title: default_title(),
            icon: default_icon(),
            chart_height: default_chart_height(),
            chart_template: default_chart_template(),
            auto_refresh_interval_secs: default_auto_refresh_interval_secs(),
        }
    }
}

impl DashboardSettings {
    /// Apply environment overrides through `lookup` (injectable for tests).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                tracing::debug!(api_base_url = %url, "dashboard api base url overridden from env");
                self.api_base_url = url.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(PriceMonError::Config(
                "dashboard.api_base_url must start with http:// or https://".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(PriceMonError::Config("dashboard.title must not be empty".into()));
        }
        if !(100..=4000).contains(&self.chart_height) {
            return Err(PriceMonError::Config(
                "dashboard.chart_height must be between 100 and 4000".into(),
            ));
        }
        if !(1..=3600).contains(&self.auto_refresh_interval_secs) {
            return Err(PriceMonError::Config(
                "dashboard.auto_refresh_interval_secs must be between 1 and 3600".into(),
            ));
        }
        Ok(())
    }

    /// Base URL joined with an API path, without doubled slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.into()
}
fn default_title() -> String {
    DEFAULT_TITLE.into()
}
fn default_icon() -> String {
    DEFAULT_ICON.into()
}
fn default_chart_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}
fn default_chart_template() -> String {
    DEFAULT_CHART_TEMPLATE.into()
}
fn default_auto_refresh_interval_secs() -> u64 {
    DEFAULT_AUTO_REFRESH_INTERVAL_SECS
}
