//! Price sources feeding the refresh job.

use std::path::PathBuf;

use async_trait::async_trait;

use pricemon_core::error::{PriceMonError, Result};
use pricemon_core::model::PriceRecord;

/// One fetch: rows that parsed, plus how many did not.
#[derive(Debug, Default)]
pub struct SourceBatch {
    pub records: Vec<PriceRecord>,
    pub unparsed: usize,
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Short label used in logs.
    fn label(&self) -> String;
    async fn fetch(&self) -> Result<SourceBatch>;
}

/// Reads a JSON array of price records from disk on every fetch.
///
/// Only an unreadable file or a non-array document fails the fetch; rows
/// that do not parse as a `PriceRecord` are dropped and counted.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PriceSource for FileSource {
    fn label(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<SourceBatch> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PriceMonError::Source(format!("read {} failed: {e}", self.path.display()))
        })?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&raw).map_err(|e| {
            PriceMonError::Source(format!("parse {} failed: {e}", self.path.display()))
        })?;

        let mut batch = SourceBatch::default();
        for (i, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<PriceRecord>(row) {
                Ok(r) => batch.records.push(r),
                Err(e) => {
                    batch.unparsed += 1;
                    tracing::debug!(path = %self.path.display(), row = i, error = %e, "price row unparsed");
                }
            }
        }
        Ok(batch)
    }
}
