// Root filesystem usage from `df -h /`

use async_trait::async_trait;
use tracing::instrument;

use super::table::parse_disk_report;
use super::{DiskUsageSource, ReportCommand};
use crate::error::{CollectionError, Stage};
use crate::models::DiskUsageRecord;

#[derive(Debug, Clone)]
pub struct DfDiskUsage {
    command: ReportCommand,
}

impl DfDiskUsage {
    pub fn new(command: ReportCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl DiskUsageSource for DfDiskUsage {
    #[instrument(skip(self), fields(collector = "df", operation = "disk_usage"))]
    async fn disk_usage(&self) -> Result<DiskUsageRecord, CollectionError> {
        let report = self
            .command
            .run()
            .await
            .map_err(|reason| CollectionError::new(Stage::Disk, reason))?;
        let record = parse_disk_report(&report)
            .map_err(|e| CollectionError::malformed(Stage::Disk, e.to_string()))?;
        tracing::debug!(columns = record.len(), "parsed disk usage");
        Ok(record)
    }
}
