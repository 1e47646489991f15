// Process table from `ps -ax`

use async_trait::async_trait;
use tracing::instrument;

use super::table::parse_process_report;
use super::{ProcessSource, ReportCommand};
use crate::error::{CollectionError, Stage};
use crate::models::ProcessList;

#[derive(Debug, Clone)]
pub struct PsProcesses {
    command: ReportCommand,
}

impl PsProcesses {
    pub fn new(command: ReportCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProcessSource for PsProcesses {
    #[instrument(skip(self), fields(collector = "ps", operation = "processes"))]
    async fn processes(&self) -> Result<ProcessList, CollectionError> {
        let report = self
            .command
            .run()
            .await
            .map_err(|reason| CollectionError::new(Stage::Processes, reason))?;
        let processes = parse_process_report(&report)
            .map_err(|e| CollectionError::malformed(Stage::Processes, e.to_string()))?;
        tracing::debug!(count = processes.len(), "parsed process table");
        Ok(processes)
    }
}
