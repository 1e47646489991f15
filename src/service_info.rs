// Snapshot aggregation: runs every collector, all-or-nothing

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

use crate::collectors::{
    AddressSource, DfDiskUsage, DiskUsageSource, ProcessSource, PsProcesses, ReportCommand,
    SysinfoAddresses, SysinfoUptime, UptimeSource,
};
use crate::config::CollectionConfig;
use crate::error::{CollectionError, Stage};
use crate::models::ServiceSnapshot;

/// Captured once at service start; read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ServiceStart {
    instant: Instant,
    at: DateTime<Utc>,
}

impl ServiceStart {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            at: Utc::now(),
        }
    }

    /// Wall-clock start time (for logs).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Monotonic seconds since start.
    pub fn elapsed_secs(&self) -> f64 {
        self.instant.elapsed().as_secs_f64()
    }
}

pub struct ServiceInfoCollector {
    start: ServiceStart,
    addresses: Arc<dyn AddressSource>,
    disk: Arc<dyn DiskUsageSource>,
    processes: Arc<dyn ProcessSource>,
    uptime: Arc<dyn UptimeSource>,
}

impl ServiceInfoCollector {
    pub fn new(
        start: ServiceStart,
        addresses: Arc<dyn AddressSource>,
        disk: Arc<dyn DiskUsageSource>,
        processes: Arc<dyn ProcessSource>,
        uptime: Arc<dyn UptimeSource>,
    ) -> Self {
        Self {
            start,
            addresses,
            disk,
            processes,
            uptime,
        }
    }

    /// Host collectors: sysinfo for interfaces and boot time, `df`/`ps` for the rest.
    pub fn native(start: ServiceStart, config: &CollectionConfig) -> Result<Self, CollectionError> {
        let timeout = config.command_timeout();
        let df = ReportCommand::from_argv(&config.disk_command, timeout)
            .ok_or_else(|| CollectionError::unavailable(Stage::Disk, "no disk command configured"))?;
        let ps = ReportCommand::from_argv(&config.process_command, timeout).ok_or_else(|| {
            CollectionError::unavailable(Stage::Processes, "no process command configured")
        })?;
        Ok(Self::new(
            start,
            Arc::new(SysinfoAddresses),
            Arc::new(DfDiskUsage::new(df)),
            Arc::new(PsProcesses::new(ps)),
            Arc::new(SysinfoUptime),
        ))
    }

    /// Collects one snapshot. Any collector failure fails the whole call.
    #[instrument(skip(self), fields(operation = "collect_service_info"))]
    pub async fn collect_service_info(&self) -> Result<ServiceSnapshot, CollectionError> {
        let (ip_addresses, disk_space, processes, uptime) = tokio::try_join!(
            self.addresses.interface_addresses(),
            self.disk.disk_usage(),
            self.processes.processes(),
            self.uptime.uptime(&self.start),
        )?;
        tracing::debug!(
            interfaces = ip_addresses.len(),
            processes = processes.len(),
            "collected service info"
        );
        Ok(ServiceSnapshot::new(ip_addresses, disk_space, processes, uptime))
    }
}
