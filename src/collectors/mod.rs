// Host data collectors. Each one sits behind a trait so the aggregator does not
// care whether data comes from a command report or a native API.

mod command;
mod disk;
mod interfaces;
mod processes;
pub mod table;
mod uptime;

use async_trait::async_trait;

use crate::error::CollectionError;
use crate::models::{AddressMap, DiskUsageRecord, ProcessList, Uptime};
use crate::service_info::ServiceStart;

pub use command::ReportCommand;
pub use disk::DfDiskUsage;
pub use interfaces::{SysinfoAddresses, is_loopback, retain_non_loopback};
pub use processes::PsProcesses;
pub use uptime::{SysinfoUptime, os_uptime_secs};

#[async_trait]
pub trait AddressSource: Send + Sync {
    async fn interface_addresses(&self) -> Result<AddressMap, CollectionError>;
}

#[async_trait]
pub trait DiskUsageSource: Send + Sync {
    async fn disk_usage(&self) -> Result<DiskUsageRecord, CollectionError>;
}

#[async_trait]
pub trait ProcessSource: Send + Sync {
    async fn processes(&self) -> Result<ProcessList, CollectionError>;
}

#[async_trait]
pub trait UptimeSource: Send + Sync {
    async fn uptime(&self, start: &ServiceStart) -> Result<Uptime, CollectionError>;
}
