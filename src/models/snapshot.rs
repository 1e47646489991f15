// Service snapshot: the /info payload

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ColumnRecord;

/// Interface name -> non-loopback addresses, in the order the OS listed them.
pub type AddressMap = BTreeMap<String, Vec<String>>;

/// `df` header -> value for the root filesystem.
pub type DiskUsageRecord = ColumnRecord;

/// `ps` header -> value for one process.
pub type ProcessRecord = ColumnRecord;

pub type ProcessList = Vec<ProcessRecord>;

/// Service and host uptime, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uptime {
    pub service_secs: f64,
    pub os_secs: f64,
}

/// Point-in-time view of the host; built once per request and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSnapshot {
    pub ip_addresses: AddressMap,
    pub disk_space: DiskUsageRecord,
    pub processes: ProcessList,
    pub service_uptime: f64,
    pub os_uptime: f64,
}

impl ServiceSnapshot {
    pub fn new(
        ip_addresses: AddressMap,
        disk_space: DiskUsageRecord,
        processes: ProcessList,
        uptime: Uptime,
    ) -> Self {
        Self {
            ip_addresses,
            disk_space,
            processes,
            service_uptime: uptime.service_secs,
            os_uptime: uptime.os_secs,
        }
    }
}
