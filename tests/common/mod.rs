// Shared test helpers: canned collector sources

use async_trait::async_trait;
use hostinfo::collectors::{AddressSource, DiskUsageSource, ProcessSource, UptimeSource};
use hostinfo::error::{CollectionError, Stage};
use hostinfo::models::*;
use hostinfo::service_info::{ServiceInfoCollector, ServiceStart};
use std::sync::Arc;

pub struct Canned {
    pub fail_at: Option<Stage>,
}

impl Canned {
    fn check(&self, stage: Stage) -> Result<(), CollectionError> {
        match self.fail_at {
            Some(s) if s == stage => Err(CollectionError::unavailable(stage, "injected failure")),
            _ => Ok(()),
        }
    }
}

pub fn sample_addresses() -> AddressMap {
    let mut map = AddressMap::new();
    map.insert(
        "eth0".into(),
        vec!["192.168.1.10".into(), "fe80::1c2b:3aff:fe4d:5e6f".into()],
    );
    map
}

pub fn sample_disk() -> DiskUsageRecord {
    [
        ("Filesystem", "/dev/sda1"),
        ("Size", "100G"),
        ("Used", "40G"),
        ("Avail", "60G"),
        ("Use%", "40%"),
        ("Mounted", "/"),
    ]
    .into_iter()
    .collect()
}

pub fn sample_processes() -> ProcessList {
    vec![
        [
            ("PID", "1"),
            ("TTY", "?"),
            ("STAT", "Ss"),
            ("TIME", "0:01"),
            ("COMMAND", "/sbin/init splash"),
        ]
        .into_iter()
        .collect(),
    ]
}

#[async_trait]
impl AddressSource for Canned {
    async fn interface_addresses(&self) -> Result<AddressMap, CollectionError> {
        self.check(Stage::Interfaces)?;
        Ok(sample_addresses())
    }
}

#[async_trait]
impl DiskUsageSource for Canned {
    async fn disk_usage(&self) -> Result<DiskUsageRecord, CollectionError> {
        self.check(Stage::Disk)?;
        Ok(sample_disk())
    }
}

#[async_trait]
impl ProcessSource for Canned {
    async fn processes(&self) -> Result<ProcessList, CollectionError> {
        self.check(Stage::Processes)?;
        Ok(sample_processes())
    }
}

#[async_trait]
impl UptimeSource for Canned {
    async fn uptime(&self, start: &ServiceStart) -> Result<Uptime, CollectionError> {
        self.check(Stage::Uptime)?;
        Ok(Uptime {
            service_secs: start.elapsed_secs(),
            os_secs: 3600.0,
        })
    }
}

/// Collector backed by canned data; `fail_at` makes that one stage fail.
pub fn canned_collector(fail_at: Option<Stage>) -> ServiceInfoCollector {
    let canned = Arc::new(Canned { fail_at });
    ServiceInfoCollector::new(
        ServiceStart::now(),
        canned.clone(),
        canned.clone(),
        canned.clone(),
        canned,
    )
}
