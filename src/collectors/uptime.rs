// Service uptime from the injected start instant; host uptime from boot time

use async_trait::async_trait;
use std::time::{SystemTime, UNIX_EPOCH};
use sysinfo::System;
use tracing::instrument;

use super::UptimeSource;
use crate::error::{CollectionError, Stage};
use crate::models::Uptime;
use crate::service_info::ServiceStart;

/// Seconds between `boot_time` (unix seconds) and `now`, never negative.
/// `None` when the boot time is unknown (0).
pub fn os_uptime_secs(boot_time: u64, now: SystemTime) -> Option<f64> {
    if boot_time == 0 {
        return None;
    }
    let now_secs = now.duration_since(UNIX_EPOCH).ok()?.as_secs_f64();
    Some((now_secs - boot_time as f64).max(0.0))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoUptime;

#[async_trait]
impl UptimeSource for SysinfoUptime {
    #[instrument(skip(self, start), fields(collector = "sysinfo", operation = "uptime"))]
    async fn uptime(&self, start: &ServiceStart) -> Result<Uptime, CollectionError> {
        let boot_time = tokio::task::spawn_blocking(System::boot_time)
            .await
            .map_err(|e| {
                CollectionError::unavailable(Stage::Uptime, format!("sysinfo task join: {}", e))
            })?;
        let os_secs = os_uptime_secs(boot_time, SystemTime::now()).ok_or_else(|| {
            CollectionError::unavailable(Stage::Uptime, "boot time not reported by the OS")
        })?;
        Ok(Uptime {
            service_secs: start.elapsed_secs(),
            os_secs,
        })
    }
}
