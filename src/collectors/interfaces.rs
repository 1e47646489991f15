// Interface addresses via sysinfo, loopback filtered out

use async_trait::async_trait;
use std::net::IpAddr;
use sysinfo::Networks;
use tracing::instrument;

use super::AddressSource;
use crate::error::{CollectionError, Stage};
use crate::models::AddressMap;

/// True for `127.0.0.0/8` and `::1`.
pub fn is_loopback(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_loopback(),
        IpAddr::V6(v6) => v6.is_loopback(),
    }
}

/// Keeps non-loopback addresses per interface. Interfaces left with nothing are dropped.
pub fn retain_non_loopback<I, A>(interfaces: I) -> AddressMap
where
    I: IntoIterator<Item = (String, A)>,
    A: IntoIterator<Item = IpAddr>,
{
    let mut map = AddressMap::new();
    for (name, addrs) in interfaces {
        for addr in addrs.into_iter().filter(|a| !is_loopback(a)) {
            map.entry(name.clone()).or_default().push(addr.to_string());
        }
    }
    map
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoAddresses;

#[async_trait]
impl AddressSource for SysinfoAddresses {
    #[instrument(skip(self), fields(collector = "sysinfo", operation = "interface_addresses"))]
    async fn interface_addresses(&self) -> Result<AddressMap, CollectionError> {
        tokio::task::spawn_blocking(|| {
            let networks = Networks::new_with_refreshed_list();
            retain_non_loopback(networks.list().iter().map(|(name, data)| {
                let addrs: Vec<IpAddr> = data.ip_networks().iter().map(|n| n.addr).collect();
                (name.clone(), addrs)
            }))
        })
        .await
        .map_err(|e| {
            CollectionError::unavailable(Stage::Interfaces, format!("sysinfo task join: {}", e))
        })
    }
}
