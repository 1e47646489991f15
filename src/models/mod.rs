// Domain models

mod record;
mod snapshot;

pub use record::ColumnRecord;
pub use snapshot::{
    AddressMap, DiskUsageRecord, ProcessList, ProcessRecord, ServiceSnapshot, Uptime,
};
