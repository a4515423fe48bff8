//! Outbound ports - capabilities the application requires from external systems

mod record_store_port;

pub use record_store_port::{RecordStorePort, StoreError};

#[cfg(test)]
pub use record_store_port::MockRecordStorePort;
