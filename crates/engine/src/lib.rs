//! Chroniclr Engine library.
//!
//! Application services for session trail reconstruction and narrative
//! summary generation, behind ports to the external entity store.
//!
//! ## Structure
//!
//! - `application/` - Outbound ports and use-case services
//! - `infrastructure/` - Adapter implementations (in-memory store)

pub mod application;
pub mod infrastructure;


pub use application::ports::outbound::{RecordStorePort, StoreError};
pub use application::services::{
    compose, SummaryService, SummaryServiceImpl, TrailService, TrailServiceImpl,
};
