//! Application services - use case implementations
//!
//! Each service follows hexagonal architecture principles: port
//! dependencies in, domain values out.

pub mod summary_service;
pub mod trail_service;

pub use summary_service::{compose, SummaryService, SummaryServiceImpl};
pub use trail_service::{TrailService, TrailServiceImpl};
