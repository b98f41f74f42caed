//! thesisdesk/crates/domains/src/lib.rs
//!
//! The central domain models and interface definitions for thesisdesk.

pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;
