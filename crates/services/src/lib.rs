//! thesisdesk/crates/services/src/lib.rs
//!
//! Application services over the domain ports: authorization decisions,
//! common-availability matching, and availability slot authoring.

pub mod availability;
pub mod rbac;
pub mod slots;

pub use availability::AvailabilityMatcher;
pub use slots::SlotPlanner;
