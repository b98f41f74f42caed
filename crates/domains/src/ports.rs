//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the services.
//! The matcher only needs the read side; slot authoring needs the full
//! store contract. The in-memory adapter implements both.

use crate::error::Result;
use crate::models::TimeSlot;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Read-only availability lookup, keyed by participant and calendar date.
///
/// This is the capability the matcher depends on. In production it would be
/// backed by a persistence or API layer; tests supply deterministic fixtures.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// All slots (available or not) reported by `participant_id` on `date`.
    async fn slots_for(&self, participant_id: Uuid, date: NaiveDate) -> Result<Vec<TimeSlot>>;
}

/// Persistence contract for participant availability slots.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// All slots stored for `participant_id` on `date`, in insertion order.
    async fn list(&self, participant_id: Uuid, date: NaiveDate) -> Result<Vec<TimeSlot>>;

    /// Stores a slot. Overlap validation happens in the service layer before
    /// this is called; the store itself only appends.
    async fn insert(&self, slot: TimeSlot) -> Result<()>;

    /// Deletes a slot by id, returning the removed entry.
    async fn remove(&self, slot_id: Uuid) -> Result<TimeSlot>;

    /// Flips the availability flag on a slot, returning the updated entry.
    async fn toggle_availability(&self, slot_id: Uuid) -> Result<TimeSlot>;
}
