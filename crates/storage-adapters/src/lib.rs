//! # storage-adapters
//!
//! In-memory implementation of the availability slot ports. Stands in for
//! the persistence/API layer a deployment would provide; keyed the same way
//! the lookup contract is keyed, by participant and calendar date.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use domains::error::{AppError, Result};
use domains::{AvailabilitySource, SlotStore, TimeSlot};
use uuid::Uuid;

/// Concurrent in-memory slot store.
///
/// Each (participant, date) bucket holds that participant's slots in
/// insertion order. Buckets are independent, so concurrent access to
/// different participants never contends.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: DashMap<(Uuid, NaiveDate), Vec<TimeSlot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_bucket(&self, slot_id: Uuid) -> Option<(Uuid, NaiveDate)> {
        self.slots
            .iter()
            .find(|entry| entry.value().iter().any(|s| s.id == slot_id))
            .map(|entry| *entry.key())
    }
}

#[async_trait]
impl AvailabilitySource for MemorySlotStore {
    async fn slots_for(&self, participant_id: Uuid, date: NaiveDate) -> Result<Vec<TimeSlot>> {
        Ok(self
            .slots
            .get(&(participant_id, date))
            .map(|bucket| bucket.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn list(&self, participant_id: Uuid, date: NaiveDate) -> Result<Vec<TimeSlot>> {
        AvailabilitySource::slots_for(self, participant_id, date).await
    }

    async fn insert(&self, slot: TimeSlot) -> Result<()> {
        self.slots
            .entry((slot.participant_id, slot.date))
            .or_default()
            .push(slot);
        Ok(())
    }

    async fn remove(&self, slot_id: Uuid) -> Result<TimeSlot> {
        let key = self
            .find_bucket(slot_id)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;

        let mut bucket = self
            .slots
            .get_mut(&key)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;
        let idx = bucket
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;
        let removed = bucket.remove(idx);
        tracing::debug!(%slot_id, participant_id = %key.0, date = %key.1, "slot removed");
        Ok(removed)
    }

    async fn toggle_availability(&self, slot_id: Uuid) -> Result<TimeSlot> {
        let key = self
            .find_bucket(slot_id)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;

        let mut bucket = self
            .slots
            .get_mut(&key)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;
        let slot = bucket
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| AppError::NotFound("TimeSlot".into(), slot_id.to_string()))?;
        slot.is_available = !slot.is_available;
        Ok(slot.clone())
    }
}
