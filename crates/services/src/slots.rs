//! # Availability Slot Authoring
//!
//! Validated create/remove/toggle operations on a participant's reported
//! availability. The validation here is what guarantees the matcher's input
//! invariant: all stored slots for a participant and date are pairwise
//! non-overlapping, so at most one slot covers any given minute of the day.

use chrono::{NaiveDate, NaiveTime};
use domains::error::{AppError, Result};
use domains::{SlotStore, TimeSlot};
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

/// A commonly used availability window offered as a one-click add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub label: &'static str,
}

/// The preset windows offered by the scheduling UI.
pub static QUICK_PRESETS: Lazy<[QuickSlot; 4]> = Lazy::new(|| {
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid preset time");
    [
        QuickSlot { start: t(8, 0), end: t(10, 0), label: "morning" },
        QuickSlot { start: t(10, 0), end: t(12, 0), label: "late morning" },
        QuickSlot { start: t(14, 0), end: t(16, 0), label: "afternoon" },
        QuickSlot { start: t(16, 0), end: t(18, 0), label: "late afternoon" },
    ]
});

/// Slot authoring service over an injected store.
pub struct SlotPlanner {
    store: Arc<dyn SlotStore>,
}

impl SlotPlanner {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Adds an availability slot for `participant_id` on `date`.
    ///
    /// Rejects slots with non-positive duration and slots colliding with an
    /// existing slot for the same participant and date (including slots
    /// currently toggled unavailable). Adjacent slots are accepted.
    pub async fn add_slot(
        &self,
        participant_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<TimeSlot> {
        if end_time <= start_time {
            return Err(AppError::ValidationError(
                "end time must be after start time".into(),
            ));
        }

        let candidate = TimeSlot {
            id: Uuid::now_v7(),
            participant_id,
            date,
            start_time,
            end_time,
            is_available: true,
        };

        let existing = self.store.list(participant_id, date).await?;
        if let Some(clash) = existing.iter().find(|ex| candidate.overlaps(ex)) {
            tracing::debug!(
                %participant_id,
                %date,
                %start_time,
                %end_time,
                clash_start = %clash.start_time,
                clash_end = %clash.end_time,
                "rejected overlapping slot"
            );
            return Err(AppError::ValidationError(format!(
                "slot {start_time}-{end_time} overlaps existing slot {}-{}",
                clash.start_time, clash.end_time
            )));
        }

        self.store.insert(candidate.clone()).await?;
        Ok(candidate)
    }

    /// The quick-add presets that would still fit on `date` for
    /// `participant_id`, i.e. those not colliding with any existing slot.
    pub async fn quick_slots(
        &self,
        participant_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<QuickSlot>> {
        let existing = self.store.list(participant_id, date).await?;
        let free = QUICK_PRESETS
            .iter()
            .copied()
            .filter(|preset| {
                let probe = TimeSlot {
                    id: Uuid::nil(),
                    participant_id,
                    date,
                    start_time: preset.start,
                    end_time: preset.end,
                    is_available: true,
                };
                !existing.iter().any(|ex| probe.overlaps(ex))
            })
            .collect();
        Ok(free)
    }

    /// Adds a preset window through the same validated path as [`add_slot`].
    ///
    /// [`add_slot`]: Self::add_slot
    pub async fn add_quick_slot(
        &self,
        participant_id: Uuid,
        date: NaiveDate,
        preset: QuickSlot,
    ) -> Result<TimeSlot> {
        self.add_slot(participant_id, date, preset.start, preset.end)
            .await
    }

    /// Deletes a slot. Unknown ids surface as [`AppError::NotFound`].
    pub async fn remove_slot(&self, slot_id: Uuid) -> Result<TimeSlot> {
        self.store.remove(slot_id).await
    }

    /// Flips a slot between available and unavailable without deleting it.
    pub async fn toggle_slot(&self, slot_id: Uuid) -> Result<TimeSlot> {
        self.store.toggle_availability(slot_id).await
    }

    /// A participant's slots for a date, ordered by start time for display.
    pub async fn slots_for(&self, participant_id: Uuid, date: NaiveDate) -> Result<Vec<TimeSlot>> {
        let mut slots = self.store.list(participant_id, date).await?;
        slots.sort_by_key(|s| s.start_time);
        Ok(slots)
    }
}
