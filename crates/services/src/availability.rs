//! # Common-Availability Matching
//!
//! Given a calendar date and a set of participants, finds the time windows
//! in which every participant has marked themselves available for at least
//! a configured minimum duration.
//!
//! Matching granularity is boundary-exact: candidate windows are the
//! distinct (start, end) pairs reported by any participant, and a window
//! matches only when every participant has a slot whose bounds contain it.
//! Arbitrary sub-interval overlaps between differently-bounded slots are
//! not resolved. This is a known limitation carried over from the behavior
//! the scheduling UI was built against.

use chrono::NaiveDate;
use domains::error::{AppError, Result};
use domains::{AvailabilitySource, MatchResult, TimeSlot};
use futures_util::future::try_join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Minimum meeting length used when the caller does not configure one.
pub const DEFAULT_MIN_DURATION_MINUTES: i64 = 60;

/// Upper bound on a single per-participant availability lookup. An
/// unresponsive collaborator must not hang the whole match.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Stateless matching service over an injected availability lookup.
///
/// Each invocation is independent; nothing is cached between calls, so two
/// calls with identical inputs and an unchanged store yield identical
/// results.
pub struct AvailabilityMatcher {
    source: Arc<dyn AvailabilitySource>,
    lookup_timeout: Duration,
}

impl AvailabilityMatcher {
    pub fn new(source: Arc<dyn AvailabilitySource>) -> Self {
        Self {
            source,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Finds all windows on `date` in which every one of `participant_ids`
    /// is available for at least `min_duration_minutes`.
    ///
    /// Repeated ids in `participant_ids` are collapsed; fewer than two
    /// distinct participants is a no-op, and the empty result is returned
    /// without performing any lookup. Lookups for the participants run
    /// concurrently; if any of them fails or times out the whole match
    /// fails, since a partial result would misrepresent common availability.
    pub async fn find_common_availability(
        &self,
        participant_ids: &[Uuid],
        date: NaiveDate,
        min_duration_minutes: i64,
    ) -> Result<Vec<MatchResult>> {
        // Participants form a set: repeated ids collapse to one entry so a
        // duplicated id cannot pass for a quorum.
        let mut participants: Vec<Uuid> = Vec::with_capacity(participant_ids.len());
        for &id in participant_ids {
            if !participants.contains(&id) {
                participants.push(id);
            }
        }

        // A meeting needs a quorum of at least two distinct participants.
        if participants.len() < 2 {
            return Ok(Vec::new());
        }

        // Gather everyone's slots, all lookups in flight at once.
        let lookups = participants.iter().map(|&id| async move {
            let slots = tokio::time::timeout(self.lookup_timeout, self.source.slots_for(id, date))
                .await
                .map_err(|_| {
                    AppError::LookupFailed(format!("lookup for participant {id} timed out"))
                })??;
            Ok::<(Uuid, Vec<TimeSlot>), AppError>((id, slots))
        });
        let per_participant = try_join_all(lookups).await?;

        let available: Vec<(Uuid, Vec<TimeSlot>)> = per_participant
            .into_iter()
            .map(|(id, slots)| {
                let open: Vec<TimeSlot> = slots.into_iter().filter(|s| s.is_available).collect();
                (id, open)
            })
            .collect();

        // Candidate windows: the union of interval bounds offered by any
        // participant, deduplicated and ordered by start time.
        let mut windows: BTreeSet<(chrono::NaiveTime, chrono::NaiveTime)> = BTreeSet::new();
        for (_, slots) in &available {
            for slot in slots {
                windows.insert((slot.start_time, slot.end_time));
            }
        }

        let mut matches = Vec::new();
        for (start, end) in &windows {
            let covered_by_all = available
                .iter()
                .all(|(_, slots)| slots.iter().any(|s| s.covers(*start, *end)));
            if !covered_by_all {
                continue;
            }

            let duration = (*end - *start).num_minutes();
            if duration < min_duration_minutes {
                continue;
            }

            matches.push(MatchResult {
                date,
                start_time: *start,
                end_time: *end,
                participants: participants.clone(),
                duration_minutes: duration,
            });
        }

        tracing::debug!(
            participants = participants.len(),
            candidates = windows.len(),
            matches = matches.len(),
            %date,
            "common availability computed"
        );

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveTime;
    use domains::MockAvailabilitySource;
    use std::collections::HashMap;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 12).unwrap()
    }

    fn slot(participant: Uuid, start: NaiveTime, end: NaiveTime, available: bool) -> TimeSlot {
        TimeSlot {
            id: Uuid::now_v7(),
            participant_id: participant,
            date: date(),
            start_time: start,
            end_time: end,
            is_available: available,
        }
    }

    /// Deterministic in-memory fixture for the lookup port.
    struct FixtureSource {
        slots: HashMap<Uuid, Vec<TimeSlot>>,
    }

    #[async_trait]
    impl AvailabilitySource for FixtureSource {
        async fn slots_for(&self, participant_id: Uuid, _date: NaiveDate) -> Result<Vec<TimeSlot>> {
            Ok(self.slots.get(&participant_id).cloned().unwrap_or_default())
        }
    }

    fn matcher_for(slots: HashMap<Uuid, Vec<TimeSlot>>) -> AvailabilityMatcher {
        AvailabilityMatcher::new(Arc::new(FixtureSource { slots }))
    }

    #[tokio::test]
    async fn finds_the_shared_window() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let matcher = matcher_for(HashMap::from([
            (
                a,
                vec![
                    slot(a, t(8, 0), t(10, 0), true),
                    slot(a, t(14, 0), t(16, 0), true),
                ],
            ),
            (b, vec![slot(b, t(8, 0), t(10, 0), true)]),
        ]));

        let matches = matcher
            .find_common_availability(&[a, b], date(), 60)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start_time, t(8, 0));
        assert_eq!(matches[0].end_time, t(10, 0));
        assert_eq!(matches[0].duration_minutes, 120);
        assert_eq!(matches[0].participants, vec![a, b]);
    }

    #[tokio::test]
    async fn rejects_windows_below_minimum_duration() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let matcher = matcher_for(HashMap::from([
            (a, vec![slot(a, t(8, 0), t(10, 0), true)]),
            (b, vec![slot(b, t(8, 0), t(10, 0), true)]),
        ]));

        let matches = matcher
            .find_common_availability(&[a, b], date(), 150)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn unavailable_slots_are_ignored() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let matcher = matcher_for(HashMap::from([
            (a, vec![slot(a, t(8, 0), t(10, 0), true)]),
            (b, vec![slot(b, t(8, 0), t(10, 0), false)]),
        ]));

        let matches = matcher
            .find_common_availability(&[a, b], date(), 60)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn matching_is_boundary_exact_not_interval_intersection() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        // A offers a wide window, B a narrow one inside it. Only the
        // narrow window is a candidate both cover; the wide one is not
        // matched and no intersection is computed.
        let matcher = matcher_for(HashMap::from([
            (a, vec![slot(a, t(8, 0), t(12, 0), true)]),
            (b, vec![slot(b, t(9, 0), t(10, 0), true)]),
        ]));

        let matches = matcher
            .find_common_availability(&[a, b], date(), 60)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start_time, t(9, 0));
        assert_eq!(matches[0].end_time, t(10, 0));
    }

    #[tokio::test]
    async fn single_participant_short_circuits_without_lookups() {
        let mut source = MockAvailabilitySource::new();
        source.expect_slots_for().times(0);

        let matcher = AvailabilityMatcher::new(Arc::new(source));
        let matches = matcher
            .find_common_availability(&[Uuid::now_v7()], date(), 60)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn duplicated_id_is_one_participant_not_a_quorum() {
        let mut source = MockAvailabilitySource::new();
        source.expect_slots_for().times(0);

        let matcher = AvailabilityMatcher::new(Arc::new(source));
        let a = Uuid::now_v7();
        let matches = matcher
            .find_common_availability(&[a, a], date(), 60)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_in_the_result() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let matcher = matcher_for(HashMap::from([
            (a, vec![slot(a, t(8, 0), t(10, 0), true)]),
            (b, vec![slot(b, t(8, 0), t(10, 0), true)]),
        ]));

        let matches = matcher
            .find_common_availability(&[a, b, a], date(), 60)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].participants, vec![a, b]);
    }

    #[tokio::test]
    async fn lookup_failure_fails_the_whole_match() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let mut source = MockAvailabilitySource::new();
        source
            .expect_slots_for()
            .returning(|id, _| Err(AppError::Internal(format!("store down for {id}"))));

        let matcher = AvailabilityMatcher::new(Arc::new(source));
        let result = matcher.find_common_availability(&[a, b], date(), 60).await;
        assert!(result.is_err());
    }
}
