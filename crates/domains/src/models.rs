//! # Domain Models
//!
//! These structs represent the core entities of thesisdesk: the closed
//! role/permission vocabulary driving authorization, and the availability
//! slots consumed by the scheduling matcher.
//! We use UUID v7 for time-ordered, globally unique identification.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fixed category assigned to a user, driving authorization decisions.
/// Assigned externally (by the auth layer) and immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Supervisor,
    Reviewer,
    CouncilChair,
    CouncilSecretary,
    CouncilMember,
    Hod,
    Admin,
}

impl Role {
    /// Every role the system knows about.
    pub const ALL: [Role; 8] = [
        Role::Student,
        Role::Supervisor,
        Role::Reviewer,
        Role::CouncilChair,
        Role::CouncilSecretary,
        Role::CouncilMember,
        Role::Hod,
        Role::Admin,
    ];
}

/// The protected resource classes of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Topic,
    Progress,
    Submission,
    Review,
    Score,
    Schedule,
    User,
    Role,
    Rubric,
    Settings,
    Reports,
}

/// What can be done to a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Approve,
    Revise,
    Feedback,
    Assign,
    Bonus,
    Manage,
    View,
}

/// An atomic (resource, action) capability unit. Equality is structural:
/// two permissions are the same iff both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
}

impl Permission {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    // Topic permissions
    pub const TOPIC_CREATE: Self = Self::new(Resource::Topic, Action::Create);
    pub const TOPIC_READ: Self = Self::new(Resource::Topic, Action::Read);
    pub const TOPIC_UPDATE: Self = Self::new(Resource::Topic, Action::Update);
    pub const TOPIC_DELETE: Self = Self::new(Resource::Topic, Action::Delete);
    pub const TOPIC_APPROVE: Self = Self::new(Resource::Topic, Action::Approve);
    pub const TOPIC_REVISE: Self = Self::new(Resource::Topic, Action::Revise);

    // Progress permissions
    pub const PROGRESS_READ: Self = Self::new(Resource::Progress, Action::Read);
    pub const PROGRESS_UPDATE: Self = Self::new(Resource::Progress, Action::Update);
    pub const PROGRESS_FEEDBACK: Self = Self::new(Resource::Progress, Action::Feedback);

    // Submission permissions
    pub const SUBMISSION_CREATE: Self = Self::new(Resource::Submission, Action::Create);
    pub const SUBMISSION_READ: Self = Self::new(Resource::Submission, Action::Read);
    pub const SUBMISSION_DELETE: Self = Self::new(Resource::Submission, Action::Delete);

    // Review permissions
    pub const REVIEW_CREATE: Self = Self::new(Resource::Review, Action::Create);
    pub const REVIEW_READ: Self = Self::new(Resource::Review, Action::Read);
    pub const REVIEW_ASSIGN: Self = Self::new(Resource::Review, Action::Assign);

    // Scoring permissions
    pub const SCORE_CREATE: Self = Self::new(Resource::Score, Action::Create);
    pub const SCORE_READ: Self = Self::new(Resource::Score, Action::Read);
    pub const SCORE_BONUS: Self = Self::new(Resource::Score, Action::Bonus);

    // Schedule permissions
    pub const SCHEDULE_CREATE: Self = Self::new(Resource::Schedule, Action::Create);
    pub const SCHEDULE_READ: Self = Self::new(Resource::Schedule, Action::Read);
    pub const SCHEDULE_UPDATE: Self = Self::new(Resource::Schedule, Action::Update);

    // Admin permissions
    pub const USER_MANAGE: Self = Self::new(Resource::User, Action::Manage);
    pub const ROLE_MANAGE: Self = Self::new(Resource::Role, Action::Manage);
    pub const RUBRIC_MANAGE: Self = Self::new(Resource::Rubric, Action::Manage);
    pub const SETTINGS_MANAGE: Self = Self::new(Resource::Settings, Action::Manage);

    // Reports permissions
    pub const REPORTS_VIEW: Self = Self::new(Resource::Reports, Action::View);

    /// The full permission catalog, fixed at compile time.
    pub const CATALOG: [Permission; 26] = [
        Self::TOPIC_CREATE,
        Self::TOPIC_READ,
        Self::TOPIC_UPDATE,
        Self::TOPIC_DELETE,
        Self::TOPIC_APPROVE,
        Self::TOPIC_REVISE,
        Self::PROGRESS_READ,
        Self::PROGRESS_UPDATE,
        Self::PROGRESS_FEEDBACK,
        Self::SUBMISSION_CREATE,
        Self::SUBMISSION_READ,
        Self::SUBMISSION_DELETE,
        Self::REVIEW_CREATE,
        Self::REVIEW_READ,
        Self::REVIEW_ASSIGN,
        Self::SCORE_CREATE,
        Self::SCORE_READ,
        Self::SCORE_BONUS,
        Self::SCHEDULE_CREATE,
        Self::SCHEDULE_READ,
        Self::SCHEDULE_UPDATE,
        Self::USER_MANAGE,
        Self::ROLE_MANAGE,
        Self::RUBRIC_MANAGE,
        Self::SETTINGS_MANAGE,
        Self::REPORTS_VIEW,
    ];
}

/// One reported interval of availability (or explicit unavailability) for
/// one participant on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// A slot can exist but be toggled off without deleting it.
    pub is_available: bool,
}

impl TimeSlot {
    /// Length of the slot in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Whether this (new) slot collides with an `existing` slot.
    ///
    /// Collision rule: the new start falls within `[existing.start,
    /// existing.end)`, the new end falls within `(existing.start,
    /// existing.end]`, or the new slot fully contains the existing one.
    /// Slots that merely touch at a boundary do not collide.
    pub fn overlaps(&self, existing: &TimeSlot) -> bool {
        (self.start_time >= existing.start_time && self.start_time < existing.end_time)
            || (self.end_time > existing.start_time && self.end_time <= existing.end_time)
            || (self.start_time <= existing.start_time && self.end_time >= existing.end_time)
    }

    /// Whether the slot's bounds contain the whole `[start, end]` window.
    pub fn covers(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time <= start && self.end_time >= end
    }
}

/// A time window in which every selected participant is available.
/// Computed fresh on each matching request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// By construction this is the full selected participant set.
    pub participants: Vec<Uuid>,
    pub duration_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(start: NaiveTime, end: NaiveTime) -> TimeSlot {
        TimeSlot {
            id: Uuid::now_v7(),
            participant_id: Uuid::now_v7(),
            date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            start_time: start,
            end_time: end,
            is_available: true,
        }
    }

    #[test]
    fn overlap_detects_partial_and_containment() {
        let existing = slot(t(10, 0), t(12, 0));
        assert!(slot(t(11, 0), t(13, 0)).overlaps(&existing));
        assert!(slot(t(9, 0), t(11, 0)).overlaps(&existing));
        assert!(slot(t(9, 0), t(13, 0)).overlaps(&existing));
        assert!(slot(t(10, 30), t(11, 30)).overlaps(&existing));
    }

    #[test]
    fn adjacent_slots_do_not_overlap() {
        let existing = slot(t(10, 0), t(12, 0));
        assert!(!slot(t(12, 0), t(13, 0)).overlaps(&existing));
        assert!(!slot(t(8, 0), t(10, 0)).overlaps(&existing));
    }

    #[test]
    fn covers_is_boundary_inclusive() {
        let s = slot(t(8, 0), t(10, 0));
        assert!(s.covers(t(8, 0), t(10, 0)));
        assert!(s.covers(t(8, 30), t(9, 30)));
        assert!(!s.covers(t(7, 59), t(10, 0)));
        assert!(!s.covers(t(8, 0), t(10, 1)));
    }

    #[test]
    fn role_serializes_to_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::CouncilChair).unwrap(), "\"COUNCIL_CHAIR\"");
        assert_eq!(serde_json::to_string(&Role::Hod).unwrap(), "\"HOD\"");
        let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn permission_equality_is_structural() {
        assert_eq!(
            Permission::TOPIC_READ,
            Permission::new(Resource::Topic, Action::Read)
        );
        assert_ne!(Permission::TOPIC_READ, Permission::TOPIC_CREATE);
    }

    #[test]
    fn catalog_has_unique_entries() {
        let unique: std::collections::HashSet<_> = Permission::CATALOG.iter().collect();
        assert_eq!(unique.len(), Permission::CATALOG.len());
    }
}
