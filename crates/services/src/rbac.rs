//! # Role-Based Access Control
//!
//! Pure decision functions over the fixed role/permission tables. The tables
//! are process-wide statics built on first use and never mutated afterwards,
//! so no locking is involved and every check is a plain in-memory lookup.
//!
//! None of these functions can fail: a role without a table entry simply has
//! no permissions, and a route without a requirement entry is open to all.

use domains::{Permission, Role};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Permissions granted to each role. Every role has an entry; `Admin` holds
/// the entire catalog.
static ROLE_PERMISSIONS: Lazy<HashMap<Role, HashSet<Permission>>> = Lazy::new(|| {
    HashMap::from([
        (
            Role::Student,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::PROGRESS_READ,
                Permission::PROGRESS_UPDATE,
                Permission::SUBMISSION_CREATE,
                Permission::SUBMISSION_READ,
                Permission::SUBMISSION_DELETE,
                Permission::REVIEW_READ,
                Permission::SCORE_READ,
                Permission::SCHEDULE_READ,
            ]),
        ),
        (
            Role::Supervisor,
            HashSet::from([
                Permission::TOPIC_CREATE,
                Permission::TOPIC_READ,
                Permission::TOPIC_UPDATE,
                Permission::PROGRESS_READ,
                Permission::PROGRESS_FEEDBACK,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_CREATE,
                Permission::REVIEW_READ,
                Permission::SCORE_CREATE,
                Permission::SCORE_READ,
                Permission::SCHEDULE_CREATE,
                Permission::SCHEDULE_READ,
                Permission::SCHEDULE_UPDATE,
            ]),
        ),
        (
            Role::Reviewer,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_CREATE,
                Permission::REVIEW_READ,
                Permission::SCORE_CREATE,
                Permission::SCORE_READ,
                Permission::SCHEDULE_READ,
            ]),
        ),
        (
            Role::CouncilChair,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_READ,
                Permission::SCORE_CREATE,
                Permission::SCORE_READ,
                Permission::SCHEDULE_CREATE,
                Permission::SCHEDULE_READ,
                Permission::SCHEDULE_UPDATE,
            ]),
        ),
        (
            Role::CouncilSecretary,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_READ,
                Permission::SCORE_CREATE,
                Permission::SCORE_READ,
                Permission::SCHEDULE_READ,
            ]),
        ),
        (
            Role::CouncilMember,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_READ,
                Permission::SCORE_CREATE,
                Permission::SCORE_READ,
                Permission::SCHEDULE_READ,
            ]),
        ),
        (
            Role::Hod,
            HashSet::from([
                Permission::TOPIC_READ,
                Permission::TOPIC_APPROVE,
                Permission::TOPIC_REVISE,
                Permission::PROGRESS_READ,
                Permission::SUBMISSION_READ,
                Permission::REVIEW_READ,
                Permission::REVIEW_ASSIGN,
                Permission::SCORE_READ,
                Permission::SCORE_BONUS,
                Permission::SCHEDULE_CREATE,
                Permission::SCHEDULE_READ,
                Permission::SCHEDULE_UPDATE,
                Permission::REPORTS_VIEW,
            ]),
        ),
        (Role::Admin, HashSet::from(Permission::CATALOG)),
    ])
});

/// Route guards: a role may enter a route if it holds at least one of the
/// listed permissions (disjunction, not conjunction).
static ROUTE_PERMISSIONS: Lazy<HashMap<&'static str, Vec<Permission>>> = Lazy::new(|| {
    HashMap::from([
        ("/dashboard", vec![Permission::TOPIC_READ]),
        ("/topics", vec![Permission::TOPIC_READ]),
        ("/topics/create", vec![Permission::TOPIC_CREATE]),
        ("/schedules", vec![Permission::SCHEDULE_READ]),
        ("/scoring", vec![Permission::SCORE_READ]),
        ("/reports", vec![Permission::REPORTS_VIEW]),
        (
            "/admin",
            vec![
                Permission::USER_MANAGE,
                Permission::ROLE_MANAGE,
                Permission::RUBRIC_MANAGE,
                Permission::SETTINGS_MANAGE,
            ],
        ),
    ])
});

/// The permission set granted to `role`, empty if the role has no entry.
pub fn role_permissions(role: Role) -> &'static HashSet<Permission> {
    static EMPTY: Lazy<HashSet<Permission>> = Lazy::new(HashSet::new);
    ROLE_PERMISSIONS
        .get(&role)
        .unwrap_or_else(|| Lazy::force(&EMPTY))
}

/// True iff `role` holds exactly this (resource, action) pair.
///
/// A role missing from the table is treated as having no permissions, not
/// as an error.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    ROLE_PERMISSIONS
        .get(&role)
        .is_some_and(|granted| granted.contains(&permission))
}

/// True iff `role` holds at least one of `permissions`.
///
/// The disjunction over an empty set is false, even for `Admin`.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| has_permission(role, p))
}

/// True iff `role` may enter `route`.
///
/// Routes without a requirement entry are open to every role. This fail-open
/// default is deliberate policy: only the routes listed in the guard table
/// are protected, everything else (login, error pages, ad-hoc views) is
/// public to any authenticated role.
pub fn can_access_route(role: Role, route: &str) -> bool {
    match ROUTE_PERMISSIONS.get(route) {
        Some(required) => has_any_permission(role, required),
        None => true,
    }
}
