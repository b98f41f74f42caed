//! # thesisdesk Binary
//!
//! Assembles the scheduling core (settings, logging, in-memory store,
//! services) and runs a short demonstration: seeds availability for two
//! council participants, checks a few route guards, and computes their
//! common availability.

use chrono::NaiveTime;
use domains::Role;
use services::{rbac, AvailabilityMatcher, SlotPlanner};
use std::sync::Arc;
use storage_adapters::MemorySlotStore;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Settings and logging
    let settings = configs::Settings::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log.filter)?)
        .init();
    tracing::debug!(?settings, "settings loaded");

    // 2. Storage adapter
    let store = Arc::new(MemorySlotStore::new());

    // 3. Services wired over the store (dynamic dispatch at the ports)
    let planner = SlotPlanner::new(store.clone());
    let matcher =
        AvailabilityMatcher::new(store.clone()).with_lookup_timeout(settings.lookup_timeout());

    // 4. Authorization guards, evaluated the way the routing layer would
    for (role, route) in [
        (Role::Supervisor, "/schedules"),
        (Role::Student, "/topics/create"),
        (Role::Hod, "/reports"),
        (Role::Admin, "/admin"),
    ] {
        tracing::info!(
            ?role,
            route,
            allowed = rbac::can_access_route(role, route),
            "route guard"
        );
    }

    // 5. Seed availability for a supervisor and a reviewer
    let supervisor = Uuid::now_v7();
    let reviewer = Uuid::now_v7();
    let date = chrono::Utc::now().date_naive();
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid time");

    planner.add_slot(supervisor, date, t(8, 0), t(10, 0)).await?;
    planner.add_slot(supervisor, date, t(14, 0), t(16, 0)).await?;
    planner.add_slot(reviewer, date, t(8, 0), t(10, 0)).await?;
    planner.add_slot(reviewer, date, t(16, 0), t(18, 0)).await?;

    // 6. Find their common windows
    let matches = matcher
        .find_common_availability(
            &[supervisor, reviewer],
            date,
            settings.matching.min_duration_minutes,
        )
        .await?;

    if matches.is_empty() {
        tracing::info!(%date, "no common availability");
    }
    for m in &matches {
        tracing::info!(
            date = %m.date,
            start = %m.start_time,
            end = %m.end_time,
            minutes = m.duration_minutes,
            participants = m.participants.len(),
            "common window"
        );
    }

    Ok(())
}
