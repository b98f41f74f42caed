//! Shared fixtures for the cross-crate test suite.

use chrono::{NaiveDate, NaiveTime};

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid fixture time")
}

pub fn defense_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 12).expect("valid fixture date")
}
