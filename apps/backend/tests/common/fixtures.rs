//! Test fixtures and factory functions for request bodies.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

/// Fixed base time so leaderboard ordering is deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

/// Create a judge request body.
pub fn judge_request(user_answer: &str, correct_answer: &str) -> Value {
    json!({
        "user_answer": user_answer,
        "correct_answer": correct_answer,
    })
}

/// Create a judge request body with room overrides.
pub fn judge_request_with_settings(
    user_answer: &str,
    correct_answer: &str,
    settings: Value,
) -> Value {
    json!({
        "user_answer": user_answer,
        "correct_answer": correct_answer,
        "settings": settings,
    })
}

/// Create a score entry submitted `seconds` after [`base_time`].
pub fn score_entry(participant: &str, judgment: &str, seconds: i64) -> Value {
    json!({
        "participant": participant,
        "judgment": judgment,
        "submitted_at": base_time() + Duration::seconds(seconds),
    })
}
