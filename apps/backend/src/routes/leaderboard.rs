//! Leaderboard endpoint

use axum::Json;
use dictation_core::build_leaderboard;

use crate::error::Result;
use crate::models::*;

/// POST /api/leaderboard
pub async fn build(Json(payload): Json<LeaderboardRequest>) -> Result<Json<Leaderboard>> {
    Ok(Json(build_leaderboard(&payload.entries)))
}
