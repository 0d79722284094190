//! Answer judging endpoints

use axum::{extract::State, Json};
use dictation_core::{
    generate_diff_with_threshold, judge_answer, validate_answer, EffectiveSettings,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn require_correct_answer(correct_answer: &str) -> Result<()> {
    if correct_answer.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "correct_answer must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/answers/judge
pub async fn judge(
    State(state): State<AppState>,
    Json(payload): Json<JudgeRequest>,
) -> Result<Json<JudgeResponse>> {
    require_correct_answer(&payload.correct_answer)?;

    let settings = EffectiveSettings::merge(&state.settings, payload.settings.as_ref());
    settings.judge.validate()?;

    let outcome = judge_answer(&payload.user_answer, &payload.correct_answer, &settings.judge);

    tracing::info!(
        "Judged answer as {} ({}% accuracy)",
        outcome.judgment.as_str(),
        outcome.diff.accuracy
    );

    Ok(Json(JudgeResponse {
        input_mode: settings.input_mode,
        outcome,
    }))
}

/// POST /api/answers/diff
pub async fn diff(
    State(state): State<AppState>,
    Json(payload): Json<DiffRequest>,
) -> Result<Json<DiffResult>> {
    require_correct_answer(&payload.correct_answer)?;

    let room = RoomSettings {
        similarity_threshold: payload.similarity_threshold,
        ..RoomSettings::default()
    };
    let settings = EffectiveSettings::merge(&state.settings, Some(&room));
    settings.judge.validate()?;

    Ok(Json(generate_diff_with_threshold(
        &payload.user_answer,
        &payload.correct_answer,
        settings.judge.similarity_threshold,
    )))
}

/// POST /api/answers/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>> {
    let exclude_punctuation = payload
        .exclude_punctuation
        .unwrap_or(state.settings.exclude_punctuation);

    Ok(Json(ValidateResponse {
        is_correct: validate_answer(&payload.answer, &payload.correct_answer, exclude_punctuation),
    }))
}
