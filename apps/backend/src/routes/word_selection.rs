//! Word-selection mode endpoints

use axum::Json;
use dictation_core::{generate_word_selection_data, reconstruct_answer_from_slots};

use crate::error::Result;
use crate::models::*;

/// POST /api/word-selection
/// Returns shuffled correct words and distractors with empty slots
pub async fn create(Json(payload): Json<WordSelectionRequest>) -> Result<Json<WordSelectionData>> {
    let data = generate_word_selection_data(&payload.sentence);

    tracing::debug!(
        "Generated {} tokens for {} slots",
        data.tokens.len(),
        data.slots.len()
    );

    Ok(Json(data))
}

/// POST /api/word-selection/answer
pub async fn answer(Json(payload): Json<SlotAnswerRequest>) -> Result<Json<SentenceResponse>> {
    Ok(Json(SentenceResponse {
        sentence: reconstruct_answer_from_slots(&payload.parsed_sentence, &payload.slots),
    }))
}
