//! Sentence segmentation endpoints

use axum::Json;
use dictation_core::{get_word_items, parse_sentence, reconstruct_sentence};

use crate::error::Result;
use crate::models::*;

/// POST /api/sentences/parse
pub async fn parse(
    Json(payload): Json<ParseSentenceRequest>,
) -> Result<Json<ParseSentenceResponse>> {
    let items = parse_sentence(&payload.sentence);
    let word_count = get_word_items(&items).len();

    Ok(Json(ParseSentenceResponse { items, word_count }))
}

/// POST /api/sentences/reconstruct
pub async fn reconstruct(
    Json(payload): Json<ReconstructRequest>,
) -> Result<Json<SentenceResponse>> {
    Ok(Json(SentenceResponse {
        sentence: reconstruct_sentence(&payload.items, &payload.words),
    }))
}
