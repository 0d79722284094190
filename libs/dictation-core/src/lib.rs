//! Core library for the dictation quiz game.
//!
//! Provides:
//! - Answer tokenization and normalization (fullwidth-aware)
//! - Fuzzy word matching (Levenshtein distance)
//! - Word diff with accuracy, and correct / close / incorrect judgment
//! - Sentence segmentation into word slots and reconstruction
//! - Word-selection mode data (distractors, shuffled tokens, slots)
//! - Leaderboard scoring and single-utterance narration

pub mod diff;
pub mod error;
pub mod judgment;
pub mod matching;
pub mod normalize;
pub mod scoring;
pub mod segment;
pub mod selection;
pub mod speech;
pub mod types;

pub use diff::{generate_diff, generate_diff_with_threshold, DiffResult, Token, TokenType};
pub use error::{Result, SettingsError, SpeechError};
pub use judgment::{
    classify_judgment, classify_judgment_with, judge_answer, JudgeOutcome, Judgment,
    CLOSE_ACCURACY_THRESHOLD,
};
pub use matching::{
    is_similar, is_similar_with_threshold, levenshtein_distance, normalized_similarity,
    SIMILARITY_THRESHOLD,
};
pub use normalize::{normalize, normalize_for_judgment, tokenize, validate_answer};
pub use scoring::{build_leaderboard, first_correct, Leaderboard, LeaderboardRow, ScoreEntry};
pub use segment::{get_word_items, parse_sentence, reconstruct_sentence, word_texts, ParsedItem};
pub use selection::{
    clear_slot, generate_distractors, generate_distractors_with_rng, generate_word_selection_data,
    generate_word_selection_data_with_rng, is_complete, place_token, reconstruct_answer_from_slots,
    WordSelectionData, WordSlot, WordToken,
};
pub use speech::{Narrator, SpeechEngine};
pub use types::{EffectiveSettings, InputMode, JudgeMode, JudgeSettings, RoomSettings};
