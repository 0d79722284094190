//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from dictation-core
pub use dictation_core::{
    DiffResult, InputMode, JudgeOutcome, Judgment, Leaderboard, LeaderboardRow, ParsedItem,
    RoomSettings, ScoreEntry, WordSelectionData, WordSlot, WordToken,
};

/// POST /api/answers/judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeRequest {
    pub user_answer: String,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RoomSettings>,
}

/// Judgment plus the input mode the room plays in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeResponse {
    pub input_mode: InputMode,
    #[serde(flatten)]
    pub outcome: JudgeOutcome,
}

/// POST /api/answers/diff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffRequest {
    pub user_answer: String,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
}

/// POST /api/answers/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub answer: String,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_punctuation: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub is_correct: bool,
}

/// POST /api/sentences/parse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSentenceRequest {
    pub sentence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSentenceResponse {
    pub items: Vec<ParsedItem>,
    pub word_count: usize,
}

/// POST /api/sentences/reconstruct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructRequest {
    pub items: Vec<ParsedItem>,
    pub words: Vec<String>,
}

/// Response carrying a rebuilt sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceResponse {
    pub sentence: String,
}

/// POST /api/word-selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSelectionRequest {
    pub sentence: String,
}

/// POST /api/word-selection/answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAnswerRequest {
    pub parsed_sentence: Vec<ParsedItem>,
    pub slots: Vec<WordSlot>,
}

/// POST /api/leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRequest {
    pub entries: Vec<ScoreEntry>,
}
