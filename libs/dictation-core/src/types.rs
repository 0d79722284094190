//! Settings types shared by the core and the judging service.

use crate::error::{Result, SettingsError};
use crate::judgment::CLOSE_ACCURACY_THRESHOLD;
use crate::matching::SIMILARITY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// How participants enter their transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// One free-text field for the whole sentence.
    #[default]
    FullSentence,
    /// One field per word slot.
    WordByWord,
    /// Drag words (correct ones plus distractors) into slots.
    WordSelection,
}

/// How a submitted answer is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgeMode {
    /// Three-way correct / close / incorrect from the word diff.
    #[default]
    Graded,
    /// Correct only when the normalized strings are identical.
    Exact,
}

/// Service-wide judging settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgeSettings {
    pub judge_mode: JudgeMode,
    pub similarity_threshold: f64,
    pub close_threshold: u32,
    pub exclude_punctuation: bool,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            judge_mode: JudgeMode::default(),
            similarity_threshold: SIMILARITY_THRESHOLD,
            close_threshold: CLOSE_ACCURACY_THRESHOLD,
            exclude_punctuation: false,
        }
    }
}

impl JudgeSettings {
    /// Check thresholds are within range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SettingsError::SimilarityThreshold {
                value: self.similarity_threshold,
            });
        }
        if self.close_threshold > 100 {
            return Err(SettingsError::CloseThreshold {
                value: self.close_threshold,
            });
        }
        Ok(())
    }
}

/// Per-room overrides (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_mode: Option<JudgeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_punctuation: Option<bool>,
}

/// Effective settings (service defaults merged with room overrides).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub input_mode: InputMode,
    pub judge: JudgeSettings,
}

impl EffectiveSettings {
    /// Merge service settings with optional room overrides.
    pub fn merge(global: &JudgeSettings, room: Option<&RoomSettings>) -> Self {
        match room {
            Some(r) => Self {
                input_mode: r.input_mode.unwrap_or_default(),
                judge: JudgeSettings {
                    judge_mode: r.judge_mode.unwrap_or(global.judge_mode),
                    similarity_threshold: r
                        .similarity_threshold
                        .unwrap_or(global.similarity_threshold),
                    close_threshold: r.close_threshold.unwrap_or(global.close_threshold),
                    exclude_punctuation: r
                        .exclude_punctuation
                        .unwrap_or(global.exclude_punctuation),
                },
            },
            None => Self {
                input_mode: InputMode::default(),
                judge: *global,
            },
        }
    }
}
