//! Three-way judgment of a transcription and the points it earns.

use crate::diff::{generate_diff_with_threshold, DiffResult};
use crate::normalize::{normalize_for_judgment, validate_answer};
use crate::types::{JudgeMode, JudgeSettings};
use serde::{Deserialize, Serialize};

/// Minimum diff accuracy for an answer to be judged close.
pub const CLOSE_ACCURACY_THRESHOLD: u32 = 80;

pub const CORRECT_POINTS: u32 = 10;
pub const CLOSE_POINTS: u32 = 5;
pub const INCORRECT_POINTS: u32 = 0;

/// Outcome of judging one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    Correct,
    #[serde(alias = "partial")]
    Close,
    Incorrect,
}

impl Judgment {
    /// Points awarded for this judgment.
    pub fn points(self) -> u32 {
        match self {
            Self::Correct => CORRECT_POINTS,
            Self::Close => CLOSE_POINTS,
            Self::Incorrect => INCORRECT_POINTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Close => "close",
            Self::Incorrect => "incorrect",
        }
    }
}

/// Classify an answer with the default thresholds.
pub fn classify_judgment(user_answer: &str, correct_answer: &str) -> Judgment {
    classify_judgment_with(user_answer, correct_answer, &JudgeSettings::default())
}

/// Classify an answer with explicit settings.
///
/// Identical answers (ignoring case, surrounding whitespace and sentence-final
/// punctuation) are correct. Otherwise the diff accuracy decides between
/// close and incorrect. `judge_mode` is not consulted here.
pub fn classify_judgment_with(
    user_answer: &str,
    correct_answer: &str,
    settings: &JudgeSettings,
) -> Judgment {
    if normalize_for_judgment(user_answer) == normalize_for_judgment(correct_answer) {
        return Judgment::Correct;
    }

    let diff =
        generate_diff_with_threshold(user_answer, correct_answer, settings.similarity_threshold);
    judgment_from_accuracy(diff.accuracy, settings.close_threshold)
}

fn judgment_from_accuracy(accuracy: u32, close_threshold: u32) -> Judgment {
    if accuracy >= close_threshold {
        Judgment::Close
    } else {
        Judgment::Incorrect
    }
}

/// Full outcome of judging one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeOutcome {
    pub judgment: Judgment,
    pub points: u32,
    pub diff: DiffResult,
}

/// Judge an answer under the given settings, returning the judgment, its
/// points and the word diff for display.
///
/// In [`JudgeMode::Exact`] only a normalized exact match is correct and
/// near misses are incorrect.
pub fn judge_answer(
    user_answer: &str,
    correct_answer: &str,
    settings: &JudgeSettings,
) -> JudgeOutcome {
    let diff =
        generate_diff_with_threshold(user_answer, correct_answer, settings.similarity_threshold);

    let judgment = match settings.judge_mode {
        JudgeMode::Graded => {
            if normalize_for_judgment(user_answer) == normalize_for_judgment(correct_answer) {
                Judgment::Correct
            } else {
                judgment_from_accuracy(diff.accuracy, settings.close_threshold)
            }
        }
        JudgeMode::Exact => {
            if validate_answer(user_answer, correct_answer, settings.exclude_punctuation) {
                Judgment::Correct
            } else {
                Judgment::Incorrect
            }
        }
    };

    tracing::debug!(
        judgment = judgment.as_str(),
        accuracy = diff.accuracy,
        matched = diff.matched_words,
        total = diff.total_words,
        "judged answer"
    );

    JudgeOutcome {
        judgment,
        points: judgment.points(),
        diff,
    }
}
