//! Word-selection mode: shuffled correct words plus distractors, dragged into slots.

use crate::segment::{get_word_items, parse_sentence, reconstruct_with, ParsedItem};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Decoy vocabulary for distractors.
pub const VOCABULARY: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "this", "that", "these", "those", "good", "bad",
    "big", "small", "new", "old", "hot", "cold", "happy", "sad", "go", "come", "make", "take",
    "get", "give", "see", "know", "think", "want", "like", "look", "use", "find",
];

/// Returned when no unused vocabulary word is left.
pub const FALLBACK_DISTRACTOR: &str = "word";

/// A draggable word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    /// Slot this token correctly fills. Only set on correct tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_index: Option<usize>,
}

/// A placeholder for one word of the reference sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSlot {
    pub index: usize,
    pub expected_word: String,
    pub selected_token: Option<WordToken>,
}

impl WordSlot {
    pub fn new(index: usize, expected_word: impl Into<String>) -> Self {
        Self {
            index,
            expected_word: expected_word.into(),
            selected_token: None,
        }
    }

    /// Whether the selected token's text is the expected word.
    ///
    /// Repeated words in a sentence are interchangeable, so the text is
    /// compared rather than `correct_index`.
    pub fn is_filled_correctly(&self) -> bool {
        self.selected_token
            .as_ref()
            .is_some_and(|token| token.text == self.expected_word)
    }
}

/// Everything a word-selection question needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSelectionData {
    pub tokens: Vec<WordToken>,
    pub slots: Vec<WordSlot>,
    pub parsed_sentence: Vec<ParsedItem>,
}

/// Pick one distractor per correct word using the thread-local RNG.
pub fn generate_distractors<S: AsRef<str>>(correct_words: &[S]) -> Vec<String> {
    generate_distractors_with_rng(correct_words, &mut rand::thread_rng())
}

/// Pick one distractor per correct word.
///
/// Candidates exclude every word of the sentence (ignoring case) and every
/// distractor already picked in this call.
pub fn generate_distractors_with_rng<S, R>(correct_words: &[S], rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let sentence_words: HashSet<String> = correct_words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect();
    let mut used: HashSet<&str> = HashSet::new();
    let mut distractors = Vec::with_capacity(correct_words.len());

    for _ in correct_words {
        let candidates: Vec<&str> = VOCABULARY
            .iter()
            .copied()
            .filter(|w| !sentence_words.contains(*w) && !used.contains(w))
            .collect();

        match candidates.choose(rng) {
            Some(pick) => {
                used.insert(*pick);
                distractors.push(pick.to_string());
            }
            None => distractors.push(FALLBACK_DISTRACTOR.to_string()),
        }
    }

    distractors
}

/// Build tokens and empty slots for a sentence using the thread-local RNG.
pub fn generate_word_selection_data(sentence: &str) -> WordSelectionData {
    generate_word_selection_data_with_rng(sentence, &mut rand::thread_rng())
}

/// Build tokens and empty slots for a sentence.
///
/// Produces one correct token and one distractor per word, shuffled together.
pub fn generate_word_selection_data_with_rng<R: Rng + ?Sized>(
    sentence: &str,
    rng: &mut R,
) -> WordSelectionData {
    let parsed_sentence = parse_sentence(sentence);
    let words: Vec<&str> = get_word_items(&parsed_sentence)
        .into_iter()
        .map(|item| item.text.as_str())
        .collect();

    let distractors = generate_distractors_with_rng(&words, rng);

    let mut tokens: Vec<WordToken> = Vec::with_capacity(words.len() * 2);
    for (index, word) in words.iter().enumerate() {
        tokens.push(WordToken {
            id: token_id(rng),
            text: word.to_string(),
            is_correct: true,
            correct_index: Some(index),
        });
    }
    for text in distractors {
        tokens.push(WordToken {
            id: token_id(rng),
            text,
            is_correct: false,
            correct_index: None,
        });
    }
    tokens.shuffle(rng);

    let slots = words
        .iter()
        .enumerate()
        .map(|(index, word)| WordSlot::new(index, *word))
        .collect();

    WordSelectionData {
        tokens,
        slots,
        parsed_sentence,
    }
}

fn token_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

/// Put `token` into the slot at `slot_index`, returning whatever was there.
///
/// An out-of-range index hands the token back as `Err`.
pub fn place_token(
    slots: &mut [WordSlot],
    slot_index: usize,
    token: WordToken,
) -> Result<Option<WordToken>, WordToken> {
    match slots.get_mut(slot_index) {
        Some(slot) => Ok(slot.selected_token.replace(token)),
        None => Err(token),
    }
}

/// Empty the slot at `slot_index`, returning its token.
pub fn clear_slot(slots: &mut [WordSlot], slot_index: usize) -> Option<WordToken> {
    slots.get_mut(slot_index)?.selected_token.take()
}

/// Whether every slot holds a token.
pub fn is_complete(slots: &[WordSlot]) -> bool {
    slots.iter().all(|slot| slot.selected_token.is_some())
}

/// Rebuild the answer sentence from the tokens placed in slots.
pub fn reconstruct_answer_from_slots(parsed_sentence: &[ParsedItem], slots: &[WordSlot]) -> String {
    reconstruct_with(parsed_sentence, |index| {
        slots
            .get(index)
            .and_then(|slot| slot.selected_token.as_ref())
            .map(|token| token.text.as_str())
    })
}
