//! Sentence segmentation into word slots and punctuation, and the reverse.
//!
//! Every word gets a sequential slot index. Sentence punctuation (`. ! ? , : ;`)
//! and apostrophes are split out as their own items so per-word input UIs can
//! render them between slots. A contraction such as `It's` therefore yields
//! two word slots (`It`, `s`) around an apostrophe.

use serde::{Deserialize, Serialize};

const PUNCTUATION: [char; 6] = ['.', '!', '?', ',', ':', ';'];
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];
const QUOTES: [char; 5] = ['\'', '\u{2019}', '"', '\u{201C}', '\u{201D}'];

/// One element of a segmented sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub text: String,
    pub is_punctuation: bool,
    /// Slot number for words; `None` (serialized as `-1`) for punctuation.
    #[serde(with = "slot_index")]
    pub index: Option<usize>,
}

impl ParsedItem {
    pub fn word(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            is_punctuation: false,
            index: Some(index),
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_punctuation: true,
            index: None,
        }
    }
}

mod slot_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        index: &Option<usize>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match index {
            Some(i) => serializer.serialize_u64(*i as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

fn is_separator(c: char) -> bool {
    PUNCTUATION.contains(&c) || APOSTROPHES.contains(&c)
}

/// Split a whitespace-free fragment, keeping each separator as its own piece.
fn split_fragment(fragment: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (pos, c) in fragment.char_indices() {
        if is_separator(c) {
            pieces.push(&fragment[start..pos]);
            let end = pos + c.len_utf8();
            pieces.push(&fragment[pos..end]);
            start = end;
        }
    }
    pieces.push(&fragment[start..]);

    pieces
}

/// Segment a sentence into words and punctuation in reading order.
pub fn parse_sentence(sentence: &str) -> Vec<ParsedItem> {
    let mut items = Vec::new();
    let mut word_index = 0;

    for fragment in sentence.split_whitespace() {
        for piece in split_fragment(fragment) {
            let mut chars = piece.chars();
            let single = match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            };

            if single.is_some_and(is_separator) {
                items.push(ParsedItem::punctuation(piece));
            } else if !piece.trim().is_empty() {
                items.push(ParsedItem::word(piece, word_index));
                word_index += 1;
            }
        }
    }

    items
}

/// The word items of a parsed sentence, in order.
pub fn get_word_items(parsed: &[ParsedItem]) -> Vec<&ParsedItem> {
    parsed.iter().filter(|item| !item.is_punctuation).collect()
}

/// The text of each word slot, in slot order.
pub fn word_texts(parsed: &[ParsedItem]) -> Vec<String> {
    get_word_items(parsed)
        .into_iter()
        .map(|item| item.text.clone())
        .collect()
}

/// Rebuild a sentence from its punctuation layout and one value per slot.
///
/// Empty or absent slot values are skipped without affecting spacing.
pub fn reconstruct_sentence<S: AsRef<str>>(parsed: &[ParsedItem], words: &[S]) -> String {
    reconstruct_with(parsed, |index| words.get(index).map(|w| w.as_ref()))
}

pub(crate) fn reconstruct_with<'a, F>(parsed: &[ParsedItem], word_at: F) -> String
where
    F: Fn(usize) -> Option<&'a str>,
{
    let mut result = String::new();
    let mut need_space = false;

    for item in parsed {
        if item.is_punctuation {
            result.push_str(&item.text);
            need_space = !item.text.chars().all(|c| QUOTES.contains(&c));
            continue;
        }

        let Some(word) = item.index.and_then(&word_at).filter(|w| !w.is_empty()) else {
            continue;
        };

        if need_space && !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
        need_space = true;
    }

    result
}
