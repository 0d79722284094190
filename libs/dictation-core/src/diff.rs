//! Word-level diff between a transcribed answer and the reference sentence.
//!
//! Alignment is greedy and first-fit: each user word, in order, claims the
//! first unclaimed correct word it is similar to. This is not an optimal
//! alignment, and the close-answer cutoff in [`crate::judgment`] is
//! calibrated against exactly this behavior.

use crate::matching::{is_similar_with_threshold, SIMILARITY_THRESHOLD};
use crate::normalize::tokenize;
use serde::{Deserialize, Serialize};

/// How a word relates to the other sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Paired with a word that is identical ignoring case.
    Match,
    /// Paired with a similar but not identical word.
    Different,
    /// Correct word no user word was paired with.
    Missing,
    /// User word with no similar correct word.
    Extra,
}

/// One word annotated with its diff classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Position in the sequence this token came from.
    pub index: usize,
}

impl Token {
    fn new(text: &str, token_type: TokenType, index: usize) -> Self {
        Self {
            text: text.to_string(),
            token_type,
            index,
        }
    }
}

/// Result of diffing a user answer against the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// User words in input order, each `match`, `different` or `extra`.
    pub user_words: Vec<Token>,
    /// Correct words in sentence order, each `match`, `different` or `missing`.
    pub correct_words: Vec<Token>,
    /// Percentage 0..=100.
    pub accuracy: u32,
    /// Number of words in the correct answer.
    pub total_words: usize,
    /// Number of exact (case-insensitive) matches.
    pub matched_words: usize,
}

impl DiffResult {
    /// Count user words that found no counterpart.
    pub fn extra_count(&self) -> usize {
        count_type(&self.user_words, TokenType::Extra)
    }

    /// Count correct words the user left out.
    pub fn missing_count(&self) -> usize {
        count_type(&self.correct_words, TokenType::Missing)
    }
}

fn count_type(tokens: &[Token], token_type: TokenType) -> usize {
    tokens.iter().filter(|t| t.token_type == token_type).count()
}

/// Diff `user_answer` against `correct_answer` at the default similarity threshold.
pub fn generate_diff(user_answer: &str, correct_answer: &str) -> DiffResult {
    generate_diff_with_threshold(user_answer, correct_answer, SIMILARITY_THRESHOLD)
}

/// Diff with an explicit word similarity threshold.
pub fn generate_diff_with_threshold(
    user_answer: &str,
    correct_answer: &str,
    threshold: f64,
) -> DiffResult {
    let user_tokens = tokenize(user_answer);
    let correct_tokens = tokenize(correct_answer);

    let mut consumed = vec![false; correct_tokens.len()];
    let mut user_words = Vec::with_capacity(user_tokens.len());
    let mut correct_words = Vec::with_capacity(correct_tokens.len());

    for (user_index, user_word) in user_tokens.iter().enumerate() {
        let paired = correct_tokens
            .iter()
            .enumerate()
            .find(|(j, correct_word)| {
                !consumed[*j] && is_similar_with_threshold(user_word, correct_word, threshold)
            })
            .map(|(j, correct_word)| (j, *correct_word));

        match paired {
            Some((correct_index, correct_word)) => {
                consumed[correct_index] = true;
                let token_type = if user_word.to_lowercase() == correct_word.to_lowercase() {
                    TokenType::Match
                } else {
                    TokenType::Different
                };
                user_words.push(Token::new(user_word, token_type, user_index));
                correct_words.push(Token::new(correct_word, token_type, correct_index));
            }
            None => user_words.push(Token::new(user_word, TokenType::Extra, user_index)),
        }
    }

    for (index, correct_word) in correct_tokens.iter().enumerate() {
        if !consumed[index] {
            correct_words.push(Token::new(correct_word, TokenType::Missing, index));
        }
    }

    correct_words.sort_by_key(|t| t.index);

    let total_words = correct_tokens.len();
    let matched_words = count_type(&user_words, TokenType::Match);
    let considered = total_words + count_type(&user_words, TokenType::Extra);

    DiffResult {
        user_words,
        correct_words,
        accuracy: rounded_percentage(matched_words, considered),
        total_words,
        matched_words,
    }
}

/// `round(100 * part / whole)` with halves rounded up, 0 when `whole` is 0.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn types(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_exact_match() {
        let diff = generate_diff("Hello world", "Hello world");
        assert_eq!(diff.accuracy, 100);
        assert_eq!(diff.matched_words, 2);
        assert_eq!(diff.total_words, 2);
        assert_eq!(types(&diff.user_words), vec![TokenType::Match; 2]);
        assert_eq!(types(&diff.correct_words), vec![TokenType::Match; 2]);
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_casing() {
        let diff = generate_diff("HELLO world", "hello world");
        assert_eq!(diff.accuracy, 100);
        assert_eq!(diff.user_words[0].text, "HELLO");
        assert_eq!(diff.correct_words[0].text, "hello");
        assert!(diff
            .user_words
            .iter()
            .chain(diff.correct_words.iter())
            .all(|t| t.token_type == TokenType::Match));
    }

    #[test]
    fn test_missing_word() {
        let diff = generate_diff("I going to school", "I am going to school");
        assert_eq!(diff.missing_count(), 1);
        assert_eq!(diff.extra_count(), 0);
        assert_eq!(diff.correct_words[1], Token::new("am", TokenType::Missing, 1));
        assert_eq!(diff.matched_words, 4);
        assert_eq!(diff.total_words, 5);
        assert_eq!(diff.accuracy, 80);
    }

    #[test]
    fn test_extra_word_counts_against_accuracy() {
        let diff = generate_diff("I really like cats", "I like cats");
        assert_eq!(diff.extra_count(), 1);
        assert_eq!(diff.user_words[1], Token::new("really", TokenType::Extra, 1));
        assert_eq!(diff.matched_words, 3);
        // 3 matches over 3 correct + 1 extra
        assert_eq!(diff.accuracy, 75);
    }

    #[test]
    fn test_similar_word_is_different_not_match() {
        let diff = generate_diff("I go to schoool", "I go to school");
        assert_eq!(diff.user_words[3].token_type, TokenType::Different);
        assert_eq!(diff.correct_words[3].token_type, TokenType::Different);
        assert_eq!(diff.matched_words, 3);
        assert_eq!(diff.accuracy, 75);
    }

    #[test]
    fn test_correct_words_sorted_by_index() {
        let diff = generate_diff("school to", "I go to school");
        let indices: Vec<usize> = diff.correct_words.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        // user words stay in scan order
        let user_indices: Vec<usize> = diff.user_words.iter().map(|t| t.index).collect();
        assert_eq!(user_indices, vec![0, 1]);
    }

    #[test]
    fn test_greedy_first_fit_consumption() {
        // "the" claims the first "the"; the second stays missing
        let diff = generate_diff("the", "the cat saw the dog");
        assert_eq!(diff.correct_words[0].token_type, TokenType::Match);
        assert_eq!(diff.correct_words[3].token_type, TokenType::Missing);
    }

    #[test]
    fn test_repeated_user_word_becomes_extra() {
        let diff = generate_diff("the the cat", "the cat");
        assert_eq!(
            types(&diff.user_words),
            vec![TokenType::Match, TokenType::Extra, TokenType::Match]
        );
        assert_eq!(diff.extra_count(), 1);
        assert_eq!(diff.missing_count(), 0);
        // 2 matches over 2 correct + 1 extra
        assert_eq!(diff.accuracy, 67);
    }

    #[test]
    fn test_trailing_punctuation_ignored() {
        let diff = generate_diff("Hello world!", "Hello world.");
        assert_eq!(diff.accuracy, 100);
    }

    #[test]
    fn test_empty_inputs() {
        let diff = generate_diff("", "");
        assert_eq!(diff.accuracy, 0);
        assert_eq!(diff.total_words, 0);
        assert!(diff.user_words.is_empty());
        assert!(diff.correct_words.is_empty());

        let diff = generate_diff("", "Hello world");
        assert_eq!(diff.accuracy, 0);
        assert_eq!(diff.missing_count(), 2);

        let diff = generate_diff("Hello", "");
        assert_eq!(diff.accuracy, 0);
        assert_eq!(diff.extra_count(), 1);
    }

    #[test]
    fn test_every_word_appears_once() {
        let diff = generate_diff("a quick brown fax jumps high", "the quick brown fox jumps");
        assert_eq!(diff.user_words.len(), 6);
        assert_eq!(diff.correct_words.len(), 5);
        assert!(diff.matched_words <= diff.total_words);
    }

    #[test]
    fn test_idempotent() {
        let a = generate_diff("I going to school", "I am going to school");
        let b = generate_diff("I going to school", "I am going to school");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(0, 0), 0);
    }
    proptest! {
        #[test]
        fn every_token_is_reported_once_in_order(
            user in "[a-cA-C .!?]{0,30}",
            correct in "[a-cA-C .!?]{0,30}",
        ) {
            let diff = generate_diff(&user, &correct);

            prop_assert_eq!(diff.user_words.len(), tokenize(&user).len());
            prop_assert_eq!(diff.correct_words.len(), diff.total_words);
            for (position, token) in diff.user_words.iter().enumerate() {
                prop_assert_eq!(token.index, position);
            }
            for (position, token) in diff.correct_words.iter().enumerate() {
                prop_assert_eq!(token.index, position);
            }
            prop_assert!(diff.matched_words <= diff.total_words);
            prop_assert!(diff.accuracy <= 100);
        }
    }
}
