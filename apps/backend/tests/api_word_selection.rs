//! Word-selection mode API tests.
//!
//! Token order is random, so these tests only check membership and counts.

mod common;

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::TestContext;
use dictation_core::{WordSelectionData, WordSlot, WordToken};

/// Test generating tokens and slots for a sentence.
#[tokio::test]
async fn test_create_word_selection() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/word-selection")
        .json(&json!({ "sentence": "The cat sat down." }))
        .await;

    response.assert_status_ok();
    let data: WordSelectionData = response.json();

    assert_eq!(data.slots.len(), 4);
    assert_eq!(data.tokens.len(), 8);
    assert!(data.slots.iter().all(|slot| slot.selected_token.is_none()));

    let correct: HashSet<&str> = data
        .tokens
        .iter()
        .filter(|t| t.is_correct)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(correct, HashSet::from(["The", "cat", "sat", "down"]));

    let sentence_words = ["the", "cat", "sat", "down"];
    assert!(data
        .tokens
        .iter()
        .filter(|t| !t.is_correct)
        .all(|t| !sentence_words.contains(&t.text.to_lowercase().as_str())));
}

/// Test that distractors never serialize a correct_index.
#[tokio::test]
async fn test_distractor_json_shape() {
    let server = TestContext::new().server();

    let body: Value = server
        .post("/api/word-selection")
        .json(&json!({ "sentence": "Good night." }))
        .await
        .json();

    for token in body["tokens"].as_array().unwrap() {
        if token["is_correct"] == false {
            assert!(token.get("correct_index").is_none());
        } else {
            assert!(token["correct_index"].is_u64());
        }
    }
}

/// Test rebuilding the answer after placing the correct tokens.
#[tokio::test]
async fn test_answer_from_filled_slots() {
    let server = TestContext::new().server();

    let mut data: WordSelectionData = server
        .post("/api/word-selection")
        .json(&json!({ "sentence": "It's hot today." }))
        .await
        .json();

    let correct: Vec<WordToken> = data.tokens.iter().filter(|t| t.is_correct).cloned().collect();
    for token in correct {
        let index = token.correct_index.unwrap();
        data.slots[index].selected_token = Some(token);
    }

    let response = server
        .post("/api/word-selection/answer")
        .json(&json!({
            "parsed_sentence": data.parsed_sentence,
            "slots": data.slots,
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["sentence"], "It's hot today.");
}

/// Test that empty slots contribute nothing to the answer.
#[tokio::test]
async fn test_answer_from_empty_slots() {
    let server = TestContext::new().server();

    let data: WordSelectionData = server
        .post("/api/word-selection")
        .json(&json!({ "sentence": "See you soon!" }))
        .await
        .json();
    let slots: Vec<WordSlot> = data.slots;

    let body: Value = server
        .post("/api/word-selection/answer")
        .json(&json!({
            "parsed_sentence": data.parsed_sentence,
            "slots": slots,
        }))
        .await
        .json();

    assert_eq!(body["sentence"], "!");
}
