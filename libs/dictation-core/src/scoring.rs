//! Leaderboard aggregation over judged answers.

use crate::judgment::Judgment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One judged answer from one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub participant: String,
    pub judgment: Judgment,
    pub submitted_at: DateTime<Utc>,
}

/// A participant's standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based, shared by rows with equal points and equal correct counts.
    pub rank: usize,
    pub participant: String,
    pub points: u32,
    pub correct: u32,
    pub close: u32,
    pub incorrect: u32,
    pub last_submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn leader(&self) -> Option<&LeaderboardRow> {
        self.rows.first()
    }

    pub fn get(&self, participant: &str) -> Option<&LeaderboardRow> {
        self.rows.iter().find(|row| row.participant == participant)
    }
}

/// Sum points per participant and rank them.
///
/// Ordered by points, then correct answers (both descending), then the
/// earliest final submission, then name.
pub fn build_leaderboard(entries: &[ScoreEntry]) -> Leaderboard {
    let mut totals: HashMap<&str, LeaderboardRow> = HashMap::new();

    for entry in entries {
        let row = totals
            .entry(entry.participant.as_str())
            .or_insert_with(|| LeaderboardRow {
                rank: 0,
                participant: entry.participant.clone(),
                points: 0,
                correct: 0,
                close: 0,
                incorrect: 0,
                last_submitted_at: entry.submitted_at,
            });

        row.points += entry.judgment.points();
        match entry.judgment {
            Judgment::Correct => row.correct += 1,
            Judgment::Close => row.close += 1,
            Judgment::Incorrect => row.incorrect += 1,
        }
        row.last_submitted_at = row.last_submitted_at.max(entry.submitted_at);
    }

    let mut rows: Vec<LeaderboardRow> = totals.into_values().collect();
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.correct.cmp(&a.correct))
            .then(a.last_submitted_at.cmp(&b.last_submitted_at))
            .then_with(|| a.participant.cmp(&b.participant))
    });

    for i in 0..rows.len() {
        rows[i].rank = if i > 0
            && rows[i].points == rows[i - 1].points
            && rows[i].correct == rows[i - 1].correct
        {
            rows[i - 1].rank
        } else {
            i + 1
        };
    }

    Leaderboard { rows }
}

/// The earliest correct submission, for first-come rounds.
///
/// Equal timestamps resolve to the entry listed first.
pub fn first_correct(entries: &[ScoreEntry]) -> Option<&ScoreEntry> {
    entries
        .iter()
        .filter(|entry| entry.judgment == Judgment::Correct)
        .min_by_key(|entry| entry.submitted_at)
}
