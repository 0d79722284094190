pub mod answers;
pub mod leaderboard;
pub mod sentences;
pub mod word_selection;
