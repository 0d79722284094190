//! Service configuration from environment variables.

use anyhow::{Context, Result};
use dictation_core::{JudgeMode, JudgeSettings};

/// Runtime configuration for the judging service.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub judge: JudgeSettings,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = JudgeSettings::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000)?;

        let judge_mode = match lookup("JUDGE_MODE").as_deref() {
            None | Some("graded") => JudgeMode::Graded,
            Some("exact") => JudgeMode::Exact,
            Some(other) => anyhow::bail!("JUDGE_MODE must be graded or exact, got {other}"),
        };

        let judge = JudgeSettings {
            judge_mode,
            similarity_threshold: parse_or(
                &lookup,
                "JUDGE_SIMILARITY_THRESHOLD",
                defaults.similarity_threshold,
            )?,
            close_threshold: parse_or(&lookup, "JUDGE_CLOSE_THRESHOLD", defaults.close_threshold)?,
            exclude_punctuation: parse_or(
                &lookup,
                "JUDGE_EXCLUDE_PUNCTUATION",
                defaults.exclude_punctuation,
            )?,
        };
        judge.validate()?;

        Ok(Self { host, port, judge })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        None => Ok(default),
    }
}
