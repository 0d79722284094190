//! Single-utterance narration of the host's phrase.
//!
//! The platform text-to-speech engine is injected through [`SpeechEngine`].
//! [`Narrator`] owns it and guarantees at most one utterance is active.

use crate::error::SpeechError;

pub const DEFAULT_RATE: f32 = 0.9;
pub const MIN_RATE: f32 = 0.1;
pub const MAX_RATE: f32 = 2.0;

/// A text-to-speech backend.
pub trait SpeechEngine {
    /// Start speaking `text` at `rate` (1.0 is normal speed).
    fn speak(&mut self, text: &str, rate: f32) -> Result<(), SpeechError>;

    /// Interrupt the current utterance.
    fn stop(&mut self) -> Result<(), SpeechError>;
}

/// Owns a speech engine and tracks the utterance in progress.
#[derive(Debug)]
pub struct Narrator<E> {
    engine: E,
    rate: f32,
    speaking: Option<String>,
}

impl<E: SpeechEngine> Narrator<E> {
    pub fn new(engine: E) -> Self {
        Self::with_rate(engine, DEFAULT_RATE)
    }

    /// Create with a speaking rate, clamped to `MIN_RATE..=MAX_RATE`.
    pub fn with_rate(engine: E, rate: f32) -> Self {
        Self {
            engine,
            rate: rate.clamp(MIN_RATE, MAX_RATE),
            speaking: None,
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate.clamp(MIN_RATE, MAX_RATE);
    }

    /// Text currently being spoken.
    pub fn speaking(&self) -> Option<&str> {
        self.speaking.as_deref()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.is_some()
    }

    /// Speak `text`, stopping whatever is playing first.
    pub fn play(&mut self, text: &str) -> Result<(), SpeechError> {
        self.stop()?;

        self.engine.speak(text, self.rate)?;
        tracing::debug!(rate = self.rate, "narration started");
        self.speaking = Some(text.to_string());
        Ok(())
    }

    /// Stop the active utterance. Does nothing when idle.
    pub fn stop(&mut self) -> Result<(), SpeechError> {
        if self.speaking.is_none() {
            return Ok(());
        }

        self.engine.stop()?;
        tracing::debug!("narration stopped");
        self.speaking = None;
        Ok(())
    }

    /// Record that the engine finished the utterance on its own.
    pub fn finished(&mut self) {
        self.speaking = None;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}
