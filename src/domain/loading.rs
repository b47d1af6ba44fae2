//! Status text timeline for the fake "searching" progress bar.
//!
//! The page counts from 0 to 100 in steps of [`STEP_INTERVAL_MS`]. Every
//! [`MESSAGE_EVERY`] steps the status text rotates through the configured
//! loading messages, and at 100 it settles on [`FINAL_TEXT`].

use serde::Serialize;
use utoipa::ToSchema;

/// Text shown before the first checkpoint.
pub const INITIAL_TEXT: &str = "Searching for page...";

/// Text shown once progress reaches [`MAX_PROGRESS`].
pub const FINAL_TEXT: &str = "Confirmed: This page doesn't exist";

/// Milliseconds between progress steps.
pub const STEP_INTERVAL_MS: u64 = 30;

/// Progress interval between status text changes.
pub const MESSAGE_EVERY: u8 = 15;

/// Terminal progress value.
pub const MAX_PROGRESS: u8 = 100;

/// A progress value at which the status text changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Checkpoint {
    /// Progress value (0..=100).
    pub progress: u8,
    /// Status text shown from this progress value on.
    pub text: String,
}

/// Loading messages and the rules mapping progress to status text.
#[derive(Debug, Clone, Default)]
pub struct LoadingTimeline {
    messages: Vec<String>,
}

impl LoadingTimeline {
    /// Creates a timeline rotating through `messages`.
    #[must_use]
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Configured loading messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Message selected at checkpoint `progress`, if any.
    fn message_for(&self, progress: u8) -> Option<&str> {
        if progress == 0 || progress >= MAX_PROGRESS || progress % MESSAGE_EVERY != 0 {
            return None;
        }
        let len = self.messages.len();
        if len == 0 {
            return None;
        }
        let index = usize::from(progress / MESSAGE_EVERY) % len;
        self.messages.get(index).map(String::as_str)
    }

    /// Status text visible at `progress`. Values above 100 are clamped.
    #[must_use]
    pub fn text_at(&self, progress: u8) -> &str {
        let progress = progress.min(MAX_PROGRESS);
        if progress == MAX_PROGRESS {
            return FINAL_TEXT;
        }
        (1..=progress)
            .rev()
            .find_map(|p| self.message_for(p))
            .unwrap_or(INITIAL_TEXT)
    }

    /// Ordered list of status text changes from 0 to 100.
    #[must_use]
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        let mut checkpoints = vec![Checkpoint {
            progress: 0,
            text: INITIAL_TEXT.to_string(),
        }];
        for progress in (MESSAGE_EVERY..MAX_PROGRESS).step_by(usize::from(MESSAGE_EVERY)) {
            if let Some(text) = self.message_for(progress) {
                checkpoints.push(Checkpoint {
                    progress,
                    text: text.to_string(),
                });
            }
        }
        checkpoints.push(Checkpoint {
            progress: MAX_PROGRESS,
            text: FINAL_TEXT.to_string(),
        });
        checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> LoadingTimeline {
        LoadingTimeline::new(
            ["zero", "one", "two", "three"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    #[test]
    fn initial_text_before_first_checkpoint() {
        let t = timeline();
        assert_eq!(t.text_at(0), INITIAL_TEXT);
        assert_eq!(t.text_at(14), INITIAL_TEXT);
    }

    #[test]
    fn messages_rotate_by_checkpoint() {
        let t = timeline();
        assert_eq!(t.text_at(15), "one");
        assert_eq!(t.text_at(29), "one");
        assert_eq!(t.text_at(30), "two");
        assert_eq!(t.text_at(45), "three");
        assert_eq!(t.text_at(60), "zero");
        assert_eq!(t.text_at(90), "two");
        assert_eq!(t.text_at(99), "two");
    }

    #[test]
    fn final_text_at_and_beyond_max() {
        let t = timeline();
        assert_eq!(t.text_at(100), FINAL_TEXT);
        assert_eq!(t.text_at(250), FINAL_TEXT);
    }

    #[test]
    fn checkpoints_cover_the_run() {
        let cps = timeline().checkpoints();
        let progress: Vec<u8> = cps.iter().map(|c| c.progress).collect();
        assert_eq!(progress, [0, 15, 30, 45, 60, 75, 90, 100]);
        assert_eq!(cps.first().map(|c| c.text.as_str()), Some(INITIAL_TEXT));
        assert_eq!(cps.last().map(|c| c.text.as_str()), Some(FINAL_TEXT));
    }

    #[test]
    fn checkpoints_agree_with_text_at() {
        let t = timeline();
        for cp in t.checkpoints() {
            assert_eq!(t.text_at(cp.progress), cp.text);
        }
    }

    #[test]
    fn no_messages_keeps_initial_text() {
        let t = LoadingTimeline::default();
        assert_eq!(t.text_at(50), INITIAL_TEXT);
        assert_eq!(t.checkpoints().len(), 2);
    }
}
