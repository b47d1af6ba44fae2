//! Decorative page content: fun facts and request identifiers.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::LoadingTimeline;

/// Characters used in a [`RequestId`].
const REQUEST_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated [`RequestId`].
pub const REQUEST_ID_LEN: usize = 10;

/// Random base-36 identifier shown on the page and echoed in the
/// `x-request-id` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Draws a new identifier of [`REQUEST_ID_LEN`] characters.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..REQUEST_ID_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..REQUEST_ID_ALPHABET.len());
                REQUEST_ID_ALPHABET.get(idx).copied().map_or('0', char::from)
            })
            .collect();
        Self(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static copy for the page: fun facts and the loading timeline.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    fun_facts: Vec<String>,
    timeline: LoadingTimeline,
}

impl ContentCatalog {
    /// Creates a catalog from loaded fun facts and loading messages.
    #[must_use]
    pub fn new(fun_facts: Vec<String>, loading_messages: Vec<String>) -> Self {
        Self {
            fun_facts,
            timeline: LoadingTimeline::new(loading_messages),
        }
    }

    /// All configured fun facts.
    #[must_use]
    pub fn fun_facts(&self) -> &[String] {
        &self.fun_facts
    }

    /// Picks one fun fact uniformly at random, or `None` if none are
    /// configured.
    pub fn random_fun_fact<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.fun_facts.choose(rng).map(String::as_str)
    }

    /// Progress bar status timeline.
    #[must_use]
    pub fn timeline(&self) -> &LoadingTimeline {
        &self.timeline
    }
}
