//! Speech recognition: the recognizer seam and per-segment outcomes.

pub mod google;

use crate::defaults::{SERVICE_ERROR_PREFIX, UNINTELLIGIBLE_TEXT};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Outcome of recognizing one segment.
///
/// Every failure mode folds into a variant rather than an error: the
/// assembler treats all three identically, as one transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// The service returned a transcript.
    Text(String),
    /// The service found no intelligible speech.
    Unintelligible,
    /// The request failed operationally (network, status, quota, auth).
    Failed(String),
}

impl Recognition {
    /// Render this outcome as its transcript line.
    pub fn into_line(self) -> String {
        match self {
            Recognition::Text(text) => text,
            Recognition::Unintelligible => UNINTELLIGIBLE_TEXT.to_string(),
            Recognition::Failed(detail) => format!("{SERVICE_ERROR_PREFIX} {detail}"),
        }
    }
}

/// Trait for speech-to-text recognition of one segment.
///
/// This trait allows swapping implementations (real service vs mock).
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognize 16-bit PCM samples at 16kHz mono.
    ///
    /// Never returns an error: operational failures are folded into
    /// [`Recognition::Failed`].
    async fn recognize(&self, samples: &[i16]) -> Recognition;
}

/// Mock recognizer for testing.
///
/// Pops queued outcomes in order; once the queue is empty, repeats the
/// fallback outcome.
pub struct MockRecognizer {
    queued: Mutex<VecDeque<Recognition>>,
    fallback: Recognition,
}

impl MockRecognizer {
    /// A mock that always produces `outcome`.
    pub fn returning(outcome: Recognition) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: outcome,
        }
    }

    /// A mock that produces `outcomes` in order, then `Unintelligible`.
    pub fn sequence(outcomes: Vec<Recognition>) -> Self {
        Self {
            queued: Mutex::new(outcomes.into()),
            fallback: Recognition::Unintelligible,
        }
    }
}

#[async_trait::async_trait]
impl Recognizer for MockRecognizer {
    async fn recognize(&self, _samples: &[i16]) -> Recognition {
        let queued = match self.queued.lock() {
            Ok(mut q) => q.pop_front(),
            Err(_) => None,
        };
        queued.unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_renders_as_is() {
        let line = Recognition::Text("hello world".to_string()).into_line();
        assert_eq!(line, "hello world");
    }

    #[test]
    fn unintelligible_renders_placeholder() {
        let line = Recognition::Unintelligible.into_line();
        assert_eq!(line, "Could not understand audio.");
    }

    #[test]
    fn failure_renders_prefixed_detail() {
        let line = Recognition::Failed("quota exceeded".to_string()).into_line();
        assert_eq!(line, "Google API error: quota exceeded");
    }

    #[tokio::test]
    async fn mock_returning_repeats_outcome() {
        let mock = MockRecognizer::returning(Recognition::Text("again".to_string()));

        let audio = vec![0i16; 100];
        assert_eq!(
            mock.recognize(&audio).await,
            Recognition::Text("again".to_string())
        );
        assert_eq!(
            mock.recognize(&audio).await,
            Recognition::Text("again".to_string())
        );
    }

    #[tokio::test]
    async fn mock_sequence_pops_in_order_then_falls_back() {
        let mock = MockRecognizer::sequence(vec![
            Recognition::Text("first".to_string()),
            Recognition::Failed("boom".to_string()),
        ]);

        let audio = vec![0i16; 100];
        assert_eq!(
            mock.recognize(&audio).await,
            Recognition::Text("first".to_string())
        );
        assert_eq!(
            mock.recognize(&audio).await,
            Recognition::Failed("boom".to_string())
        );
        assert_eq!(mock.recognize(&audio).await, Recognition::Unintelligible);
    }

    #[tokio::test]
    async fn recognizer_trait_is_object_safe() {
        let recognizer: Box<dyn Recognizer> =
            Box::new(MockRecognizer::returning(Recognition::Text(
                "boxed".to_string(),
            )));

        let outcome = recognizer.recognize(&[0i16; 10]).await;
        assert_eq!(outcome, Recognition::Text("boxed".to_string()));
    }
}
