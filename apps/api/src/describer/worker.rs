//! Bounded worker pool for description requests.
//!
//! Each job retries on rate limiting with a linear backoff and always resolves
//! to a string: either the generated text or an inline error placeholder.
//! Outcomes are published one per job on a channel as they finish.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::llm_client::TextGenerator;

/// Placeholders produced for failed jobs all start with this token.
pub const ERROR_MARKER: &str = "Error";
/// Returned when the model answers without any text. Not a failure.
pub const NO_TEXT_FALLBACK: &str = "Description could not be generated.";

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// The wait before retry `n` is `backoff_step * n`.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub index: usize,
    /// Place name, for logs.
    pub label: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub index: usize,
    pub text: String,
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        !self.text.contains(ERROR_MARKER)
    }
}

/// Rate-limit errors are recognized by their text.
pub fn is_rate_limited(error: &str) -> bool {
    error.contains("429") || error.to_lowercase().contains("rate")
}

/// Generates one description under `policy`.
pub async fn describe_with_retry(
    generator: &dyn TextGenerator,
    prompt: &str,
    policy: &RetryPolicy,
    label: &str,
) -> String {
    for attempt in 1..=policy.max_attempts {
        info!(place = label, attempt, "Generating description");
        match generator.generate(prompt).await {
            Ok(Some(text)) => return text,
            Ok(None) => return NO_TEXT_FALLBACK.to_string(),
            Err(e) => {
                let error = e.to_string();
                warn!(place = label, attempt, %error, "Description attempt failed");
                if !is_rate_limited(&error) {
                    return format!("{ERROR_MARKER}: generation failed: {error}");
                }
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.backoff_step * attempt).await;
                }
            }
        }
    }
    format!("{ERROR_MARKER}: retries exhausted.")
}

/// Runs `jobs` on a detached task with at most `concurrency` in flight and
/// returns the channel their outcomes arrive on, in completion order. Jobs
/// keep running if the receiver is dropped.
pub fn spawn_generation(
    jobs: Vec<GenerationJob>,
    generator: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
    concurrency: usize,
) -> mpsc::Receiver<GenerationOutcome> {
    let (tx, rx) = mpsc::channel(jobs.len().max(1));

    tokio::spawn(async move {
        stream::iter(jobs)
            .for_each_concurrent(concurrency.max(1), |job| {
                let generator = Arc::clone(&generator);
                let tx = tx.clone();
                async move {
                    let text =
                        describe_with_retry(generator.as_ref(), &job.prompt, &policy, &job.label)
                            .await;
                    let outcome = GenerationOutcome {
                        index: job.index,
                        text,
                    };
                    if tx.send(outcome).await.is_err() {
                        debug!(index = job.index, "Outcome receiver dropped");
                    }
                }
            })
            .await;
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describer::testing::{FixedGenerator, ScriptedGenerator, SlowEchoGenerator};
    use crate::llm_client::{GeminiClient, LlmError};
    use tokio::time::Instant;

    fn rate_limited() -> LlmError {
        LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        }
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(is_rate_limited("API error (status 429): quota"));
        assert!(is_rate_limited("Rate limit exceeded"));
        assert!(!is_rate_limited("API error (status 400): bad request"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_after_rate_limit_then_succeeds() {
        let generator = ScriptedGenerator::new(vec![
            Err(rate_limited()),
            Err(rate_limited()),
            Ok(Some("A quiet camp by the lake.".to_string())),
        ]);
        let start = Instant::now();

        let text = describe_with_retry(&generator, "p", &RetryPolicy::default(), "Camp").await;

        assert_eq!(text, "A quiet camp by the lake.");
        assert_eq!(generator.calls(), 3);
        // 2s after the first failure, 4s after the second
        let waited = start.elapsed();
        assert!(waited >= Duration::from_secs(6), "waited {waited:?}");
        assert!(waited < Duration::from_millis(6100), "waited {waited:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_after_three_rate_limits() {
        let generator = ScriptedGenerator::new(vec![
            Err(rate_limited()),
            Err(rate_limited()),
            Err(rate_limited()),
        ]);
        let text = describe_with_retry(&generator, "p", &RetryPolicy::default(), "Camp").await;
        assert_eq!(text, "Error: retries exhausted.");
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_other_errors_stop_immediately() {
        let generator = ScriptedGenerator::new(vec![
            Err(LlmError::Api {
                status: 400,
                message: "API key not valid".to_string(),
            }),
            Ok(Some("never reached".to_string())),
        ]);
        let text = describe_with_retry(&generator, "p", &RetryPolicy::default(), "Camp").await;
        assert!(text.starts_with("Error: generation failed: "));
        assert!(text.contains("API key not valid"));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_fails_without_retry() {
        // Connection refused on port 1 is a transport error, not a rate limit.
        let client = GeminiClient::with_base_url(
            "SECRET-KEY-123".to_string(),
            "http://127.0.0.1:1/v1beta/models",
        )
        .unwrap();
        let start = Instant::now();

        let text = describe_with_retry(&client, "p", &RetryPolicy::default(), "Camp").await;

        assert!(text.starts_with("Error: generation failed: "), "{text}");
        assert!(!text.contains("SECRET-KEY-123"), "{text}");
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_empty_answer_is_not_an_error() {
        let generator = FixedGenerator::none();
        let text = describe_with_retry(&generator, "p", &RetryPolicy::default(), "Camp").await;
        let outcome = GenerationOutcome { index: 0, text };
        assert!(outcome.is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pool_publishes_every_outcome() {
        let jobs: Vec<GenerationJob> = (0..6)
            .map(|i| GenerationJob {
                index: i,
                label: format!("Camp {i}"),
                prompt: format!("prompt {i}"),
            })
            .collect();

        let generator = Arc::new(SlowEchoGenerator::default());
        let mut rx = spawn_generation(jobs, generator.clone(), RetryPolicy::default(), 2);

        let mut outcomes = Vec::new();
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
        }
        outcomes.sort_by_key(|o| o.index);

        assert_eq!(outcomes.len(), 6);
        assert_eq!(outcomes[4].text, "echo: prompt 4");
        assert!(generator.peak_in_flight() <= 2);
    }
}
