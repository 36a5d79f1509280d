//! Affirmation quotes: one generator call at a time, deduplicated against
//! recent quotes, with a local pool whenever the generator lets us down.

pub mod extract;
pub mod pool;
pub mod rotation;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::models::quote::{QuoteResponse, QuoteSource};
use crate::services::text_gen::TextGenerator;

pub use extract::extract;
pub use rotation::QuoteRotation;

const QUOTE_PROMPT: &str = "Share one short, uplifting affirmation quote for someone checking in on their mood today. \
Reply with the quote followed by its author.";

pub struct QuoteService {
    generator: Arc<dyn TextGenerator>,
    rotation: Mutex<QuoteRotation>,
    timeout: Duration,
}

impl QuoteService {
    pub fn new(generator: Arc<dyn TextGenerator>, failure_limit: u32, timeout: Duration) -> Self {
        Self {
            generator,
            rotation: Mutex::new(QuoteRotation::new(pool::fallback_pool(), failure_limit)),
            timeout,
        }
    }

    /// The rotation lock is held across the generator call, so concurrent
    /// requests queue behind a single outstanding call.
    pub async fn next_quote(&self) -> QuoteResponse {
        let mut rotation = self.rotation.lock().await;

        if rotation.should_skip_remote() {
            tracing::info!(
                generator = self.generator.name(),
                failures = rotation.consecutive_failures(),
                "Skipping quote generator after repeated failures"
            );
            return QuoteResponse::new(
                rotation.surface_fallback(&mut rand::thread_rng()),
                QuoteSource::Fallback,
            );
        }

        let outcome = tokio::time::timeout(self.timeout, self.generator.generate(QUOTE_PROMPT)).await;

        match outcome {
            Ok(Ok(text)) => {
                rotation.record_success();
                let candidate = extract(&text);
                if let Some(quote) = rotation.accept(candidate) {
                    return QuoteResponse::new(quote, QuoteSource::Generated);
                }
                tracing::debug!("Generated quote was empty or recently shown, using fallback");
            }
            Ok(Err(e)) => {
                rotation.record_failure();
                tracing::warn!(
                    error = %e,
                    generator = self.generator.name(),
                    failures = rotation.consecutive_failures(),
                    "Quote generator failed, using fallback"
                );
            }
            Err(_) => {
                rotation.record_failure();
                tracing::warn!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    generator = self.generator.name(),
                    failures = rotation.consecutive_failures(),
                    "Quote generator timed out, using fallback"
                );
            }
        }

        QuoteResponse::new(
            rotation.surface_fallback(&mut rand::thread_rng()),
            QuoteSource::Fallback,
        )
    }
}
