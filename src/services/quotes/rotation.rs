use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::quote::{Quote, UNKNOWN_AUTHOR};

const LAST_RESORT: &str = "One day at a time.";

/// Variety and backoff state for one quote feed.
///
/// Remembers the last `pool.len() / 2` surfaced texts so neither a generated
/// quote nor a fallback repeats too soon, and counts consecutive generator
/// failures so a dead generator is not called on every request.
#[derive(Debug)]
pub struct QuoteRotation {
    pool: Vec<Quote>,
    recent: VecDeque<String>,
    recent_limit: usize,
    current: Option<Quote>,
    consecutive_failures: u32,
    failure_limit: u32,
}

impl QuoteRotation {
    pub fn new(pool: Vec<Quote>, failure_limit: u32) -> Self {
        let recent_limit = (pool.len() / 2).max(1);
        Self {
            pool,
            recent: VecDeque::with_capacity(recent_limit + 1),
            recent_limit,
            current: None,
            consecutive_failures: 0,
            failure_limit,
        }
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Once failures exceed the limit, each call skips the generator once and
    /// steps the counter back down, so the next call tries it again.
    pub fn should_skip_remote(&mut self) -> bool {
        if self.consecutive_failures > self.failure_limit {
            self.consecutive_failures -= 1;
            true
        } else {
            false
        }
    }

    pub fn record_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Surface a generated candidate unless it is empty or was seen recently.
    pub fn accept(&mut self, candidate: Quote) -> Option<Quote> {
        if candidate.text.trim().is_empty() || self.is_stale(&candidate.text) {
            return None;
        }
        Some(self.remember(candidate))
    }

    /// Surface a pool quote that is not in the recency window.
    pub fn surface_fallback<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Quote {
        let fresh: Vec<&Quote> = self
            .pool
            .iter()
            .filter(|q| !self.is_stale(&q.text))
            .collect();

        let pick = match fresh.choose(rng) {
            Some(q) => (*q).clone(),
            None => {
                let not_current: Vec<&Quote> = self
                    .pool
                    .iter()
                    .filter(|q| !self.is_current(&q.text))
                    .collect();
                not_current
                    .choose(rng)
                    .map(|q| (*q).clone())
                    .unwrap_or_else(|| Quote::new(LAST_RESORT, UNKNOWN_AUTHOR))
            }
        };

        self.remember(pick)
    }

    fn is_current(&self, text: &str) -> bool {
        self.current.as_ref().is_some_and(|q| q.text == text)
    }

    fn is_stale(&self, text: &str) -> bool {
        self.is_current(text) || self.recent.iter().any(|t| t == text)
    }

    fn remember(&mut self, quote: Quote) -> Quote {
        self.recent.push_back(quote.text.clone());
        while self.recent.len() > self.recent_limit {
            self.recent.pop_front();
        }
        self.current = Some(quote.clone());
        quote
    }
}
