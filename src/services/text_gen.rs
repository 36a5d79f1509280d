//! Remote text generation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Prompt in, unstructured text out. No shape is guaranteed.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

pub struct ClaudeGenerator {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl ClaudeGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: 256,
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl TextGenerator for ClaudeGenerator {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        if self.api_key.is_empty() {
            anyhow::bail!("CLAUDE_API_KEY is not configured");
        }

        let response = self
            .client
            .post(CLAUDE_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens: self.max_tokens,
                messages: [Message {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Claude API error {}: {}", status, body);
        }

        let body: MessagesResponse = response.json().await?;
        first_text(body).ok_or_else(|| anyhow::anyhow!("Claude response contained no text"))
    }
}

fn first_text(body: MessagesResponse) -> Option<String> {
    body.content
        .into_iter()
        .find_map(|block| block.text)
        .filter(|t| !t.trim().is_empty())
}

/// Generators for tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays canned replies in order; errors once the script runs out.
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.replies.lock().unwrap().pop_front();
            match next {
                Some(Ok(text)) => Ok(text),
                Some(Err(e)) => Err(anyhow::anyhow!(e)),
                None => Err(anyhow::anyhow!("script exhausted")),
            }
        }
    }

    /// Never answers within any reasonable timeout.
    pub struct StalledGenerator;

    #[async_trait]
    impl TextGenerator for StalledGenerator {
        fn name(&self) -> &'static str {
            "stalled"
        }

        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".into())
        }
    }
}
