//! Opt-in retry decorator around a completion client
//!
//! The pipeline itself never retries; a caller wanting backoff wraps its
//! client in `RetryingClient` before handing it to the pipeline.

use crate::config::RetryConfig;
use crate::error::Result;
use crate::llm::client::{CompletionClient, CompletionOptions};
use async_trait::async_trait;
use log::warn;
use std::time::Duration;

pub struct RetryingClient<C> {
    inner: C,
    max_retries: u32,
    backoff_ms: u64,
}

impl<C: CompletionClient> RetryingClient<C> {
    pub fn new(inner: C, config: &RetryConfig) -> Self {
        Self {
            inner,
            max_retries: config.max_retries,
            backoff_ms: config.backoff_ms,
        }
    }
}

#[async_trait]
impl<C: CompletionClient> CompletionClient for RetryingClient<C> {
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.inner.complete(prompt, options).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    // Exponential backoff: backoff_ms, 2x, 4x, ...
                    let delay = Duration::from_millis(self.backoff_ms << attempt);
                    warn!(
                        "Transient provider failure (attempt {}): {}; retrying in {}ms",
                        attempt + 1,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
