//! Scripted completion backend for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionService, LlmError};

type Responder = Box<dyn Fn(&str) -> Result<String, LlmError> + Send + Sync>;

/// A hand-rolled mock implementing [`CompletionService`].
///
/// Replies are produced by a closure over the user prompt, and every
/// `(system, prompt)` pair is recorded for later inspection.
pub struct MockCompletion {
    responder: Responder,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockCompletion {
    pub fn new(responder: impl Fn(&str) -> Result<String, LlmError> + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always replies with `reply`.
    pub fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::new(move |_| Ok(reply.clone()))
    }

    /// Fails any call whose prompt contains `needle`; echoes a canned reply otherwise.
    pub fn failing_when(needle: &'static str) -> Self {
        Self::new(move |prompt| {
            if prompt.contains(needle) {
                Err(LlmError::Api {
                    status: 429,
                    message: "You exceeded your current quota".to_string(),
                })
            } else {
                Ok("Looks fine.".to_string())
            }
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        (self.responder)(prompt)
    }
}
