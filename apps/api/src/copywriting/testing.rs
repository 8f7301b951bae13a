//! Test double for the text-generation service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{LlmError, TextGenerator};

enum Canned {
    Text(String),
    Sequence(Vec<String>),
    Unavailable,
}

/// Replays canned replies and records each prompt it receives.
pub struct FakeGenerator {
    reply: Canned,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    fn new(reply: Canned) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replies with the given JSON value serialized as text.
    pub fn replying(body: Value) -> Self {
        Self::new(Canned::Text(body.to_string()))
    }

    /// Replies with each value in turn, wrapping around after the last.
    pub fn replying_each(bodies: Vec<Value>) -> Self {
        Self::new(Canned::Sequence(bodies.iter().map(Value::to_string).collect()))
    }

    pub fn replying_text(text: &str) -> Self {
        Self::new(Canned::Text(text.to_string()))
    }

    /// Fails every call as if the service were unreachable.
    pub fn failing() -> Self {
        Self::new(Canned::Unavailable)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Canned::Text(text) => Ok(text.clone()),
            Canned::Sequence(texts) => Ok(texts[call % texts.len()].clone()),
            Canned::Unavailable => Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}
