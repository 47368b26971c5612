//! Scripted generator mock for orchestration tests.
//!
//! Returns pre-seeded outcomes in order and records every call so tests
//! can assert the exact attempt sequence (model + augmentation) without
//! any network involvement.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use buddy::genai::{GenerationError, GenerationOptions, TextGenerator};

/// One observed `generate_content` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub augmented: bool,
    pub system_instruction: Option<String>,
    pub prompt: String,
}

pub struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new(outcomes: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            augmented: options.enable_search_augmentation,
            system_instruction: options.system_instruction.clone(),
            prompt: prompt.to_string(),
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

/// Shorthand for an API-shaped failure.
pub fn api_error(status: u16, message: &str) -> GenerationError {
    GenerationError::Api {
        status,
        message: message.to_string(),
    }
}
