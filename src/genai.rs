//! Boundary to the external text-generation service.
//!
//! The orchestrator and chat session talk to a [`TextGenerator`] trait
//! object rather than a concrete HTTP client, so the fallback policy can
//! be tested without a network. The production implementation lives in
//! [`client::GeminiClient`].

pub mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ChatMessage, ChatRole};

/// Per-request options for a generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Optional system instruction framing the model's role.
    pub system_instruction: Option<String>,
    /// Request search grounding; may be unavailable and must degrade
    /// gracefully (the caller retries without it).
    pub enable_search_augmentation: bool,
}

/// The only error kind the generation boundary raises. The fallback policy
/// treats all causes uniformly.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key set (expected GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Request/response interface to the generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}

/// An ongoing conversation with the assistant.
///
/// The session folds its transcript into each request so the stateless
/// generation interface behaves like a chat. There is no fallback chain
/// here; a failed turn surfaces directly.
#[derive(Debug, Clone)]
pub struct ChatSession {
    model: String,
    system_instruction: String,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(model: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Render the transcript plus the pending user turn into one prompt.
    fn render_prompt(&self, pending: &str) -> String {
        let mut prompt = String::new();
        for message in &self.transcript {
            let speaker = match message.role {
                ChatRole::User => "User",
                ChatRole::Model => "Assistant",
            };
            prompt.push_str(speaker);
            prompt.push_str(": ");
            prompt.push_str(&message.text);
            prompt.push('\n');
        }
        prompt.push_str("User: ");
        prompt.push_str(pending);
        prompt
    }

    /// Send one user message and append both turns to the transcript.
    pub async fn send_message<G: TextGenerator + ?Sized>(
        &mut self,
        generator: &G,
        text: &str,
    ) -> Result<String, GenerationError> {
        let options = GenerationOptions {
            system_instruction: Some(self.system_instruction.clone()),
            enable_search_augmentation: false,
        };
        let prompt = self.render_prompt(text);
        let reply = generator
            .generate_content(&self.model, &prompt, &options)
            .await?;
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
        });
        self.transcript.push(ChatMessage {
            role: ChatRole::Model,
            text: reply.clone(),
        });
        Ok(reply)
    }
}

/// System instruction for the built-in assistant.
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are the 'Content Buddy' AI assistant. Your goal is to help content creators with their workflow, offer creative advice, and help them use the app features (Synopsis Generator, Hashtag Optimizer, Studio). Be friendly, concise, and helpful.";
