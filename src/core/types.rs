use serde::{Deserialize, Serialize};

use super::stream::LineStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Normalized completion returned for non-streaming calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResponse {
    pub choices: Vec<Choice>,
    /// Unix timestamp (seconds) of when the response was assembled.
    pub created: i64,
    pub model: String,
    pub usage: LanguageModelUsage,
}

impl ModelResponse {
    /// Text of the first choice.
    pub fn content(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.finish_reason.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub index: usize,
    pub message: ResponseMessage,
    pub finish_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LanguageModelUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

impl LanguageModelUsage {
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Outcome of a completion call: a parsed response, or the raw line stream
/// when streaming was requested.
pub enum Completion {
    Response(ModelResponse),
    Stream(LineStream),
}

impl Completion {
    pub fn into_response(self) -> Option<ModelResponse> {
        match self {
            Completion::Response(response) => Some(response),
            Completion::Stream(_) => None,
        }
    }

    pub fn into_stream(self) -> Option<LineStream> {
        match self {
            Completion::Stream(stream) => Some(stream),
            Completion::Response(_) => None,
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Completion::Stream(_))
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Response(response) => f.debug_tuple("Response").field(response).finish(),
            Completion::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
