//! # ai21-complete
//!
//! Adapter for the AI21 Studio completion endpoint. A chat-style message list
//! is flattened into one prompt, sent to `/{model}/complete`, and the answer is
//! mapped back into a [`ModelResponse`] with locally counted token usage.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai21_complete::{Ai21Client, Ai21Config, ApiKey, CompletionParams, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Ai21Client::new(Ai21Config::new(ApiKey::Default))?;
//! let encoder = |text: &str| text.split_whitespace().map(|_| 0u32).collect::<Vec<_>>();
//!
//! let completion = client
//!     .completion(
//!         "j2-mid",
//!         &[Message::user("Write a haiku about the sea.")],
//!         CompletionParams::new().max_tokens(64),
//!         &encoder,
//!     )
//!     .await?;
//!
//! if let Some(response) = completion.into_response() {
//!     println!("{}", response.content());
//! }
//! Ok(())
//! }
//! ```
//!
//! Setting `stream` returns [`Completion::Stream`], the raw response lines.

pub mod completions;
pub mod core;
pub mod provider;

pub use completions::{CompletionParams, Penalty, flatten_messages};
pub use crate::core::{
    CallLogger, ChatRole, Completion, Encoder, HttpClientConfig, LanguageModelUsage, LineStream,
    LlmError, Message, ModelResponse, PostCall, PreCall, TracingLogger,
};
pub use provider::{Ai21Client, Ai21Config, ApiKey, validate_credentials};
