pub mod error;
pub mod http;
pub mod logging;
pub mod stream;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig, RawResponse};
pub use logging::TracingLogger;
pub use stream::LineStream;
pub use traits::{CallLogger, Encoder, PostCall, PreCall};
pub use types::{
    ChatRole, Choice, Completion, LanguageModelUsage, Message, ModelResponse, ResponseMessage,
};
