use serde_json::Value;

/// Tokenizer used for local usage accounting.
pub trait Encoder {
    fn encode(&self, text: &str) -> Vec<u32>;
}

impl<F> Encoder for F
where
    F: Fn(&str) -> Vec<u32>,
{
    fn encode(&self, text: &str) -> Vec<u32> {
        self(text)
    }
}

/// Payload handed to [`CallLogger::pre_call`] before the request goes out.
#[derive(Debug, Clone, Copy)]
pub struct PreCall<'a> {
    pub input: &'a str,
    pub api_key: &'a str,
    pub request_body: &'a Value,
}

/// Payload handed to [`CallLogger::post_call`] once a non-streaming response
/// body has been read.
#[derive(Debug, Clone, Copy)]
pub struct PostCall<'a> {
    pub input: &'a str,
    pub api_key: &'a str,
    pub original_response: &'a str,
    pub request_body: &'a Value,
}

/// Observability hook around each completion request. Side effects only.
pub trait CallLogger: Send + Sync {
    fn pre_call(&self, event: &PreCall<'_>);

    fn post_call(&self, event: &PostCall<'_>);
}
