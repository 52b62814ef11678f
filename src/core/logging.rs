//! Default [`CallLogger`] backed by `tracing`.

use tracing::debug;

use super::traits::{CallLogger, PostCall, PreCall};

/// Emits pre/post call events at `debug` level. The API key is redacted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl CallLogger for TracingLogger {
    fn pre_call(&self, event: &PreCall<'_>) {
        debug!(
            api_key = %redact_key(event.api_key),
            input = event.input,
            request_body = %event.request_body,
            "sending completion request"
        );
    }

    fn post_call(&self, event: &PostCall<'_>) {
        debug!(
            api_key = %redact_key(event.api_key),
            input = event.input,
            request_body = %event.request_body,
            original_response = event.original_response,
            "received completion response"
        );
    }
}

/// Mask all but the last four characters of a key.
pub fn redact_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_all_but_last_four() {
        assert_eq!(redact_key("sk-123456789"), "********6789");
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(redact_key("abcd"), "****");
        assert_eq!(redact_key(""), "");
    }

    #[test]
    fn tracing_logger_accepts_events() {
        let body = serde_json::json!({ "prompt": "hi" });
        let logger = TracingLogger;
        logger.pre_call(&PreCall {
            input: "hi",
            api_key: "secret-key",
            request_body: &body,
        });
        logger.post_call(&PostCall {
            input: "hi",
            api_key: "secret-key",
            original_response: "{}",
            request_body: &body,
        });
    }
}
