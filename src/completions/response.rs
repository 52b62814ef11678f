//! AI21 completion response body and its extraction.

use serde::Deserialize;
use serde_json::Value;

use crate::core::{LlmError, RawResponse};

#[derive(Debug, Deserialize)]
pub struct Response {
    pub completions: Vec<CompletionItem>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionItem {
    pub data: CompletionData,
    #[serde(rename = "finishReason")]
    pub finish_reason: FinishReason,
}

#[derive(Debug, Deserialize)]
pub struct CompletionData {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct FinishReason {
    pub reason: String,
}

/// Text and finish reason of the first completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub finish_reason: String,
}

/// Interpret a raw response body.
///
/// A top-level `error` key becomes an API error carrying that payload. Any
/// other body that does not hold at least one completion becomes an API error
/// carrying the whole raw body. The status code rides along in both cases.
pub fn extract_completion(raw: &RawResponse) -> Result<Extracted, LlmError> {
    let unexpected = || LlmError::Api {
        message: raw.text.clone(),
        status_code: Some(raw.status),
        source: None,
    };

    let value: Value = serde_json::from_str(&raw.text).map_err(|e| LlmError::Api {
        message: raw.text.clone(),
        status_code: Some(raw.status),
        source: Some(Box::new(e)),
    })?;

    if let Some(error) = value.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(LlmError::Api {
            message,
            status_code: Some(raw.status),
            source: None,
        });
    }

    let response: Response = serde_json::from_value(value).map_err(|_| unexpected())?;
    let first = response
        .completions
        .into_iter()
        .next()
        .ok_or_else(unexpected)?;

    Ok(Extracted {
        text: first.data.text,
        finish_reason: first.finish_reason.reason,
    })
}
