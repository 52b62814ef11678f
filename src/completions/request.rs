use serde::Serialize;
use serde_json::Value;

use crate::completions::params::CompletionParams;
use crate::core::{LlmError, Message};

/// Wire body for `POST /{model}/complete`.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub params: &'a CompletionParams,
}

/// Join message contents in order. Roles do not affect the prompt.
pub fn flatten_messages(messages: &[Message]) -> String {
    messages.iter().map(|m| m.content.as_str()).collect()
}

/// Build `{prompt, ...params}` as a JSON object.
pub fn build_request_body(prompt: &str, params: &CompletionParams) -> Result<Value, LlmError> {
    serde_json::to_value(Request { prompt, params }).map_err(|e| LlmError::Parse {
        message: "Failed to serialize completion request".to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChatRole;
    use serde_json::json;

    #[test]
    fn flattening_concatenates_contents_in_order() {
        let messages = vec![
            Message::system("You are terse. "),
            Message::user("Name a color."),
            Message::assistant(" Blue."),
        ];
        assert_eq!(
            flatten_messages(&messages),
            "You are terse. Name a color. Blue."
        );
    }

    #[test]
    fn flattening_ignores_roles() {
        let as_user = vec![Message::user("a"), Message::user("b")];
        let mixed = vec![
            Message {
                role: ChatRole::Assistant,
                content: "a".to_string(),
            },
            Message {
                role: ChatRole::System,
                content: "b".to_string(),
            },
        ];
        assert_eq!(flatten_messages(&as_user), flatten_messages(&mixed));
    }

    #[test]
    fn flattening_empty_list_gives_empty_prompt() {
        assert_eq!(flatten_messages(&[]), "");
    }

    #[test]
    fn body_places_params_beside_prompt() {
        let params = CompletionParams::new().max_tokens(32).stream(true);
        let body = build_request_body("Hello", &params).unwrap();
        assert_eq!(
            body,
            json!({ "prompt": "Hello", "maxTokens": 32, "stream": true })
        );
    }

    #[test]
    fn body_with_no_params_holds_only_prompt() {
        let body = build_request_body("Hi", &CompletionParams::default()).unwrap();
        assert_eq!(body, json!({ "prompt": "Hi" }));
    }
}
