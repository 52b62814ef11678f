//! AI21 Studio completion client.

use std::sync::Arc;
use std::time::Duration;

use crate::completions::{
    CompletionParams, build_request_body, flatten_messages, response::extract_completion,
};
use crate::core::{
    CallLogger, ChatRole, Choice, Completion, Encoder, HttpClient, HttpClientConfig,
    LanguageModelUsage, LlmError, Message, ModelResponse, PostCall, PreCall, ResponseMessage,
    TracingLogger,
};
use crate::provider::{ApiKey, constants::ai21};

/// Check that a key is present and build the request headers from it.
pub fn validate_credentials(api_key: Option<&str>) -> Result<Vec<(String, String)>, LlmError> {
    let api_key = api_key.ok_or_else(|| {
        LlmError::ProviderConfiguration(format!(
            "Missing AI21 API key. Pass one explicitly or set {}.",
            ai21::API_KEY_ENV_VAR
        ))
    })?;

    Ok(vec![
        ("accept".to_string(), "application/json".to_string()),
        ("content-type".to_string(), "application/json".to_string()),
        ("Authorization".to_string(), format!("Bearer {api_key}")),
    ])
}

/// AI21-specific client configuration.
#[derive(Debug, Clone)]
pub struct Ai21Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub http_config: HttpClientConfig,
    /// Applied to every call for keys the caller leaves unset.
    pub default_params: CompletionParams,
}

impl Ai21Config {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key: api_key.resolve(),
            base_url: ai21::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
            default_params: CompletionParams::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    pub fn with_default_params(mut self, params: CompletionParams) -> Self {
        self.default_params = params;
        self
    }
}

pub struct Ai21Client {
    config: Ai21Config,
    http: HttpClient,
    logger: Arc<dyn CallLogger>,
}

impl Ai21Client {
    pub fn new(config: Ai21Config) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config)?;
        Ok(Self {
            config,
            http,
            logger: Arc::new(TracingLogger),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &Ai21Config {
        &self.config
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}{}",
            self.config.base_url.trim_end_matches('/'),
            model,
            ai21::COMPLETE_ENDPOINT
        )
    }

    /// Run one completion against `model`.
    ///
    /// With `stream` set (by the caller or the configured defaults) the raw
    /// response lines are returned untouched. Otherwise the body is parsed and
    /// token usage is counted with `encoder`.
    #[tracing::instrument(
        name = "ai21_completion",
        skip(self, messages, params, encoder),
        fields(model = %model, messages = messages.len()),
        err
    )]
    pub async fn completion<E>(
        &self,
        model: &str,
        messages: &[Message],
        params: CompletionParams,
        encoder: &E,
    ) -> Result<Completion, LlmError>
    where
        E: Encoder + Sync + ?Sized,
    {
        let api_key = self.config.api_key.as_deref();
        let headers = validate_credentials(api_key)?;
        let api_key = api_key.unwrap_or_default();

        let prompt = flatten_messages(messages);
        let params = params.merged_with(&self.config.default_params);
        let body = build_request_body(&prompt, &params)?;

        self.logger.pre_call(&PreCall {
            input: &prompt,
            api_key,
            request_body: &body,
        });

        let url = self.endpoint(model);

        if params.is_stream() {
            let lines = self.http.post_lines(&url, &headers, &body).await?;
            return Ok(Completion::Stream(lines));
        }

        let raw = self.http.post_json(&url, &headers, &body).await?;

        self.logger.post_call(&PostCall {
            input: &prompt,
            api_key,
            original_response: &raw.text,
            request_body: &body,
        });

        let extracted = extract_completion(&raw)?;

        let usage = LanguageModelUsage::new(
            encoder.encode(&prompt).len(),
            encoder.encode(&extracted.text).len(),
        );

        Ok(Completion::Response(ModelResponse {
            choices: vec![Choice {
                index: 0,
                message: ResponseMessage {
                    role: ChatRole::Assistant,
                    content: extracted.text,
                },
                finish_reason: extracted.finish_reason,
            }],
            created: chrono::Utc::now().timestamp(),
            model: model.to_string(),
            usage,
        }))
    }

    /// Embeddings are not offered through this adapter.
    pub async fn embedding(&self, _model: &str, _input: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
        Err(LlmError::Unsupported("embedding"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_bearer_key() {
        let headers = validate_credentials(Some("K")).unwrap();
        assert_eq!(
            headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer K".to_string()),
            ]
        );
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = validate_credentials(None).unwrap_err();
        match err {
            LlmError::ProviderConfiguration(message) => {
                assert!(message.contains(ai21::API_KEY_ENV_VAR))
            }
            other => panic!("expected ProviderConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_embeds_model_name() {
        let client = Ai21Client::new(Ai21Config::new(ApiKey::Custom("k".to_string()))).unwrap();
        assert_eq!(
            client.endpoint("j2-ultra"),
            "https://api.ai21.com/studio/v1/j2-ultra/complete"
        );

        let client = Ai21Client::new(
            Ai21Config::new(ApiKey::Custom("k".to_string()))
                .with_base_url("http://localhost:9000/".to_string()),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("j2-mid"),
            "http://localhost:9000/j2-mid/complete"
        );
    }

    #[test]
    fn client_exposes_its_configuration() {
        let config = Ai21Config::new(ApiKey::Custom("k".to_string()))
            .with_timeout(Duration::from_secs(5))
            .with_default_params(CompletionParams::new().max_tokens(32));
        let client = Ai21Client::new(config).unwrap();

        assert_eq!(client.config().api_key.as_deref(), Some("k"));
        assert_eq!(client.config().http_config.timeout, Duration::from_secs(5));
        assert_eq!(client.config().default_params.max_tokens, Some(32));
        assert_eq!(client.config().base_url, ai21::API_BASE);
    }

    #[tokio::test]
    async fn embedding_is_unsupported() {
        let client = Ai21Client::new(Ai21Config::new(ApiKey::Custom("k".to_string()))).unwrap();
        let err = client.embedding("j2-mid", &[]).await.unwrap_err();
        assert!(matches!(err, LlmError::Unsupported("embedding")));
    }
}
