//! AI21 completion parameters.
//!
//! Every field is optional. Unset fields are left out of the request and the
//! service applies its own default, noted on each field. Nothing is validated
//! locally.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionParams {
    /// Number of completions to sample. Service default: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,

    /// Maximum tokens generated per result. Service default: 16.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Minimum tokens generated per result; stop sequences are ignored until
    /// reached. Service default: 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<u32>,

    /// Service default: 0.7. Zero means greedy decoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling mass. Service default: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,

    /// Alternatives returned per position, 0 to 10. Service default: 0.
    #[serde(rename = "topKReturn", skip_serializing_if = "Option::is_none")]
    pub top_k_return: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<Penalty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<Penalty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_penalty: Option<Penalty>,

    /// Return the raw response lines instead of a parsed completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// AI21 penalty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_whitespaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_punctuations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_stopwords: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_emojis: Option<bool>,
}

impl Penalty {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            apply_to_whitespaces: None,
            apply_to_punctuations: None,
            apply_to_numbers: None,
            apply_to_stopwords: None,
            apply_to_emojis: None,
        }
    }
}

impl CompletionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_results(mut self, n: u32) -> Self {
        self.num_results = Some(n);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn min_tokens(mut self, min_tokens: u32) -> Self {
        self.min_tokens = Some(min_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    pub fn top_k_return(mut self, top_k_return: u32) -> Self {
        self.top_k_return = Some(top_k_return);
        self
    }

    pub fn frequency_penalty(mut self, penalty: Penalty) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn presence_penalty(mut self, penalty: Penalty) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn count_penalty(mut self, penalty: Penalty) -> Self {
        self.count_penalty = Some(penalty);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }

    pub fn is_stream(&self) -> bool {
        self.stream == Some(true)
    }

    /// Fill every unset field from `defaults`. Fields already set are kept.
    pub fn merged_with(self, defaults: &CompletionParams) -> CompletionParams {
        CompletionParams {
            num_results: self.num_results.or(defaults.num_results),
            max_tokens: self.max_tokens.or(defaults.max_tokens),
            min_tokens: self.min_tokens.or(defaults.min_tokens),
            temperature: self.temperature.or(defaults.temperature),
            top_p: self.top_p.or(defaults.top_p),
            stop_sequences: self
                .stop_sequences
                .or_else(|| defaults.stop_sequences.clone()),
            top_k_return: self.top_k_return.or(defaults.top_k_return),
            frequency_penalty: self
                .frequency_penalty
                .or_else(|| defaults.frequency_penalty.clone()),
            presence_penalty: self
                .presence_penalty
                .or_else(|| defaults.presence_penalty.clone()),
            count_penalty: self
                .count_penalty
                .or_else(|| defaults.count_penalty.clone()),
            stream: self.stream.or(defaults.stream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn caller_values_win_over_defaults() {
        let defaults = CompletionParams::new()
            .max_tokens(16)
            .temperature(0.7)
            .stop_sequences(vec!["##".to_string()]);
        let caller = CompletionParams::new()
            .max_tokens(200)
            .stop_sequences(vec!["\n".to_string()]);

        let merged = caller.merged_with(&defaults);

        assert_eq!(merged.max_tokens, Some(200));
        assert_eq!(merged.stop_sequences, Some(vec!["\n".to_string()]));
        assert_eq!(merged.temperature, Some(0.7));
    }

    #[test]
    fn defaults_fill_only_missing_keys() {
        let defaults = CompletionParams::new()
            .num_results(2)
            .top_k_return(3)
            .count_penalty(Penalty::new(0.5));
        let merged = CompletionParams::new().num_results(1).merged_with(&defaults);

        assert_eq!(merged.num_results, Some(1));
        assert_eq!(merged.top_k_return, Some(3));
        assert_eq!(merged.count_penalty, Some(Penalty::new(0.5)));
        assert_eq!(merged.min_tokens, None);
    }

    #[test]
    fn penalties_are_replaced_whole_not_deep_merged() {
        let mut default_penalty = Penalty::new(1.0);
        default_penalty.apply_to_numbers = Some(true);
        let defaults = CompletionParams::new().presence_penalty(default_penalty);

        let merged = CompletionParams::new()
            .presence_penalty(Penalty::new(0.2))
            .merged_with(&defaults);

        let penalty = merged.presence_penalty.unwrap();
        assert_eq!(penalty.scale, 0.2);
        assert_eq!(penalty.apply_to_numbers, None);
    }

    #[test]
    fn empty_defaults_leave_caller_untouched() {
        let caller = CompletionParams::new().top_p(0.9).stream(true);
        let merged = caller.clone().merged_with(&CompletionParams::default());
        assert_eq!(merged, caller);
    }

    #[test]
    fn serializes_with_service_field_names_and_skips_unset() {
        let mut penalty = Penalty::new(0.25);
        penalty.apply_to_emojis = Some(false);
        let params = CompletionParams::new()
            .num_results(1)
            .max_tokens(64)
            .top_p(0.5)
            .top_k_return(2)
            .frequency_penalty(penalty);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "numResults": 1,
                "maxTokens": 64,
                "topP": 0.5,
                "topKReturn": 2,
                "frequencyPenalty": { "scale": 0.25, "applyToEmojis": false }
            })
        );
    }
}
