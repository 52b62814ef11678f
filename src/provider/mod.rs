pub mod constants;
pub(crate) mod ai21;

pub use ai21::{Ai21Client, Ai21Config, validate_credentials};

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read `AI21_API_KEY` from the environment.
    Default,
    Custom(String),
}

impl ApiKey {
    /// Resolve to a key. An unset or empty variable yields `None`; the call
    /// fails later, before any request is sent.
    pub fn resolve(&self) -> Option<String> {
        match self {
            ApiKey::Default => std::env::var(constants::ai21::API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.is_empty()),
            ApiKey::Custom(key) => Some(key.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_key_resolves_to_itself() {
        assert_eq!(
            ApiKey::Custom("k".to_string()).resolve(),
            Some("k".to_string())
        );
    }
}
