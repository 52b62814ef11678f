pub mod ai21 {
    pub const API_BASE: &str = "https://api.ai21.com/studio/v1";
    pub const COMPLETE_ENDPOINT: &str = "/complete";
    pub const API_KEY_ENV_VAR: &str = "AI21_API_KEY";
}
