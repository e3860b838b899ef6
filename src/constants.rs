pub const API_BASE_ENV: &str = "VOICE_CORRECTION_API_BASE";
pub const API_KEY_ENV: &str = "VOICE_CORRECTION_API_KEY";
pub const MODEL_ENV: &str = "VOICE_CORRECTION_MODEL";

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_API_KEY: &str = "sk-placeholder";
pub const DEFAULT_MODEL: &str = "small";

/// Hard cap on generated tokens, attached to every request.
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

pub const MESSAGES_API_VERSION: &str = "2023-06-01";
