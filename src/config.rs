pub const DEFAULT_BOT_TOKEN: &str = "here goes your access token from BotFather";
pub const DEFAULT_BOT_USERNAME: &str = "the username you entered";
pub const DEFAULT_WEBHOOK_URL: &str = "https://localhost";
pub const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_bot_username: String,
    /// Not used by long polling; kept so a webhook deployment reads the same config.
    pub webhook_url: String,

    pub cat_api_url: String,
    /// Long-poll timeout handed to Telegram's getUpdates
    pub poll_timeout_secs: u64,
    /// Request timeout for the image API client
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Reads configuration from the process environment. Missing keys fall back to
    /// placeholders, so this never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            telegram_bot_token: or("TELEGRAM_BOT_TOKEN", DEFAULT_BOT_TOKEN),
            telegram_bot_username: or("TELEGRAM_BOT_USERNAME", DEFAULT_BOT_USERNAME),
            webhook_url: or("WEBHOOK_URL", DEFAULT_WEBHOOK_URL),
            cat_api_url: or("CAT_API_URL", DEFAULT_CAT_API_URL),
            poll_timeout_secs: secs("POLL_TIMEOUT_SECS", 10),
            http_timeout_secs: secs("HTTP_TIMEOUT_SECS", 10),
        }
    }

    pub fn has_placeholder_token(&self) -> bool {
        self.telegram_bot_token == DEFAULT_BOT_TOKEN
    }
}
