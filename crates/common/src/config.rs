use serde::Deserialize;

/// Default upstream endpoint for homework review statuses.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// OAuth token for the review-status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat that receives all notifications
    pub telegram_chat_id: String,

    /// Upstream review-status endpoint
    pub endpoint: String,

    /// Seconds to sleep between polling cycles (default: 600)
    pub poll_interval_secs: u64,

    /// Stop the process after a successful cycle that returned zero work items
    /// (default: false — keep polling indefinitely)
    pub exit_on_empty: bool,

    /// Skip a work item that fails translation instead of aborting the whole
    /// cycle's dispatch (default: false — first bad item aborts the cycle)
    pub skip_bad_items: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The three secrets are required; the process must refuse to start
    /// without them.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            practicum_token: std::env::var("PRACTICUM_TOKEN")
                .map_err(|_| anyhow::anyhow!("PRACTICUM_TOKEN environment variable is required"))?,
            telegram_token: std::env::var("TELEGRAM_TOKEN")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_TOKEN environment variable is required"))?,
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_CHAT_ID environment variable is required"))?,
            endpoint: std::env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("POLL_INTERVAL_SECS must be a valid u64"))?,
            exit_on_empty: std::env::var("EXIT_ON_EMPTY")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("EXIT_ON_EMPTY must be true or false"))?,
            skip_bad_items: std::env::var("SKIP_BAD_ITEMS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SKIP_BAD_ITEMS must be true or false"))?,
        })
    }
}
