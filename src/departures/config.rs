use std::time::Duration;

pub const LOCATION_URL: &str = "LOCATION_URL";
pub const SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";

pub const LOCATION_URL_SAMPLE: &str =
    "https://api.9292.nl/0.1/locations/STOP_NAME/departure-times?lang=en-GB";
pub const SLACK_WEBHOOK_SAMPLE: &str = "https://hooks.slack.com/services/TOKEN-HERE";

/// Upper bound for each HTTP call, not for the whole invocation.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub location_url: String,
    pub slack_webhook: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            location_url: env_or(LOCATION_URL, LOCATION_URL_SAMPLE),
            slack_webhook: env_or(SLACK_WEBHOOK, SLACK_WEBHOOK_SAMPLE),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Value of `key` if the variable is present, even when empty.
pub fn env_or(key: &str, fallback: &str) -> String {
    match std::env::var_os(key) {
        Some(value) => value.to_string_lossy().into_owned(),
        None => fallback.to_string(),
    }
}
