use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub url: String,
    pub api_key: String,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    pub max_retries: Option<u32>,
}
