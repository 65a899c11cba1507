use std::env;
use std::time::Duration;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_token: Option<String>,
    pub inference_url: String,
    pub hub_url: String,
    /// `None` means requests block until the inference endpoint answers.
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_token: None,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            hub_url: DEFAULT_HUB_URL.to_string(),
            request_timeout: None,
            log_format: LogFormat::Plain,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let request_timeout = match env::var("BRIEFLY_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| format!("BRIEFLY_TIMEOUT_SECS: {}", e))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            hf_api_token: env::var("HF_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            inference_url: env::var("HF_INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            hub_url: env::var("HF_HUB_URL").unwrap_or_else(|_| DEFAULT_HUB_URL.to_string()),
            request_timeout,
            log_format: parse_log_format(env::var("BRIEFLY_LOG_FORMAT").ok().as_deref()),
        })
    }
}

#[must_use]
pub fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Plain,
    }
}
