//! Hugging Face inference API client
//!
//! Encapsulates the HTTP calls used to resolve summarization models and run
//! inference against them.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::core::config::AppConfig;
use crate::errors::BrieflyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncation {
    OnlyFirst,
    DoNotTruncate,
}

impl Truncation {
    #[must_use]
    pub fn from_flag(truncate: bool) -> Self {
        if truncate {
            Truncation::OnlyFirst
        } else {
            Truncation::DoNotTruncate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    pub truncation: Truncation,
}

#[derive(Debug, Clone, Serialize)]
pub struct InferenceOptions {
    /// Block until a cold model is loaded instead of returning 503.
    pub wait_for_model: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a InferenceParameters,
    pub options: InferenceOptions,
}

/// Response fields a model family is allowed to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputField {
    /// `summary_text` only, as summarization heads return.
    Summary,
    /// `summary_text`, or `generated_text` from text2text heads.
    SummaryOrGenerated,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: Option<String>,
    generated_text: Option<String>,
}

impl SummaryItem {
    fn into_text(self, field: OutputField) -> Result<String, BrieflyError> {
        match (self.summary_text, self.generated_text, field) {
            (Some(text), _, _) => Ok(text),
            (None, Some(text), OutputField::SummaryOrGenerated) => Ok(text),
            _ => Err(BrieflyError::SummarizationFailed(
                "Inference response has no summary_text".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Summaries(Vec<SummaryItem>),
    Error { error: String },
}

/// Parses an inference response body into summaries, best first.
pub fn parse_summary_response(
    body: &str,
    field: OutputField,
) -> Result<Vec<String>, BrieflyError> {
    match serde_json::from_str::<InferenceResponse>(body)? {
        InferenceResponse::Summaries(items) => {
            items.into_iter().map(|item| item.into_text(field)).collect()
        }
        InferenceResponse::Error { error } => Err(BrieflyError::SummarizationFailed(error)),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(status: StatusCode, body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };
    format!("HTTP {}: {}", status.as_u16(), detail)
}

/// Joins `path` onto `base`, treating `base` as a directory.
pub fn endpoint(base: &str, path: &str) -> Result<Url, BrieflyError> {
    let mut root = base.trim_end_matches('/').to_string();
    root.push('/');
    Url::parse(&root)
        .and_then(|u| u.join(path.trim_start_matches('/')))
        .map_err(|e| BrieflyError::ConfigError(format!("Invalid endpoint {}: {}", base, e)))
}

/// HTTP client for the hub (model metadata) and inference endpoints
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    inference_url: String,
    hub_url: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(config: &AppConfig) -> Result<Self, BrieflyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| BrieflyError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        // Validate both bases up front so bad config fails before any request.
        endpoint(&config.inference_url, "models/")?;
        endpoint(&config.hub_url, "api/models/")?;

        Ok(Self {
            http,
            inference_url: config.inference_url.clone(),
            hub_url: config.hub_url.clone(),
            api_token: config.hf_api_token.clone(),
        })
    }

    pub fn inference_endpoint(&self, model_identifier: &str) -> Result<Url, BrieflyError> {
        endpoint(&self.inference_url, &format!("models/{}", model_identifier))
    }

    pub fn hub_endpoint(&self, model_identifier: &str) -> Result<Url, BrieflyError> {
        endpoint(&self.hub_url, &format!("api/models/{}", model_identifier))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Confirms the model exists on the hub.
    pub async fn resolve_model(&self, model_identifier: &str) -> Result<(), BrieflyError> {
        let url = self.hub_endpoint(model_identifier)?;
        info!(model = model_identifier, "Resolving summarization model");

        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|e| {
                BrieflyError::CapabilityUnavailable(format!("{}: {}", model_identifier, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BrieflyError::CapabilityUnavailable(format!(
                "{}: {}",
                model_identifier,
                error_message(status, &body)
            )));
        }

        debug!(model = model_identifier, "Model resolved");
        Ok(())
    }

    pub async fn summarize(
        &self,
        model_identifier: &str,
        inputs: &str,
        parameters: &InferenceParameters,
        field: OutputField,
    ) -> Result<Vec<String>, BrieflyError> {
        let url = self.inference_endpoint(model_identifier)?;
        let request_body = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        #[cfg(feature = "debug-logs")]
        info!("Inference request body: {}", serde_json::to_string(&request_body)?);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary from {} for {} input chars (max={}, min={}, do_sample={})",
            model_identifier,
            inputs.chars().count(),
            parameters.max_length,
            parameters.min_length,
            parameters.do_sample
        );

        let response = self
            .authorize(self.http.post(url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                BrieflyError::SummarizationFailed(format!("Inference request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BrieflyError::SummarizationFailed(error_message(status, &body)));
        }

        parse_summary_response(&body, field)
    }
}
