use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{error, info};
use uuid::Uuid;

use crate::ai::CapabilityLoader;
use crate::core::models::{ModelChoice, SummarizationConfig};
use crate::errors::BrieflyError;
use crate::summarizer::{TextSummarizer, compute_length_reduction, format_stats};

pub const DEFAULT_FORM_MAX_LENGTH: u32 = 120;
pub const DEFAULT_FORM_MIN_LENGTH: u32 = 40;

pub const STATUS_IN_PROGRESS: &str = "⏳ Summarizing…";
pub const STATUS_IDLE: &str = "";

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text or upload a .txt file.";
pub const DOWNLOAD_FILE_NAME: &str = "summary.txt";

/// Values submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub text: Option<String>,
    /// An uploaded file; wins over `text` when both are present.
    pub file_path: Option<PathBuf>,
    pub model_choice: String,
    pub max_length: u32,
    pub min_length: u32,
    pub creative_mode: bool,
}

impl Default for FormRequest {
    fn default() -> Self {
        Self {
            text: None,
            file_path: None,
            model_choice: ModelChoice::default().keyword().to_string(),
            max_length: DEFAULT_FORM_MAX_LENGTH,
            min_length: DEFAULT_FORM_MIN_LENGTH,
            creative_mode: false,
        }
    }
}

/// Values written back to the form's outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// The summary, or a message explaining why there is none.
    pub summary: String,
    pub stats: String,
    pub download_visible: bool,
}

impl FormResponse {
    fn message(message: impl Into<String>) -> Self {
        Self {
            summary: message.into(),
            stats: String::new(),
            download_visible: false,
        }
    }
}

fn read_input(request: &FormRequest) -> Result<String, String> {
    match &request.file_path {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("Error reading file: {}", e)),
        None => Ok(request.text.clone().unwrap_or_default()),
    }
}

/// Handles a press of the summarize action.
///
/// Never fails: every error is turned into a message in the summary slot,
/// with the download control hidden.
pub async fn summarize_form<L: CapabilityLoader>(
    request: &FormRequest,
    loader: &L,
) -> FormResponse {
    let text = match read_input(request) {
        Ok(text) => text,
        Err(message) => {
            error!("{}", message);
            return FormResponse::message(message);
        }
    };

    if text.trim().is_empty() {
        return FormResponse::message(EMPTY_INPUT_MESSAGE);
    }

    let config = SummarizationConfig::from_keyword(
        &request.model_choice,
        request.max_length,
        request.min_length,
        request.creative_mode,
    );

    let summary = match summarize_text(config, loader, &text).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Form summarization failed: {}", e);
            return FormResponse::message(e.to_string());
        }
    };

    let stats = compute_length_reduction(&text, &summary);
    FormResponse {
        summary,
        stats: format_stats(&stats),
        download_visible: true,
    }
}

async fn summarize_text<L: CapabilityLoader>(
    config: SummarizationConfig,
    loader: &L,
    text: &str,
) -> Result<String, BrieflyError> {
    let summarizer = TextSummarizer::load(config, loader).await?;
    summarizer.summarize(text).await
}

/// Like [`summarize_form`], bracketed by status updates for the status line.
pub async fn summarize_form_with_status<L, F>(
    request: &FormRequest,
    loader: &L,
    mut on_status: F,
) -> FormResponse
where
    L: CapabilityLoader,
    F: FnMut(&str),
{
    on_status(STATUS_IN_PROGRESS);
    let response = summarize_form(request, loader).await;
    on_status(STATUS_IDLE);
    response
}

/// Materializes `summary` as a downloadable file in a fresh temp directory.
///
/// Returns `None` for a blank summary.
pub fn write_summary_download(summary: &str) -> Result<Option<PathBuf>, BrieflyError> {
    if summary.trim().is_empty() {
        return Ok(None);
    }

    let dir = env::temp_dir().join(format!("briefly-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir)?;
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, summary)?;

    info!(path = %path.display(), "Summary written for download");
    Ok(Some(path))
}
