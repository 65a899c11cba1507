use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::errors::BrieflyError;

pub const BART_MODEL: &str = "facebook/bart-large-cnn";
pub const DISTILBART_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const T5_MODEL: &str = "t5-small";

/// Used whenever a model keyword is not recognized.
pub const DEFAULT_MODEL: &str = BART_MODEL;

/// The model keywords offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    #[default]
    Bart,
    DistilBart,
    T5,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Bart, ModelChoice::DistilBart, ModelChoice::T5];

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            ModelChoice::Bart => "bart",
            ModelChoice::DistilBart => "distilbart",
            ModelChoice::T5 => "t5",
        }
    }

    #[must_use]
    pub fn model_identifier(self) -> &'static str {
        match self {
            ModelChoice::Bart => BART_MODEL,
            ModelChoice::DistilBart => DISTILBART_MODEL,
            ModelChoice::T5 => T5_MODEL,
        }
    }

    /// Case-insensitive keyword lookup.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let lowered = keyword.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.keyword() == lowered)
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ModelChoice {
    type Err = BrieflyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| {
            BrieflyError::InvalidArgument(format!("Unknown model: {}", s.to_lowercase()))
        })
    }
}

/// Maps a keyword to a model identifier, falling back to [`DEFAULT_MODEL`].
///
/// The fallback is logged so a mistyped keyword does not go unnoticed.
#[must_use]
pub fn resolve_model_name(keyword: &str) -> &'static str {
    if let Some(choice) = ModelChoice::from_keyword(keyword) {
        return choice.model_identifier();
    }
    warn!(
        keyword = keyword,
        fallback = DEFAULT_MODEL,
        "Unrecognized model keyword, using default model"
    );
    DEFAULT_MODEL
}

/// Architecture family, which decides how inputs are framed for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Bart,
    T5,
}

impl ModelFamily {
    /// Identifiers that are not recognizably T5 are treated as BART-style
    /// encoder-decoders, which take raw text.
    #[must_use]
    pub fn for_model(model_identifier: &str) -> Self {
        let name = model_identifier
            .rsplit('/')
            .next()
            .unwrap_or(model_identifier)
            .to_lowercase();
        if name.starts_with("t5") || name.starts_with("flan-t5") {
            ModelFamily::T5
        } else {
            ModelFamily::Bart
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationConfig {
    pub model_identifier: String,
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            model_identifier: DEFAULT_MODEL.to_string(),
            max_length: 60,
            min_length: 20,
            do_sample: false,
        }
    }
}

impl SummarizationConfig {
    #[must_use]
    pub fn new(
        model_identifier: impl Into<String>,
        max_length: u32,
        min_length: u32,
        do_sample: bool,
    ) -> Self {
        Self {
            model_identifier: model_identifier.into(),
            max_length,
            min_length,
            do_sample,
        }
    }

    /// Builds a config from a user-facing keyword, with the lenient fallback.
    #[must_use]
    pub fn from_keyword(keyword: &str, max_length: u32, min_length: u32, do_sample: bool) -> Self {
        Self::new(resolve_model_name(keyword), max_length, min_length, do_sample)
    }

    #[must_use]
    pub fn family(&self) -> ModelFamily {
        ModelFamily::for_model(&self.model_identifier)
    }

    pub fn validate(&self) -> Result<(), BrieflyError> {
        if self.model_identifier.trim().is_empty() {
            return Err(BrieflyError::InvalidConfig(
                "model identifier must not be empty".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(BrieflyError::InvalidConfig(
                "max length must be greater than zero".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(BrieflyError::InvalidConfig(format!(
                "min length {} exceeds max length {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

/// What the façade forwards to a summarization capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    /// Inputs longer than the model context are cut, never rejected.
    pub truncate: bool,
}

/// Word-count comparison between an input and its summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub reduction_fraction: f64,
}
