//! Configuration-driven summarization façade shared by every entry point.

pub mod stats;

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::ai::{CapabilityLoader, Pipeline, SummarizationCapability};
use crate::core::models::{SummarizationConfig, SummaryRequest};
use crate::errors::BrieflyError;

pub use stats::{compute_length_reduction, format_stats, word_count};

/// Binds one [`SummarizationConfig`] to one loaded capability.
///
/// A façade is built per configuration and never re-targeted; loaded models
/// are not shared between façades.
#[derive(Debug)]
pub struct TextSummarizer<C = Pipeline> {
    config: SummarizationConfig,
    capability: C,
}

impl<C: SummarizationCapability> TextSummarizer<C> {
    /// Wraps an already loaded capability.
    pub fn new(config: SummarizationConfig, capability: C) -> Result<Self, BrieflyError> {
        config.validate()?;
        Ok(Self { config, capability })
    }

    /// Validates `config` and loads the model it names through `loader`.
    pub async fn load<L>(config: SummarizationConfig, loader: &L) -> Result<Self, BrieflyError>
    where
        L: CapabilityLoader<Capability = C>,
    {
        config.validate()?;
        let capability = loader
            .load(&config.model_identifier)
            .await
            .map_err(|e| match e {
                BrieflyError::CapabilityUnavailable(_) => e,
                other => BrieflyError::CapabilityUnavailable(format!(
                    "{}: {}",
                    config.model_identifier, other
                )),
            })?;
        Ok(Self { config, capability })
    }

    #[must_use]
    pub fn config(&self) -> &SummarizationConfig {
        &self.config
    }

    /// Summarizes `text` and returns the capability's top result.
    ///
    /// Blank input is rejected before the capability is touched. Capability
    /// failures come back as [`BrieflyError::SummarizationFailed`] without
    /// retries.
    pub async fn summarize(&self, text: &str) -> Result<String, BrieflyError> {
        if text.trim().is_empty() {
            return Err(BrieflyError::EmptyInput);
        }

        let request = SummaryRequest {
            text: text.to_string(),
            max_length: self.config.max_length,
            min_length: self.config.min_length,
            do_sample: self.config.do_sample,
            truncate: true,
        };

        let span = info_span!(
            "summarize",
            request_id = %Uuid::new_v4(),
            model = %self.config.model_identifier,
            do_sample = self.config.do_sample
        );

        async {
            let summaries = self.capability.summarize(&request).await.map_err(|e| match e {
                BrieflyError::SummarizationFailed(_) => e,
                other => BrieflyError::SummarizationFailed(other.to_string()),
            })?;

            if summaries.len() > 1 {
                info!("Capability returned {} candidates, keeping the first", summaries.len());
            }

            summaries.into_iter().next().ok_or_else(|| {
                warn!("Capability returned no summaries");
                BrieflyError::SummarizationFailed("no summary returned".to_string())
            })
        }
        .instrument(span)
        .await
    }
}
