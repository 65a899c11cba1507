use async_trait::async_trait;

use crate::core::models::SummaryRequest;
use crate::errors::BrieflyError;

/// Anything that can turn a [`SummaryRequest`] into candidate summaries.
///
/// Implementations return one or more summaries, best first. They must honor
/// `truncate` by cutting over-long inputs instead of failing on them.
#[async_trait]
pub trait SummarizationCapability: Send + Sync {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<String>, BrieflyError>;
}

/// Resolves a model identifier into a ready capability.
///
/// Loading may be slow (network round trips, model warm-up) and is done once
/// per façade.
#[async_trait]
pub trait CapabilityLoader: Send + Sync {
    type Capability: SummarizationCapability;

    async fn load(&self, model_identifier: &str) -> Result<Self::Capability, BrieflyError>;
}
