//! Summarization capability: the trait seam and its Hugging Face backend

pub mod capability;
pub mod client;
pub mod pipeline;

#[cfg(test)]
mod test_server;

// Re-export main types for convenience
pub use capability::{CapabilityLoader, SummarizationCapability};
pub use client::{InferenceClient, OutputField};
pub use pipeline::{BartPipeline, HubLoader, Pipeline, T5Pipeline};
