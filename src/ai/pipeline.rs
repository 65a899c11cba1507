//! Per-family summarization pipelines over the inference client.

use async_trait::async_trait;
use tracing::info;

use super::capability::{CapabilityLoader, SummarizationCapability};
use super::client::{InferenceClient, InferenceParameters, OutputField, Truncation};
use crate::core::config::AppConfig;
use crate::core::models::{ModelFamily, SummaryRequest};
use crate::errors::BrieflyError;

fn parameters_for(request: &SummaryRequest) -> InferenceParameters {
    InferenceParameters {
        max_length: request.max_length,
        min_length: request.min_length,
        do_sample: request.do_sample,
        truncation: Truncation::from_flag(request.truncate),
    }
}

/// BART-style encoder-decoders (BART, DistilBART) with a summarization head.
#[derive(Debug, Clone)]
pub struct BartPipeline {
    client: InferenceClient,
    model_identifier: String,
}

impl BartPipeline {
    #[must_use]
    pub fn new(client: InferenceClient, model_identifier: impl Into<String>) -> Self {
        Self {
            client,
            model_identifier: model_identifier.into(),
        }
    }
}

#[async_trait]
impl SummarizationCapability for BartPipeline {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<String>, BrieflyError> {
        self.client
            .summarize(
                &self.model_identifier,
                &request.text,
                &parameters_for(request),
                OutputField::Summary,
            )
            .await
    }
}

/// T5 checkpoints. The hosted pipeline adds the task prefix from the model's
/// own config; the text goes out as given. Text2text deployments answer with
/// `generated_text`.
#[derive(Debug, Clone)]
pub struct T5Pipeline {
    client: InferenceClient,
    model_identifier: String,
}

impl T5Pipeline {
    #[must_use]
    pub fn new(client: InferenceClient, model_identifier: impl Into<String>) -> Self {
        Self {
            client,
            model_identifier: model_identifier.into(),
        }
    }
}

#[async_trait]
impl SummarizationCapability for T5Pipeline {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<String>, BrieflyError> {
        self.client
            .summarize(
                &self.model_identifier,
                &request.text,
                &parameters_for(request),
                OutputField::SummaryOrGenerated,
            )
            .await
    }
}

/// The supported model families. Chosen once, when a model is loaded.
#[derive(Debug, Clone)]
pub enum Pipeline {
    Bart(BartPipeline),
    T5(T5Pipeline),
}

impl Pipeline {
    #[must_use]
    pub fn for_model(client: InferenceClient, model_identifier: &str) -> Self {
        match ModelFamily::for_model(model_identifier) {
            ModelFamily::Bart => Pipeline::Bart(BartPipeline::new(client, model_identifier)),
            ModelFamily::T5 => Pipeline::T5(T5Pipeline::new(client, model_identifier)),
        }
    }

    #[must_use]
    pub fn family(&self) -> ModelFamily {
        match self {
            Pipeline::Bart(_) => ModelFamily::Bart,
            Pipeline::T5(_) => ModelFamily::T5,
        }
    }

    #[must_use]
    pub fn model_identifier(&self) -> &str {
        match self {
            Pipeline::Bart(p) => &p.model_identifier,
            Pipeline::T5(p) => &p.model_identifier,
        }
    }
}

#[async_trait]
impl SummarizationCapability for Pipeline {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<String>, BrieflyError> {
        match self {
            Pipeline::Bart(p) => p.summarize(request).await,
            Pipeline::T5(p) => p.summarize(request).await,
        }
    }
}

/// Resolves models against the hub before handing out a [`Pipeline`].
#[derive(Debug, Clone)]
pub struct HubLoader {
    client: InferenceClient,
}

impl HubLoader {
    pub fn new(config: &AppConfig) -> Result<Self, BrieflyError> {
        Ok(Self {
            client: InferenceClient::new(config)?,
        })
    }
}

#[async_trait]
impl CapabilityLoader for HubLoader {
    type Capability = Pipeline;

    async fn load(&self, model_identifier: &str) -> Result<Pipeline, BrieflyError> {
        self.client.resolve_model(model_identifier).await?;
        let pipeline = Pipeline::for_model(self.client.clone(), model_identifier);
        info!(
            model = model_identifier,
            family = ?pipeline.family(),
            "Summarization pipeline ready"
        );
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::test_server::CannedServer;

    fn request(text: &str) -> SummaryRequest {
        SummaryRequest {
            text: text.to_string(),
            max_length: 60,
            min_length: 20,
            do_sample: false,
            truncate: true,
        }
    }

    fn client() -> InferenceClient {
        InferenceClient::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_pipeline_selection_by_family() {
        let bart = Pipeline::for_model(client(), "facebook/bart-large-cnn");
        assert_eq!(bart.family(), ModelFamily::Bart);
        assert_eq!(bart.model_identifier(), "facebook/bart-large-cnn");

        let distil = Pipeline::for_model(client(), "sshleifer/distilbart-cnn-12-6");
        assert_eq!(distil.family(), ModelFamily::Bart);

        let t5 = Pipeline::for_model(client(), "t5-small");
        assert_eq!(t5.family(), ModelFamily::T5);
        assert_eq!(t5.model_identifier(), "t5-small");
    }

    #[tokio::test]
    async fn test_t5_sends_text_unchanged() {
        let server = CannedServer::start(vec![
            (200, r#"{"id":"t5-small"}"#),
            (200, r#"[{"generated_text":"short text"}]"#),
        ]);
        let loader = HubLoader::new(&server.config(None)).unwrap();

        let pipeline = loader.load("t5-small").await.unwrap();
        assert_eq!(pipeline.family(), ModelFamily::T5);
        let summaries = pipeline.summarize(&request("long text")).await.unwrap();
        assert_eq!(summaries, vec!["short text".to_string()]);

        let requests = server.finish();
        assert!(requests[0].request_line.starts_with("GET /api/models/t5-small "));
        let body = requests[1].json();
        assert_eq!(body["inputs"], "long text");
        assert_eq!(body["parameters"]["truncation"], "only_first");
    }

    #[tokio::test]
    async fn test_bart_requires_summary_text() {
        let server = CannedServer::start(vec![(200, r#"[{"generated_text":"short text"}]"#)]);
        let client = InferenceClient::new(&server.config(None)).unwrap();
        let pipeline = Pipeline::for_model(client, "facebook/bart-large-cnn");

        let err = pipeline.summarize(&request("long text")).await.unwrap_err();
        assert!(matches!(err, BrieflyError::SummarizationFailed(_)));

        let requests = server.finish();
        assert_eq!(requests[0].json()["inputs"], "long text");
    }

    #[test]
    fn test_parameters_follow_request() {
        let request = SummaryRequest {
            max_length: 80,
            min_length: 10,
            do_sample: true,
            ..request("x")
        };
        let params = parameters_for(&request);
        assert_eq!(params.max_length, 80);
        assert_eq!(params.min_length, 10);
        assert!(params.do_sample);
        assert_eq!(params.truncation, Truncation::OnlyFirst);
    }
}
