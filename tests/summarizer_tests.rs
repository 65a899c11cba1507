mod common;

use briefly::core::models::{DISTILBART_MODEL, SummarizationConfig, T5_MODEL};
use briefly::{BrieflyError, TextSummarizer};
use common::{FakeCapability, FakeLoader};

fn config(do_sample: bool) -> SummarizationConfig {
    SummarizationConfig::new(DISTILBART_MODEL, 90, 15, do_sample)
}

#[tokio::test]
async fn test_empty_input_rejected_before_capability_call() {
    let capability = FakeCapability::returning(&["never used"]);
    let summarizer = TextSummarizer::new(config(false), capability.clone()).unwrap();

    for blank in ["", "   ", "\n\t "] {
        let err = summarizer.summarize(blank).await.unwrap_err();
        assert!(matches!(err, BrieflyError::EmptyInput));
    }
    assert_eq!(capability.request_count(), 0);
}

#[tokio::test]
async fn test_request_carries_config_and_truncation() {
    let capability = FakeCapability::returning(&["a summary"]);
    let summarizer = TextSummarizer::new(config(true), capability.clone()).unwrap();

    let summary = summarizer.summarize("  Some long input text.  ").await.unwrap();
    assert_eq!(summary, "a summary");

    let requests = capability.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.text, "  Some long input text.  ");
    assert_eq!(request.max_length, 90);
    assert_eq!(request.min_length, 15);
    assert!(request.do_sample);
    assert!(request.truncate);
}

#[tokio::test]
async fn test_first_candidate_is_returned() {
    let capability = FakeCapability::returning(&["best", "runner-up"]);
    let summarizer = TextSummarizer::new(config(false), capability).unwrap();
    assert_eq!(summarizer.summarize("text").await.unwrap(), "best");
}

#[tokio::test]
async fn test_empty_candidate_list_is_a_failure() {
    let capability = FakeCapability::returning(&[]);
    let summarizer = TextSummarizer::new(config(false), capability).unwrap();

    let err = summarizer.summarize("text").await.unwrap_err();
    assert_eq!(err.to_string(), "Summarization failed: no summary returned");
}

#[tokio::test]
async fn test_capability_failure_propagates_without_retry() {
    let capability = FakeCapability::failing("CUDA out of memory");
    let summarizer = TextSummarizer::new(config(false), capability.clone()).unwrap();

    let err = summarizer.summarize("text").await.unwrap_err();
    assert!(matches!(err, BrieflyError::SummarizationFailed(ref m) if m == "CUDA out of memory"));
    assert_eq!(capability.request_count(), 1);
}

#[tokio::test]
async fn test_load_binds_named_model() {
    let loader = FakeLoader::returning("loaded summary");
    let config = SummarizationConfig::new(T5_MODEL, 60, 20, false);
    let summarizer = TextSummarizer::load(config, &loader).await.unwrap();

    assert_eq!(summarizer.config().model_identifier, T5_MODEL);
    assert_eq!(loader.loaded_models(), vec![T5_MODEL.to_string()]);
    assert_eq!(summarizer.summarize("input").await.unwrap(), "loaded summary");
}

#[tokio::test]
async fn test_load_reports_unavailable_model() {
    let loader = FakeLoader::unavailable();
    let err = TextSummarizer::load(config(false), &loader).await.unwrap_err();

    assert!(matches!(err, BrieflyError::CapabilityUnavailable(_)));
    assert!(err.to_string().contains(DISTILBART_MODEL));
}

#[test]
fn test_new_rejects_invalid_config() {
    let inverted = SummarizationConfig::new(T5_MODEL, 10, 11, false);
    let err = TextSummarizer::new(inverted, FakeCapability::returning(&["x"])).unwrap_err();
    assert!(matches!(err, BrieflyError::InvalidConfig(_)));
}
