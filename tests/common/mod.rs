#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use briefly::BrieflyError;
use briefly::ai::{CapabilityLoader, SummarizationCapability};
use briefly::core::models::SummaryRequest;

/// Capability double that records requests and replays a canned answer.
#[derive(Debug, Clone)]
pub struct FakeCapability {
    pub answer: Result<Vec<String>, String>,
    pub requests: Arc<Mutex<Vec<SummaryRequest>>>,
}

impl FakeCapability {
    pub fn returning(summaries: &[&str]) -> Self {
        Self {
            answer: Ok(summaries.iter().map(|s| (*s).to_string()).collect()),
            requests: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            requests: Arc::default(),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SummarizationCapability for FakeCapability {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<String>, BrieflyError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            Ok(summaries) => Ok(summaries.clone()),
            Err(message) => Err(BrieflyError::SummarizationFailed(message.clone())),
        }
    }
}

/// Loader double. Every capability it hands out shares one request log.
#[derive(Debug, Clone)]
pub struct FakeLoader {
    pub capability: FakeCapability,
    pub unavailable: bool,
    pub loaded_models: Arc<Mutex<Vec<String>>>,
}

impl FakeLoader {
    pub fn returning(summary: &str) -> Self {
        Self::with_capability(FakeCapability::returning(&[summary]))
    }

    pub fn with_capability(capability: FakeCapability) -> Self {
        Self {
            capability,
            unavailable: false,
            loaded_models: Arc::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::returning("unused")
        }
    }

    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.capability.requests.lock().unwrap().clone()
    }

    pub fn loaded_models(&self) -> Vec<String> {
        self.loaded_models.lock().unwrap().clone()
    }
}

#[async_trait]
impl CapabilityLoader for FakeLoader {
    type Capability = FakeCapability;

    async fn load(&self, model_identifier: &str) -> Result<FakeCapability, BrieflyError> {
        self.loaded_models
            .lock()
            .unwrap()
            .push(model_identifier.to_string());
        if self.unavailable {
            return Err(BrieflyError::CapabilityUnavailable(format!(
                "{}: HTTP 404: Repository not found",
                model_identifier
            )));
        }
        Ok(self.capability.clone())
    }
}

/// Writes `contents` to `name` inside a fresh temp directory.
pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("briefly-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}
