//! Batch evaluation: summarize the built-in samples and score them.

pub mod rouge;
pub mod samples;

use std::collections::BTreeMap;
use std::io::Write;

use tracing::info;

use crate::ai::CapabilityLoader;
use crate::core::models::{ModelChoice, SummarizationConfig};
use crate::errors::BrieflyError;
use crate::summarizer::TextSummarizer;

pub use rouge::{QualityScorer, ROUGE_1, ROUGE_2, ROUGE_L, ROUGE_LSUM, RougeScorer};
pub use samples::{SAMPLE_DATA, Sample, select_samples};

pub const DEFAULT_EVAL_MAX_LENGTH: u32 = 120;
pub const DEFAULT_EVAL_MIN_LENGTH: u32 = 40;
pub const DEFAULT_EVAL_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    pub model: ModelChoice,
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    pub limit: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            model: ModelChoice::default(),
            max_length: DEFAULT_EVAL_MAX_LENGTH,
            min_length: DEFAULT_EVAL_MIN_LENGTH,
            do_sample: false,
            limit: DEFAULT_EVAL_LIMIT,
        }
    }
}

impl EvalOptions {
    #[must_use]
    pub fn config(&self) -> SummarizationConfig {
        SummarizationConfig::new(
            self.model.model_identifier(),
            self.max_length,
            self.min_length,
            self.do_sample,
        )
    }

    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "Evaluating ROUGE for model={} ({}) max={} min={} do_sample={}",
            self.model,
            self.model.model_identifier(),
            self.max_length,
            self.min_length,
            self.do_sample
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePrediction {
    pub id: String,
    pub prediction: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalReport {
    pub options: EvalOptions,
    pub predictions: Vec<SamplePrediction>,
    pub scores: BTreeMap<String, f64>,
}

impl EvalReport {
    #[must_use]
    pub fn score(&self, metric: &str) -> f64 {
        self.scores.get(metric).copied().unwrap_or(0.0)
    }

    /// The four scores, one per line, to 4 decimals.
    #[must_use]
    pub fn render_scores(&self) -> String {
        let mut out = String::from("ROUGE Results:\n");
        for (label, metric) in [
            ("ROUGE-1   ", ROUGE_1),
            ("ROUGE-2   ", ROUGE_2),
            ("ROUGE-L   ", ROUGE_L),
            ("ROUGE-Lsum", ROUGE_LSUM),
        ] {
            out.push_str(&format!("{}: {:.4}\n", label, self.score(metric)));
        }
        out
    }
}

fn write_prediction<W: Write>(out: &mut W, p: &SamplePrediction) -> std::io::Result<()> {
    writeln!(out, "--- {} ---", p.id)?;
    writeln!(out, "PRED: {}", p.prediction)?;
    writeln!(out, "REF:  {}", p.reference)?;
    writeln!(out)
}

/// Puts each sentence on its own line, which summary-level ROUGE relies on.
#[must_use]
pub fn segment_sentences(text: &str) -> String {
    text.replace(". ", ".\n")
}

/// Summarizes each selected sample once and scores the batch.
///
/// Progress goes to `out` as it happens: the header first, then one block per
/// sample as soon as it is summarized, then the scores.
pub async fn run_evaluation<L, S, W>(
    options: &EvalOptions,
    samples: &[Sample],
    loader: &L,
    scorer: &S,
    out: &mut W,
) -> Result<EvalReport, BrieflyError>
where
    L: CapabilityLoader,
    S: QualityScorer,
    W: Write,
{
    writeln!(out, "\n{}\n", options.header())?;
    out.flush()?;

    let summarizer = TextSummarizer::load(options.config(), loader).await?;
    let selected = select_samples(samples, options.limit);

    let mut predictions = Vec::with_capacity(selected.len());
    for sample in selected {
        let prediction = SamplePrediction {
            id: sample.id.to_string(),
            prediction: summarizer.summarize(sample.text).await?,
            reference: sample.reference.to_string(),
        };
        info!(sample = sample.id, "Sample summarized");
        write_prediction(out, &prediction)?;
        out.flush()?;
        predictions.push(prediction);
    }

    let segmented_predictions: Vec<String> = predictions
        .iter()
        .map(|p| segment_sentences(&p.prediction))
        .collect();
    let segmented_references: Vec<String> = predictions
        .iter()
        .map(|p| segment_sentences(&p.reference))
        .collect();

    let scores = scorer.score(&segmented_predictions, &segmented_references)?;
    let report = EvalReport {
        options: options.clone(),
        predictions,
        scores,
    };
    write!(out, "{}", report.render_scores())?;

    Ok(report)
}
