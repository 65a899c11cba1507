// Entry point for `briefly-eval`, which scores the summarizer with ROUGE

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use briefly::ModelChoice;
use briefly::ai::HubLoader;
use briefly::core::config::AppConfig;
use briefly::evaluation::{
    DEFAULT_EVAL_LIMIT, DEFAULT_EVAL_MAX_LENGTH, DEFAULT_EVAL_MIN_LENGTH, EvalOptions, RougeScorer,
    SAMPLE_DATA, run_evaluation,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Bart,
    #[value(name = "distilbart")]
    DistilBart,
    T5,
}

impl From<ModelArg> for ModelChoice {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Bart => ModelChoice::Bart,
            ModelArg::DistilBart => ModelChoice::DistilBart,
            ModelArg::T5 => ModelChoice::T5,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate the Briefly summarizer with ROUGE.", long_about = None)]
struct Args {
    /// Model choice
    #[arg(long, value_enum, default_value_t = ModelArg::Bart)]
    model: ModelArg,

    /// Max summary length (tokens)
    #[arg(long, default_value_t = DEFAULT_EVAL_MAX_LENGTH)]
    max: u32,

    /// Min summary length (tokens)
    #[arg(long, default_value_t = DEFAULT_EVAL_MIN_LENGTH)]
    min: u32,

    /// Enable sampling (creative mode)
    #[arg(long = "do-sample", alias = "do_sample")]
    do_sample: bool,

    /// How many samples from the built-in set to evaluate
    #[arg(long, default_value_t = DEFAULT_EVAL_LIMIT)]
    limit: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    briefly::setup_logging_with(config.log_format);
    let loader = HubLoader::new(&config).context("Failed to set up the inference client")?;

    let options = EvalOptions {
        model: args.model.into(),
        max_length: args.max,
        min_length: args.min,
        do_sample: args.do_sample,
        limit: args.limit,
    };

    let mut stdout = io::stdout().lock();
    let report = run_evaluation(&options, SAMPLE_DATA, &loader, &RougeScorer, &mut stdout)
        .await
        .context("Evaluation failed")?;

    info!(samples = report.predictions.len(), "Evaluation complete");
    Ok(())
}
