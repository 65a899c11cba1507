/// Briefly - a text summarizer over pretrained BART, DistilBART and T5 models.
///
/// Every entry point (the `briefly` CLI, the form callback and the
/// `briefly-eval` batch evaluator) turns its input into a text plus a
/// [`SummarizationConfig`] and hands both to one [`TextSummarizer`] façade.
///
/// # Architecture
///
/// The crate uses:
/// - the Hugging Face inference API (via reqwest) as the summarization backend
/// - a closed set of per-family pipelines (BART-style and T5) behind the
///   [`ai::SummarizationCapability`] trait
/// - Tokio for the async runtime, driven on a single thread
/// - tracing for structured logs on stderr
///
/// # Example
///
/// ```no_run
/// use briefly::ai::HubLoader;
/// use briefly::core::config::AppConfig;
/// use briefly::{SummarizationConfig, TextSummarizer, compute_length_reduction};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app_config = AppConfig::from_env()?;
///     briefly::setup_logging_with(app_config.log_format);
///     let loader = HubLoader::new(&app_config)?;
///
///     let config = SummarizationConfig::from_keyword("distilbart", 60, 20, false);
///     let summarizer = TextSummarizer::load(config, &loader).await?;
///
///     let text = "A long article that deserves a much shorter summary ...";
///     let summary = summarizer.summarize(text).await?;
///     let stats = compute_length_reduction(text, &summary);
///     println!("{summary} ({:.1}% shorter)", stats.reduction_fraction * 100.0);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod cli;
pub mod core;
pub mod errors;
pub mod evaluation;
pub mod summarizer;
pub mod ui;

pub use crate::core::models::{ModelChoice, SummarizationConfig, TextStats, resolve_model_name};
pub use errors::BrieflyError;
pub use summarizer::{TextSummarizer, compute_length_reduction, format_stats};

use crate::core::config::{LogFormat, parse_log_format};

/// Configure logging from `BRIEFLY_LOG_FORMAT` and `RUST_LOG`.
///
/// Logs go to stderr so stdout stays reserved for summaries. Calling this more
/// than once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// briefly::setup_logging();
/// ```
pub fn setup_logging() {
    let format = parse_log_format(std::env::var("BRIEFLY_LOG_FORMAT").ok().as_deref());
    setup_logging_with(format);
}

/// Install the subscriber with an explicit format, as the binaries do with
/// `AppConfig::log_format`.
pub fn setup_logging_with(format: LogFormat) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("briefly=info"));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Plain => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}
