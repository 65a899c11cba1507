use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{ModelChoice, SummarizationConfig};
use crate::errors::BrieflyError;

pub const DEFAULT_MAX_LENGTH: u32 = 60;
pub const DEFAULT_MIN_LENGTH: u32 = 20;

/// File extensions treated as plain-text input files.
pub const TEXT_FILE_EXTENSIONS: &[&str] = &["txt"];

pub const USAGE: &str = "Usage: \n\
    briefly \"your long text here\"\n\
    briefly path/to/file.txt\n\
    Options: --model <bart|distilbart|t5> --max <integer> --min <integer> --out <output_filename>";

const MODEL_USAGE: &str = "Usage: --model <bart|distilbart|t5>";
const MAX_USAGE: &str = "Usage: --max <integer>";
const MIN_USAGE: &str = "Usage: --min <integer>";
const OUT_USAGE: &str = "Output file name missing\nUsage: --out <output_filename>";

/// Parsed command line, before any filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub model: ModelChoice,
    pub max_length: u32,
    pub min_length: u32,
    pub output: Option<PathBuf>,
    /// Whatever was left after the flags and their values were removed.
    pub positionals: Vec<String>,
}

impl CliArgs {
    /// The CLI always runs in deterministic mode.
    #[must_use]
    pub fn config(&self) -> SummarizationConfig {
        SummarizationConfig::new(
            self.model.model_identifier(),
            self.max_length,
            self.min_length,
            false,
        )
    }

    /// Positionals joined without separators; quote multi-word input.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.positionals.concat()
    }
}

/// Removes the first `flag` and the token after it, returning that token.
///
/// `Ok(None)` means the flag is absent. A flag in last position is an error.
fn take_flag_value(
    args: &mut Vec<String>,
    flag: &str,
    usage: &str,
) -> Result<Option<String>, BrieflyError> {
    let Some(index) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err(BrieflyError::InvalidArgument(usage.to_string()));
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

fn parse_length(raw: &str, usage: &str) -> Result<u32, BrieflyError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| BrieflyError::InvalidArgument(usage.to_string()))
}

/// Parses the CLI arguments (program name excluded).
///
/// Recognized flags may appear anywhere and in any order; the first
/// occurrence of each wins and later duplicates stay in the positionals.
pub fn parse_cli_args(args: &[String]) -> Result<CliArgs, BrieflyError> {
    let mut rest: Vec<String> = args.to_vec();

    let model = match take_flag_value(&mut rest, "--model", MODEL_USAGE)? {
        Some(keyword) => keyword.parse::<ModelChoice>()?,
        None => ModelChoice::default(),
    };

    let max_length = match take_flag_value(&mut rest, "--max", MAX_USAGE)? {
        Some(raw) => parse_length(&raw, MAX_USAGE)?,
        None => DEFAULT_MAX_LENGTH,
    };

    let min_length = match take_flag_value(&mut rest, "--min", MIN_USAGE)? {
        Some(raw) => parse_length(&raw, MIN_USAGE)?,
        None => DEFAULT_MIN_LENGTH,
    };

    let output = take_flag_value(&mut rest, "--out", OUT_USAGE)?.map(PathBuf::from);

    if rest.is_empty() {
        return Err(BrieflyError::InvalidArgument(USAGE.to_string()));
    }

    Ok(CliArgs {
        model,
        max_length,
        min_length,
        output,
        positionals: rest,
    })
}

/// Where the text to summarize came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File { path: PathBuf, text: String },
    Text(String),
}

impl InputSource {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            InputSource::File { text, .. } | InputSource::Text(text) => text,
        }
    }
}

#[must_use]
pub fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TEXT_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Reads a lone `.txt` positional naming an existing file; otherwise the
/// positionals are the text.
pub fn resolve_input(positionals: &[String]) -> Result<InputSource, BrieflyError> {
    if let [single] = positionals {
        let path = Path::new(single);
        if has_text_extension(path) && path.is_file() {
            let text = fs::read_to_string(path).map_err(|e| {
                BrieflyError::FileIo(format!("Failed to read {}: {}", path.display(), e))
            })?;
            return Ok(InputSource::File {
                path: path.to_path_buf(),
                text,
            });
        }
    }
    Ok(InputSource::Text(positionals.concat()))
}
