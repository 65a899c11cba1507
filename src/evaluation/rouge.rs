//! ROUGE overlap scores
//!
//! Scores are F-measures averaged over prediction/reference pairs. Tokens are
//! lowercased alphanumeric runs, and tokens longer than three characters are
//! Porter-stemmed. `rougeLsum` expects sentences separated by newlines.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{BTreeMap, HashMap};

use crate::errors::BrieflyError;

pub const ROUGE_1: &str = "rouge1";
pub const ROUGE_2: &str = "rouge2";
pub const ROUGE_L: &str = "rougeL";
pub const ROUGE_LSUM: &str = "rougeLsum";

/// Aggregate quality metrics over parallel prediction/reference lists.
pub trait QualityScorer {
    fn score(
        &self,
        predictions: &[String],
        references: &[String],
    ) -> Result<BTreeMap<String, f64>, BrieflyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl RougeScore {
    fn from_counts(hits: usize, predicted: usize, reference: usize) -> Self {
        let precision = if predicted == 0 { 0.0 } else { hits as f64 / predicted as f64 };
        let recall = if reference == 0 { 0.0 } else { hits as f64 / reference as f64 };
        let fmeasure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            fmeasure,
        }
    }
}

#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    static TOKEN_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("static regex compile"));
    static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| {
            let token = m.as_str();
            // Short tokens are kept as-is
            if token.len() > 3 {
                STEMMER.stem(token).into_owned()
            } else {
                token.to_string()
            }
        })
        .collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

#[must_use]
pub fn rouge_n(prediction: &str, reference: &str, n: usize) -> RougeScore {
    let pred_tokens = tokenize(prediction);
    let ref_tokens = tokenize(reference);
    let pred_grams = ngram_counts(&pred_tokens, n);
    let ref_grams = ngram_counts(&ref_tokens, n);

    let hits = ref_grams
        .iter()
        .map(|(gram, count)| pred_grams.get(gram).map_or(0, |p| (*p).min(*count)))
        .sum();

    RougeScore::from_counts(
        hits,
        pred_grams.values().sum(),
        ref_grams.values().sum(),
    )
}

fn lcs_table(a: &[String], b: &[String]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}

/// Positions in `reference` that belong to one longest common subsequence.
fn lcs_positions(reference: &[String], candidate: &[String]) -> Vec<usize> {
    let table = lcs_table(reference, candidate);
    let (mut i, mut j) = (reference.len(), candidate.len());
    let mut positions = Vec::new();
    while i > 0 && j > 0 {
        if reference[i - 1] == candidate[j - 1] {
            positions.push(i - 1);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    positions.reverse();
    positions
}

#[must_use]
pub fn rouge_l(prediction: &str, reference: &str) -> RougeScore {
    let pred_tokens = tokenize(prediction);
    let ref_tokens = tokenize(reference);
    let table = lcs_table(&ref_tokens, &pred_tokens);
    let hits = table[ref_tokens.len()][pred_tokens.len()];
    RougeScore::from_counts(hits, pred_tokens.len(), ref_tokens.len())
}

fn sentence_tokens(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Summary-level LCS: each reference sentence is matched against the union
/// of its LCS with every predicted sentence.
#[must_use]
pub fn rouge_lsum(prediction: &str, reference: &str) -> RougeScore {
    let pred_sents = sentence_tokens(prediction);
    let ref_sents = sentence_tokens(reference);

    let mut pred_counts: HashMap<&str, usize> = HashMap::new();
    for token in pred_sents.iter().flatten() {
        *pred_counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let mut ref_counts: HashMap<&str, usize> = HashMap::new();
    for token in ref_sents.iter().flatten() {
        *ref_counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let predicted: usize = pred_sents.iter().map(Vec::len).sum();
    let referenced: usize = ref_sents.iter().map(Vec::len).sum();

    let mut hits = 0;
    for ref_sent in &ref_sents {
        let mut union: Vec<usize> = pred_sents
            .iter()
            .flat_map(|pred_sent| lcs_positions(ref_sent, pred_sent))
            .collect();
        union.sort_unstable();
        union.dedup();

        for position in union {
            let token = ref_sent[position].as_str();
            let in_pred = pred_counts.get(token).copied().unwrap_or(0);
            let in_ref = ref_counts.get(token).copied().unwrap_or(0);
            if in_pred > 0 && in_ref > 0 {
                hits += 1;
                pred_counts.insert(token, in_pred - 1);
                ref_counts.insert(token, in_ref - 1);
            }
        }
    }

    RougeScore::from_counts(hits, predicted, referenced)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RougeScorer;

impl QualityScorer for RougeScorer {
    fn score(
        &self,
        predictions: &[String],
        references: &[String],
    ) -> Result<BTreeMap<String, f64>, BrieflyError> {
        if predictions.len() != references.len() {
            return Err(BrieflyError::InvalidArgument(format!(
                "Got {} predictions but {} references",
                predictions.len(),
                references.len()
            )));
        }

        let mut totals = [0.0f64; 4];
        for (prediction, reference) in predictions.iter().zip(references) {
            totals[0] += rouge_n(prediction, reference, 1).fmeasure;
            totals[1] += rouge_n(prediction, reference, 2).fmeasure;
            totals[2] += rouge_l(prediction, reference).fmeasure;
            totals[3] += rouge_lsum(prediction, reference).fmeasure;
        }

        let pairs = predictions.len().max(1) as f64;
        Ok([ROUGE_1, ROUGE_2, ROUGE_L, ROUGE_LSUM]
            .into_iter()
            .zip(totals)
            .map(|(name, total)| (name.to_string(), total / pairs))
            .collect())
    }
}
