use crate::core::models::TextStats;

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Compares the word counts of `original` and `summary`.
///
/// `reduction_fraction` is `1 - summary/original` and is deliberately not
/// clamped: a summary longer than its input yields a negative value. An empty
/// original yields `0.0`.
#[must_use]
pub fn compute_length_reduction(original: &str, summary: &str) -> TextStats {
    let original_word_count = word_count(original);
    let summary_word_count = word_count(summary);

    if original_word_count == 0 {
        return TextStats {
            original_word_count: 0,
            summary_word_count,
            reduction_fraction: 0.0,
        };
    }

    TextStats {
        original_word_count,
        summary_word_count,
        reduction_fraction: 1.0 - (summary_word_count as f64 / original_word_count as f64),
    }
}

/// Renders the stats block shown by the CLI and the form.
#[must_use]
pub fn format_stats(stats: &TextStats) -> String {
    format!(
        "Original length: {} words\nSummary length:  {} words\nReduction:       {:.1}%",
        stats.original_word_count,
        stats.summary_word_count,
        stats.reduction_fraction * 100.0
    )
}
