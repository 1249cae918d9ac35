//! Reporting collaborator: structured results to human-readable text.
//!
//! Narration is generated here, from the finished records, never inside
//! the computation itself. Nothing in this module prints; callers decide
//! where the text goes.

use std::fmt::Write;

use crate::distribution::{CvCategory, DistributionAnalysis, ImputationStrategy, Skew};
use crate::summary::ColumnSummary;

/// Fixed-width table of column summaries, in the order given.
pub fn summary_table(summaries: &[ColumnSummary]) -> String {
    let name_width = summaries
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
        .max("column".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:<9}  {:>8}",
        "column", "count", "null", "null_%", "dtype", "unique",
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>8}  {:>8.4}  {:<9}  {:>8}",
            s.name, s.count, s.null_count, s.null_fraction, s.dtype.label(), s.unique_count,
        );
    }
    out
}

/// Statistical summary plus distribution narration for one column.
pub fn distribution_report(analysis: &DistributionAnalysis) -> String {
    let s = &analysis.stats;
    let mut out = String::new();

    let _ = writeln!(out, "STATISTICAL SUMMARY OF '{}'", analysis.column);
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "Observations:  {}", s.count);
    let _ = writeln!(out, "Mean:          {:.2}", s.mean);
    let _ = writeln!(out, "Median:        {:.2}", s.median);
    let _ = writeln!(out, "Mode:          {:.2}", s.mode);
    let _ = writeln!(out, "Std dev:       {:.2}", s.std);
    let _ = writeln!(out, "Q1:            {:.2}", s.q1);
    let _ = writeln!(out, "Q3:            {:.2}", s.q3);
    let _ = writeln!(out, "IQR:           {:.2}", s.iqr);
    let _ = writeln!(out, "Minimum:       {:.2}", s.min);
    let _ = writeln!(out, "Maximum:       {:.2}", s.max);
    let _ = writeln!(out, "{}", s.cv_annotation());

    let _ = writeln!(out);
    let _ = writeln!(out, "DISTRIBUTION ANALYSIS");
    let _ = writeln!(out, "{}", "-".repeat(30));
    let _ = writeln!(
        out,
        "|mean - median| = {:.2}",
        (s.mean - s.median).abs()
    );
    let _ = writeln!(out, "{}", skew_sentence(analysis.skew));
    let _ = writeln!(
        out,
        "Recommended imputation: {}",
        recommendation_sentence(analysis.recommendation)
    );
    let _ = writeln!(out, "{}", cv_sentence(s.cv_category));

    out
}

fn skew_sentence(skew: Skew) -> &'static str {
    match skew {
        Skew::Symmetric => "Distribution is symmetric.",
        Skew::Positive => "Distribution has positive skew (right tail).",
        Skew::Negative => "Distribution has negative skew (left tail).",
    }
}

fn recommendation_sentence(strategy: ImputationStrategy) -> &'static str {
    match strategy {
        ImputationStrategy::Mean => "mean",
        ImputationStrategy::Median => "median",
    }
}

fn cv_sentence(category: CvCategory) -> &'static str {
    match category {
        CvCategory::VeryLow => {
            "Very low CV: values are highly homogeneous around the mean."
        }
        CvCategory::Low => "Low CV: the mean is representative.",
        CvCategory::Moderate => {
            "Moderate CV: appreciable variability, the mean is still useful."
        }
        CvCategory::High => "High CV: use the mean as a summary with caution.",
        CvCategory::VeryHigh => {
            "Very high CV: the mean is a poor summary; consider a transformation (e.g. log)."
        }
        CvCategory::NotApplicable => {
            "CV not applicable: relative variability is undefined for a mean at or below zero."
        }
    }
}
