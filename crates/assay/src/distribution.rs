//! Descriptive statistics and distribution classification for a numeric
//! column.
//!
//! [`DistributionAnalyzer`] drops nulls, computes the descriptive
//! statistics, evaluates whether a coefficient of variation is meaningful
//! and which variability bucket it falls in, and derives an imputation
//! recommendation from the mean/median skew heuristic. It never mutates
//! its input and never touches a display surface; rendering and narration
//! consume the returned [`DistributionAnalysis`].

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{AssayError, Result};

/// Relative-variability bucket for a coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvCategory {
    /// CV below 10%.
    VeryLow,
    /// CV in [10%, 20%).
    Low,
    /// CV in [20%, 40%).
    Moderate,
    /// CV in [40%, 60%).
    High,
    /// CV of 60% or more.
    VeryHigh,
    /// CV is invalid or non-finite for this column.
    NotApplicable,
}

impl CvCategory {
    /// Classify a coefficient of variation (in percent).
    ///
    /// Total over all of f64: non-finite input (including NaN from an
    /// invalid CV) maps to [`CvCategory::NotApplicable`]. Boundary values
    /// fall into the upper class, so exactly 10 reads as `Low`.
    pub fn classify(cv: f64) -> Self {
        if !cv.is_finite() {
            CvCategory::NotApplicable
        } else if cv < 10.0 {
            CvCategory::VeryLow
        } else if cv < 20.0 {
            CvCategory::Low
        } else if cv < 40.0 {
            CvCategory::Moderate
        } else if cv < 60.0 {
            CvCategory::High
        } else {
            CvCategory::VeryHigh
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CvCategory::VeryLow => "very low",
            CvCategory::Low => "low",
            CvCategory::Moderate => "moderate",
            CvCategory::High => "high",
            CvCategory::VeryHigh => "very high",
            CvCategory::NotApplicable => "not applicable",
        }
    }
}

/// Direction of distribution asymmetry under the mean/median heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skew {
    /// Mean and median agree within the symmetry tolerance.
    Symmetric,
    /// Mean above median (right tail).
    Positive,
    /// Mean at or below median (left tail).
    Negative,
}

impl Skew {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Skew::Symmetric => "symmetric",
            Skew::Positive => "positive",
            Skew::Negative => "negative",
        }
    }
}

/// Imputation strategy recommended for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputationStrategy {
    /// Impute with the mean (symmetric distributions).
    Mean,
    /// Impute with the median (skewed distributions).
    Median,
}

impl ImputationStrategy {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ImputationStrategy::Mean => "mean",
            ImputationStrategy::Median => "median",
        }
    }
}

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (50th percentile, linear interpolation).
    pub median: f64,
    /// First modal value; smallest among equally frequent modes.
    pub mode: f64,
    /// First quartile (25th percentile, linear interpolation).
    pub q1: f64,
    /// Third quartile (75th percentile, linear interpolation).
    pub q3: f64,
    /// Sample standard deviation (divisor n-1); NaN below 2 observations.
    pub std: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Number of non-null observations.
    pub count: usize,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// Coefficient of variation in percent; present only when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<f64>,
    /// Whether the CV is meaningful for this column.
    pub cv_valid: bool,
    /// Variability bucket; `NotApplicable` when the CV is invalid.
    pub cv_category: CvCategory,
}

impl DescriptiveStats {
    /// Formatted CV annotation for chart/report surfaces.
    pub fn cv_annotation(&self) -> String {
        match self.cv {
            Some(cv) => format!("CV: {:.2}% ({})", cv, self.cv_category.label()),
            None => "CV: not applicable (mean <= 0 or ~0)".to_string(),
        }
    }
}

/// Full result of analyzing one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    /// Analyzed column name.
    pub column: String,
    /// Descriptive statistics.
    pub stats: DescriptiveStats,
    /// Skew classification under the mean/median heuristic.
    pub skew: Skew,
    /// Recommended imputation strategy.
    pub recommendation: ImputationStrategy,
    /// Non-null numeric values in column order, for histogram/KDE
    /// renderers.
    pub values: Vec<f64>,
}

/// Analyzes the distribution of a numeric column.
pub struct DistributionAnalyzer {
    /// Fraction of the standard deviation tolerated between mean and
    /// median before the distribution counts as skewed.
    symmetry_factor: f64,
    /// Means closer to zero than this invalidate the CV.
    mean_epsilon: f64,
}

impl DistributionAnalyzer {
    /// Create an analyzer with the standard thresholds.
    pub fn new() -> Self {
        Self {
            symmetry_factor: 0.1,
            mean_epsilon: 1e-12,
        }
    }

    /// Analyze the named column of a dataset.
    ///
    /// Fails with [`AssayError::ColumnNotFound`] when the column does not
    /// exist and [`AssayError::NoValidData`] when no non-null numeric
    /// values remain after filtering.
    pub fn analyze(&self, data: &impl Dataset, column: &str) -> Result<DistributionAnalysis> {
        let index = data
            .column_index(column)
            .ok_or_else(|| AssayError::ColumnNotFound(column.to_string()))?;

        let values: Vec<f64> = (0..data.row_count())
            .filter_map(|row| data.numeric_value(row, index))
            .collect();

        if values.is_empty() {
            return Err(AssayError::NoValidData(column.to_string()));
        }

        let stats = self.describe(&values);
        let skew = self.classify_skew(stats.mean, stats.median, stats.std);
        let recommendation = match skew {
            Skew::Symmetric => ImputationStrategy::Mean,
            Skew::Positive | Skew::Negative => ImputationStrategy::Median,
        };

        Ok(DistributionAnalysis {
            column: column.to_string(),
            stats,
            skew,
            recommendation,
            values,
        })
    }

    /// Compute descriptive statistics over a non-empty sample.
    fn describe(&self, values: &[f64]) -> DescriptiveStats {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let median = quantile(&sorted, 0.5);
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let std = sample_std(&sorted, mean);
        let min = sorted[0];
        let max = sorted[count - 1];
        let mode = mode_of(&sorted);
        let iqr = q3 - q1;

        let cv_valid = mean > 0.0 && mean.abs() > self.mean_epsilon && std.is_finite();
        let cv = if cv_valid {
            Some((std / mean) * 100.0)
        } else {
            None
        };
        let cv_category = CvCategory::classify(cv.unwrap_or(f64::NAN));

        DescriptiveStats {
            mean,
            median,
            mode,
            q1,
            q3,
            std,
            min,
            max,
            count,
            iqr,
            cv,
            cv_valid,
            cv_category,
        }
    }

    /// Three-way skew classification.
    ///
    /// A NaN standard deviation (fewer than 2 observations) fails the
    /// symmetry comparison and falls through to the mean/median test.
    fn classify_skew(&self, mean: f64, median: f64, std: f64) -> Skew {
        if (mean - median).abs() < std * self.symmetry_factor {
            Skew::Symmetric
        } else if mean > median {
            Skew::Positive
        } else {
            Skew::Negative
        }
    }
}

impl Default for DistributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Quantile by linear interpolation over a sorted sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let h = q * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Sample standard deviation (divisor n-1); NaN for fewer than 2 values.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// First modal value of a sorted sample.
///
/// Runs of equal values are scanned in ascending order and a run only
/// replaces the current mode with a strictly greater count, so ties
/// resolve to the smallest of the equally most frequent values.
fn mode_of(sorted: &[f64]) -> f64 {
    let mut mode = sorted[0];
    let mut best_len = 0usize;
    let mut run_start = 0usize;

    for i in 0..=sorted.len() {
        if i == sorted.len() || sorted[i] != sorted[run_start] {
            let run_len = i - run_start;
            if run_len > best_len {
                best_len = run_len;
                mode = sorted[run_start];
            }
            run_start = i;
        }
    }

    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;

    fn numeric_table(name: &str, cells: Vec<&str>) -> DataTable {
        DataTable::new(
            vec![name.to_string()],
            cells.into_iter().map(|c| vec![c.to_string()]).collect(),
            b',',
        )
    }

    fn analyze(cells: Vec<&str>) -> DistributionAnalysis {
        let table = numeric_table("x", cells);
        DistributionAnalyzer::new().analyze(&table, "x").unwrap()
    }

    #[test]
    fn test_column_not_found() {
        let table = numeric_table("x", vec!["1"]);
        assert!(matches!(
            DistributionAnalyzer::new().analyze(&table, "y"),
            Err(AssayError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_fully_null_column_has_no_valid_data() {
        let table = numeric_table("x", vec!["NA", "", "null"]);
        assert!(matches!(
            DistributionAnalyzer::new().analyze(&table, "x"),
            Err(AssayError::NoValidData(_))
        ));
    }

    #[test]
    fn test_basic_statistics() {
        let result = analyze(vec!["1", "2", "3", "4"]);
        let s = &result.stats;

        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        // Linear interpolation: h = 0.25 * 3 = 0.75 and 0.75 * 3 = 2.25.
        assert_eq!(s.q1, 1.75);
        assert_eq!(s.q3, 3.25);
        assert_eq!(s.iqr, s.q3 - s.q1);
    }

    #[test]
    fn test_nulls_are_dropped() {
        let result = analyze(vec!["1", "NA", "2", "", "3"]);
        assert_eq!(result.stats.count, 3);
        assert_eq!(result.stats.mean, 2.0);
        assert_eq!(result.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sample_std_uses_n_minus_one() {
        let result = analyze(vec!["2", "4", "4", "4", "5", "5", "7", "9"]);
        // Sum of squared deviations is 32; 32 / 7 then sqrt.
        assert!((result.stats.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_observation_propagates_nan_std() {
        let result = analyze(vec!["5"]);
        let s = &result.stats;

        assert!(s.std.is_nan());
        assert!(!s.cv_valid);
        assert_eq!(s.cv, None);
        assert_eq!(s.cv_category, CvCategory::NotApplicable);
        // NaN std fails the symmetry test; mean == median lands negative.
        assert_eq!(result.skew, Skew::Negative);
        assert_eq!(result.recommendation, ImputationStrategy::Median);
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        let result = analyze(vec!["3", "1", "3", "1", "2"]);
        assert_eq!(result.stats.mode, 1.0);
    }

    #[test]
    fn test_mode_all_unique_is_smallest() {
        let result = analyze(vec!["9", "4", "7"]);
        assert_eq!(result.stats.mode, 4.0);
    }

    // Constant column: cv = 0 reads "very low"; the strict symmetry
    // inequality (0 < 0) classifies it as non-symmetric.
    #[test]
    fn test_constant_column() {
        let result = analyze(vec!["1", "1", "1", "1", "1"]);
        let s = &result.stats;

        assert_eq!(s.mean, 1.0);
        assert_eq!(s.median, 1.0);
        assert_eq!(s.mode, 1.0);
        assert_eq!(s.std, 0.0);
        assert!(s.cv_valid);
        assert_eq!(s.cv, Some(0.0));
        assert_eq!(s.cv_category, CvCategory::VeryLow);
        assert_eq!(result.recommendation, ImputationStrategy::Median);
    }

    #[test]
    fn test_negative_mean_invalidates_cv() {
        let result = analyze(vec!["-5", "-3", "-1", "0", "2"]);
        let s = &result.stats;

        assert!((s.mean - (-1.4)).abs() < 1e-12);
        assert!(!s.cv_valid);
        assert_eq!(s.cv, None);
        assert_eq!(s.cv_category, CvCategory::NotApplicable);
    }

    #[test]
    fn test_right_tail_recommends_median() {
        let result = analyze(vec!["10", "20", "30", "40", "1000"]);
        let s = &result.stats;

        assert_eq!(s.mean, 220.0);
        assert_eq!(s.median, 30.0);
        assert_eq!(result.skew, Skew::Positive);
        assert_eq!(result.recommendation, ImputationStrategy::Median);
    }

    #[test]
    fn test_symmetric_recommends_mean() {
        // Mean 3, median 3, std ~1.58: |mean - median| = 0 < 0.158.
        let result = analyze(vec!["1", "2", "3", "4", "5"]);
        assert_eq!(result.skew, Skew::Symmetric);
        assert_eq!(result.recommendation, ImputationStrategy::Mean);
    }

    #[test]
    fn test_left_tail_recommends_median() {
        let result = analyze(vec!["-1000", "10", "20", "30", "40"]);
        assert!(result.stats.mean < result.stats.median);
        assert_eq!(result.skew, Skew::Negative);
        assert_eq!(result.recommendation, ImputationStrategy::Median);
    }

    #[test]
    fn test_cv_computation() {
        // Mean 20, sample std sqrt(200): cv ~ 70.7% -> very high.
        let result = analyze(vec!["10", "30"]);
        let s = &result.stats;

        assert_eq!(s.mean, 20.0);
        assert!((s.std - (200.0f64).sqrt()).abs() < 1e-12);
        let cv = s.cv.unwrap();
        assert!((cv - 70.71067811865476).abs() < 1e-9);
        assert_eq!(s.cv_category, CvCategory::VeryHigh);
    }

    #[test]
    fn test_cv_boundaries_fall_upward() {
        assert_eq!(CvCategory::classify(10.0), CvCategory::Low);
        assert_eq!(CvCategory::classify(20.0), CvCategory::Moderate);
        assert_eq!(CvCategory::classify(40.0), CvCategory::High);
        assert_eq!(CvCategory::classify(60.0), CvCategory::VeryHigh);
        assert_eq!(CvCategory::classify(9.999), CvCategory::VeryLow);
        assert_eq!(CvCategory::classify(f64::NAN), CvCategory::NotApplicable);
        assert_eq!(CvCategory::classify(f64::INFINITY), CvCategory::NotApplicable);
    }

    #[test]
    fn test_non_numeric_cells_are_skipped() {
        let result = analyze(vec!["1", "abc", "3"]);
        assert_eq!(result.stats.count, 2);
        assert_eq!(result.values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_cv_annotation_formats() {
        let valid = analyze(vec!["10", "30"]).stats;
        assert_eq!(valid.cv_annotation(), "CV: 70.71% (very high)");

        let invalid = analyze(vec!["-5", "-3", "-1", "0", "2"]).stats;
        assert_eq!(invalid.cv_annotation(), "CV: not applicable (mean <= 0 or ~0)");
    }
}
