//! Rendering boundary.
//!
//! The statistical core never draws anything. It prepares a
//! [`DistributionView`] (statistics, the non-null value sequence, and a
//! pre-formatted CV annotation) and hands it, together with an explicit
//! [`RenderContext`], to whatever implements the renderer traits. Chart
//! layout, palettes, and annotation placement all live behind that seam.

use serde::{Deserialize, Serialize};

use crate::distribution::{DescriptiveStats, DistributionAnalysis};
use crate::error::Result;
use crate::summary::NullMap;

/// Explicit rendering options, passed alongside every render call.
///
/// Never ambient or global; a renderer receives the context it should
/// draw with on each invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderContext {
    /// Number of histogram bins.
    pub bins: usize,
    /// Whether to overlay a kernel density estimate.
    pub kde: bool,
    /// Whether to mark the mode.
    pub show_mode: bool,
    /// Whether to mark the first and third quartiles.
    pub show_quartiles: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            bins: 30,
            kde: true,
            show_mode: true,
            show_quartiles: true,
        }
    }
}

/// Everything a chart renderer needs to draw one distribution.
#[derive(Debug, Clone)]
pub struct DistributionView<'a> {
    /// Analyzed column name.
    pub column: &'a str,
    /// Descriptive statistics to annotate.
    pub stats: &'a DescriptiveStats,
    /// Non-null values for the histogram/density estimate.
    pub values: &'a [f64],
    /// Pre-formatted CV annotation, e.g. `"CV: 12.34% (low)"`.
    pub cv_annotation: String,
}

impl DistributionAnalysis {
    /// Borrowed view of this analysis for a renderer.
    pub fn view(&self) -> DistributionView<'_> {
        DistributionView {
            column: &self.column,
            stats: &self.stats,
            values: &self.values,
            cv_annotation: self.stats.cv_annotation(),
        }
    }
}

/// Draws a distribution chart from already-computed values.
pub trait DistributionRenderer {
    fn render_distribution(
        &mut self,
        view: &DistributionView<'_>,
        ctx: &RenderContext,
    ) -> Result<()>;
}

/// Draws a null-position heatmap from a [`NullMap`].
pub trait NullMapRenderer {
    fn render_null_map(&mut self, map: &NullMap, ctx: &RenderContext) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionAnalyzer;
    use crate::input::DataTable;

    /// Renderer that records what it was handed.
    #[derive(Default)]
    struct RecordingRenderer {
        columns: Vec<String>,
        annotations: Vec<String>,
        value_counts: Vec<usize>,
    }

    impl DistributionRenderer for RecordingRenderer {
        fn render_distribution(
            &mut self,
            view: &DistributionView<'_>,
            _ctx: &RenderContext,
        ) -> Result<()> {
            self.columns.push(view.column.to_string());
            self.annotations.push(view.cv_annotation.clone());
            self.value_counts.push(view.values.len());
            Ok(())
        }
    }

    #[test]
    fn test_renderer_receives_computed_values() {
        let table = DataTable::new(
            vec!["x".to_string()],
            vec![
                vec!["10".to_string()],
                vec!["NA".to_string()],
                vec!["30".to_string()],
            ],
            b',',
        );
        let analysis = DistributionAnalyzer::new().analyze(&table, "x").unwrap();

        let mut renderer = RecordingRenderer::default();
        renderer
            .render_distribution(&analysis.view(), &RenderContext::default())
            .unwrap();

        assert_eq!(renderer.columns, vec!["x"]);
        assert_eq!(renderer.value_counts, vec![2]);
        assert!(renderer.annotations[0].starts_with("CV: "));
    }

    #[test]
    fn test_default_context() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.bins, 30);
        assert!(ctx.kde);
        assert!(ctx.show_mode);
        assert!(ctx.show_quartiles);
    }
}
