//! Sparkline rendering for window history.
//!
//! Produces a fixed-width glyph string plus a compressed `min-max` range
//! label; the caller handles layout padding and coloring.

use super::sample::Metric;
use super::window::RollingWindow;

/// Block-height glyphs, lowest to highest.
const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Placeholder for a missing reading's time slot.
const MISSING_GLYPH: char = '·';

/// Formatting hints for the range label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparkStyle {
    /// Decimal places before trailing-zero trimming.
    pub precision: usize,
    /// Unit suffix appended once after the `min-max` pair.
    pub unit: &'static str,
}

impl SparkStyle {
    /// The natural style for a tracked metric.
    pub fn for_metric(metric: Metric) -> Self {
        Self {
            precision: metric.precision(),
            unit: metric.unit(),
        }
    }
}

/// Render the most recent `min(width, len)` samples of a window.
///
/// Each time slot maps to one glyph: values bucket linearly between the
/// slice's min and max over eight levels, a constant series (or single
/// value) renders at the mid level, and missing slots render `·` rather
/// than being interpolated. Missing readings never contribute to the
/// min/max used for bucketing or to the range label.
pub fn render(window: &RollingWindow, width: usize, style: &SparkStyle) -> (String, String) {
    let samples: Vec<Option<f64>> = window.snapshot().map(|s| s.value).collect();
    let take = width.min(samples.len());
    let slice = &samples[samples.len() - take..];

    let present: Vec<f64> = slice.iter().filter_map(|v| *v).collect();
    if present.is_empty() {
        return (MISSING_GLYPH.to_string().repeat(take), String::new());
    }

    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let glyphs: String = slice
        .iter()
        .map(|value| match value {
            None => MISSING_GLYPH,
            Some(_) if span == 0.0 => GLYPHS[GLYPHS.len() / 2 - 1],
            Some(v) => {
                let level = ((v - min) / span * (GLYPHS.len() - 1) as f64).floor() as usize;
                GLYPHS[level.min(GLYPHS.len() - 1)]
            }
        })
        .collect();

    let label = format!(
        "{}-{}{}",
        format_bound(min, style.precision),
        format_bound(max, style.precision),
        style.unit
    );
    (glyphs, label)
}

/// Format a range bound at the given precision, trimming trailing zero
/// decimals ("30.0" becomes "30", "29.80" stays "29.8").
fn format_bound(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}
