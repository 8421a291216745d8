use crate::config::LabelConfig;
use crate::text_metrics::measure_text_width;
use crate::theme::Theme;

/// Format an edge measure for display: one decimal below 10 meters, rounded
/// integer from 10 up. The renderer and the footprint estimator both rely on
/// this exact threshold, so keep them in sync through this function.
pub fn format_measure(meters: f32) -> String {
    if meters < 10.0 {
        format!("{meters:.1}m")
    } else {
        format!("{}m", meters.round() as i64)
    }
}

/// Estimate the pixel footprint of a label chip for the given text.
///
/// Width comes from real font metrics when a face resolves, otherwise from a
/// per-character ratio; both are approximations of the rendered chip, not
/// exact glyph measurements.
pub fn estimate_label_box(text: &str, theme: &Theme, config: &LabelConfig) -> (f32, f32) {
    let width = measure_text_width(text, config.font_size, &theme.font_family)
        .filter(|w| *w > 0.0)
        .unwrap_or_else(|| {
            text.chars().count() as f32 * config.font_size * config.char_width_ratio
        });
    (
        width + 2.0 * config.padding_x,
        config.font_size + 2.0 * config.padding_y,
    )
}
