//! Single-line playback progress bar

use crate::audio::Progress;

/// Bar width in cells.
pub const BAR_WIDTH: usize = 30;

/// Render `progress` as `[#####.....]  50%`.
pub fn render_progress(progress: &Progress) -> String {
    let fraction = progress.fraction().clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        (fraction * 100.0).round() as u32
    )
}
