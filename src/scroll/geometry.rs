//! Pure scroll computations

use serde::{Deserialize, Serialize};

/// Vertical extent of a named section, relative to the viewport top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub id: String,
    pub top_offset: f64,
    pub bottom_offset: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top_offset: f64, bottom_offset: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            bottom_offset,
        }
    }

    pub fn contains(&self, probe_offset: f64) -> bool {
        self.top_offset <= probe_offset && probe_offset <= self.bottom_offset
    }
}

/// First section, in scan order, whose box covers the probe point.
pub fn compute_active_section<'a, I>(sections: I, probe_offset: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a SectionGeometry>,
{
    sections
        .into_iter()
        .find(|section| section.contains(probe_offset))
        .map(|section| section.id.as_str())
}

/// Fraction of the document scrolled, clamped to `[0, 1]`.
///
/// A page that fits on one screen has nothing to scroll and reads as `0`.
pub fn compute_progress_fraction(scroll_y: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 || !scrollable_height.is_finite() {
        return 0.0;
    }
    let fraction = scroll_y / scrollable_height;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Whether the background overlay shows at `scroll_y`.
///
/// `band_start` and `band_end` are multiples of `viewport_height`; the band
/// is `[band_start * viewport_height, band_end * viewport_height)`.
pub fn compute_overlay_visibility(
    scroll_y: f64,
    viewport_height: f64,
    band_start: f64,
    band_end: f64,
) -> bool {
    let start = band_start * viewport_height;
    let end = band_end * viewport_height;
    start <= scroll_y && scroll_y < end
}

/// Overlay band expressed in viewport heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayBand {
    pub start: f64,
    pub end: f64,
}

impl OverlayBand {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_visible(&self, scroll_y: f64, viewport_height: f64) -> bool {
        compute_overlay_visibility(scroll_y, viewport_height, self.start, self.end)
    }
}

impl Default for OverlayBand {
    /// Half a screen past the hero through the third screen.
    fn default() -> Self {
        Self::new(0.5, 3.0)
    }
}
