//! Scroll-state tracker
//!
//! Turns one scroll sample reported by the page into the state the page
//! renders: which nav link is lit, how wide the progress bar is, whether
//! the background overlay shows and whether the nav bar is condensed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    compute_active_section, compute_progress_fraction, NavLink, OverlayBand, SectionGeometry,
    DEFAULT_HIGHLIGHT, NAV_LINKS,
};

/// Tunables for the tracker, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    /// Probe point below the viewport top used for nav highlighting.
    pub probe_offset: f64,
    pub overlay_band: OverlayBand,
    /// Scroll offset past which the nav bar switches to its condensed style.
    pub condense_after: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            probe_offset: 100.0,
            overlay_band: OverlayBand::default(),
            condense_after: 50.0,
        }
    }
}

/// A section as the page reported it. Either offset may be absent when the
/// section is not laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedSection {
    pub id: String,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
}

impl ReportedSection {
    pub fn laid_out(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            top: None,
            bottom: None,
        }
    }

    fn geometry(&self) -> Option<SectionGeometry> {
        match (self.top, self.bottom) {
            (Some(top), Some(bottom)) => Some(SectionGeometry::new(self.id.clone(), top, bottom)),
            _ => None,
        }
    }
}

/// One scroll sample from the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollInput {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    #[serde(default)]
    pub sections: Vec<ReportedSection>,
    /// Link highlighted after the previous sample, if any.
    #[serde(default)]
    pub highlighted: Option<String>,
}

impl ScrollInput {
    /// All numeric fields are finite.
    pub fn is_finite(&self) -> bool {
        let offsets = self
            .sections
            .iter()
            .flat_map(|s| [s.top, s.bottom])
            .flatten();
        [self.scroll_y, self.viewport_height, self.document_height]
            .into_iter()
            .chain(offsets)
            .all(f64::is_finite)
    }

    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Computed scroll state handed back to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Section under the probe point, if any.
    pub active_section_id: Option<String>,
    /// Link to highlight. Keeps the previous highlight when no section matches.
    pub highlighted_link: String,
    pub progress_fraction: f64,
    pub overlay_visible: bool,
    pub overlay_opacity: f64,
    pub nav_condensed: bool,
}

/// Stateless tracker; every call is a pure function of its input.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    settings: ScrollSettings,
    links: Vec<NavLink>,
}

impl ScrollTracker {
    pub fn new(settings: ScrollSettings) -> Self {
        Self::with_links(settings, NAV_LINKS.to_vec())
    }

    pub fn with_links(settings: ScrollSettings, links: Vec<NavLink>) -> Self {
        Self { settings, links }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Geometry for each nav link in link order. Links whose section was not
    /// reported, or was reported without both offsets, are left out.
    pub fn resolve_sections(&self, reported: &[ReportedSection]) -> Vec<SectionGeometry> {
        self.links
            .iter()
            .filter_map(|link| {
                let id = link.section_id();
                let geometry = reported
                    .iter()
                    .find(|section| section.id == id)
                    .and_then(ReportedSection::geometry);
                if geometry.is_none() {
                    debug!("Section '{}' has no layout, skipping", id);
                }
                geometry
            })
            .collect()
    }

    pub fn compute(&self, input: &ScrollInput) -> ScrollState {
        let sections = self.resolve_sections(&input.sections);
        let active = compute_active_section(&sections, self.settings.probe_offset);

        let highlighted_link = match active {
            Some(id) => format!("#{}", id),
            None => input
                .highlighted
                .clone()
                .unwrap_or_else(|| DEFAULT_HIGHLIGHT.to_string()),
        };

        let overlay_visible = self
            .settings
            .overlay_band
            .is_visible(input.scroll_y, input.viewport_height);

        ScrollState {
            active_section_id: active.map(str::to_string),
            highlighted_link,
            progress_fraction: compute_progress_fraction(input.scroll_y, input.scrollable_height()),
            overlay_visible,
            overlay_opacity: if overlay_visible { 1.0 } else { 0.0 },
            nav_condensed: input.scroll_y > self.settings.condense_after,
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}
