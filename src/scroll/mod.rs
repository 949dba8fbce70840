//! Scroll-state module
//!
//! Pure functions over scroll offset and section geometry, and the tracker
//! that combines them for the navigation bar and page background.

pub mod geometry;
pub mod nav;
pub mod tracker;

pub use geometry::{
    compute_active_section, compute_overlay_visibility, compute_progress_fraction, OverlayBand,
    SectionGeometry,
};
pub use nav::{NavLink, DEFAULT_HIGHLIGHT, NAV_LINKS};
pub use tracker::{ReportedSection, ScrollInput, ScrollSettings, ScrollState, ScrollTracker};
