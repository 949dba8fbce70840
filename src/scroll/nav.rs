//! Navigation links and the sections they point at

use serde::Serialize;

/// One entry in the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// The section id the link anchors to (`#about` -> `about`).
    pub fn section_id(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

/// Links in document order; the scan for the active section follows this order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Home",
        href: "#home",
    },
    NavLink {
        name: "About Us",
        href: "#about",
    },
    NavLink {
        name: "Tracks",
        href: "#tracks",
    },
    NavLink {
        name: "Schedule",
        href: "#timeline",
    },
];

/// Link highlighted before any scroll event arrives.
pub const DEFAULT_HIGHLIGHT: &str = "#home";
