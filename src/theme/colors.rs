//! Color constants for inline SVG.
//!
//! Must match the `--text-primary` custom property in the stylesheet.

pub const TEXT_PRIMARY: &str = "#ffffff";
