//! Theme: global stylesheet and color palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
