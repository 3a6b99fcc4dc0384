//! Placeholder reference frames.
//!
//! Decorative stand-ins shown until a real reference image exists:
//! - `palette`: per-mood colours and per-beat motifs
//! - `svg`: deterministic SVG rendering and `data:` URLs

pub mod palette;
pub mod svg;

pub use palette::{palette_for, visual_for, MoodPalette, SceneVisual, ShapeMotif};
pub use svg::{escape_xml, PlaceholderFrame, FRAME_HEIGHT, FRAME_WIDTH};
