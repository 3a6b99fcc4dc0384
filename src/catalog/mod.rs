//! Static catalogs the planner draws from.
//!
//! - `mood`: the eight mood presets
//! - `beat`: the twelve narrative beat templates

pub mod beat;
pub mod mood;

pub use beat::{beat_templates, render_template, BeatTemplate, BeatType, NarrationTemplate, TemplateVars};
pub use mood::{mood_presets, Mood, MoodPreset};
