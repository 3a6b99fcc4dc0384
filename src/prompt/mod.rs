//! Image-generation prompt synthesis.
//!
//! - `model`: PromptSpec, ScenePrompt and the fixed text layout
//! - `synthesizer`: per-beat subject lines and mood-derived sections

pub mod model;
pub mod synthesizer;

pub use model::{format_all_prompts, PromptSpec, ScenePrompt, NEGATIVE_CONSTRAINTS, QUALITY_TAGS};
pub use synthesizer::{generic_subject, prompt_tags, scene_prompt, synthesize_prompt};
