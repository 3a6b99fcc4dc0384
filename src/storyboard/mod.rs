//! Storyboard planning.
//!
//! This module provides:
//! - `model`: campaign input, reference images and planned scenes
//! - `timing`: scene counts, beat subsets and per-scene durations
//! - `planner`: turns a validated campaign into scenes
//! - `generate`: the `Storyboard` value produced by one generate action
//! - `wasm`: WASM bindings for browser usage (JsStoryboardPlanner)

pub mod generate;
pub mod model;
pub mod planner;
pub mod timing;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use generate::Storyboard;
pub use model::*;
pub use planner::{music_direction, plan, plan_campaign, total_duration};
pub use timing::{beat_indices_for_count, distribute_time, scene_count_for_duration, select_beats};

#[cfg(feature = "wasm")]
pub use wasm::JsStoryboardPlanner;
