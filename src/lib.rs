//! StoryboardPro - deterministic storyboard planning for short branded videos.
//!
//! A campaign (brand, product, duration, mood, optional key message) becomes
//! an ordered list of scenes, one image-generation prompt per scene and a
//! decorative placeholder frame per scene:
//!
//! - **Catalog-driven**: eight mood presets and twelve narrative beats
//! - **Pure planning**: the same campaign always yields the same storyboard
//! - **No hidden state**: uploaded images and the last storyboard are values
//!   owned by the caller
//!
//! # Example
//!
//! ```rust
//! use storyboardpro::{CampaignInput, ReferenceImages, Storyboard, UploadedImage};
//!
//! let input = CampaignInput::new("Aurelia", "Night Serum", "A restorative overnight serum")
//!     .with_duration(30)
//!     .with_mood("premium")
//!     .with_key_message("Wake up renewed");
//!
//! let mut images = ReferenceImages::new();
//! images.add(UploadedImage::new("bottle.png", "image/png"));
//!
//! let board = Storyboard::generate(&input, &images).unwrap();
//! assert_eq!(board.scene_count(), 6);
//! assert_eq!(board.scenes[0].reference_image_slot, Some(0));
//!
//! // Prompts are ready to paste into an image generator
//! let text = board.all_prompts_text();
//! assert!(text.starts_with("=== Scene 01 — OPENING ==="));
//! ```

pub mod error;

pub mod catalog;
pub mod placeholder;
pub mod prompt;
pub mod storyboard;

// Re-exports for convenience
pub use catalog::{BeatType, Mood, MoodPreset};
pub use error::{StoryboardError, StoryboardResult};
pub use placeholder::PlaceholderFrame;
pub use prompt::{synthesize_prompt, PromptSpec, ScenePrompt};
pub use storyboard::{
    plan, plan_campaign, Campaign, CampaignInput, ReferenceImages, Scene, Storyboard, UploadedImage,
};

#[cfg(feature = "wasm")]
pub use storyboard::JsStoryboardPlanner;
