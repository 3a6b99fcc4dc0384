//! Prompt synthesizer: maps a planned scene and its mood to an image prompt.

use crate::catalog::{BeatType, Mood, MoodPreset};
use crate::prompt::model::{PromptSpec, ScenePrompt, NEGATIVE_CONSTRAINTS, QUALITY_TAGS};
use crate::storyboard::model::Scene;

/// Builds the prompt for one scene. Total over every beat type.
pub fn synthesize_prompt(scene: &Scene, preset: &MoodPreset, brand: &str, product: &str) -> PromptSpec {
    PromptSpec {
        subject: subject_for(scene.beat_type, preset, brand, product),
        style: format!(
            "{} visual style, branded content quality, commercial production value, {} mood",
            preset.visual_style,
            preset.english_name.to_lowercase()
        ),
        lighting: preset.lighting.to_string(),
        color_palette: preset.color_palette.to_string(),
        camera: scene.camera_direction.clone(),
        quality_tags: QUALITY_TAGS.to_string(),
        negative_constraints: NEGATIVE_CONSTRAINTS.to_string(),
    }
}

fn subject_for(beat: BeatType, preset: &MoodPreset, brand: &str, product: &str) -> String {
    let style = preset.visual_style;
    match beat {
        BeatType::Opening => {
            let hint = if product.is_empty() {
                String::new()
            } else {
                format!("Subtle hint of {} in the environment.", product)
            };
            format!(
                "A cinematic opening shot establishing a {} atmosphere. Abstract visual elements or an establishing wide shot that evokes the world of {}. {}",
                style, brand, hint
            )
        }
        BeatType::Context => format!(
            "A person in their daily life, showing a moment of need or aspiration. Natural, candid feel. The scene conveys relatability and the desire for something better, setting up the introduction of {} by {}.",
            product, brand
        ),
        BeatType::ProductReveal => format!(
            "{} by {}, hero product shot. The product is the clear focal point, presented on a {}. Dramatic reveal moment.",
            product,
            brand,
            reveal_surface(preset.mood)
        ),
        BeatType::FeatureHighlight => format!(
            "Close-up detail shot of {} by {}, showcasing its key features and craftsmanship. Macro-level details visible. The shot emphasizes quality, innovation, and unique selling points.",
            product, brand
        ),
        BeatType::Experience => format!(
            "A person using {} by {} in a real-life scenario. Genuine expression of satisfaction and delight. The interaction between user and product feels natural and aspirational.",
            product, brand
        ),
        BeatType::Benefit => format!(
            "Visual metaphor showing transformation and improvement through {} by {}. A before-and-after feeling conveyed through environment, mood, or the person's demeanor.",
            product, brand
        ),
        BeatType::SocialProof => format!(
            "Multiple diverse people using {} by {} in various settings and situations. A montage-style composition showing universality and versatility of the product.",
            product, brand
        ),
        BeatType::Climax => format!(
            "The most dramatic and impactful hero shot of {} by {}. Peak visual moment with maximum emotional impact. {} aesthetic at its highest expression.",
            product, brand, style
        ),
        BeatType::KeyMessage => format!(
            "{} by {} presented alongside elegant typography space for the key message. Clean composition that balances product and negative space for text overlay. Powerful and memorable visual.",
            product, brand
        ),
        BeatType::BrandLogo => format!(
            "Clean, elegant end frame composition for {}. {} shown in its final beauty shot with space for logo placement. {} with refined finishing.",
            brand,
            product,
            end_frame_background(preset.mood)
        ),
        // Beats without a dedicated subject share the generic branded shot.
        BeatType::Bonus | BeatType::Extra => generic_subject(preset, brand, product),
    }
}

/// Subject line for beats without a dedicated template.
pub fn generic_subject(preset: &MoodPreset, brand: &str, product: &str) -> String {
    format!(
        "A branded content shot for {} {}, maintaining {} visual language throughout.",
        brand, product, preset.visual_style
    )
}

fn reveal_surface(mood: Mood) -> &'static str {
    match mood {
        Mood::Premium => "dark luxurious surface with reflections",
        Mood::Modern => "clean white minimal surface",
        _ => "natural textured surface",
    }
}

fn end_frame_background(mood: Mood) -> &'static str {
    match mood {
        Mood::Premium => "Dark luxurious background",
        _ => "Clean minimal background",
    }
}

/// Display tags for a scene's prompt card.
pub fn prompt_tags(scene: &Scene, mood: Mood) -> Vec<String> {
    vec![
        mood.id().to_string(),
        scene.beat_type.label().to_lowercase(),
        "branded content".to_string(),
        "commercial".to_string(),
        "8K".to_string(),
    ]
}

/// Synthesizes the prompt and packages it with its scene metadata.
pub fn scene_prompt(scene: &Scene, preset: &MoodPreset, brand: &str, product: &str) -> ScenePrompt {
    let spec = synthesize_prompt(scene, preset, brand, product);
    let text = spec.to_text();
    ScenePrompt {
        scene_number: scene.scene_number,
        beat_type: scene.beat_type,
        spec,
        text,
        tags: prompt_tags(scene, preset.mood),
    }
}
