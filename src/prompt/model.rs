//! Prompt records and their stable text serialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::BeatType;

/// Quality line appended to every prompt.
pub const QUALITY_TAGS: &str = "ultra high resolution, 8K quality, professional commercial photography, advertising campaign quality, magazine editorial grade, sharp focus";

/// Negative constraints appended to every prompt.
pub const NEGATIVE_CONSTRAINTS: &str =
    "no text, no watermark, no logo overlay, no low quality, no blurry, no amateur look";

/// Width of the rule between scenes in the combined prompt document.
const DOCUMENT_RULE_WIDTH: usize = 60;

// =============================================================================
// PROMPT SPEC
// =============================================================================

/// Structured image-generation prompt for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSpec {
    pub subject: String,
    pub style: String,
    pub lighting: String,
    pub color_palette: String,
    pub camera: String,
    pub quality_tags: String,
    pub negative_constraints: String,
}

impl PromptSpec {
    /// Serializes the prompt as a single text block.
    ///
    /// Section order and labels are fixed; downstream consumers compare this
    /// text verbatim.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n\nStyle: {}\nLighting: {}\nColor palette: {}\nCamera: {}\nQuality: {}\n\nAvoid: {}",
            self.subject,
            self.style,
            self.lighting,
            self.color_palette,
            self.camera,
            self.quality_tags,
            self.negative_constraints,
        )
    }
}

impl fmt::Display for PromptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// =============================================================================
// SCENE PROMPT
// =============================================================================

/// A prompt tied back to the scene it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePrompt {
    pub scene_number: u32,
    pub beat_type: BeatType,
    pub spec: PromptSpec,
    /// `spec.to_text()`, precomputed for copy buttons
    pub text: String,
    pub tags: Vec<String>,
}

impl ScenePrompt {
    /// Header line used in the combined document, e.g. `=== Scene 02 — CONTEXT ===`.
    pub fn heading(&self) -> String {
        format!("=== Scene {:02} — {} ===", self.scene_number, self.beat_type.label())
    }
}

/// Joins every scene prompt into one copyable document.
pub fn format_all_prompts(prompts: &[ScenePrompt]) -> String {
    let separator = format!("\n\n{}\n\n", "=".repeat(DOCUMENT_RULE_WIDTH));
    prompts
        .iter()
        .map(|p| format!("{}\n\n{}", p.heading(), p.text))
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PromptSpec {
        PromptSpec {
            subject: "A hero shot.".to_string(),
            style: "bold".to_string(),
            lighting: "hard light".to_string(),
            color_palette: "neon".to_string(),
            camera: "low angle".to_string(),
            quality_tags: QUALITY_TAGS.to_string(),
            negative_constraints: NEGATIVE_CONSTRAINTS.to_string(),
        }
    }

    #[test]
    fn test_to_text_layout() {
        let text = spec().to_text();
        let expected = format!(
            "A hero shot.\n\nStyle: bold\nLighting: hard light\nColor palette: neon\nCamera: low angle\nQuality: {}\n\nAvoid: {}",
            QUALITY_TAGS, NEGATIVE_CONSTRAINTS
        );
        assert_eq!(text, expected);
        assert_eq!(spec().to_string(), expected);
    }

    #[test]
    fn test_format_all_prompts() {
        let make = |n: u32, beat: BeatType| ScenePrompt {
            scene_number: n,
            beat_type: beat,
            spec: spec(),
            text: format!("prompt {}", n),
            tags: Vec::new(),
        };
        let doc = format_all_prompts(&[make(1, BeatType::Opening), make(2, BeatType::KeyMessage)]);
        let rule = "=".repeat(60);
        assert_eq!(
            doc,
            format!(
                "=== Scene 01 — OPENING ===\n\nprompt 1\n\n{}\n\n=== Scene 02 — KEY MESSAGE ===\n\nprompt 2",
                rule
            )
        );
        assert_eq!(format_all_prompts(&[]), "");
    }
}
