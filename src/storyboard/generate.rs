//! Storyboard orchestration: validate, plan, synthesize prompts.
//!
//! A `Storyboard` is the complete result of one generate action. It owns the
//! validated campaign, the planned scenes and one prompt per scene, so callers
//! never hold partially applied state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoryboardError, StoryboardResult};
use crate::placeholder::PlaceholderFrame;
use crate::prompt::{format_all_prompts, scene_prompt, ScenePrompt};
use crate::storyboard::model::{Campaign, CampaignInput, ReferenceImages, Scene};
use crate::storyboard::planner::{music_direction, plan_campaign, total_duration};

/// A generated storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    pub campaign: Campaign,
    /// `"{brand} — {product}"`
    pub subtitle: String,
    pub scenes: Vec<Scene>,
    pub prompts: Vec<ScenePrompt>,
    pub total_duration_seconds: f64,
    pub music_direction: String,
}

impl Storyboard {
    /// Validates the input, plans scenes against the uploaded images and
    /// synthesizes a prompt for every scene.
    pub fn generate(input: &CampaignInput, images: &ReferenceImages) -> StoryboardResult<Self> {
        let campaign = input.validate()?;
        Ok(Self::from_campaign(campaign, images.len()))
    }

    /// Builds a storyboard from an already validated campaign.
    pub fn from_campaign(campaign: Campaign, uploaded_images: usize) -> Self {
        let scenes = plan_campaign(&campaign, uploaded_images);
        let preset = campaign.mood.preset();
        let prompts: Vec<ScenePrompt> = scenes
            .iter()
            .map(|scene| scene_prompt(scene, preset, &campaign.brand, &campaign.product))
            .collect();

        let total = total_duration(&scenes);
        debug!(
            brand = %campaign.brand,
            scenes = scenes.len(),
            total_seconds = total,
            "Storyboard generated"
        );

        Self {
            subtitle: format!("{} — {}", campaign.brand, campaign.product),
            total_duration_seconds: total,
            music_direction: music_direction(preset).to_string(),
            campaign,
            scenes,
            prompts,
        }
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scene(&self, index: usize) -> StoryboardResult<&Scene> {
        self.scenes
            .get(index)
            .ok_or_else(|| StoryboardError::index_out_of_bounds(index, self.scenes.len()))
    }

    pub fn prompt(&self, index: usize) -> StoryboardResult<&ScenePrompt> {
        self.prompts
            .get(index)
            .ok_or_else(|| StoryboardError::index_out_of_bounds(index, self.prompts.len()))
    }

    /// Every prompt joined into one copyable document.
    pub fn all_prompts_text(&self) -> String {
        format_all_prompts(&self.prompts)
    }

    /// Placeholder frame for the scene at `index` (0-based).
    pub fn placeholder(&self, index: usize) -> StoryboardResult<PlaceholderFrame> {
        let scene = self.scene(index)?;
        Ok(PlaceholderFrame::for_scene(
            scene,
            self.campaign.mood,
            &self.campaign.brand,
            &self.campaign.product,
        ))
    }

    /// Placeholder frames for every scene, in order.
    pub fn placeholders(&self) -> Vec<PlaceholderFrame> {
        self.scenes
            .iter()
            .map(|scene| {
                PlaceholderFrame::for_scene(
                    scene,
                    self.campaign.mood,
                    &self.campaign.brand,
                    &self.campaign.product,
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> StoryboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> StoryboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
