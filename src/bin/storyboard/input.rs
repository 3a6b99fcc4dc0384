//! Campaign input resolution for the CLI.
//!
//! A campaign comes either from a JSON file (the same camelCase shape the
//! browser form posts) or from individual flags. Flags given alongside
//! `--input` override the file's values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use storyboardpro::{CampaignInput, ReferenceImages, UploadedImage};

/// Campaign file: either a bare campaign object or `{campaign, images}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CampaignFile {
    WithImages {
        campaign: CampaignInput,
        #[serde(default)]
        images: Vec<UploadedImage>,
    },
    Bare(CampaignInput),
}

impl CampaignFile {
    pub fn into_parts(self) -> (CampaignInput, Vec<UploadedImage>) {
        match self {
            CampaignFile::WithImages { campaign, images } => (campaign, images),
            CampaignFile::Bare(campaign) => (campaign, Vec::new()),
        }
    }
}

/// Per-field overrides taken from command-line flags.
#[derive(Debug, Default, Clone)]
pub struct CampaignOverrides {
    pub brand: Option<String>,
    pub product: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub mood: Option<String>,
    pub audience: Option<String>,
    pub key_message: Option<String>,
}

impl CampaignOverrides {
    pub fn apply(self, mut input: CampaignInput) -> CampaignInput {
        if let Some(brand) = self.brand {
            input.brand = brand;
        }
        if let Some(product) = self.product {
            input.product = product;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(duration) = self.duration {
            input.duration_seconds = i64::from(duration);
        }
        if let Some(mood) = self.mood {
            input.mood = mood;
        }
        if self.audience.is_some() {
            input.audience = self.audience;
        }
        if self.key_message.is_some() {
            input.key_message = self.key_message;
        }
        input
    }
}

/// Reads a campaign file from disk.
pub fn read_campaign_file(path: &Path) -> Result<(CampaignInput, Vec<UploadedImage>)> {
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }
    let json = std::fs::read_to_string(path).context("Failed to read input file")?;
    let file: CampaignFile = serde_json::from_str(&json).context("Failed to parse campaign JSON")?;
    Ok(file.into_parts())
}

/// Builds the reference image list from file entries followed by `--image`
/// names. Entries past the upload cap or with non-image types are skipped.
pub fn collect_images(from_file: Vec<UploadedImage>, names: &[String]) -> ReferenceImages {
    let mut images = ReferenceImages::new();
    images.extend(from_file);
    images.extend(names.iter().map(UploadedImage::from_file_name));
    images
}
