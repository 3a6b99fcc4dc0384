//! Data models for storyboard planning.
//!
//! Wire types use camelCase field names so the browser form and the JSON
//! endpoints share one shape.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::catalog::{BeatType, Mood};
use crate::error::{StoryboardError, StoryboardResult};

/// Default video length when a request omits it.
pub const DEFAULT_DURATION_SECONDS: u32 = 30;

/// Maximum number of reference images a storyboard accepts.
pub const MAX_REFERENCE_IMAGES: usize = 10;

// =============================================================================
// CAMPAIGN INPUT
// =============================================================================

/// Raw form input, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignInput {
    pub brand: String,
    pub product: String,
    /// Requested length. Accepts a JSON integer or a numeric string; range
    /// checks happen in `validate`.
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration_seconds: i64,
    /// Mood id, e.g. `"premium"`.
    pub mood: String,
    pub audience: Option<String>,
    pub key_message: Option<String>,
    pub description: String,
}

impl Default for CampaignInput {
    fn default() -> Self {
        Self {
            brand: String::new(),
            product: String::new(),
            duration_seconds: i64::from(DEFAULT_DURATION_SECONDS),
            mood: Mood::Premium.id().to_string(),
            audience: None,
            key_message: None,
            description: String::new(),
        }
    }
}

impl CampaignInput {
    /// Creates an input with the three required text fields.
    pub fn new(
        brand: impl Into<String>,
        product: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            product: product.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Builder: Set duration in seconds.
    pub fn with_duration(mut self, seconds: impl Into<i64>) -> Self {
        self.duration_seconds = seconds.into();
        self
    }

    /// Builder: Set mood id.
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    /// Builder: Set target audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Builder: Set key message.
    pub fn with_key_message(mut self, key_message: impl Into<String>) -> Self {
        self.key_message = Some(key_message.into());
        self
    }

    /// Validates the input and resolves the mood id.
    ///
    /// Field checks run before the mood lookup, so an input that is both
    /// incomplete and has an unknown mood reports the validation failure.
    pub fn validate(&self) -> StoryboardResult<Campaign> {
        let brand = self.brand.trim();
        let product = self.product.trim();
        let description = self.description.trim();

        if brand.is_empty() {
            return Err(StoryboardError::missing_field("brand"));
        }
        if product.is_empty() {
            return Err(StoryboardError::missing_field("product"));
        }
        if description.is_empty() {
            return Err(StoryboardError::missing_field("description"));
        }
        let duration_seconds = match u32::try_from(self.duration_seconds) {
            Ok(seconds) if seconds > 0 => seconds,
            _ => {
                return Err(StoryboardError::validation(
                    "'durationSeconds' must be a positive number of seconds",
                ))
            }
        };

        let mood: Mood = self.mood.parse()?;

        Ok(Campaign {
            brand: brand.to_string(),
            product: product.to_string(),
            duration_seconds,
            mood,
            audience: non_empty(self.audience.as_deref()),
            key_message: non_empty(self.key_message.as_deref()),
            description: description.to_string(),
        })
    }
}

/// Reads a duration the way a form posts it: an integer, a float (truncated)
/// or a numeric string. Anything unreadable becomes 0 so `validate` rejects
/// it with a validation error instead of a parse error.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDuration {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let seconds = match RawDuration::deserialize(deserializer)? {
        RawDuration::Int(n) => n,
        RawDuration::Float(f) if f.is_finite() => f.trunc() as i64,
        RawDuration::Text(text) => parse_leading_int(&text),
        RawDuration::Float(_) | RawDuration::Other(_) => 0,
    };
    Ok(seconds)
}

/// Leading signed integer of `text`, ignoring surrounding whitespace and any
/// trailing non-digits (`"30s"` is 30). Returns 0 when there is none.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// =============================================================================
// CAMPAIGN
// =============================================================================

/// Validated campaign. Text is trimmed and empty optionals are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub brand: String,
    pub product: String,
    pub duration_seconds: u32,
    pub mood: Mood,
    pub audience: Option<String>,
    pub key_message: Option<String>,
    pub description: String,
}

// =============================================================================
// REFERENCE IMAGES
// =============================================================================

/// An uploaded reference image. Only its position matters to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub name: String,
    /// MIME type, e.g. `image/png`
    pub content_type: String,
}

impl UploadedImage {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
        }
    }

    /// Builds an image entry from a file name, guessing the MIME type from
    /// its extension.
    pub fn from_file_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let content_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self { name, content_type }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Ordered, capped list of uploaded reference images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceImages {
    images: Vec<UploadedImage>,
}

impl ReferenceImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image. Returns false if it is not an image or the list is full.
    pub fn add(&mut self, image: UploadedImage) -> bool {
        if !image.is_image() {
            warn!(name = %image.name, content_type = %image.content_type, "Skipping non-image upload");
            return false;
        }
        if self.images.len() >= MAX_REFERENCE_IMAGES {
            warn!(name = %image.name, limit = MAX_REFERENCE_IMAGES, "Reference image limit reached");
            return false;
        }
        self.images.push(image);
        true
    }

    /// Adds images in order until the cap is hit. Returns how many were accepted.
    pub fn extend<I>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = UploadedImage>,
    {
        let mut accepted = 0;
        for image in images {
            if self.add(image) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Removes the image at `index`; later images shift down one slot.
    pub fn remove(&mut self, index: usize) -> StoryboardResult<UploadedImage> {
        if index >= self.images.len() {
            return Err(StoryboardError::index_out_of_bounds(index, self.images.len()));
        }
        Ok(self.images.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&UploadedImage> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Remaining capacity before the cap.
    pub fn remaining(&self) -> usize {
        MAX_REFERENCE_IMAGES - self.images.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedImage> {
        self.images.iter()
    }
}

impl FromIterator<UploadedImage> for ReferenceImages {
    fn from_iter<T: IntoIterator<Item = UploadedImage>>(iter: T) -> Self {
        let mut images = ReferenceImages::new();
        images.extend(iter);
        images
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// A beat instantiated with timing and campaign-specific text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// 1-based position in the storyboard
    pub scene_number: u32,
    pub beat_type: BeatType,
    /// Icon class for the scene card, taken from the beat template
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Seconds, rounded to one decimal, never below 1.0
    pub duration_seconds: f64,
    pub camera_direction: String,
    pub transition_style: String,
    pub audio_cue: String,
    /// Empty when the beat has no narration
    pub narration: String,
    /// Index into the uploaded reference images, if one exists for this position
    pub reference_image_slot: Option<usize>,
}

impl Scene {
    /// Zero-based position in the storyboard.
    pub fn index(&self) -> usize {
        self.scene_number.saturating_sub(1) as usize
    }

    pub fn has_narration(&self) -> bool {
        !self.narration.is_empty()
    }

    /// Badge text, e.g. `SCENE 03`.
    pub fn badge(&self) -> String {
        format!("SCENE {:02}", self.scene_number)
    }
}
