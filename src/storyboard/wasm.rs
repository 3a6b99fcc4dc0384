//! WASM bindings for storyboard planning.
//!
//! `JsStoryboardPlanner` owns the uploaded reference images and the most
//! recently generated storyboard for one page, so the browser keeps no
//! planning state of its own.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::catalog::mood_presets;
use crate::storyboard::generate::Storyboard;
use crate::storyboard::model::{CampaignInput, ReferenceImages, UploadedImage};
use crate::StoryboardError;

/// Serialize a value to JsValue with HashMaps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: StoryboardError| JsValue::from_str(&e.to_string()))
    };
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly storyboard planner.
#[wasm_bindgen]
pub struct JsStoryboardPlanner {
    images: ReferenceImages,
    last: Option<Storyboard>,
}

#[wasm_bindgen]
impl JsStoryboardPlanner {
    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Creates a planner with no images and no storyboard.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const planner = new JsStoryboardPlanner();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsStoryboardPlanner {
        JsStoryboardPlanner {
            images: ReferenceImages::new(),
            last: None,
        }
    }

    /// Mood catalog as an array of preset objects.
    #[wasm_bindgen]
    pub fn moods() -> Result<JsValue, JsValue> {
        Ok(to_js_value(&mood_presets())?)
    }

    // =========================================================================
    // REFERENCE IMAGES
    // =========================================================================

    /// Adds an uploaded file. Returns false when the file is not an image or
    /// the upload list is full.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// for (const file of input.files) planner.addImage(file.name, file.type);
    /// ```
    #[wasm_bindgen(js_name = addImage)]
    pub fn add_image(&mut self, name: &str, content_type: &str) -> bool {
        self.images.add(UploadedImage::new(name, content_type))
    }

    /// Removes the image at `index`; later images shift down.
    #[wasm_bindgen(js_name = removeImage)]
    pub fn remove_image(&mut self, index: usize) -> Result<(), JsValue> {
        js_result!(self.images.remove(index)).map(|_| ())
    }

    #[wasm_bindgen(js_name = imageCount)]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Names of the uploaded images in slot order.
    #[wasm_bindgen(js_name = imageNames)]
    pub fn image_names(&self) -> Array {
        self.images
            .iter()
            .map(|image| JsValue::from_str(&image.name))
            .collect()
    }

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Generates a storyboard from a campaign form object and keeps it as
    /// the last storyboard.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const board = planner.generate({
    ///   brand: 'Aurelia',
    ///   product: 'Night Serum',
    ///   durationSeconds: 30,
    ///   mood: 'premium',
    ///   description: 'A restorative overnight serum',
    /// });
    /// console.log(board.scenes.length);
    /// ```
    #[wasm_bindgen]
    pub fn generate(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: CampaignInput = from_value(input)?;
        let board = js_result!(Storyboard::generate(&input, &self.images))?;
        let value = to_js_value(&board)?;
        self.last = Some(board);
        Ok(value)
    }

    /// The last generated storyboard, or `undefined`.
    #[wasm_bindgen(js_name = lastStoryboard)]
    pub fn last_storyboard(&self) -> Result<JsValue, JsValue> {
        match &self.last {
            Some(board) => Ok(to_js_value(board)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Prompt text for the scene at `index` (0-based).
    #[wasm_bindgen(js_name = promptText)]
    pub fn prompt_text(&self, index: usize) -> Result<String, JsValue> {
        let board = self.require_storyboard()?;
        let prompt = js_result!(board.prompt(index))?;
        Ok(prompt.text.clone())
    }

    /// All prompts joined into one document.
    #[wasm_bindgen(js_name = allPromptsText)]
    pub fn all_prompts_text(&self) -> Result<String, JsValue> {
        Ok(self.require_storyboard()?.all_prompts_text())
    }

    /// Placeholder frame for the scene at `index` as an SVG data URL.
    #[wasm_bindgen(js_name = placeholderDataUrl)]
    pub fn placeholder_data_url(&self, index: usize) -> Result<String, JsValue> {
        let board = self.require_storyboard()?;
        let frame = js_result!(board.placeholder(index))?;
        Ok(frame.to_data_url())
    }

    /// Drops the last storyboard; uploaded images are kept.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl JsStoryboardPlanner {
    fn require_storyboard(&self) -> Result<&Storyboard, JsValue> {
        self.last
            .as_ref()
            .ok_or_else(|| JsValue::from_str("No storyboard has been generated yet"))
    }
}

impl Default for JsStoryboardPlanner {
    fn default() -> Self {
        Self::new()
    }
}
