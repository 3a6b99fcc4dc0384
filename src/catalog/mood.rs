//! Mood presets: named bundles of stylistic defaults applied across a storyboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoryboardError;

// =============================================================================
// MOOD
// =============================================================================

/// Mood identifier. Parsed once at the input boundary, then used as a typed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Premium,
    Modern,
    Warm,
    Dynamic,
    Nature,
    Tech,
    Lifestyle,
    Cinematic,
}

impl Mood {
    /// All moods in catalog order.
    pub const ALL: [Mood; 8] = [
        Mood::Premium,
        Mood::Modern,
        Mood::Warm,
        Mood::Dynamic,
        Mood::Nature,
        Mood::Tech,
        Mood::Lifestyle,
        Mood::Cinematic,
    ];

    /// Lowercase id used on the wire and in forms.
    pub fn id(self) -> &'static str {
        match self {
            Mood::Premium => "premium",
            Mood::Modern => "modern",
            Mood::Warm => "warm",
            Mood::Dynamic => "dynamic",
            Mood::Nature => "nature",
            Mood::Tech => "tech",
            Mood::Lifestyle => "lifestyle",
            Mood::Cinematic => "cinematic",
        }
    }

    /// Looks up the preset for this mood.
    pub fn preset(self) -> &'static MoodPreset {
        &MOOD_PRESETS[self as usize]
    }

    /// Light moods render placeholder text in dark ink.
    pub fn is_light(self) -> bool {
        matches!(self, Mood::Modern | Mood::Warm | Mood::Lifestyle)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mood {
    type Err = StoryboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.id() == id)
            .ok_or_else(|| StoryboardError::unknown_mood(id))
    }
}

// =============================================================================
// MOOD PRESET
// =============================================================================

/// Stylistic defaults for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPreset {
    pub mood: Mood,
    /// Korean display name, substituted into scene descriptions.
    pub display_name: &'static str,
    /// English name, used in prompt style lines.
    pub english_name: &'static str,
    pub color_palette: &'static str,
    pub lighting: &'static str,
    pub camera_style: &'static str,
    pub visual_style: &'static str,
    pub music_style: &'static str,
}

/// Indexed by `Mood as usize`.
static MOOD_PRESETS: [MoodPreset; 8] = [
    MoodPreset {
        mood: Mood::Premium,
        display_name: "프리미엄 / 럭셔리",
        english_name: "Premium & Luxury",
        color_palette: "deep blacks, warm golds, muted creams",
        lighting: "dramatic rim lighting, soft key light, cinematic shadows",
        camera_style: "slow tracking shots, smooth dolly movements, shallow depth of field",
        visual_style: "sleek, sophisticated, editorial-grade",
        music_style: "웅장한 오케스트라, 섬세한 피아노",
    },
    MoodPreset {
        mood: Mood::Modern,
        display_name: "모던 / 미니멀",
        english_name: "Modern & Minimal",
        color_palette: "clean whites, soft grays, accent colors",
        lighting: "flat even lighting, soft diffused light, bright and airy",
        camera_style: "static wide shots, geometric framing, symmetrical composition",
        visual_style: "clean, minimal, structured",
        music_style: "미니멀 일렉트로닉, 앰비언트",
    },
    MoodPreset {
        mood: Mood::Warm,
        display_name: "따뜻한 / 감성적",
        english_name: "Warm & Emotional",
        color_palette: "warm amber, soft oranges, earthy tones",
        lighting: "golden hour, warm backlight, soft natural light",
        camera_style: "handheld feel, intimate close-ups, slow motion",
        visual_style: "organic, authentic, heartfelt",
        music_style: "어쿠스틱 기타, 감성 피아노",
    },
    MoodPreset {
        mood: Mood::Dynamic,
        display_name: "다이내믹 / 에너지",
        english_name: "Dynamic & Energetic",
        color_palette: "vivid saturated colors, high contrast, bold tones",
        lighting: "hard directional light, colored gels, strobe effects",
        camera_style: "fast cuts, whip pans, dynamic angles, low-angle shots",
        visual_style: "bold, impactful, energetic",
        music_style: "일렉트로닉 비트, 에너지틱 BGM",
    },
    MoodPreset {
        mood: Mood::Nature,
        display_name: "자연 / 친환경",
        english_name: "Nature & Eco",
        color_palette: "lush greens, earth tones, sky blues",
        lighting: "natural sunlight, dappled forest light, golden hour",
        camera_style: "aerial wide shots, slow tracking through nature, macro details",
        visual_style: "organic, serene, grounded",
        music_style: "자연 사운드, 어쿠스틱",
    },
    MoodPreset {
        mood: Mood::Tech,
        display_name: "테크 / 미래지향",
        english_name: "Tech & Futuristic",
        color_palette: "cool blues, neon accents, dark backgrounds",
        lighting: "LED edge lighting, screen glow, futuristic light effects",
        camera_style: "rotating product shots, zoom transitions, parallax movement",
        visual_style: "sleek, futuristic, innovative",
        music_style: "신스웨이브, 테크 사운드",
    },
    MoodPreset {
        mood: Mood::Lifestyle,
        display_name: "라이프스타일",
        english_name: "Lifestyle",
        color_palette: "natural balanced colors, warm neutrals, lifestyle tones",
        lighting: "soft natural light, window light, ambient indoor lighting",
        camera_style: "casual handheld, following shots, candid moments",
        visual_style: "authentic, relatable, aspirational",
        music_style: "인디 팝, 라이프스타일 BGM",
    },
    MoodPreset {
        mood: Mood::Cinematic,
        display_name: "시네마틱",
        english_name: "Cinematic",
        color_palette: "teal and orange, desaturated tones, film grain look",
        lighting: "dramatic chiaroscuro, volumetric light, silhouettes",
        camera_style: "anamorphic wide shots, slow crane movements, rack focus",
        visual_style: "filmic, dramatic, storytelling",
        music_style: "시네마틱 스코어, 앰비언트",
    },
];

/// Returns every preset in catalog order.
pub fn mood_presets() -> &'static [MoodPreset] {
    &MOOD_PRESETS
}
