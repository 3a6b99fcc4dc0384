//! Colour palettes per mood and visual motifs per beat.

use crate::catalog::{BeatType, Mood};

/// Background gradients and accent colours for a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPalette {
    /// Three diagonal gradients, each with three stops.
    pub gradients: [[&'static str; 3]; 3],
    pub accent: &'static str,
}

impl MoodPalette {
    /// Gradient used for a given scene number.
    pub fn gradient_for(&self, scene_number: u32) -> [&'static str; 3] {
        self.gradients[scene_number as usize % self.gradients.len()]
    }
}

pub fn palette_for(mood: Mood) -> &'static MoodPalette {
    &PALETTES[mood as usize]
}

static PALETTES: [MoodPalette; 8] = [
    // premium
    MoodPalette {
        gradients: [
            ["#1a1a2e", "#16213e", "#0f3460"],
            ["#2d132c", "#4a1942", "#2b1055"],
            ["#1a1a2e", "#2d2d44", "#3d3d5c"],
        ],
        accent: "#c8a96e",
    },
    // modern
    MoodPalette {
        gradients: [
            ["#f8f9fa", "#e9ecef", "#dee2e6"],
            ["#edf2fb", "#d7e3fc", "#c1d3fe"],
            ["#f0f4f8", "#d9e2ec", "#bcccdc"],
        ],
        accent: "#3d5a80",
    },
    // warm
    MoodPalette {
        gradients: [
            ["#ffecd2", "#fcb69f", "#ff9a76"],
            ["#f6d365", "#fda085", "#fed6b1"],
            ["#ffeaa7", "#fdcb6e", "#e17055"],
        ],
        accent: "#e17055",
    },
    // dynamic
    MoodPalette {
        gradients: [
            ["#0f0c29", "#302b63", "#24243e"],
            ["#200122", "#6f0000", "#200122"],
            ["#1a0530", "#3a0d5e", "#1a0530"],
        ],
        accent: "#e94560",
    },
    // nature
    MoodPalette {
        gradients: [
            ["#134e5e", "#1a6b4f", "#71b280"],
            ["#093028", "#237a57", "#6dbc6e"],
            ["#0b486b", "#3b8d99", "#6baa75"],
        ],
        accent: "#71b280",
    },
    // tech
    MoodPalette {
        gradients: [
            ["#0c0c1d", "#1a1a3e", "#0d0d2b"],
            ["#000428", "#004e92", "#000428"],
            ["#0f0f23", "#1a2980", "#0f0f23"],
        ],
        accent: "#00d2ff",
    },
    // lifestyle
    MoodPalette {
        gradients: [
            ["#ffecd2", "#f5cba7", "#d4a574"],
            ["#fdfcfb", "#e2d1c3", "#c9b18c"],
            ["#f8f4f0", "#e8ddd4", "#d4c5b3"],
        ],
        accent: "#d4a574",
    },
    // cinematic
    MoodPalette {
        gradients: [
            ["#141e30", "#243b55", "#1a2a3a"],
            ["#0f2027", "#203a43", "#2c5364"],
            ["#1c1c1c", "#2d3436", "#1c1c1c"],
        ],
        accent: "#e6a756",
    },
];

/// Background motif drawn faintly behind a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeMotif {
    Radial,
    Horizontal,
    Spotlight,
    Grid,
    Wave,
    Diagonal,
    MultiCircle,
    Burst,
    CenterText,
    CenterLogo,
    Scattered,
    Minimal,
}

/// Glyph, motif and short label for a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneVisual {
    pub icon: char,
    pub motif: ShapeMotif,
    pub label: &'static str,
}

pub fn visual_for(beat: BeatType) -> SceneVisual {
    let (icon, motif, label) = match beat {
        BeatType::Opening => ('\u{25B6}', ShapeMotif::Radial, "OPENING"),
        BeatType::Context => ('\u{25CB}', ShapeMotif::Horizontal, "CONTEXT"),
        BeatType::ProductReveal => ('\u{2666}', ShapeMotif::Spotlight, "REVEAL"),
        BeatType::FeatureHighlight => ('\u{2605}', ShapeMotif::Grid, "FEATURE"),
        BeatType::Experience => ('\u{2764}', ShapeMotif::Wave, "EXPERIENCE"),
        BeatType::Benefit => ('\u{2713}', ShapeMotif::Diagonal, "BENEFIT"),
        BeatType::SocialProof => ('\u{2637}', ShapeMotif::MultiCircle, "SOCIAL"),
        BeatType::Climax => ('\u{26A1}', ShapeMotif::Burst, "CLIMAX"),
        BeatType::KeyMessage => ('\u{275D}', ShapeMotif::CenterText, "MESSAGE"),
        BeatType::BrandLogo => ('\u{2B23}', ShapeMotif::CenterLogo, "BRAND"),
        BeatType::Bonus => ('+', ShapeMotif::Scattered, "BONUS"),
        BeatType::Extra => ('\u{2026}', ShapeMotif::Minimal, "EXTRA"),
    };
    SceneVisual { icon, motif, label }
}
