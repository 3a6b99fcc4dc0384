//! SVG rendering of placeholder reference frames.

use std::f64::consts::PI;
use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::catalog::{BeatType, Mood};
use crate::placeholder::palette::{palette_for, visual_for, MoodPalette, SceneVisual, ShapeMotif};
use crate::storyboard::model::Scene;

pub const FRAME_WIDTH: u32 = 912;
pub const FRAME_HEIGHT: u32 = 512;

const LETTERBOX_HEIGHT: f64 = 28.0;
const CORNER_MARGIN: f64 = 32.0;
const CORNER_LENGTH: f64 = 20.0;
const MUTED_TEXT_OPACITY: f64 = 0.35;

/// A decorative 16:9 reference frame for one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderFrame {
    pub scene_number: u32,
    pub beat_type: BeatType,
    pub mood: Mood,
    pub brand: String,
    pub product: String,
}

impl PlaceholderFrame {
    pub fn new(
        scene_number: u32,
        beat_type: BeatType,
        mood: Mood,
        brand: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            beat_type,
            mood,
            brand: brand.into(),
            product: product.into(),
        }
    }

    pub fn for_scene(scene: &Scene, mood: Mood, brand: &str, product: &str) -> Self {
        Self::new(scene.scene_number, scene.beat_type, mood, brand, product)
    }

    /// Renders the frame as a standalone SVG document. Output is deterministic.
    pub fn to_svg(&self) -> String {
        let palette = palette_for(self.mood);
        let visual = visual_for(self.beat_type);
        let w = f64::from(FRAME_WIDTH);
        let h = f64::from(FRAME_HEIGHT);
        let ink = if self.mood.is_light() { "#1e1e28" } else { "#ffffff" };

        let mut svg = String::with_capacity(8 * 1024);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        write_defs(&mut svg, palette, self.scene_number, w, h);

        let _ = write!(svg, r#"<rect width="{w}" height="{h}" fill="url(#bg)"/>"#);

        let _ = write!(
            svg,
            r#"<g opacity="0.08" fill="none" stroke="{}" stroke-width="1">"#,
            palette.accent
        );
        write_motif(&mut svg, visual.motif, w, h, palette.accent);
        svg.push_str("</g>");

        // Letterbox bars
        let _ = write!(
            svg,
            r##"<rect width="{w}" height="{LETTERBOX_HEIGHT}" fill="#000000" fill-opacity="0.5"/><rect y="{}" width="{w}" height="{LETTERBOX_HEIGHT}" fill="#000000" fill-opacity="0.5"/>"##,
            h - LETTERBOX_HEIGHT
        );
        let _ = write!(svg, r#"<rect width="{w}" height="{h}" fill="url(#vignette)"/>"#);
        let _ = write!(
            svg,
            r#"<rect y="{:.1}" width="{w}" height="{:.1}" fill="url(#streak)" opacity="0.06"/>"#,
            h * 0.38,
            h * 0.24
        );

        write_labels(&mut svg, self, &visual, palette, ink, w, h);
        write_corner_marks(&mut svg, ink, w, h);

        svg.push_str("</svg>");
        svg
    }

    /// Renders the frame as a `data:image/svg+xml;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.to_svg()))
    }
}

fn write_defs(svg: &mut String, palette: &MoodPalette, scene_number: u32, w: f64, h: f64) {
    let [c0, c1, c2] = palette.gradient_for(scene_number);
    let _ = write!(
        svg,
        r#"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{c0}"/><stop offset="0.5" stop-color="{c1}"/><stop offset="1" stop-color="{c2}"/></linearGradient>"#
    );
    let _ = write!(
        svg,
        r##"<radialGradient id="vignette" gradientUnits="userSpaceOnUse" cx="{:.1}" cy="{:.1}" r="{:.1}"><stop offset="{:.3}" stop-color="#000000" stop-opacity="0"/><stop offset="1" stop-color="#000000" stop-opacity="0.55"/></radialGradient>"##,
        w / 2.0,
        h / 2.0,
        w * 0.7,
        0.25 / 0.7
    );
    let _ = write!(
        svg,
        r#"<linearGradient id="streak" x1="0" y1="0" x2="1" y2="0"><stop offset="0" stop-color="{a}" stop-opacity="0"/><stop offset="0.3" stop-color="{a}"/><stop offset="0.7" stop-color="{a}"/><stop offset="1" stop-color="{a}" stop-opacity="0"/></linearGradient>"#,
        a = palette.accent
    );
    let _ = write!(
        svg,
        r#"<radialGradient id="spot" gradientUnits="userSpaceOnUse" cx="{:.1}" cy="{:.1}" r="200"><stop offset="0" stop-color="{a}"/><stop offset="1" stop-color="{a}" stop-opacity="0"/></radialGradient></defs>"#,
        w / 2.0,
        h / 2.0,
        a = palette.accent
    );
}

fn write_motif(svg: &mut String, motif: ShapeMotif, w: f64, h: f64, accent: &str) {
    let (cx, cy) = (w / 2.0, h / 2.0);
    match motif {
        ShapeMotif::Radial => {
            for i in 0..5_u32 {
                let r = 60.0 + f64::from(i) * 50.0;
                let _ = write!(svg, r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}"/>"#);
            }
        }
        ShapeMotif::Horizontal => {
            for i in 0..8_u32 {
                let y = h / 9.0 * f64::from(i + 1);
                let _ = write!(svg, r#"<line x1="0" y1="{y:.1}" x2="{w:.1}" y2="{y:.1}"/>"#);
            }
        }
        ShapeMotif::Spotlight => {
            let _ = write!(
                svg,
                r#"<rect width="{w:.1}" height="{h:.1}" fill="url(#spot)" stroke="none"/>"#
            );
        }
        ShapeMotif::Grid => {
            let mut x = 0.0;
            while x < w {
                let _ = write!(svg, r#"<line x1="{x:.1}" y1="0" x2="{x:.1}" y2="{h:.1}"/>"#);
                x += 60.0;
            }
            let mut y = 0.0;
            while y < h {
                let _ = write!(svg, r#"<line x1="0" y1="{y:.1}" x2="{w:.1}" y2="{y:.1}"/>"#);
                y += 60.0;
            }
        }
        ShapeMotif::Wave => {
            for (amplitude, phase) in [(60.0, 0.0), (40.0, 1.0)] {
                svg.push_str(r#"<polyline points=""#);
                let mut x = 0.0;
                while x < w {
                    let y = cy + (x * 0.02 + phase).sin() * amplitude;
                    let _ = write!(svg, "{x:.1},{y:.1} ");
                    x += 2.0;
                }
                svg.push_str(r#""/>"#);
            }
        }
        ShapeMotif::Diagonal => {
            for i in -10..20_i32 {
                let x = f64::from(i) * 80.0;
                let _ = write!(
                    svg,
                    r#"<line x1="{x:.1}" y1="0" x2="{:.1}" y2="{h:.1}"/>"#,
                    x + h
                );
            }
        }
        ShapeMotif::MultiCircle => {
            // Low-discrepancy positions keep the scatter stable between renders.
            for i in 0..12_u32 {
                let k = f64::from(i);
                let x = fract(k * 0.618_034 + 0.1) * w;
                let y = fract(k * 0.414_214 + 0.3) * h;
                let r = 30.0 + fract(k * 0.732_051) * 60.0;
                let _ = write!(svg, r#"<circle cx="{x:.1}" cy="{y:.1}" r="{r:.1}"/>"#);
            }
        }
        ShapeMotif::Burst => {
            for i in 0..24_u32 {
                let angle = f64::from(i) / 24.0 * PI * 2.0;
                let _ = write!(
                    svg,
                    r#"<line x1="{cx:.1}" y1="{cy:.1}" x2="{:.1}" y2="{:.1}"/>"#,
                    cx + angle.cos() * 300.0,
                    cy + angle.sin() * 300.0
                );
            }
        }
        ShapeMotif::CenterText => {
            let _ = write!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="200" height="2" fill="{accent}" stroke="none"/>"#,
                cx - 100.0,
                cy - 1.0
            );
        }
        ShapeMotif::CenterLogo => {
            let _ = write!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="160" height="100" rx="8" ry="8"/>"#,
                cx - 80.0,
                cy - 50.0
            );
        }
        ShapeMotif::Scattered | ShapeMotif::Minimal => {}
    }
}

fn write_labels(
    svg: &mut String,
    frame: &PlaceholderFrame,
    visual: &SceneVisual,
    palette: &MoodPalette,
    ink: &str,
    w: f64,
    h: f64,
) {
    let (cx, cy) = (w / 2.0, h / 2.0);
    let font = "Inter, sans-serif";

    let _ = write!(
        svg,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="serif" font-size="120" text-anchor="middle" dominant-baseline="middle" fill="{}" fill-opacity="0.12">{}</text>"#,
        cy - 20.0,
        palette.accent,
        escape_xml(&visual.icon.to_string())
    );
    let _ = write!(
        svg,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{font}" font-size="11" font-weight="600" letter-spacing="4" text-anchor="middle" fill="{}" fill-opacity="0.7">SCENE {:02}</text>"#,
        cy + 40.0,
        palette.accent,
        frame.scene_number
    );
    let _ = write!(
        svg,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{font}" font-size="28" font-weight="700" text-anchor="middle" fill="{ink}" fill-opacity="{}">{}</text>"#,
        cy + 72.0,
        if frame.mood.is_light() { 0.75 } else { 0.85 },
        visual.label
    );
    let _ = write!(
        svg,
        r#"<text x="{cx:.1}" y="{:.1}" font-family="{font}" font-size="13" font-weight="300" text-anchor="middle" fill="{ink}" fill-opacity="{MUTED_TEXT_OPACITY}">{} — {}</text>"#,
        h - 46.0,
        escape_xml(&frame.brand),
        escape_xml(&frame.product)
    );
    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="18" font-family="{font}" font-size="9" font-weight="500" text-anchor="end" fill="{ink}" fill-opacity="0.25">16:9</text>"#,
        w - 40.0
    );
}

fn write_corner_marks(svg: &mut String, ink: &str, w: f64, h: f64) {
    let (m, l) = (CORNER_MARGIN, CORNER_LENGTH);
    let corners = [
        [(m, m + l), (m, m), (m + l, m)],
        [(w - m - l, m), (w - m, m), (w - m, m + l)],
        [(m, h - m - l), (m, h - m), (m + l, h - m)],
        [(w - m - l, h - m), (w - m, h - m), (w - m, h - m - l)],
    ];
    let _ = write!(
        svg,
        r#"<g fill="none" stroke="{ink}" stroke-opacity="0.15" stroke-width="1">"#
    );
    for [a, b, c] in corners {
        let _ = write!(
            svg,
            r#"<polyline points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}"/>"#,
            a.0, a.1, b.0, b.1, c.0, c.1
        );
    }
    svg.push_str("</g>");
}

fn fract(value: f64) -> f64 {
    value - value.floor()
}

/// Escapes text for use in SVG content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(beat: BeatType, mood: Mood) -> PlaceholderFrame {
        PlaceholderFrame::new(3, beat, mood, "Aurora", "Glow Serum")
    }

    #[test]
    fn test_svg_is_deterministic() {
        let a = frame(BeatType::SocialProof, Mood::Nature).to_svg();
        let b = frame(BeatType::SocialProof, Mood::Nature).to_svg();
        assert_eq!(a, b);
        assert!(a.starts_with("<svg "));
        assert!(a.ends_with("</svg>"));
    }

    #[test]
    fn test_background_is_only_the_gradient() {
        let svg = frame(BeatType::Opening, Mood::Premium).to_svg();
        let background = format!(
            r#"<rect width="{FRAME_WIDTH}" height="{FRAME_HEIGHT}" fill="url(#bg)"/><g opacity="0.08""#
        );
        assert!(svg.contains(&background));
        assert!(!svg.contains("rgba("));
    }

    #[test]
    fn test_svg_contains_labels() {
        let svg = frame(BeatType::ProductReveal, Mood::Premium).to_svg();
        assert!(svg.contains("SCENE 03"));
        assert!(svg.contains(">REVEAL</text>"));
        assert!(svg.contains("Aurora — Glow Serum"));
        assert!(svg.contains("16:9"));
        assert!(svg.contains("url(#spot)"));
    }

    #[test]
    fn test_svg_uses_scene_gradient() {
        let svg = frame(BeatType::Opening, Mood::Premium).to_svg();
        // Scene 3 → gradient 0
        assert!(svg.contains(r##"stop-color="#1a1a2e""##));
        assert!(svg.contains(r##"stop-color="#0f3460""##));
    }

    #[test]
    fn test_light_moods_use_dark_ink() {
        let light = frame(BeatType::Climax, Mood::Modern).to_svg();
        let dark = frame(BeatType::Climax, Mood::Tech).to_svg();
        assert!(light.contains(r##"fill="#1e1e28""##));
        assert!(dark.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_text_is_escaped() {
        let frame = PlaceholderFrame::new(1, BeatType::BrandLogo, Mood::Warm, "A&B <Co>", "\"Mug\"");
        let svg = frame.to_svg();
        assert!(svg.contains("A&amp;B &lt;Co&gt; — &quot;Mug&quot;"));
        assert!(!svg.contains("<Co>"));
    }

    #[test]
    fn test_data_url_round_trips_to_svg() {
        let f = frame(BeatType::Bonus, Mood::Lifestyle);
        let url = f.to_data_url();
        let encoded = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), f.to_svg());
    }
}
