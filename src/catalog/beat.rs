//! Narrative beat templates.
//!
//! The catalog is a fixed ordered table of twelve beats. Planner output always
//! follows catalog order, so the index of a beat is part of its identity.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// BEAT TYPE
// =============================================================================

/// One stage of a branded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeatType {
    Opening,
    Context,
    ProductReveal,
    FeatureHighlight,
    Experience,
    Benefit,
    SocialProof,
    Climax,
    KeyMessage,
    BrandLogo,
    Bonus,
    Extra,
}

impl BeatType {
    /// All beat types in catalog order.
    pub const ALL: [BeatType; 12] = [
        BeatType::Opening,
        BeatType::Context,
        BeatType::ProductReveal,
        BeatType::FeatureHighlight,
        BeatType::Experience,
        BeatType::Benefit,
        BeatType::SocialProof,
        BeatType::Climax,
        BeatType::KeyMessage,
        BeatType::BrandLogo,
        BeatType::Bonus,
        BeatType::Extra,
    ];

    /// Position in the beat catalog (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Beat type at a catalog index.
    pub fn from_index(index: usize) -> Option<BeatType> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label, e.g. `PRODUCT REVEAL`.
    pub fn label(self) -> &'static str {
        match self {
            BeatType::Opening => "OPENING",
            BeatType::Context => "CONTEXT",
            BeatType::ProductReveal => "PRODUCT REVEAL",
            BeatType::FeatureHighlight => "FEATURE HIGHLIGHT",
            BeatType::Experience => "EXPERIENCE",
            BeatType::Benefit => "BENEFIT",
            BeatType::SocialProof => "SOCIAL PROOF",
            BeatType::Climax => "CLIMAX",
            BeatType::KeyMessage => "KEY MESSAGE",
            BeatType::BrandLogo => "BRAND LOGO",
            BeatType::Bonus => "BONUS",
            BeatType::Extra => "EXTRA",
        }
    }

    /// Template for this beat.
    pub fn template(self) -> &'static BeatTemplate {
        &BEAT_TEMPLATES[self.index()]
    }
}

impl fmt::Display for BeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// How a beat's narration line is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationTemplate {
    /// No narration.
    None,
    /// Fixed line, independent of the campaign.
    Fixed(&'static str),
    /// The campaign key message, else the rendered fallback template.
    KeyMessageOr(&'static str),
}

/// Immutable record describing one beat.
///
/// Template strings may reference `{brand}`, `{product}`, `{mood}` (mood display
/// name), `{lighting}` (mood lighting) and `{message}` (key message, else brand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatTemplate {
    pub beat_type: BeatType,
    /// Font Awesome icon class shown next to the beat label.
    pub icon: &'static str,
    pub title_template: &'static str,
    pub description_template: &'static str,
    pub camera_direction: &'static str,
    pub transition_style: &'static str,
    pub audio_cue: &'static str,
    pub narration: NarrationTemplate,
}

/// Values substituted into beat templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub brand: &'a str,
    pub product: &'a str,
    pub mood: &'a str,
    pub lighting: &'a str,
    pub message: &'a str,
}

impl TemplateVars<'_> {
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "brand" => Some(self.brand),
            "product" => Some(self.product),
            "mood" => Some(self.mood),
            "lighting" => Some(self.lighting),
            "message" => Some(self.message),
            _ => None,
        }
    }
}

/// Renders a template in a single pass.
///
/// Substituted values are never rescanned, so a brand containing `{product}`
/// stays literal. Unknown placeholders are emitted unchanged.
pub fn render_template(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match vars.lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Indexed by `BeatType as usize`.
static BEAT_TEMPLATES: [BeatTemplate; 12] = [
    BeatTemplate {
        beat_type: BeatType::Opening,
        icon: "fa-play-circle",
        title_template: "임팩트 있는 오프닝",
        description_template: "시청자의 시선을 사로잡는 첫 장면. {mood} 분위기의 비주얼로 시작하며, 브랜드 세계관에 진입하는 순간을 연출합니다.",
        camera_direction: "Wide establishing shot → Slow zoom in",
        transition_style: "Fade in from black",
        audio_cue: "사운드 라이징, 분위기 설정",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::Context,
        icon: "fa-eye",
        title_template: "상황 설정 & 공감",
        description_template: "타겟 오디언스가 공감할 수 있는 일상 속 상황이나 니즈를 보여줍니다. {product}이(가) 필요한 순간을 자연스럽게 연출합니다.",
        camera_direction: "Medium shot, eye-level",
        transition_style: "Smooth cut",
        audio_cue: "BGM 시작, 내추럴 사운드",
        narration: NarrationTemplate::Fixed("일상 속 순간을 담다"),
    },
    BeatTemplate {
        beat_type: BeatType::ProductReveal,
        icon: "fa-gem",
        title_template: "{product} 첫 등장",
        description_template: "{brand}의 {product}을(를) 처음으로 화면에 등장시킵니다. {lighting}을(를) 활용하여 제품의 존재감을 극대화합니다.",
        camera_direction: "Slow dolly push-in, shallow DOF",
        transition_style: "Light flash / Motion blur transition",
        audio_cue: "BGM 빌드업, 임팩트 사운드",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::FeatureHighlight,
        icon: "fa-star",
        title_template: "핵심 기능 & USP",
        description_template: "{product}의 핵심 기능과 차별점을 시각적으로 풀어냅니다. 클로즈업과 디테일 샷을 활용하여 제품의 강점을 부각합니다.",
        camera_direction: "Close-up details, insert shots",
        transition_style: "Match cut / Whip pan",
        audio_cue: "BGM 포인트, 효과음",
        narration: NarrationTemplate::Fixed("핵심 가치를 보여주는 순간"),
    },
    BeatTemplate {
        beat_type: BeatType::Experience,
        icon: "fa-hand-sparkles",
        title_template: "사용 경험 & 감성",
        description_template: "실제 사용 장면을 통해 {product}이(가) 주는 경험과 감성을 전달합니다. 사용자의 표정과 반응으로 감성적 연결을 만듭니다.",
        camera_direction: "Over-the-shoulder, reaction shots",
        transition_style: "Cross dissolve",
        audio_cue: "BGM 감성 구간, 보이스오버",
        narration: NarrationTemplate::Fixed("경험이 만드는 차이"),
    },
    BeatTemplate {
        beat_type: BeatType::Benefit,
        icon: "fa-check-circle",
        title_template: "변화 & 베네핏",
        description_template: "{product}을(를) 통해 달라진 모습이나 얻게 되는 가치를 보여줍니다. 비포/애프터 또는 라이프스타일 변화를 연출합니다.",
        camera_direction: "Dynamic movement, tracking shot",
        transition_style: "Speed ramp",
        audio_cue: "BGM 클라이맥스 빌드업",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::SocialProof,
        icon: "fa-users",
        title_template: "다양한 활용 장면",
        description_template: "다양한 상황과 사용자에 의해 {product}이(가) 활용되는 모습을 빠른 컷으로 보여줍니다. 보편성과 다양성을 강조합니다.",
        camera_direction: "Quick cuts montage, varied angles",
        transition_style: "Jump cuts / Rhythmic editing",
        audio_cue: "BGM 에너지 상승",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::Climax,
        icon: "fa-bolt",
        title_template: "클라이맥스 & 임팩트",
        description_template: "영상의 감정적 정점. {mood} 분위기를 극대화하며, 가장 임팩트 있는 비주얼과 메시지를 전달합니다.",
        camera_direction: "Hero shot, dramatic angle",
        transition_style: "Dramatic slow motion",
        audio_cue: "BGM 클라이맥스",
        narration: NarrationTemplate::KeyMessageOr("{brand}의 가치를 완성하는 순간"),
    },
    BeatTemplate {
        beat_type: BeatType::KeyMessage,
        icon: "fa-quote-right",
        title_template: "핵심 메시지 전달",
        description_template: "\"{message}\" — 브랜드의 핵심 메시지를 텍스트와 비주얼로 강렬하게 전달합니다. 기억에 남는 카피와 함께 제품을 다시 한번 보여줍니다.",
        camera_direction: "Slow push-in on text/product",
        transition_style: "Fade / Light streak",
        audio_cue: "BGM 차분한 전환",
        narration: NarrationTemplate::KeyMessageOr("{brand}"),
    },
    BeatTemplate {
        beat_type: BeatType::BrandLogo,
        icon: "fa-flag-checkered",
        title_template: "브랜드 로고 & 엔딩",
        description_template: "{brand} 로고와 제품 패키지샷으로 마무리. CTA(Call to Action)와 함께 브랜드 아이덴티티를 각인시킵니다. 해시태그나 웹사이트 URL을 포함합니다.",
        camera_direction: "Center frame, static",
        transition_style: "Elegant fade to brand color",
        audio_cue: "BGM 아웃트로, 사운드 로고",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::Bonus,
        icon: "fa-plus-circle",
        title_template: "추가 컷 / 비하인드",
        description_template: "SNS 숏폼이나 비하인드 컷으로 활용 가능한 추가 장면. 메이킹 필름 느낌으로 친근함을 더합니다.",
        camera_direction: "Casual handheld, BTS feel",
        transition_style: "Cut to black",
        audio_cue: "내추럴 사운드",
        narration: NarrationTemplate::None,
    },
    BeatTemplate {
        beat_type: BeatType::Extra,
        icon: "fa-film",
        title_template: "확장 컷",
        description_template: "다양한 채널에 맞게 편집 가능한 여분 컷. 인스타그램 릴스, 유튜브 숏츠 등 다양한 포맷에 활용합니다.",
        camera_direction: "Varied",
        transition_style: "Varied",
        audio_cue: "BGM 변형",
        narration: NarrationTemplate::None,
    },
];

/// Returns the full beat catalog in order.
pub fn beat_templates() -> &'static [BeatTemplate] {
    &BEAT_TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars<'static> {
        TemplateVars {
            brand: "Aurora",
            product: "Glow Serum",
            mood: "시네마틱",
            lighting: "volumetric light",
            message: "Shine On",
        }
    }

    #[test]
    fn test_catalog_order_matches_enum() {
        assert_eq!(beat_templates().len(), 12);
        for (i, template) in beat_templates().iter().enumerate() {
            assert_eq!(template.beat_type.index(), i);
            assert_eq!(BeatType::from_index(i), Some(template.beat_type));
        }
        assert_eq!(BeatType::from_index(12), None);
    }

    #[test]
    fn test_render_substitutes_all_keys() {
        let rendered = render_template("{brand}/{product}/{mood}/{lighting}/{message}", &vars());
        assert_eq!(rendered, "Aurora/Glow Serum/시네마틱/volumetric light/Shine On");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_placeholders() {
        assert_eq!(render_template("a {nope} b", &vars()), "a {nope} b");
        assert_eq!(render_template("tail {brand", &vars()), "tail {brand");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let mut v = vars();
        v.brand = "{product}";
        assert_eq!(render_template("{brand}!", &v), "{product}!");
    }

    #[test]
    fn test_product_reveal_title_uses_product() {
        let template = BeatType::ProductReveal.template();
        assert_eq!(render_template(template.title_template, &vars()), "Glow Serum 첫 등장");
    }

    #[test]
    fn test_labels_and_serde() {
        assert_eq!(BeatType::SocialProof.to_string(), "SOCIAL PROOF");
        let json = serde_json::to_string(&BeatType::BrandLogo).unwrap();
        assert_eq!(json, "\"BRAND_LOGO\"");
    }
}
