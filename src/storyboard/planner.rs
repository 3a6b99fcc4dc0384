//! Scene planner: turns a campaign into an ordered scene sequence.
//!
//! Planning is a pure function of the campaign and the number of uploaded
//! reference images. It runs in four steps:
//! 1. map the duration to a scene count
//! 2. pick the curated beat subset for that count
//! 3. split the duration across the beats by position weight
//! 4. render each beat's templates with the campaign text

use tracing::debug;

use crate::catalog::{render_template, BeatType, MoodPreset, NarrationTemplate, TemplateVars};
use crate::error::StoryboardResult;
use crate::storyboard::model::{Campaign, CampaignInput, Scene};
use crate::storyboard::timing::{distribute_time, select_beats};

/// Validates raw input, then plans it.
pub fn plan(input: &CampaignInput, uploaded_images: usize) -> StoryboardResult<Vec<Scene>> {
    let campaign = input.validate()?;
    Ok(plan_campaign(&campaign, uploaded_images))
}

/// Plans an already validated campaign. Never fails.
pub fn plan_campaign(campaign: &Campaign, uploaded_images: usize) -> Vec<Scene> {
    let beats = select_beats(campaign.duration_seconds);
    let timings = distribute_time(beats.len(), campaign.duration_seconds);

    debug!(
        duration = campaign.duration_seconds,
        mood = %campaign.mood,
        scenes = beats.len(),
        uploaded_images,
        "Planning storyboard"
    );

    let preset = campaign.mood.preset();
    let vars = TemplateVars {
        brand: &campaign.brand,
        product: &campaign.product,
        mood: preset.display_name,
        lighting: preset.lighting,
        message: campaign.key_message.as_deref().unwrap_or(&campaign.brand),
    };

    beats
        .into_iter()
        .zip(timings)
        .enumerate()
        .map(|(position, (beat, duration))| {
            materialize_scene(position, beat, duration, &vars, campaign, uploaded_images)
        })
        .collect()
}

fn materialize_scene(
    position: usize,
    beat: BeatType,
    duration_seconds: f64,
    vars: &TemplateVars<'_>,
    campaign: &Campaign,
    uploaded_images: usize,
) -> Scene {
    let template = beat.template();
    Scene {
        scene_number: position as u32 + 1,
        beat_type: beat,
        icon: template.icon.to_string(),
        title: render_template(template.title_template, vars),
        description: render_template(template.description_template, vars),
        duration_seconds,
        camera_direction: template.camera_direction.to_string(),
        transition_style: template.transition_style.to_string(),
        audio_cue: template.audio_cue.to_string(),
        narration: narration_for(template.narration, vars, campaign.key_message.as_deref()),
        reference_image_slot: (position < uploaded_images).then_some(position),
    }
}

fn narration_for(
    narration: NarrationTemplate,
    vars: &TemplateVars<'_>,
    key_message: Option<&str>,
) -> String {
    match narration {
        NarrationTemplate::None => String::new(),
        NarrationTemplate::Fixed(line) => line.to_string(),
        NarrationTemplate::KeyMessageOr(fallback) => match key_message {
            Some(message) => message.to_string(),
            None => render_template(fallback, vars),
        },
    }
}

/// Total planned seconds across scenes.
pub fn total_duration(scenes: &[Scene]) -> f64 {
    scenes.iter().map(|s| s.duration_seconds).sum()
}

/// Music direction for a storyboard, taken from its mood.
pub fn music_direction(preset: &MoodPreset) -> &'static str {
    preset.music_style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Mood;

    fn input() -> CampaignInput {
        CampaignInput::new("Aurora", "Glow Serum", "Night-time repair serum launch")
            .with_mood("cinematic")
    }

    #[test]
    fn test_plan_thirty_seconds() {
        let scenes = plan(&input().with_duration(30), 0).unwrap();
        let beats: Vec<BeatType> = scenes.iter().map(|s| s.beat_type).collect();
        assert_eq!(
            beats,
            vec![
                BeatType::Opening,
                BeatType::Context,
                BeatType::ProductReveal,
                BeatType::FeatureHighlight,
                BeatType::Climax,
                BeatType::BrandLogo,
            ]
        );
        let numbers: Vec<u32> = scenes.iter().map(|s| s.scene_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_plan_uses_selected_beats_and_icons() {
        for duration in [5, 20, 45, 90] {
            let scenes = plan(&input().with_duration(duration), 0).unwrap();
            let beats: Vec<BeatType> = scenes.iter().map(|s| s.beat_type).collect();
            assert_eq!(beats, select_beats(duration));
            for scene in &scenes {
                assert_eq!(scene.icon, scene.beat_type.template().icon);
            }
        }
        let scenes = plan(&input().with_duration(30), 0).unwrap();
        assert_eq!(scenes[0].icon, "fa-play-circle");
    }

    #[test]
    fn test_templates_are_rendered() {
        let scenes = plan(&input().with_duration(15), 0).unwrap();
        let reveal = &scenes[1];
        assert_eq!(reveal.beat_type, BeatType::ProductReveal);
        assert_eq!(reveal.title, "Glow Serum 첫 등장");
        assert!(reveal.description.starts_with("Aurora의 Glow Serum을(를)"));
        assert!(reveal.description.contains(Mood::Cinematic.preset().lighting));

        let opening = &scenes[0];
        assert!(opening.description.contains("시네마틱 분위기"));
        assert!(!scenes.iter().any(|s| s.description.contains('{')));
    }

    #[test]
    fn test_key_message_narration_and_description() {
        let scenes = plan(&input().with_duration(60).with_key_message("Go Far"), 0).unwrap();
        let climax = scenes.iter().find(|s| s.beat_type == BeatType::Climax).unwrap();
        let key = scenes.iter().find(|s| s.beat_type == BeatType::KeyMessage).unwrap();

        assert_eq!(climax.narration, "Go Far");
        assert_eq!(key.narration, "Go Far");
        assert!(key.description.starts_with("\"Go Far\""));
    }

    #[test]
    fn test_key_message_fallbacks() {
        let scenes = plan(&input().with_duration(60).with_key_message(""), 0).unwrap();
        let climax = scenes.iter().find(|s| s.beat_type == BeatType::Climax).unwrap();
        let key = scenes.iter().find(|s| s.beat_type == BeatType::KeyMessage).unwrap();

        assert_eq!(climax.narration, "Aurora의 가치를 완성하는 순간");
        assert_eq!(key.narration, "Aurora");
        assert!(key.description.starts_with("\"Aurora\""));
    }

    #[test]
    fn test_fixed_and_empty_narration() {
        let scenes = plan(&input().with_duration(90), 0).unwrap();
        assert_eq!(scenes[1].narration, "일상 속 순간을 담다");
        assert!(scenes[0].narration.is_empty());
        assert!(!scenes[0].has_narration());
    }

    #[test]
    fn test_reference_slots_are_positional() {
        let scenes = plan(&input().with_duration(30), 2).unwrap();
        let slots: Vec<Option<usize>> = scenes.iter().map(|s| s.reference_image_slot).collect();
        assert_eq!(slots, vec![Some(0), Some(1), None, None, None, None]);

        let scenes = plan(&input().with_duration(15), 10).unwrap();
        assert!(scenes.iter().enumerate().all(|(i, s)| s.reference_image_slot == Some(i)));
    }

    #[test]
    fn test_plan_rejects_bad_input() {
        let err = plan(&CampaignInput::new("", "X", "d"), 0).unwrap_err();
        assert!(err.is_validation());

        let err = plan(&input().with_mood("nonexistent"), 0).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_total_duration() {
        let scenes = plan(&input().with_duration(30), 0).unwrap();
        assert!((total_duration(&scenes) - 30.0).abs() <= 0.6 + 1e-9);
        assert_eq!(music_direction(Mood::Tech.preset()), "신스웨이브, 테크 사운드");
    }
}
