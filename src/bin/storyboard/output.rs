//! Rendering a storyboard for the terminal and to disk.

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use storyboardpro::placeholder::visual_for;
use storyboardpro::{Mood, Storyboard};

/// Output format for the generated storyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(board: &Storyboard, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(board)),
        OutputFormat::Json => board.to_json().context("Failed to serialize storyboard"),
    }
}

/// Human-readable storyboard: header, scene cards, then every prompt.
pub fn render_text(board: &Storyboard) -> String {
    let preset = board.campaign.mood.preset();
    let mut out = String::new();

    let _ = writeln!(out, "{}", board.subtitle);
    let _ = writeln!(
        out,
        "{} scenes · {:.1}s · {} ({})",
        board.scene_count(),
        board.total_duration_seconds,
        preset.display_name,
        preset.english_name
    );
    let _ = writeln!(out, "Music: {}", board.music_direction);
    if let Some(audience) = &board.campaign.audience {
        let _ = writeln!(out, "Audience: {}", audience);
    }

    for scene in &board.scenes {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} | {} {} | {:.1}s",
            scene.badge(),
            visual_for(scene.beat_type).icon,
            scene.beat_type.label(),
            scene.duration_seconds
        );
        let _ = writeln!(out, "  {}", scene.title);
        let _ = writeln!(out, "  {}", scene.description);
        let _ = writeln!(out, "  Camera:     {}", scene.camera_direction);
        let _ = writeln!(out, "  Transition: {}", scene.transition_style);
        let _ = writeln!(out, "  Audio:      {}", scene.audio_cue);
        if scene.has_narration() {
            let _ = writeln!(out, "  Narration:  \"{}\"", scene.narration);
        }
        match scene.reference_image_slot {
            Some(slot) => {
                let _ = writeln!(out, "  Reference:  image #{}", slot + 1);
            }
            None => {
                let _ = writeln!(out, "  Reference:  placeholder");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", board.all_prompts_text());
    out
}

/// Mood catalog as an aligned table.
pub fn render_moods() -> String {
    let mut out = String::new();
    for mood in Mood::ALL {
        let preset = mood.preset();
        let _ = writeln!(
            out,
            "{:<10} {:<8} {:<20} {}",
            mood.id(),
            preset.display_name,
            preset.english_name,
            preset.visual_style
        );
    }
    out
}

/// Writes one SVG placeholder per scene into `dir`, pausing `pace` between
/// frames. Returns the written paths in scene order.
pub fn render_placeholders(board: &Storyboard, dir: &Path, pace: Duration) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create render directory {}", dir.display()))?;

    let frames = board.placeholders();
    let pb = ProgressBar::new(frames.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("=>-"),
    );

    let mut written = Vec::with_capacity(frames.len());
    for (position, frame) in frames.iter().enumerate() {
        if position > 0 && !pace.is_zero() {
            thread::sleep(pace);
        }
        pb.set_message(format!("{}", frame.beat_type));

        let path = dir.join(format!("scene-{:02}.svg", frame.scene_number));
        std::fs::write(&path, frame.to_svg())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Placeholder written");

        written.push(path);
        pb.inc(1);
    }
    pb.finish_with_message("Done");
    Ok(written)
}
