//! Prints the same campaign planned under every mood preset.
//!
//! Run with: cargo run --release --example mood_matrix

use storyboardpro::{CampaignInput, Mood, ReferenceImages, Storyboard};

fn main() {
    println!("========================================");
    println!(" StoryboardPro Mood Matrix");
    println!("========================================\n");

    let images = ReferenceImages::new();
    for mood in Mood::ALL {
        let input = CampaignInput::new("Aurelia", "Night Serum", "A restorative overnight serum")
            .with_duration(30)
            .with_mood(mood.id())
            .with_key_message("Wake up renewed");

        let board = match Storyboard::generate(&input, &images) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{}: {}", mood, e);
                continue;
            }
        };
        let preset = mood.preset();

        println!("## {} / {} ({})", preset.english_name, preset.display_name, mood.id());
        println!("   Lighting: {}", preset.lighting);
        println!("   Palette:  {}", preset.color_palette);
        println!("   Music:    {}", board.music_direction);
        for scene in &board.scenes {
            println!(
                "   {:>8} {:<17} {:>4.1}s  {}",
                scene.badge(),
                scene.beat_type.label(),
                scene.duration_seconds,
                scene.title
            );
        }
        if let Some(prompt) = board.prompts.get(2) {
            println!("   Reveal prompt: {}", prompt.spec.subject);
        }
        println!();
    }
}
