//! Throughput check for the full generate path across durations.
//!
//! Run with: cargo run --release --example planner_throughput

use std::time::Instant;

use storyboardpro::{CampaignInput, ReferenceImages, Storyboard, UploadedImage};

const ITERATIONS: u32 = 10_000;

fn main() {
    println!("========================================");
    println!(" StoryboardPro Planner Throughput");
    println!("========================================\n");

    let images: ReferenceImages = (0..4)
        .map(|i| UploadedImage::new(format!("ref-{}.jpg", i), "image/jpeg"))
        .collect();

    for duration in [15u32, 30, 60, 90, 120] {
        let input = CampaignInput::new("Volt", "Sprint Shoe", "Lightweight racing shoe")
            .with_duration(duration)
            .with_mood("dynamic");

        let start = Instant::now();
        let mut scenes = 0usize;
        let mut prompt_bytes = 0usize;
        for _ in 0..ITERATIONS {
            match Storyboard::generate(&input, &images) {
                Ok(board) => {
                    scenes += board.scene_count();
                    prompt_bytes += board.prompts.iter().map(|p| p.text.len()).sum::<usize>();
                }
                Err(e) => {
                    eprintln!("{}s: {}", duration, e);
                    return;
                }
            }
        }
        let elapsed = start.elapsed();

        println!("Duration {:>3}s", duration);
        println!("   Scenes / board:   {}", scenes / ITERATIONS as usize);
        println!("   Prompt bytes:     {}", prompt_bytes / ITERATIONS as usize);
        println!("   Total time:       {:>8.2?}", elapsed);
        println!("   Per generate:     {:>8.2?}", elapsed / ITERATIONS);
        println!();
    }

    // Placeholder rendering for the longest storyboard
    let input = CampaignInput::new("Volt", "Sprint Shoe", "Lightweight racing shoe").with_duration(120);
    if let Ok(board) = Storyboard::generate(&input, &images) {
        let start = Instant::now();
        let total_bytes: usize = board.placeholders().iter().map(|f| f.to_data_url().len()).sum();
        println!("Placeholder data URLs: {} frames, {} bytes, {:.2?}", board.scene_count(), total_bytes, start.elapsed());
    }
}
