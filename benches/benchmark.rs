//! Benchmarks for storyboard planning, prompt synthesis and placeholders.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storyboardpro::storyboard::distribute_time;
use storyboardpro::{
    plan, synthesize_prompt, CampaignInput, Mood, PlaceholderFrame, ReferenceImages, Storyboard,
};

fn input(duration: u32) -> CampaignInput {
    CampaignInput::new("Aurelia", "Night Serum", "A restorative overnight serum")
        .with_duration(duration)
        .with_mood("premium")
        .with_key_message("Wake up renewed")
}

fn bench_validate(c: &mut Criterion) {
    let campaign = input(30);
    c.bench_function("validate", |b| b.iter(|| black_box(campaign.validate().unwrap())));
}

fn bench_distribute_time(c: &mut Criterion) {
    c.bench_function("distribute_time_12", |b| {
        b.iter(|| black_box(distribute_time(black_box(12), black_box(120))))
    });
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    for duration in [15u32, 30, 60, 90, 120] {
        let campaign = input(duration);
        group.bench_with_input(BenchmarkId::new("duration", duration), &campaign, |b, campaign| {
            b.iter(|| black_box(plan(campaign, 3).unwrap()))
        });
    }

    group.finish();
}

fn bench_synthesize_prompt(c: &mut Criterion) {
    let scenes = plan(&input(120), 0).unwrap();
    let preset = Mood::Cinematic.preset();
    c.bench_function("synthesize_prompt_all_beats", |b| {
        b.iter(|| {
            for scene in &scenes {
                black_box(synthesize_prompt(scene, preset, "Aurelia", "Night Serum").to_text());
            }
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let campaign = input(60);
    let images = ReferenceImages::new();
    c.bench_function("generate_60s", |b| {
        b.iter(|| black_box(Storyboard::generate(&campaign, &images).unwrap()))
    });
}

fn bench_placeholder(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder");
    let scenes = plan(&input(120), 0).unwrap();

    for mood in [Mood::Premium, Mood::Modern, Mood::Tech] {
        group.bench_with_input(BenchmarkId::new("svg", mood.id()), &mood, |b, mood| {
            b.iter(|| {
                for scene in &scenes {
                    let frame = PlaceholderFrame::for_scene(scene, *mood, "Aurelia", "Night Serum");
                    black_box(frame.to_svg());
                }
            })
        });
    }

    let frame = PlaceholderFrame::for_scene(&scenes[0], Mood::Premium, "Aurelia", "Night Serum");
    group.bench_function("data_url", |b| b.iter(|| black_box(frame.to_data_url())));

    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_distribute_time,
    bench_plan,
    bench_synthesize_prompt,
    bench_generate,
    bench_placeholder,
);

criterion_main!(benches);
