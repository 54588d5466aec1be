//! Benchmarks for profile identification
//!
//! Measures registry lookups for descriptors that match early, late or not
//! at all.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dlnaprofile::common::{CodecKind, ContainerKind, FrameRate};
use dlnaprofile::engine::{EngineConfig, ProfileRegistry};
use dlnaprofile::probe::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};

/// Matched by the first family
fn jpeg_photo() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Image)
        .with_video(VideoStreamInfo::still(CodecKind::Mjpeg, 1024, 768))
        .with_extension("jpg")
}

/// Matched by an audio family
fn raw_aac() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Adts)
        .with_audio(AudioStreamInfo::new(CodecKind::Aac, 44_100, 2, 320_000))
        .with_extension("aac")
}

/// Matched by the last family, deep in the NA HD table
fn hd_broadcast() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::MpegTransportStreamWithTimestamp)
        .with_system_bit_rate(15_000_000)
        .with_video(
            VideoStreamInfo::new(CodecKind::Mpeg2Video, 1280, 1080, FrameRate::FPS_24)
                .with_bit_rate(12_000_000),
        )
        .with_audio(AudioStreamInfo::new(CodecKind::Ac3, 48_000, 5, 640_000))
        .with_extension("ts")
}

/// Visits every family and matches none
fn h264_mkv() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Unknown)
        .with_video(VideoStreamInfo::new(CodecKind::H264, 1920, 1080, FrameRate::FPS_24))
        .with_audio(AudioStreamInfo::new(CodecKind::Aac, 48_000, 6, 384_000))
        .with_extension("mkv")
}

fn bench_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify");
    let registry = ProfileRegistry::with_all_families();

    let cases = [
        ("jpeg_first_family", jpeg_photo()),
        ("aac_audio_family", raw_aac()),
        ("mpeg2_hd_last_family", hd_broadcast()),
        ("no_match", h264_mkv()),
    ];

    for (name, descriptor) in &cases {
        group.bench_with_input(BenchmarkId::new("all_families", name), descriptor, |b, d| {
            b.iter(|| registry.identify(black_box(d)));
        });
    }

    group.finish();
}

fn bench_extension_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("extension_check");

    let checked =
        ProfileRegistry::from_config(EngineConfig::all_families().with_extension_check(true))
            .expect("default families are valid");
    let unchecked = ProfileRegistry::with_all_families();
    let descriptor = hd_broadcast();

    group.bench_function("enabled", |b| {
        b.iter(|| checked.identify(black_box(&descriptor)));
    });

    group.bench_function("disabled", |b| {
        b.iter(|| unchecked.identify(black_box(&descriptor)));
    });

    group.finish();
}

criterion_group!(benches, bench_identify, bench_extension_check);
criterion_main!(benches);
