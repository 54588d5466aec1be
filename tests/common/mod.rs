//! Shared descriptor fixtures for integration tests.

#![allow(dead_code)]

use dlnaprofile::common::{CodecKind, ContainerKind, FrameRate};
use dlnaprofile::probe::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};

pub fn ac3(bit_rate: u32) -> AudioStreamInfo {
    AudioStreamInfo::new(CodecKind::Ac3, 48_000, 2, bit_rate)
}

pub fn aac(sample_rate: u32, channels: u8, bit_rate: u32) -> AudioStreamInfo {
    AudioStreamInfo::new(CodecKind::Aac, sample_rate, channels, bit_rate)
}

pub fn mpeg2(width: u32, height: u32, frame_rate: FrameRate) -> VideoStreamInfo {
    VideoStreamInfo::new(CodecKind::Mpeg2Video, width, height, frame_rate)
}

/// 1080i North American broadcast in a timestamped transport stream.
pub fn hd_na_broadcast() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::MpegTransportStreamWithTimestamp)
        .with_system_bit_rate(15_000_000)
        .with_video(mpeg2(1920, 1080, FrameRate::NTSC).with_bit_rate(12_000_000))
        .with_audio(ac3(384_000))
        .with_extension("ts")
}

/// 576i European broadcast.
pub fn sd_eu_broadcast(container: ContainerKind) -> StreamDescriptor {
    StreamDescriptor::new(container)
        .with_video(mpeg2(720, 576, FrameRate::PAL).with_bit_rate(6_000_000))
        .with_audio(ac3(448_000))
}

/// Bare ADTS stream as a prober without container support reports it.
pub fn raw_aac(channels: u8, bit_rate: u32) -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Unknown).with_audio(aac(44_100, channels, bit_rate))
}

pub fn dvd_program_stream() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::MpegProgramStream)
        .with_video(mpeg2(720, 480, FrameRate::NTSC).with_bit_rate(8_000_000))
        .with_audio(AudioStreamInfo::new(CodecKind::Mp2, 48_000, 2, 224_000))
        .with_extension("mpg")
}

pub fn jpeg_photo(width: u32, height: u32) -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Image)
        .with_video(VideoStreamInfo::still(CodecKind::Mjpeg, width, height))
        .with_extension("jpg")
}

pub fn mp3_track() -> StreamDescriptor {
    StreamDescriptor::new(ContainerKind::Mp3)
        .with_audio(AudioStreamInfo::new(CodecKind::Mp3, 44_100, 2, 192_000))
        .with_extension("mp3")
}
