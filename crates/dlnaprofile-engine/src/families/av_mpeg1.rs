use dlnaprofile_common::{CodecKind, ContainerKind, FrameRate};
use dlnaprofile_probe::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};

const MPEG1_MAX_VIDEO_BIT_RATE: u32 = 1_150_000;

/// The three constrained-parameter (VideoCD) formats.
static MPEG1_FORMATS: [(u32, u32, FrameRate); 3] = [
    (352, 288, FrameRate::PAL),
    (352, 240, FrameRate::NTSC),
    (352, 240, FrameRate::NTSC_FILM),
];

/// MPEG-1 system streams.
#[derive(Debug, Default)]
pub struct Mpeg1Classifier;

fn video_ok(video: &VideoStreamInfo) -> bool {
    video.codec == CodecKind::Mpeg1Video
        && video.bit_rate_bps <= MPEG1_MAX_VIDEO_BIT_RATE
        && MPEG1_FORMATS.iter().any(|(w, h, rate)| {
            video.width == *w && video.height == *h && video.frame_rate.same_rate(*rate)
        })
}

fn audio_ok(audio: &AudioStreamInfo) -> bool {
    audio.codec == CodecKind::Mp2
        && audio.sample_rate_hz == 44_100
        && audio.channels == 2
        && audio.bit_rate_bps == 224_000
}

impl FamilyClassifier for Mpeg1Classifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AvMpeg1
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if !matches!(
            descriptor.container,
            ContainerKind::MpegProgramStream
                | ContainerKind::MpegElementaryStream
                | ContainerKind::Unknown
        ) {
            return None;
        }
        let video = descriptor.video.as_ref()?;
        let audio = descriptor.audio.as_ref()?;
        (video_ok(video) && audio_ok(audio)).then_some(&catalog::MPEG1)
    }
}
