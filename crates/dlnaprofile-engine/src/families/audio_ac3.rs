use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators;

/// Raw AC-3 audio files.
#[derive(Debug, Default)]
pub struct Ac3Classifier;

impl FamilyClassifier for Ac3Classifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioAc3
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some() {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        validators::ac3_raw(audio).then_some(&catalog::AC3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlnaprofile_common::{CodecKind, ContainerKind, FrameRate};
    use dlnaprofile_probe::{AudioStreamInfo, VideoStreamInfo};

    #[test]
    fn raw_ac3() {
        let d = StreamDescriptor::new(ContainerKind::Ac3)
            .with_audio(AudioStreamInfo::new(CodecKind::Ac3, 48_000, 6, 448_000));
        assert_eq!(Ac3Classifier.classify(&d).map(|r| r.id), Some("AC3"));
    }

    #[test]
    fn ac3_next_to_video_is_not_an_audio_item() {
        let d = StreamDescriptor::new(ContainerKind::MpegProgramStream)
            .with_audio(AudioStreamInfo::new(CodecKind::Ac3, 48_000, 2, 192_000))
            .with_video(VideoStreamInfo::new(CodecKind::Mpeg2Video, 720, 480, FrameRate::NTSC));
        assert!(Ac3Classifier.classify(&d).is_none());
    }
}
