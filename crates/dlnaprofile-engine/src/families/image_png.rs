use dlnaprofile_common::CodecKind;
use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};

const PNG_MAX_SIDE: u32 = 4096;

/// PNG stills up to 4096x4096.
#[derive(Debug, Default)]
pub struct PngClassifier;

impl FamilyClassifier for PngClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::ImagePng
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.audio.is_some() {
            return None;
        }
        let picture = descriptor.video.as_ref().filter(|v| v.codec == CodecKind::Png)?;
        let fits = (1..=PNG_MAX_SIDE).contains(&picture.width)
            && (1..=PNG_MAX_SIDE).contains(&picture.height);
        fits.then_some(&catalog::PNG_LRG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlnaprofile_common::ContainerKind;
    use dlnaprofile_probe::VideoStreamInfo;

    fn png(width: u32, height: u32) -> StreamDescriptor {
        StreamDescriptor::new(ContainerKind::Image)
            .with_video(VideoStreamInfo::still(CodecKind::Png, width, height))
    }

    #[test]
    fn large_png() {
        assert_eq!(PngClassifier.classify(&png(1920, 1080)).map(|r| r.id), Some("PNG_LRG"));
        assert_eq!(PngClassifier.classify(&png(4096, 4096)).map(|r| r.id), Some("PNG_LRG"));
        assert!(PngClassifier.classify(&png(4096, 4097)).is_none());
    }
}
