use dlnaprofile_common::CodecKind;
use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};

/// Bounding boxes, smallest first.
static JPEG_SIZES: [(u32, u32, &ProfileRecord); 3] = [
    (640, 480, &catalog::JPEG_SM),
    (1024, 768, &catalog::JPEG_MED),
    (4096, 4096, &catalog::JPEG_LRG),
];

/// JPEG stills, sized into the smallest box that holds them.
#[derive(Debug, Default)]
pub struct JpegClassifier;

impl FamilyClassifier for JpegClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::ImageJpeg
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.audio.is_some() {
            return None;
        }
        let picture = descriptor
            .video
            .as_ref()
            .filter(|v| v.codec == CodecKind::Mjpeg && v.width > 0 && v.height > 0)?;

        JPEG_SIZES
            .iter()
            .find(|(w, h, _)| picture.width <= *w && picture.height <= *h)
            .map(|(_, _, record)| *record)
    }
}
