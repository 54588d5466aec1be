use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators;

/// Linear PCM audio.
#[derive(Debug, Default)]
pub struct LpcmClassifier;

impl FamilyClassifier for LpcmClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioLpcm
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some() {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        validators::lpcm_raw(audio).then_some(&catalog::LPCM)
    }
}
