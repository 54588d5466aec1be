use dlnaprofile_common::ContainerKind;
use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators::{self, AacClass};

/// AAC audio, either raw ADTS or muxed into an ISO container.
#[derive(Debug, Default)]
pub struct AacClassifier;

/// Bare AAC streams come out of the prober with no container or as ADTS.
fn is_raw(container: ContainerKind) -> bool {
    matches!(container, ContainerKind::Unknown | ContainerKind::Adts)
}

impl FamilyClassifier for AacClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioMpeg4
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some() {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        let raw = is_raw(descriptor.container);

        let record = match (validators::aac_class(audio)?, raw) {
            (AacClass::Stereo, true) => &catalog::AAC_ADTS_320,
            (AacClass::Stereo, false) => &catalog::AAC_ISO_320,
            (AacClass::Multichannel5, true) => &catalog::AAC_MULT5_ADTS,
            (AacClass::Multichannel5, false) => &catalog::AAC_MULT5_ISO,
            (AacClass::LtpMultichannel7, _) => &catalog::AAC_LTP_MULT7_ISO,
        };
        Some(record)
    }
}
