use dlnaprofile_common::ContainerKind;
use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators::{self, WmaClass};

/// Windows Media Audio in ASF.
#[derive(Debug, Default)]
pub struct WmaClassifier;

impl FamilyClassifier for WmaClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioWma
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some()
            || !matches!(descriptor.container, ContainerKind::Asf | ContainerKind::Unknown)
        {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        match validators::wma_class(audio)? {
            WmaClass::Baseline => Some(&catalog::WMABASE),
            WmaClass::Full => Some(&catalog::WMAFULL),
            WmaClass::Professional => Some(&catalog::WMAPRO),
        }
    }
}
