use dlnaprofile_common::ContainerKind;
use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators::{self, AmrClass};

/// AMR speech audio, bare or in 3GPP files.
#[derive(Debug, Default)]
pub struct AmrClassifier;

impl FamilyClassifier for AmrClassifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioAmr
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some()
            || !matches!(
                descriptor.container,
                ContainerKind::Mpeg4SystemStream | ContainerKind::Unknown
            )
        {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        match validators::amr_class(audio)? {
            AmrClass::Narrowband => Some(&catalog::AMR_3GPP),
            AmrClass::WidebandPlus => Some(&catalog::AMR_WBPLUS),
        }
    }
}
