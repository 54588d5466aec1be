use dlnaprofile_probe::StreamDescriptor;

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::validators::{self, Mp3Class};

/// MPEG-1 layer 3 audio files.
#[derive(Debug, Default)]
pub struct Mp3Classifier;

impl FamilyClassifier for Mp3Classifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AudioMp3
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        if descriptor.video.is_some() {
            return None;
        }
        let audio = descriptor.audio.as_ref()?;
        match validators::mp3_class(audio)? {
            Mp3Class::Mp3 => Some(&catalog::MP3),
            Mp3Class::Mp3X => Some(&catalog::MP3X),
        }
    }
}
