//! Per-family classifiers.
//!
//! A family classifier looks at one [`StreamDescriptor`] and either names
//! the single catalog record it complies with or declines. Every family
//! follows the same shape: container detection, codec gate, dispatch,
//! catalog lookup.

use std::fmt;
use std::str::FromStr;

use dlnaprofile_common::Error;
use dlnaprofile_probe::StreamDescriptor;

use crate::catalog::ProfileRecord;

mod audio_ac3;
mod audio_amr;
mod audio_lpcm;
mod audio_mp3;
mod audio_mpeg4;
mod audio_wma;
mod av_mpeg1;
mod av_mpeg2;
mod image_jpeg;
mod image_png;

pub use audio_ac3::Ac3Classifier;
pub use audio_amr::AmrClassifier;
pub use audio_lpcm::LpcmClassifier;
pub use audio_mp3::Mp3Classifier;
pub use audio_mpeg4::AacClassifier;
pub use audio_wma::WmaClassifier;
pub use av_mpeg1::Mpeg1Classifier;
pub use av_mpeg2::Mpeg2Classifier;
pub use image_jpeg::JpegClassifier;
pub use image_png::PngClassifier;

/// Decision procedure for one media family.
///
/// Implementations are pure: no I/O, no interior mutability, the same
/// descriptor always yields the same answer.
pub trait FamilyClassifier: Send + Sync {
    /// Which family this classifier decides.
    fn family(&self) -> MediaFamily;

    /// The record `descriptor` complies with, or `None`.
    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord>;
}

/// The profile families the engine knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaFamily {
    ImageJpeg,
    ImagePng,
    AudioAc3,
    AudioLpcm,
    AudioMp3,
    AudioMpeg4,
    AudioWma,
    AudioAmr,
    AvMpeg1,
    AvMpeg2,
}

impl MediaFamily {
    /// Every family in default precedence order.
    pub const ALL: [MediaFamily; 10] = [
        Self::ImageJpeg,
        Self::ImagePng,
        Self::AudioAc3,
        Self::AudioLpcm,
        Self::AudioMp3,
        Self::AudioMpeg4,
        Self::AudioWma,
        Self::AudioAmr,
        Self::AvMpeg1,
        Self::AvMpeg2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ImageJpeg => "IMAGE_JPEG",
            Self::ImagePng => "IMAGE_PNG",
            Self::AudioAc3 => "AUDIO_AC3",
            Self::AudioLpcm => "AUDIO_LPCM",
            Self::AudioMp3 => "AUDIO_MP3",
            Self::AudioMpeg4 => "AUDIO_MPEG4",
            Self::AudioWma => "AUDIO_WMA",
            Self::AudioAmr => "AUDIO_AMR",
            Self::AvMpeg1 => "AV_MPEG1",
            Self::AvMpeg2 => "AV_MPEG2",
        }
    }

    /// File extensions accepted when extension checking is enabled and no
    /// override is configured.
    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            Self::ImageJpeg => &["jpg", "jpe", "jpeg"],
            Self::ImagePng => &["png"],
            Self::AudioAc3 => &["ac3"],
            Self::AudioLpcm => &["pcm", "lpcm", "wav", "aiff"],
            Self::AudioMp3 => &["mp3"],
            Self::AudioMpeg4 => &["aac", "adts", "3gp", "mp4", "mov", "qt", "m4a"],
            Self::AudioWma => &["wma", "asf"],
            Self::AudioAmr => &["amr", "awb", "3gp", "3g2", "mp4"],
            Self::AvMpeg1 => &["mpg", "mpeg", "mpe", "m1v"],
            Self::AvMpeg2 => &["mpg", "mpeg", "mpe", "m2v", "mp2p", "mp2t", "ts", "ps", "pes"],
        }
    }

    /// Build the classifier for this family.
    pub fn classifier(self) -> Box<dyn FamilyClassifier> {
        match self {
            Self::ImageJpeg => Box::new(JpegClassifier),
            Self::ImagePng => Box::new(PngClassifier),
            Self::AudioAc3 => Box::new(Ac3Classifier),
            Self::AudioLpcm => Box::new(LpcmClassifier),
            Self::AudioMp3 => Box::new(Mp3Classifier),
            Self::AudioMpeg4 => Box::new(AacClassifier),
            Self::AudioWma => Box::new(WmaClassifier),
            Self::AudioAmr => Box::new(AmrClassifier),
            Self::AvMpeg1 => Box::new(Mpeg1Classifier),
            Self::AvMpeg2 => Box::new(Mpeg2Classifier),
        }
    }
}

impl fmt::Display for MediaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MediaFamily {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::unknown_family(s))
    }
}

/// File-extension allow-list applied before a family's classifier runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGate {
    enabled: bool,
    allowed: Vec<String>,
}

impl ExtensionGate {
    pub fn new(enabled: bool, allowed: Vec<String>) -> Self {
        let allowed = allowed
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Self { enabled, allowed }
    }

    pub fn disabled() -> Self {
        Self::new(false, Vec::new())
    }

    /// A descriptor without an extension fails an enabled gate.
    pub fn admits(&self, descriptor: &StreamDescriptor) -> bool {
        if !self.enabled {
            return true;
        }
        descriptor
            .file_extension
            .as_deref()
            .is_some_and(|ext| self.allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlnaprofile_common::ContainerKind;

    #[test]
    fn family_names_round_trip() {
        for family in MediaFamily::ALL {
            assert_eq!(family.name().parse::<MediaFamily>().unwrap(), family);
            assert_eq!(family.classifier().family(), family);
        }
        assert_eq!("av-mpeg2".parse::<MediaFamily>().unwrap(), MediaFamily::AvMpeg2);
    }

    #[test]
    fn unknown_family_name() {
        let err = "AUDIO_OGG".parse::<MediaFamily>().unwrap_err();
        assert!(matches!(err, Error::UnknownFamily(name) if name == "AUDIO_OGG"));
    }

    #[test]
    fn default_extensions_are_lowercase() {
        for family in MediaFamily::ALL {
            assert!(!family.default_extensions().is_empty());
            for ext in family.default_extensions() {
                assert_eq!(*ext, ext.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn extension_gate() {
        let gate = ExtensionGate::new(true, vec![".TS".into(), "mpg".into()]);
        let ts = StreamDescriptor::new(ContainerKind::MpegTransportStream).with_extension("ts");
        let mkv = StreamDescriptor::new(ContainerKind::Unknown).with_extension("mkv");
        let bare = StreamDescriptor::new(ContainerKind::MpegTransportStream);

        assert!(gate.admits(&ts));
        assert!(!gate.admits(&mkv));
        assert!(!gate.admits(&bare));
        assert!(ExtensionGate::disabled().admits(&bare));
        assert_eq!(gate.allowed(), ["ts", "mpg"]);
    }
}
