//! AAC parameter classification.

use std::fmt;

use dlnaprofile_common::CodecKind;
use dlnaprofile_probe::AudioStreamInfo;

/// Sample rates AAC profiles accept.
pub const AAC_SAMPLE_RATES: [u32; 9] = [
    8_000, 11_025, 12_000, 16_000, 22_050, 24_000, 32_000, 44_100, 48_000,
];

/// Channel/bit-rate class of an AAC stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AacClass {
    /// Mono or stereo, up to 576 kbps.
    Stereo,
    /// Five channels, up to 1444 kbps.
    Multichannel5,
    /// Seven channels, any bit rate.
    LtpMultichannel7,
}

/// MPEG-4 audio object type from an AudioSpecificConfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AacObjectType {
    Invalid,
    Main,
    LowComplexity,
    Ssr,
    LongTermPrediction,
    HighEfficiency,
    Scalable,
    TwinVq,
    Celp,
    Hvxc,
    Ttsi,
    MainSynthetic,
    Wavetable,
    Midi,
    AudioFx,
    LowComplexityEr,
    LongTermPredictionEr,
    ScalableEr,
    TwinVqEr,
    BsacEr,
    LowDelayEr,
    CelpEr,
    HvxcEr,
    HilnEr,
    ParametricEr,
    Ssc,
    HighEfficiencyL3,
    Reserved(u8),
}

impl AacObjectType {
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Invalid,
            1 => Self::Main,
            2 => Self::LowComplexity,
            3 => Self::Ssr,
            4 => Self::LongTermPrediction,
            5 => Self::HighEfficiency,
            6 => Self::Scalable,
            7 => Self::TwinVq,
            8 => Self::Celp,
            9 => Self::Hvxc,
            12 => Self::Ttsi,
            13 => Self::MainSynthetic,
            14 => Self::Wavetable,
            15 => Self::Midi,
            16 => Self::AudioFx,
            17 => Self::LowComplexityEr,
            19 => Self::LongTermPredictionEr,
            20 => Self::ScalableEr,
            21 => Self::TwinVqEr,
            22 => Self::BsacEr,
            23 => Self::LowDelayEr,
            24 => Self::CelpEr,
            25 => Self::HvxcEr,
            26 => Self::HilnEr,
            27 => Self::ParametricEr,
            28 => Self::Ssc,
            31 => Self::HighEfficiencyL3,
            other => Self::Reserved(other),
        }
    }
}

impl fmt::Display for AacObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserved(bits) => write!(f, "reserved({bits})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Object type carried in the top five bits of the first extra-data byte.
/// Empty extra data yields [`AacObjectType::Invalid`].
pub fn aac_object_type(extra_data: &[u8]) -> AacObjectType {
    match extra_data.first() {
        Some(byte) => AacObjectType::from_bits(byte >> 3),
        None => AacObjectType::Invalid,
    }
}

/// Classify an AAC stream. The object type is logged but does not take
/// part in the decision.
pub fn aac_class(audio: &AudioStreamInfo) -> Option<AacClass> {
    let object_type = aac_object_type(&audio.extra_data);
    tracing::trace!(%object_type, "AAC object type");

    if audio.codec != CodecKind::Aac || !AAC_SAMPLE_RATES.contains(&audio.sample_rate_hz) {
        return None;
    }

    match audio.channels {
        1 | 2 if audio.bit_rate_bps <= 576_000 => Some(AacClass::Stereo),
        5 if audio.bit_rate_bps <= 1_444_000 => Some(AacClass::Multichannel5),
        7 => Some(AacClass::LtpMultichannel7),
        _ => None,
    }
}
