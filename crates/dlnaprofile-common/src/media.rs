//! Media-domain vocabulary: codecs, containers, media classes and frame rates.
//!
//! Enums serialize in snake_case and implement `Display` manually for a
//! consistent string representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// CodecKind
// ---------------------------------------------------------------------------

/// Codec carried by an elementary stream (audio, video or still image).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    Aac,
    Ac3,
    Mp2,
    Mp3,
    #[serde(rename = "pcm_s16le")]
    PcmS16Le,
    #[serde(rename = "pcm_s16be")]
    PcmS16Be,
    Wma,
    /// AMR narrowband.
    Amr,
    /// AMR wideband and wideband-plus.
    AmrWb,
    #[serde(rename = "mpeg1video")]
    Mpeg1Video,
    #[serde(rename = "mpeg2video")]
    Mpeg2Video,
    #[serde(rename = "mpeg4")]
    Mpeg4Part2,
    H264,
    Wmv,
    Mjpeg,
    Png,
    Unknown,
}

impl CodecKind {
    /// 16-bit signed linear PCM in either byte order.
    pub fn is_pcm_s16(self) -> bool {
        matches!(self, Self::PcmS16Le | Self::PcmS16Be)
    }

    /// MPEG-1/2 audio layer 2 or 3.
    pub fn is_mpeg_audio(self) -> bool {
        matches!(self, Self::Mp2 | Self::Mp3)
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aac => write!(f, "aac"),
            Self::Ac3 => write!(f, "ac3"),
            Self::Mp2 => write!(f, "mp2"),
            Self::Mp3 => write!(f, "mp3"),
            Self::PcmS16Le => write!(f, "pcm_s16le"),
            Self::PcmS16Be => write!(f, "pcm_s16be"),
            Self::Wma => write!(f, "wma"),
            Self::Amr => write!(f, "amr"),
            Self::AmrWb => write!(f, "amr_wb"),
            Self::Mpeg1Video => write!(f, "mpeg1video"),
            Self::Mpeg2Video => write!(f, "mpeg2video"),
            Self::Mpeg4Part2 => write!(f, "mpeg4"),
            Self::H264 => write!(f, "h264"),
            Self::Wmv => write!(f, "wmv"),
            Self::Mjpeg => write!(f, "mjpeg"),
            Self::Png => write!(f, "png"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// ContainerKind
// ---------------------------------------------------------------------------

/// How the elementary streams of a resource are packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// The prober could not name a container; bare elementary audio lands here.
    #[default]
    Unknown,
    /// Still image file.
    Image,
    /// Raw AAC with ADTS headers.
    Adts,
    /// Raw AC-3 bitstream.
    Ac3,
    /// Raw MPEG audio file.
    Mp3,
    /// RIFF/WAVE.
    Wav,
    /// Advanced Systems Format.
    Asf,
    /// ISO base media file (MP4, MOV, 3GP, M4A).
    Mpeg4SystemStream,
    /// MPEG video elementary stream.
    MpegElementaryStream,
    /// MPEG-2 program stream.
    MpegProgramStream,
    /// 188-byte transport packets without a timestamp field.
    MpegTransportStream,
    /// 192-byte DLNA transport packets carrying a valid timestamp.
    MpegTransportStreamWithTimestamp,
    /// 192-byte DLNA transport packets whose timestamp field is zero.
    MpegTransportStreamNoTimestamp,
}

/// State of the 4-byte timestamp prefix on transport stream packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    /// No timestamp field at all (ISO 188-byte packets).
    Absent,
    /// Field present but zero.
    Zero,
    /// Field present with a valid non-zero value.
    Valid,
}

impl ContainerKind {
    /// Timestamp sub-variant for transport streams, `None` for everything else.
    pub fn timestamp_field(self) -> Option<TimestampField> {
        match self {
            Self::MpegTransportStream => Some(TimestampField::Absent),
            Self::MpegTransportStreamWithTimestamp => Some(TimestampField::Valid),
            Self::MpegTransportStreamNoTimestamp => Some(TimestampField::Zero),
            _ => None,
        }
    }

    pub fn is_transport_stream(self) -> bool {
        self.timestamp_field().is_some()
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Image => write!(f, "image"),
            Self::Adts => write!(f, "adts"),
            Self::Ac3 => write!(f, "ac3"),
            Self::Mp3 => write!(f, "mp3"),
            Self::Wav => write!(f, "wav"),
            Self::Asf => write!(f, "asf"),
            Self::Mpeg4SystemStream => write!(f, "mpeg4_system_stream"),
            Self::MpegElementaryStream => write!(f, "mpeg_elementary_stream"),
            Self::MpegProgramStream => write!(f, "mpeg_program_stream"),
            Self::MpegTransportStream => write!(f, "mpeg_transport_stream"),
            Self::MpegTransportStreamWithTimestamp => {
                write!(f, "mpeg_transport_stream_with_timestamp")
            }
            Self::MpegTransportStreamNoTimestamp => write!(f, "mpeg_transport_stream_no_timestamp"),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaClass
// ---------------------------------------------------------------------------

/// Broad class of a profile: what kind of item a device should expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaClass {
    Image,
    Audio,
    #[serde(rename = "av")]
    Av,
    Collection,
}

impl fmt::Display for MediaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::Av => write!(f, "av"),
            Self::Collection => write!(f, "collection"),
        }
    }
}

impl FromStr for MediaClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "av" | "video" => Ok(Self::Av),
            "collection" => Ok(Self::Collection),
            other => Err(Error::Validation(format!("unknown media class '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// FrameRate
// ---------------------------------------------------------------------------

/// An exact frame rate expressed as `num / den`.
///
/// Comparisons in the profile tables are done on the reduced form, so
/// `60000/2002` and `30000/1001` are the same rate while `2997/100` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    pub num: u32,
    pub den: u32,
}

impl FrameRate {
    pub const NTSC: FrameRate = FrameRate::new(30000, 1001);
    pub const NTSC_FILM: FrameRate = FrameRate::new(24000, 1001);
    pub const PAL: FrameRate = FrameRate::new(25, 1);
    pub const FPS_30: FrameRate = FrameRate::new(30, 1);
    pub const FPS_24: FrameRate = FrameRate::new(24, 1);

    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Reduce to lowest terms. A zero denominator is left untouched.
    pub fn normalized(self) -> Self {
        if self.den == 0 {
            return self;
        }
        let g = gcd(self.num, self.den);
        if g <= 1 {
            return self;
        }
        Self::new(self.num / g, self.den / g)
    }

    /// Exact equality after normalization.
    pub fn same_rate(self, other: FrameRate) -> bool {
        self.normalized() == other.normalized()
    }

    pub fn as_f64(self) -> Option<f64> {
        (self.den != 0).then(|| f64::from(self.num) / f64::from(self.den))
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for FrameRate {
    type Err = Error;

    /// Parses `"num/den"` or a bare integer such as `"25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Validation(format!("invalid frame rate '{s}'"));
        match s.trim().split_once('/') {
            Some((num, den)) => {
                let num = num.trim().parse().map_err(|_| invalid())?;
                let den = den.trim().parse().map_err(|_| invalid())?;
                Ok(Self::new(num, den))
            }
            None => s.trim().parse().map(|n| Self::new(n, 1)).map_err(|_| invalid()),
        }
    }
}
