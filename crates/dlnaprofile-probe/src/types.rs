//! Core types describing a probed resource.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use dlnaprofile_common::{CodecKind, ContainerKind, FrameRate};

/// Everything the profile engine is allowed to know about a resource.
///
/// Built once by the prober and never mutated by the engine. Missing
/// streams are `None`, not zeroed placeholders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Container kind.
    #[serde(default)]
    pub container: ContainerKind,
    /// Overall multiplex bit rate in bits per second.
    #[serde(default)]
    pub system_bit_rate: Option<u32>,
    /// Primary audio stream.
    #[serde(default)]
    pub audio: Option<AudioStreamInfo>,
    /// Primary video (or still image) stream.
    #[serde(default)]
    pub video: Option<VideoStreamInfo>,
    /// Lowercase file extension without the dot.
    #[serde(default)]
    pub file_extension: Option<String>,
}

impl StreamDescriptor {
    pub fn new(container: ContainerKind) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    pub fn with_audio(mut self, audio: AudioStreamInfo) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_video(mut self, video: VideoStreamInfo) -> Self {
        self.video = Some(video);
        self
    }

    pub fn with_system_bit_rate(mut self, bit_rate: u32) -> Self {
        self.system_bit_rate = Some(bit_rate);
        self
    }

    /// Set the file extension; a leading dot is stripped and case is folded.
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.file_extension = Some(ext.trim_start_matches('.').to_ascii_lowercase());
        self
    }

    /// Audio-only resources have an audio stream and nothing else.
    pub fn is_audio_only(&self) -> bool {
        self.audio.is_some() && self.video.is_none()
    }
}

/// An audio elementary stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioStreamInfo {
    /// Audio codec.
    pub codec: CodecKind,
    /// Sample rate in Hz.
    pub sample_rate_hz: u32,
    /// Number of channels.
    pub channels: u8,
    /// Stream bit rate in bits per second.
    pub bit_rate_bps: u32,
    /// Codec-specific configuration (e.g. AAC AudioSpecificConfig).
    #[serde(default)]
    pub extra_data: Bytes,
}

impl AudioStreamInfo {
    pub fn new(codec: CodecKind, sample_rate_hz: u32, channels: u8, bit_rate_bps: u32) -> Self {
        Self {
            codec,
            sample_rate_hz,
            channels,
            bit_rate_bps,
            extra_data: Bytes::new(),
        }
    }

    pub fn with_extra_data(mut self, data: impl Into<Bytes>) -> Self {
        self.extra_data = data.into();
        self
    }
}

/// A video elementary stream, or the single picture of a still image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStreamInfo {
    /// Video codec.
    pub codec: CodecKind,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Exact frame rate.
    pub frame_rate: FrameRate,
    /// Stream bit rate in bits per second.
    #[serde(default)]
    pub bit_rate_bps: u32,
}

impl VideoStreamInfo {
    pub fn new(codec: CodecKind, width: u32, height: u32, frame_rate: FrameRate) -> Self {
        Self {
            codec,
            width,
            height,
            frame_rate,
            bit_rate_bps: 0,
        }
    }

    pub fn with_bit_rate(mut self, bit_rate_bps: u32) -> Self {
        self.bit_rate_bps = bit_rate_bps;
        self
    }

    /// A still picture: no meaningful frame rate.
    pub fn still(codec: CodecKind, width: u32, height: u32) -> Self {
        Self::new(codec, width, height, FrameRate::new(0, 1))
    }
}
