//! # dlnaprofile-probe
//!
//! The input side of profile identification: what a prober knows about a
//! resource, expressed as a [`StreamDescriptor`].
//!
//! Demuxing and decoding happen elsewhere. This crate only models the facts
//! and converts an ffprobe JSON report into that model.
//!
//! ## Quick start
//!
//! ```
//! use dlnaprofile_probe::ffprobe::descriptor_from_ffprobe_json;
//!
//! let json = r#"{
//!     "format": { "filename": "song.aac", "format_name": "aac" },
//!     "streams": [
//!         { "codec_type": "audio", "codec_name": "aac",
//!           "sample_rate": "44100", "channels": 2, "bit_rate": "320000" }
//!     ]
//! }"#;
//! let descriptor = descriptor_from_ffprobe_json(json).unwrap();
//! assert_eq!(descriptor.audio.unwrap().sample_rate_hz, 44100);
//! ```

pub mod ffprobe;
pub mod types;

// Re-export key types at crate root for convenience.
pub use ffprobe::descriptor_from_ffprobe_json;
pub use types::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};
