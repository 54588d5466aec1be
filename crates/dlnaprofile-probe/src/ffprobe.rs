//! Conversion of an ffprobe JSON report into a [`StreamDescriptor`].
//!
//! Expects the output of
//! `ffprobe -v quiet -print_format json -show_format -show_streams`.
//! No process is spawned here; callers run ffprobe themselves.

use std::path::Path;

use dlnaprofile_common::{CodecKind, ContainerKind, Error, FrameRate, Result};
use serde::Deserialize;

use crate::types::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    filename: Option<String>,
    format_name: String,
    bit_rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    channels: Option<u32>,
    sample_rate: Option<String>,
    bit_rate: Option<String>,
    /// Hex dump of codec extradata, present when the report was produced
    /// with `-show_data` style post-processing.
    extradata: Option<String>,
    #[serde(default)]
    disposition: FfprobeDisposition,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    attached_pic: u8,
}

/// Parse an ffprobe JSON report.
pub fn descriptor_from_ffprobe_json(json: &str) -> Result<StreamDescriptor> {
    let output: FfprobeOutput =
        serde_json::from_str(json).map_err(|e| Error::parse("ffprobe", e))?;
    parse_ffprobe_output(output)
}

fn parse_ffprobe_output(output: FfprobeOutput) -> Result<StreamDescriptor> {
    if output.format.format_name.is_empty() {
        return Err(Error::parse("ffprobe", "empty format_name"));
    }

    let mut descriptor = StreamDescriptor::new(container_from_format_name(
        &output.format.format_name,
    ));
    descriptor.system_bit_rate = output.format.bit_rate.as_deref().and_then(parse_u32);
    descriptor.file_extension = output
        .format
        .filename
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    for stream in output.streams {
        match stream.codec_type.as_str() {
            "video" if stream.disposition.attached_pic != 0 => {
                tracing::trace!(codec = ?stream.codec_name, "skipping attached picture");
            }
            "video" if descriptor.video.is_none() => {
                let frame_rate = match stream.r_frame_rate.as_deref() {
                    Some(rate) => rate.parse::<FrameRate>()?,
                    None => FrameRate::new(0, 1),
                };
                descriptor.video = Some(
                    VideoStreamInfo::new(
                        codec_from_name(stream.codec_name.as_deref()),
                        stream.width.unwrap_or(0),
                        stream.height.unwrap_or(0),
                        frame_rate,
                    )
                    .with_bit_rate(stream.bit_rate.as_deref().and_then(parse_u32).unwrap_or(0)),
                );
            }
            "audio" if descriptor.audio.is_none() => {
                let extra_data = match stream.extradata.as_deref() {
                    Some(hex_str) => hex::decode(hex_str.trim())
                        .map_err(|e| Error::parse("ffprobe", format!("bad extradata: {e}")))?,
                    None => Vec::new(),
                };
                let channels = stream
                    .channels
                    .map(|c| u8::try_from(c).unwrap_or(u8::MAX))
                    .unwrap_or(0);
                descriptor.audio = Some(
                    AudioStreamInfo::new(
                        codec_from_name(stream.codec_name.as_deref()),
                        stream.sample_rate.as_deref().and_then(parse_u32).unwrap_or(0),
                        channels,
                        stream.bit_rate.as_deref().and_then(parse_u32).unwrap_or(0),
                    )
                    .with_extra_data(extra_data),
                );
            }
            other => {
                tracing::trace!(codec_type = other, "ignoring ffprobe stream");
            }
        }
    }

    Ok(descriptor)
}

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

/// Map ffprobe's `format_name` (possibly a comma-separated alias list).
pub fn container_from_format_name(format_name: &str) -> ContainerKind {
    let names: Vec<&str> = format_name.split(',').map(str::trim).collect();
    let has = |n: &str| names.contains(&n);

    if has("mpegts") {
        ContainerKind::MpegTransportStream
    } else if has("mpeg") || has("vob") {
        ContainerKind::MpegProgramStream
    } else if has("mpegvideo") || has("mpeg1video") || has("mpeg2video") {
        ContainerKind::MpegElementaryStream
    } else if has("mov") || has("mp4") || has("m4a") || has("3gp") {
        ContainerKind::Mpeg4SystemStream
    } else if has("aac") {
        ContainerKind::Adts
    } else if has("ac3") {
        ContainerKind::Ac3
    } else if has("mp3") {
        ContainerKind::Mp3
    } else if has("wav") {
        ContainerKind::Wav
    } else if has("asf") {
        ContainerKind::Asf
    } else if has("image2") || names.iter().any(|n| n.ends_with("_pipe")) {
        ContainerKind::Image
    } else {
        ContainerKind::Unknown
    }
}

/// Map ffprobe's `codec_name`.
pub fn codec_from_name(codec_name: Option<&str>) -> CodecKind {
    match codec_name.unwrap_or_default() {
        "aac" => CodecKind::Aac,
        "ac3" => CodecKind::Ac3,
        "mp2" => CodecKind::Mp2,
        "mp3" => CodecKind::Mp3,
        "pcm_s16le" => CodecKind::PcmS16Le,
        "pcm_s16be" => CodecKind::PcmS16Be,
        "wmav1" | "wmav2" | "wmapro" => CodecKind::Wma,
        "amr_nb" => CodecKind::Amr,
        "amr_wb" => CodecKind::AmrWb,
        "mpeg1video" => CodecKind::Mpeg1Video,
        "mpeg2video" => CodecKind::Mpeg2Video,
        "mpeg4" => CodecKind::Mpeg4Part2,
        "h264" => CodecKind::H264,
        "wmv1" | "wmv2" | "wmv3" | "vc1" => CodecKind::Wmv,
        "mjpeg" => CodecKind::Mjpeg,
        "png" => CodecKind::Png,
        _ => CodecKind::Unknown,
    }
}
