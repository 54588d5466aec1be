//! `protocolInfo` strings and UPnP object classes for identified profiles.
//!
//! A media server advertises each resource as
//! `<protocol>:<network>:<mime>:<additional>`; in DLNA mode the additional
//! field carries the profile id plus transfer parameters.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use dlnaprofile_common::{Error, MediaClass, Result};

use crate::catalog::ProfileRecord;

/// Which standard the emitted strings must comply with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityMode {
    #[default]
    Dlna,
    UpnpAv,
    UpnpAvXbox,
}

/// Transport protocol field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolType {
    #[default]
    HttpGet,
    Rtp,
    Any,
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpGet => write!(f, "http-get"),
            Self::Rtp => write!(f, "rtsp-rtp-udp"),
            Self::Any => write!(f, "*"),
        }
    }
}

/// `DLNA.ORG_PS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaySpeed {
    Invalid = 0,
    #[default]
    Normal = 1,
}

/// `DLNA.ORG_CI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    #[default]
    None = 0,
    Transcoded = 1,
}

bitflags! {
    /// `DLNA.ORG_OP`: seek operations the server supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Operations: u8 {
        const RANGE = 0x01;
        const TIME_SEEK = 0x10;
    }
}

bitflags! {
    /// `DLNA.ORG_FLAGS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OrgFlags: u32 {
        const SENDER_PACED = 1 << 31;
        const TIME_BASED_SEEK = 1 << 30;
        const BYTE_BASED_SEEK = 1 << 29;
        const PLAY_CONTAINER = 1 << 28;
        const S0_INCREASE = 1 << 27;
        const SN_INCREASE = 1 << 26;
        const RTSP_PAUSE = 1 << 25;
        const STREAMING_TRANSFER_MODE = 1 << 24;
        const INTERACTIVE_TRANSFER_MODE = 1 << 23;
        const BACKGROUND_TRANSFER_MODE = 1 << 22;
        const CONNECTION_STALL = 1 << 21;
        const DLNA_V15 = 1 << 20;
    }
}

fn flag_name(name: &str) -> String {
    name.trim().replace('-', "_").to_ascii_uppercase()
}

impl Operations {
    /// Parse flag names such as `range` or `time-seek`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names.iter().try_fold(Self::empty(), |acc, name| {
            Self::from_name(&flag_name(name.as_ref()))
                .map(|flag| acc | flag)
                .ok_or_else(|| {
                    Error::Validation(format!("unknown DLNA operation '{}'", name.as_ref()))
                })
        })
    }
}

impl OrgFlags {
    /// Parse flag names such as `streaming-transfer-mode` or `DLNA_V15`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names.iter().try_fold(Self::empty(), |acc, name| {
            Self::from_name(&flag_name(name.as_ref()))
                .map(|flag| acc | flag)
                .ok_or_else(|| Error::Validation(format!("unknown DLNA flag '{}'", name.as_ref())))
        })
    }
}

/// Transfer parameters combined with a record to build a `protocolInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProtocolInfo {
    pub mode: CapabilityMode,
    pub protocol: ProtocolType,
    pub speed: PlaySpeed,
    pub conversion: Conversion,
    pub operations: Operations,
    pub flags: OrgFlags,
}

impl ProtocolInfo {
    /// Format the `protocolInfo` for `record`.
    pub fn format(&self, record: &ProfileRecord) -> String {
        match self.mode {
            CapabilityMode::UpnpAv | CapabilityMode::UpnpAvXbox => {
                format!("{}:*:{}:*", self.protocol, record.mime)
            }
            CapabilityMode::Dlna => {
                let mut info = format!(
                    "{}:*:{}:DLNA.ORG_PN={};DLNA.ORG_OP={:02x};DLNA.ORG_PS={};DLNA.ORG_CI={}",
                    self.protocol,
                    record.mime,
                    record.id,
                    self.operations.bits(),
                    self.speed as u8,
                    self.conversion as u8,
                );
                if !self.flags.is_empty() {
                    info.push_str(&format!(";DLNA.ORG_FLAGS={:08x}{:024x}", self.flags.bits(), 0));
                }
                info
            }
        }
    }
}

/// UPnP content-directory object class for a media class.
pub fn upnp_object_item(media_class: Option<MediaClass>) -> &'static str {
    match media_class {
        Some(MediaClass::Image) => "object.item.imageItem.photo",
        Some(MediaClass::Audio) => "object.item.audioItem.musicTrack",
        Some(MediaClass::Av) => "object.item.videoItem.movie",
        Some(MediaClass::Collection) | None => "object.item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn dlna_protocol_info_with_flags() {
        let info = ProtocolInfo {
            operations: Operations::RANGE,
            flags: OrgFlags::STREAMING_TRANSFER_MODE
                | OrgFlags::BACKGROUND_TRANSFER_MODE
                | OrgFlags::CONNECTION_STALL
                | OrgFlags::DLNA_V15,
            ..Default::default()
        };
        assert_eq!(
            info.format(&catalog::MPEG_TS_HD_NA_T),
            "http-get:*:video/vnd.dlna.mpeg-tts:DLNA.ORG_PN=MPEG_TS_HD_NA_T;\
             DLNA.ORG_OP=01;DLNA.ORG_PS=1;DLNA.ORG_CI=0;\
             DLNA.ORG_FLAGS=01700000000000000000000000000000"
        );
    }

    #[test]
    fn dlna_protocol_info_without_flags() {
        let info = ProtocolInfo {
            protocol: ProtocolType::Rtp,
            operations: Operations::RANGE | Operations::TIME_SEEK,
            conversion: Conversion::Transcoded,
            ..Default::default()
        };
        assert_eq!(
            info.format(&catalog::AAC_ADTS_320),
            "rtsp-rtp-udp:*:audio/vnd.dlna.adts:DLNA.ORG_PN=AAC_ADTS_320;\
             DLNA.ORG_OP=11;DLNA.ORG_PS=1;DLNA.ORG_CI=1"
        );
    }

    #[test]
    fn upnp_av_protocol_info() {
        let info = ProtocolInfo {
            mode: CapabilityMode::UpnpAv,
            flags: OrgFlags::DLNA_V15,
            ..Default::default()
        };
        assert_eq!(info.format(&catalog::JPEG_SM), "http-get:*:image/jpeg:*");
    }

    #[test]
    fn flag_names() {
        assert_eq!(
            Operations::from_names(&["range", "time-seek"]).unwrap(),
            Operations::RANGE | Operations::TIME_SEEK
        );
        assert_eq!(
            OrgFlags::from_names(&["dlna_v15", "Streaming-Transfer-Mode"]).unwrap(),
            OrgFlags::DLNA_V15 | OrgFlags::STREAMING_TRANSFER_MODE
        );
        assert!(OrgFlags::from_names(&["turbo"]).is_err());
        assert_eq!(Operations::from_names::<&str>(&[]).unwrap(), Operations::empty());
    }

    #[test]
    fn object_items() {
        assert_eq!(
            upnp_object_item(Some(MediaClass::Audio)),
            "object.item.audioItem.musicTrack"
        );
        assert_eq!(upnp_object_item(Some(MediaClass::Av)), "object.item.videoItem.movie");
        assert_eq!(upnp_object_item(Some(MediaClass::Image)), "object.item.imageItem.photo");
        assert_eq!(upnp_object_item(None), "object.item");
    }
}
