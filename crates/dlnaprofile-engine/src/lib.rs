//! # dlnaprofile-engine
//!
//! Identifies which DLNA media profile a probed resource complies with.
//!
//! The engine is a pure function from a [`StreamDescriptor`] to at most
//! one [`ProfileRecord`]:
//!
//! - [`catalog`]: the fixed table of profile records
//! - [`validators`]: per-codec numeric envelopes
//! - [`region`]: MPEG-2 resolution and frame-rate tables
//! - [`families`]: one classifier per media family
//! - [`registry`]: the ordered resolver
//! - [`protocol_info`]: `protocolInfo` strings for matched records
//!
//! ## Quick start
//!
//! ```
//! use dlnaprofile_common::{CodecKind, ContainerKind};
//! use dlnaprofile_engine::ProfileRegistry;
//! use dlnaprofile_probe::{AudioStreamInfo, StreamDescriptor};
//!
//! let registry = ProfileRegistry::with_all_families();
//! let descriptor = StreamDescriptor::new(ContainerKind::Unknown)
//!     .with_audio(AudioStreamInfo::new(CodecKind::Aac, 44_100, 2, 320_000));
//!
//! let record = registry.identify(&descriptor).unwrap();
//! assert_eq!(record.id, "AAC_ADTS_320");
//! ```
//!
//! [`StreamDescriptor`]: dlnaprofile_probe::StreamDescriptor

pub mod catalog;
pub mod config;
pub mod families;
pub mod protocol_info;
pub mod region;
pub mod registry;
pub mod validators;

pub use catalog::{ProfileRecord, CATALOG};
pub use config::{EngineConfig, FamilySelection};
pub use families::{FamilyClassifier, MediaFamily};
pub use protocol_info::{
    upnp_object_item, CapabilityMode, Conversion, Operations, OrgFlags, PlaySpeed, ProtocolInfo,
    ProtocolType,
};
pub use registry::ProfileRegistry;
