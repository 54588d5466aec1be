//! Load a descriptor from disk and run it through the profile engine.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use dlnaprofile_engine::{upnp_object_item, ProfileRecord, ProfileRegistry, ProtocolInfo};
use dlnaprofile_probe::{descriptor_from_ffprobe_json, StreamDescriptor};

/// How the input file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    /// A serialized [`StreamDescriptor`].
    Descriptor,
    /// `ffprobe -print_format json -show_format -show_streams` output.
    Ffprobe,
}

/// Read and parse a descriptor file.
pub fn load_descriptor(path: &Path, format: DescriptorFormat) -> Result<StreamDescriptor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {:?}", path))?;

    let descriptor: StreamDescriptor = match format {
        DescriptorFormat::Descriptor => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse descriptor: {:?}", path))?,
        DescriptorFormat::Ffprobe => descriptor_from_ffprobe_json(&content)
            .with_context(|| format!("Failed to parse ffprobe report: {:?}", path))?,
    };

    Ok(descriptor)
}

/// Outcome of identifying one descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifyReport {
    pub profile: Option<&'static ProfileRecord>,
    pub protocol_info: Option<String>,
    pub upnp_class: &'static str,
}

impl IdentifyReport {
    pub fn is_match(&self) -> bool {
        self.profile.is_some()
    }
}

/// Identify `descriptor` and format the advertisement strings.
pub fn identify(
    registry: &ProfileRegistry,
    protocol: &ProtocolInfo,
    descriptor: &StreamDescriptor,
) -> IdentifyReport {
    let profile = registry.identify(descriptor);
    IdentifyReport {
        profile,
        protocol_info: profile.map(|record| protocol.format(record)),
        upnp_class: upnp_object_item(profile.map(|record| record.media_class)),
    }
}
