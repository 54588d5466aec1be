use serde::{Deserialize, Serialize};

use dlnaprofile_engine::{CapabilityMode, EngineConfig, ProtocolType};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How identified profiles are advertised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// `dlna`, `upnp-av` or `upnp-av-xbox`
    #[serde(default)]
    pub capability: CapabilityMode,

    /// `http-get`, `rtp` or `any`
    #[serde(default)]
    pub protocol: ProtocolType,

    /// `DLNA.ORG_OP` flag names (e.g. `range`, `time-seek`)
    #[serde(default = "default_operations")]
    pub operations: Vec<String>,

    /// `DLNA.ORG_FLAGS` flag names (e.g. `streaming-transfer-mode`)
    #[serde(default = "default_flags")]
    pub flags: Vec<String>,

    /// Mark resources as transcoded (`DLNA.ORG_CI=1`)
    #[serde(default)]
    pub transcoded: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            capability: CapabilityMode::default(),
            protocol: ProtocolType::default(),
            operations: default_operations(),
            flags: default_flags(),
            transcoded: false,
        }
    }
}

fn default_operations() -> Vec<String> {
    vec!["range".to_string()]
}

fn default_flags() -> Vec<String> {
    [
        "streaming-transfer-mode",
        "background-transfer-mode",
        "connection-stall",
        "dlna-v15",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
