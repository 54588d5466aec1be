mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

use dlnaprofile_engine::{Conversion, Operations, OrgFlags, PlaySpeed, ProtocolInfo};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./dlnaprofile.toml",
        "~/.config/dlnaprofile/config.toml",
        "/etc/dlnaprofile/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    config
        .engine
        .validate()
        .context("Invalid [engine] section")?;

    protocol_info(&config.output).context("Invalid [output] section")?;

    Ok(())
}

/// Transfer parameters for `protocolInfo` strings.
pub fn protocol_info(output: &OutputConfig) -> Result<ProtocolInfo> {
    Ok(ProtocolInfo {
        mode: output.capability,
        protocol: output.protocol,
        speed: PlaySpeed::Normal,
        conversion: if output.transcoded {
            Conversion::Transcoded
        } else {
            Conversion::None
        },
        operations: Operations::from_names(&output.operations)?,
        flags: OrgFlags::from_names(&output.flags)?,
    })
}
