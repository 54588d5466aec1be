//! Engine configuration.
//!
//! An immutable value handed to [`ProfileRegistry::from_config`]; nothing
//! in the engine reads configuration from anywhere else.
//!
//! [`ProfileRegistry::from_config`]: crate::registry::ProfileRegistry::from_config

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dlnaprofile_common::{Error, Result};

use crate::families::{ExtensionGate, MediaFamily};

/// Which families to register: the keyword `"all"` or explicit names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FamilySelection {
    Keyword(String),
    List(Vec<String>),
}

impl Default for FamilySelection {
    fn default() -> Self {
        Self::Keyword("all".to_string())
    }
}

impl FamilySelection {
    /// Resolve to families in registration order. `"all"` expands to the
    /// default precedence order; a list keeps the order it was written in.
    pub fn resolve(&self) -> Result<Vec<MediaFamily>> {
        match self {
            Self::Keyword(word) if word.eq_ignore_ascii_case("all") => {
                Ok(MediaFamily::ALL.to_vec())
            }
            Self::Keyword(name) => Ok(vec![name.parse()?]),
            Self::List(names) => names.iter().map(|n| n.parse()).collect(),
        }
    }
}

/// Profile engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Families to register.
    pub families: FamilySelection,

    /// Reject descriptors whose file extension is not on the family's
    /// allow-list.
    pub extension_check: bool,

    /// Per-family allow-list overrides, keyed by family name.
    pub extensions: BTreeMap<String, Vec<String>>,
}

impl EngineConfig {
    /// Every family, extension checking off.
    pub fn all_families() -> Self {
        Self::default()
    }

    pub fn with_families(families: &[MediaFamily]) -> Self {
        Self {
            families: FamilySelection::List(families.iter().map(|f| f.name().to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn with_extension_check(mut self, enabled: bool) -> Self {
        self.extension_check = enabled;
        self
    }

    /// Extension gate for one family: the configured override if any,
    /// else the family's defaults.
    pub fn extension_gate(&self, family: MediaFamily) -> ExtensionGate {
        let allowed = self
            .extensions
            .iter()
            .find(|(name, _)| name.parse::<MediaFamily>().ok() == Some(family))
            .map(|(_, exts)| exts.clone())
            .unwrap_or_else(|| {
                family
                    .default_extensions()
                    .iter()
                    .map(|e| e.to_string())
                    .collect()
            });
        ExtensionGate::new(self.extension_check, allowed)
    }

    /// Check family names and extension overrides.
    pub fn validate(&self) -> Result<()> {
        if self.families.resolve()?.is_empty() {
            return Err(Error::Validation("no profile families selected".into()));
        }
        for (name, exts) in &self.extensions {
            let family: MediaFamily = name.parse()?;
            if exts.is_empty() {
                tracing::warn!(
                    family = %family,
                    "empty extension allow-list; nothing will pass the gate"
                );
            }
        }
        Ok(())
    }
}
