//! The [`ProfileRegistry`] resolves a descriptor to at most one profile.

use std::fmt;

use dlnaprofile_common::Result;
use dlnaprofile_probe::StreamDescriptor;

use crate::catalog::ProfileRecord;
use crate::config::EngineConfig;
use crate::families::{ExtensionGate, FamilyClassifier, MediaFamily};

struct RegisteredFamily {
    classifier: Box<dyn FamilyClassifier>,
    gate: ExtensionGate,
}

/// Ordered set of family classifiers.
///
/// Built once and then shared read-only; `identify` takes `&self` and
/// touches no state, so one registry can serve any number of threads.
pub struct ProfileRegistry {
    config: EngineConfig,
    /// Families in registration order (first match wins).
    families: Vec<RegisteredFamily>,
}

impl ProfileRegistry {
    /// An empty registry; add families with [`register`](Self::register).
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            families: Vec::new(),
        }
    }

    /// Registry with the families `config` selects, in the order it lists
    /// them.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let families = config.families.resolve()?;
        let mut registry = Self::new(config);
        for family in families {
            registry.register(family);
        }
        Ok(registry)
    }

    /// Every family in default precedence order, extension checking off.
    pub fn with_all_families() -> Self {
        let mut registry = Self::new(EngineConfig::all_families());
        for family in MediaFamily::ALL {
            registry.register(family);
        }
        registry
    }

    /// Append a family. Registering a family twice leaves the registry
    /// unchanged.
    pub fn register(&mut self, family: MediaFamily) -> &mut Self {
        if self.contains(family) {
            tracing::debug!(family = %family, "family already registered");
            return self;
        }
        let gate = self.config.extension_gate(family);
        self.families.push(RegisteredFamily {
            classifier: family.classifier(),
            gate,
        });
        self
    }

    pub fn contains(&self, family: MediaFamily) -> bool {
        self.families
            .iter()
            .any(|f| f.classifier.family() == family)
    }

    /// Registered families in precedence order.
    pub fn families(&self) -> Vec<MediaFamily> {
        self.families.iter().map(|f| f.classifier.family()).collect()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Return the record of the first family that accepts `descriptor`.
    pub fn identify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        for entry in &self.families {
            let family = entry.classifier.family();
            if !entry.gate.admits(descriptor) {
                tracing::trace!(
                    family = %family,
                    extension = ?descriptor.file_extension,
                    "extension not allowed"
                );
                continue;
            }
            if let Some(record) = entry.classifier.classify(descriptor) {
                tracing::debug!(family = %family, profile = record.id, "profile matched");
                return Some(record);
            }
        }
        tracing::debug!(container = %descriptor.container, "no profile matched");
        None
    }
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("families", &self.families())
            .field("extension_check", &self.config.extension_check)
            .finish()
    }
}
