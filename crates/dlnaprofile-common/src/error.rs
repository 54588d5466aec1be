//! Unified error type for dlnaprofile.
//!
//! Classification itself never fails: a descriptor either matches a profile
//! or it does not. [`Error`] covers everything around it, such as reading
//! prober output and loading configuration.

use std::fmt;

/// Unified error type covering all failure modes in dlnaprofile.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serde_json error.
        #[from]
        source: serde_json::Error,
    },

    /// Prober output could not be turned into a stream descriptor.
    #[error("Parse error [{source_kind}]: {message}")]
    Parse {
        /// What was being parsed (e.g. "ffprobe").
        source_kind: String,
        /// Human-readable error description.
        message: String,
    },

    /// Configuration or input data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A profile family name did not match any known family.
    #[error("Unknown profile family: {0}")]
    UnknownFamily(String),
}

impl Error {
    /// Convenience constructor for [`Error::Parse`].
    pub fn parse(source_kind: impl Into<String>, message: impl fmt::Display) -> Self {
        Error::Parse {
            source_kind: source_kind.into(),
            message: message.to_string(),
        }
    }

    /// Convenience constructor for [`Error::UnknownFamily`].
    pub fn unknown_family(name: impl Into<String>) -> Self {
        Error::UnknownFamily(name.into())
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display() {
        let err = Error::parse("ffprobe", "missing streams array");
        assert_eq!(
            err.to_string(),
            "Parse error [ffprobe]: missing streams array"
        );
    }

    #[test]
    fn validation_display() {
        let err = Error::Validation("extension list is empty".into());
        assert_eq!(err.to_string(), "Validation error: extension list is empty");
    }

    #[test]
    fn unknown_family_display() {
        let err = Error::unknown_family("AV_THEORA");
        assert_eq!(err.to_string(), "Unknown profile family: AV_THEORA");
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn json_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(serde_err);
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn result_alias() {
        fn ok_fn() -> Result<u32> {
            Ok(48_000)
        }
        assert_eq!(ok_fn().unwrap(), 48_000);

        fn err_fn() -> Result<u32> {
            Err(Error::Validation("boom".into()))
        }
        assert!(err_fn().is_err());
    }
}
