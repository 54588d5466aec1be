//! dlnaprofile - DLNA media profile identification
//!
//! This library crate exposes the configuration and identification layers
//! used by the `dlnaprofile` binary, for integration testing.

pub mod config;
pub mod identify;

pub use dlnaprofile_common as common;
pub use dlnaprofile_engine as engine;
pub use dlnaprofile_probe as probe;
