//! dlnaprofile-common: shared media vocabulary and the unified error type.
//!
//! This crate is the foundational dependency for the other dlnaprofile
//! crates, providing the codec/container/media-class enums, exact frame-rate
//! arithmetic, and a single [`Error`] type.

pub mod error;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::*;
