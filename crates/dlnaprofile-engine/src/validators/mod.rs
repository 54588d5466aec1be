//! Stateless codec validators.
//!
//! Each predicate tests one stream against one numeric envelope and never
//! fails; a stream outside the envelope is simply not a match.

pub mod aac;
pub mod audio;

pub use aac::{aac_class, aac_object_type, AacClass, AacObjectType};
pub use audio::{
    ac3_ps_es_extended, ac3_ps_es_standard, ac3_raw, ac3_ts, amr_class, lpcm_ps_es, lpcm_raw,
    mp3_class, mpeg_audio_ps_es, mpeg_audio_ts, wma_class, AmrClass, Mp3Class, WmaClass,
};
