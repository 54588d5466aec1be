//! Audio envelope predicates for the MPEG-2 families and the raw audio
//! families.

use dlnaprofile_common::CodecKind;
use dlnaprofile_probe::AudioStreamInfo;

const TS_SAMPLE_RATES: [u32; 3] = [32_000, 44_100, 48_000];

// ---------------------------------------------------------------------------
// MPEG-2 program / elementary streams
// ---------------------------------------------------------------------------

/// 16-bit LPCM at 48 kHz, mono or stereo.
pub fn lpcm_ps_es(audio: &AudioStreamInfo) -> bool {
    if !audio.codec.is_pcm_s16() || audio.sample_rate_hz != 48_000 {
        return false;
    }
    match audio.channels {
        1 => audio.bit_rate_bps <= 768_000,
        2 => audio.bit_rate_bps <= 1_536_000,
        _ => false,
    }
}

/// Shared AC-3 gate for program and elementary streams.
fn ac3_ps_es_common(audio: &AudioStreamInfo) -> bool {
    audio.codec == CodecKind::Ac3
        && audio.sample_rate_hz == 48_000
        && (1..=5).contains(&audio.channels)
}

/// AC-3 up to 640 kbps. Always checked before [`ac3_ps_es_standard`].
pub fn ac3_ps_es_extended(audio: &AudioStreamInfo) -> bool {
    ac3_ps_es_common(audio) && (64_000..=640_000).contains(&audio.bit_rate_bps)
}

/// AC-3 up to 448 kbps.
pub fn ac3_ps_es_standard(audio: &AudioStreamInfo) -> bool {
    ac3_ps_es_common(audio) && (64_000..=448_000).contains(&audio.bit_rate_bps)
}

/// MPEG-1/2 layer 2 or 3 audio.
pub fn mpeg_audio_ps_es(audio: &AudioStreamInfo) -> bool {
    if !audio.codec.is_mpeg_audio() || !matches!(audio.sample_rate_hz, 44_100 | 48_000) {
        return false;
    }
    match audio.channels {
        1 => (64_000..=192_000).contains(&audio.bit_rate_bps),
        2 => (64_000..=384_000).contains(&audio.bit_rate_bps),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// MPEG-2 transport streams
// ---------------------------------------------------------------------------

pub fn mpeg_audio_ts(audio: &AudioStreamInfo) -> bool {
    audio.codec.is_mpeg_audio()
        && TS_SAMPLE_RATES.contains(&audio.sample_rate_hz)
        && (1..=5).contains(&audio.channels)
        && (32_000..=448_000).contains(&audio.bit_rate_bps)
}

pub fn ac3_ts(audio: &AudioStreamInfo) -> bool {
    audio.codec == CodecKind::Ac3
        && TS_SAMPLE_RATES.contains(&audio.sample_rate_hz)
        && (1..=5).contains(&audio.channels)
        && (32_000..=640_000).contains(&audio.bit_rate_bps)
}

// ---------------------------------------------------------------------------
// Raw audio files
// ---------------------------------------------------------------------------

/// Raw AC-3 up to 5.1 channels.
pub fn ac3_raw(audio: &AudioStreamInfo) -> bool {
    audio.codec == CodecKind::Ac3
        && TS_SAMPLE_RATES.contains(&audio.sample_rate_hz)
        && (1..=6).contains(&audio.channels)
        && (32_000..=640_000).contains(&audio.bit_rate_bps)
}

pub fn lpcm_raw(audio: &AudioStreamInfo) -> bool {
    audio.codec.is_pcm_s16()
        && matches!(audio.sample_rate_hz, 44_100 | 48_000)
        && (1..=2).contains(&audio.channels)
}

/// Which MP3 profile a stream fits, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mp3Class {
    /// 32, 44.1 or 48 kHz up to 320 kbps.
    Mp3,
    /// Low sample rates (16, 22.05, 24 kHz).
    Mp3X,
}

pub fn mp3_class(audio: &AudioStreamInfo) -> Option<Mp3Class> {
    if audio.codec != CodecKind::Mp3 || !(1..=2).contains(&audio.channels) {
        return None;
    }
    match audio.sample_rate_hz {
        32_000 | 44_100 | 48_000 if (32_000..=320_000).contains(&audio.bit_rate_bps) => {
            Some(Mp3Class::Mp3)
        }
        16_000 | 22_050 | 24_000 if (8_000..=320_000).contains(&audio.bit_rate_bps) => {
            Some(Mp3Class::Mp3X)
        }
        _ => None,
    }
}

/// Which Windows Media Audio profile a stream fits, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmaClass {
    /// Stereo up to 48 kHz below 193 kbps.
    Baseline,
    /// Stereo up to 48 kHz up to 385 kbps.
    Full,
    /// Up to 7.1 channels, 96 kHz and 1.5 Mbps.
    Professional,
}

/// Bit rate tiers are tried from the cheapest profile up.
pub fn wma_class(audio: &AudioStreamInfo) -> Option<WmaClass> {
    if audio.codec != CodecKind::Wma || audio.channels == 0 {
        return None;
    }
    let stereo = audio.channels <= 2 && audio.sample_rate_hz <= 48_000;
    match audio.bit_rate_bps {
        0..=192_999 if stereo => Some(WmaClass::Baseline),
        0..=385_000 if stereo => Some(WmaClass::Full),
        0..=1_500_000 if audio.channels <= 8 && audio.sample_rate_hz <= 96_000 => {
            Some(WmaClass::Professional)
        }
        _ => None,
    }
}

/// AMR-NB codec modes in bits per second.
const AMR_NB_BIT_RATES: [u32; 8] = [4_750, 5_150, 5_900, 6_700, 7_400, 7_950, 10_200, 12_200];
const AMR_WB_SAMPLE_RATES: [u32; 5] = [8_000, 16_000, 24_000, 32_000, 48_000];

/// Which AMR profile a stream fits, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmrClass {
    /// Narrowband speech: 8 kHz mono at one of the codec modes.
    Narrowband,
    /// Extended wideband, mono or stereo.
    WidebandPlus,
}

pub fn amr_class(audio: &AudioStreamInfo) -> Option<AmrClass> {
    match audio.codec {
        CodecKind::Amr
            if audio.sample_rate_hz == 8_000
                && audio.channels == 1
                && AMR_NB_BIT_RATES.contains(&audio.bit_rate_bps) =>
        {
            Some(AmrClass::Narrowband)
        }
        CodecKind::AmrWb
            if AMR_WB_SAMPLE_RATES.contains(&audio.sample_rate_hz)
                && (1..=2).contains(&audio.channels)
                && (5_200..=48_000).contains(&audio.bit_rate_bps) =>
        {
            Some(AmrClass::WidebandPlus)
        }
        _ => None,
    }
}
