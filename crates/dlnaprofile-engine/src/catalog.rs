//! The fixed catalog of DLNA media profile records.
//!
//! Every record is a `static`; classifiers hand out `&'static` references
//! into this table and nothing ever copies or mutates a record.

use serde::Serialize;

use dlnaprofile_common::MediaClass;

/// One standardized media profile.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileRecord {
    /// Profile identifier, the value of `DLNA.ORG_PN`.
    pub id: &'static str,
    /// MIME type advertised with the profile.
    pub mime: &'static str,
    /// Short display label.
    pub label: &'static str,
    /// Media class of resources carrying this profile.
    pub media_class: MediaClass,
}

impl ProfileRecord {
    const fn new(
        id: &'static str,
        mime: &'static str,
        label: &'static str,
        media_class: MediaClass,
    ) -> Self {
        Self {
            id,
            mime,
            label,
            media_class,
        }
    }
}

pub const MIME_IMAGE_JPEG: &str = "image/jpeg";
pub const MIME_IMAGE_PNG: &str = "image/png";
pub const MIME_AUDIO_AC3: &str = "audio/vnd.dolby.dd-raw";
pub const MIME_AUDIO_LPCM: &str = "audio/L16";
pub const MIME_AUDIO_MPEG: &str = "audio/mpeg";
pub const MIME_AUDIO_ADTS: &str = "audio/vnd.dlna.adts";
pub const MIME_AUDIO_MPEG_4: &str = "audio/mp4";
pub const MIME_AUDIO_WMA: &str = "audio/x-ms-wma";
pub const MIME_AUDIO_3GP: &str = "audio/3gpp";
pub const MIME_VIDEO_MPEG: &str = "video/mpeg";
pub const MIME_VIDEO_MPEG_TS: &str = "video/vnd.dlna.mpeg-tts";

const LABEL_IMAGE_PICTURE: &str = "picture";
const LABEL_IMAGE_ICON: &str = "icon";
const LABEL_AUDIO_MONO: &str = "mono";
const LABEL_AUDIO_2CH: &str = "2-ch";
const LABEL_AUDIO_2CH_MULTI: &str = "2-ch multi";
const LABEL_AUDIO_MULTI: &str = "multi";
const LABEL_VIDEO_CIF: &str = "CIF";
const LABEL_VIDEO_CIF30: &str = "CIF30";
const LABEL_VIDEO_SD: &str = "SD";
const LABEL_VIDEO_HD: &str = "HD";

use MediaClass::{Audio, Av, Image};

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

pub static JPEG_SM: ProfileRecord =
    ProfileRecord::new("JPEG_SM", MIME_IMAGE_JPEG, LABEL_IMAGE_PICTURE, Image);
pub static JPEG_MED: ProfileRecord =
    ProfileRecord::new("JPEG_MED", MIME_IMAGE_JPEG, LABEL_IMAGE_PICTURE, Image);
pub static JPEG_LRG: ProfileRecord =
    ProfileRecord::new("JPEG_LRG", MIME_IMAGE_JPEG, LABEL_IMAGE_PICTURE, Image);
pub static JPEG_TN: ProfileRecord =
    ProfileRecord::new("JPEG_TN", MIME_IMAGE_JPEG, LABEL_IMAGE_ICON, Image);
pub static JPEG_SM_ICO: ProfileRecord =
    ProfileRecord::new("JPEG_SM_ICO", MIME_IMAGE_JPEG, LABEL_IMAGE_ICON, Image);
pub static JPEG_LRG_ICO: ProfileRecord =
    ProfileRecord::new("JPEG_LRG_ICO", MIME_IMAGE_JPEG, LABEL_IMAGE_ICON, Image);
pub static PNG_LRG: ProfileRecord =
    ProfileRecord::new("PNG_LRG", MIME_IMAGE_PNG, LABEL_IMAGE_PICTURE, Image);
pub static PNG_TN: ProfileRecord =
    ProfileRecord::new("PNG_TN", MIME_IMAGE_PNG, LABEL_IMAGE_ICON, Image);
pub static PNG_SM_ICO: ProfileRecord =
    ProfileRecord::new("PNG_SM_ICO", MIME_IMAGE_PNG, LABEL_IMAGE_ICON, Image);
pub static PNG_LRG_ICO: ProfileRecord =
    ProfileRecord::new("PNG_LRG_ICO", MIME_IMAGE_PNG, LABEL_IMAGE_ICON, Image);

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

pub static AC3: ProfileRecord =
    ProfileRecord::new("AC3", MIME_AUDIO_AC3, LABEL_AUDIO_2CH_MULTI, Audio);
pub static LPCM: ProfileRecord =
    ProfileRecord::new("LPCM", MIME_AUDIO_LPCM, LABEL_AUDIO_2CH, Audio);
pub static MP3: ProfileRecord =
    ProfileRecord::new("MP3", MIME_AUDIO_MPEG, LABEL_AUDIO_2CH, Audio);
pub static MP3X: ProfileRecord =
    ProfileRecord::new("MP3X", MIME_AUDIO_MPEG, LABEL_AUDIO_2CH, Audio);

pub static AAC_ADTS: ProfileRecord =
    ProfileRecord::new("AAC_ADTS", MIME_AUDIO_ADTS, LABEL_AUDIO_2CH, Audio);
pub static AAC_ADTS_320: ProfileRecord =
    ProfileRecord::new("AAC_ADTS_320", MIME_AUDIO_ADTS, LABEL_AUDIO_2CH, Audio);
pub static AAC_ISO: ProfileRecord =
    ProfileRecord::new("AAC_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static AAC_ISO_320: ProfileRecord =
    ProfileRecord::new("AAC_ISO_320", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static AAC_LTP_ISO: ProfileRecord =
    ProfileRecord::new("AAC_LTP_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static AAC_LTP_MULT5_ISO: ProfileRecord =
    ProfileRecord::new("AAC_LTP_MULT5_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MULTI, Audio);
pub static AAC_LTP_MULT7_ISO: ProfileRecord =
    ProfileRecord::new("AAC_LTP_MULT7_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MULTI, Audio);
pub static AAC_MULT5_ADTS: ProfileRecord =
    ProfileRecord::new("AAC_MULT5_ADTS", MIME_AUDIO_ADTS, LABEL_AUDIO_MULTI, Audio);
pub static AAC_MULT5_ISO: ProfileRecord =
    ProfileRecord::new("AAC_MULT5_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MULTI, Audio);
pub static HEAAC_L2_ADTS: ProfileRecord =
    ProfileRecord::new("HEAAC_L2_ADTS", MIME_AUDIO_ADTS, LABEL_AUDIO_2CH, Audio);
pub static HEAAC_L2_ISO: ProfileRecord =
    ProfileRecord::new("HEAAC_L2_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static HEAAC_L3_ADTS: ProfileRecord =
    ProfileRecord::new("HEAAC_L3_ADTS", MIME_AUDIO_ADTS, LABEL_AUDIO_2CH, Audio);
pub static HEAAC_L3_ISO: ProfileRecord =
    ProfileRecord::new("HEAAC_L3_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static HEAAC_MULT5_ADTS: ProfileRecord =
    ProfileRecord::new("HEAAC_MULT5_ADTS", MIME_AUDIO_ADTS, LABEL_AUDIO_MULTI, Audio);
pub static HEAAC_MULT5_ISO: ProfileRecord =
    ProfileRecord::new("HEAAC_MULT5_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MULTI, Audio);
pub static HEAAC_L2_ADTS_320: ProfileRecord =
    ProfileRecord::new("HEAAC_L2_ADTS_320", MIME_AUDIO_ADTS, LABEL_AUDIO_2CH, Audio);
pub static HEAAC_L2_ISO_320: ProfileRecord =
    ProfileRecord::new("HEAAC_L2_ISO_320", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static BSAC_ISO: ProfileRecord =
    ProfileRecord::new("BSAC_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_2CH, Audio);
pub static BSAC_MULT5_ISO: ProfileRecord =
    ProfileRecord::new("BSAC_MULT5_ISO", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MULTI, Audio);

pub static WMABASE: ProfileRecord =
    ProfileRecord::new("WMABASE", MIME_AUDIO_WMA, LABEL_AUDIO_2CH, Audio);
pub static WMAFULL: ProfileRecord =
    ProfileRecord::new("WMAFULL", MIME_AUDIO_WMA, LABEL_AUDIO_2CH, Audio);
pub static WMAPRO: ProfileRecord =
    ProfileRecord::new("WMAPRO", MIME_AUDIO_WMA, LABEL_AUDIO_MULTI, Audio);

pub static AMR_3GPP: ProfileRecord =
    ProfileRecord::new("AMR_3GPP", MIME_AUDIO_MPEG_4, LABEL_AUDIO_MONO, Audio);
pub static AMR_WBPLUS: ProfileRecord =
    ProfileRecord::new("AMR_WBplus", MIME_AUDIO_3GP, LABEL_AUDIO_2CH, Audio);

// ---------------------------------------------------------------------------
// AV: MPEG-1
// ---------------------------------------------------------------------------

pub static MPEG1: ProfileRecord = ProfileRecord::new("MPEG1", MIME_VIDEO_MPEG, LABEL_VIDEO_CIF, Av);

// ---------------------------------------------------------------------------
// AV: MPEG-2 program and elementary streams
// ---------------------------------------------------------------------------

pub static MPEG_PS_NTSC: ProfileRecord =
    ProfileRecord::new("MPEG_PS_NTSC", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_PS_NTSC_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_PS_NTSC_XAC3", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_PS_PAL: ProfileRecord =
    ProfileRecord::new("MPEG_PS_PAL", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_PS_PAL_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_PS_PAL_XAC3", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_ES_NTSC: ProfileRecord =
    ProfileRecord::new("MPEG_ES_NTSC", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_ES_NTSC_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_ES_NTSC_XAC3", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_ES_PAL: ProfileRecord =
    ProfileRecord::new("MPEG_ES_PAL", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_ES_PAL_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_ES_PAL_XAC3", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);

// ---------------------------------------------------------------------------
// AV: MPEG-2 transport streams
// ---------------------------------------------------------------------------
//
// Suffix convention: none = zero timestamp, `_T` = valid timestamp,
// `_ISO` = no timestamp field (plain 188-byte packets).

pub static MPEG_TS_MP_LL_AAC: ProfileRecord =
    ProfileRecord::new("MPEG_TS_MP_LL_AAC", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_CIF30, Av);
pub static MPEG_TS_MP_LL_AAC_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_MP_LL_AAC_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_CIF30, Av);
pub static MPEG_TS_MP_LL_AAC_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_MP_LL_AAC_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_CIF30, Av);

pub static MPEG_TS_SD_EU: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_EU", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_EU_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_EU_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_EU_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_EU_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);

pub static MPEG_TS_SD_NA: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_NA_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_NA_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_NA_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA_XAC3", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_NA_XAC3_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA_XAC3_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_SD, Av);
pub static MPEG_TS_SD_NA_XAC3_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_SD_NA_XAC3_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_SD, Av);

pub static MPEG_TS_HD_NA: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_HD, Av);
pub static MPEG_TS_HD_NA_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_HD, Av);
pub static MPEG_TS_HD_NA_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_HD, Av);
pub static MPEG_TS_HD_NA_XAC3: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA_XAC3", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_HD, Av);
pub static MPEG_TS_HD_NA_XAC3_T: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA_XAC3_T", MIME_VIDEO_MPEG_TS, LABEL_VIDEO_HD, Av);
pub static MPEG_TS_HD_NA_XAC3_ISO: ProfileRecord =
    ProfileRecord::new("MPEG_TS_HD_NA_XAC3_ISO", MIME_VIDEO_MPEG, LABEL_VIDEO_HD, Av);

/// Every record, in family order.
pub static CATALOG: &[&ProfileRecord] = &[
    &JPEG_SM,
    &JPEG_MED,
    &JPEG_LRG,
    &JPEG_TN,
    &JPEG_SM_ICO,
    &JPEG_LRG_ICO,
    &PNG_LRG,
    &PNG_TN,
    &PNG_SM_ICO,
    &PNG_LRG_ICO,
    &AC3,
    &LPCM,
    &MP3,
    &MP3X,
    &AAC_ADTS,
    &AAC_ADTS_320,
    &AAC_ISO,
    &AAC_ISO_320,
    &AAC_LTP_ISO,
    &AAC_LTP_MULT5_ISO,
    &AAC_LTP_MULT7_ISO,
    &AAC_MULT5_ADTS,
    &AAC_MULT5_ISO,
    &HEAAC_L2_ADTS,
    &HEAAC_L2_ISO,
    &HEAAC_L3_ADTS,
    &HEAAC_L3_ISO,
    &HEAAC_MULT5_ADTS,
    &HEAAC_MULT5_ISO,
    &HEAAC_L2_ADTS_320,
    &HEAAC_L2_ISO_320,
    &BSAC_ISO,
    &BSAC_MULT5_ISO,
    &WMABASE,
    &WMAFULL,
    &WMAPRO,
    &AMR_3GPP,
    &AMR_WBPLUS,
    &MPEG1,
    &MPEG_PS_NTSC,
    &MPEG_PS_NTSC_XAC3,
    &MPEG_PS_PAL,
    &MPEG_PS_PAL_XAC3,
    &MPEG_ES_NTSC,
    &MPEG_ES_NTSC_XAC3,
    &MPEG_ES_PAL,
    &MPEG_ES_PAL_XAC3,
    &MPEG_TS_MP_LL_AAC,
    &MPEG_TS_MP_LL_AAC_T,
    &MPEG_TS_MP_LL_AAC_ISO,
    &MPEG_TS_SD_EU,
    &MPEG_TS_SD_EU_T,
    &MPEG_TS_SD_EU_ISO,
    &MPEG_TS_SD_NA,
    &MPEG_TS_SD_NA_T,
    &MPEG_TS_SD_NA_ISO,
    &MPEG_TS_SD_NA_XAC3,
    &MPEG_TS_SD_NA_XAC3_T,
    &MPEG_TS_SD_NA_XAC3_ISO,
    &MPEG_TS_HD_NA,
    &MPEG_TS_HD_NA_T,
    &MPEG_TS_HD_NA_ISO,
    &MPEG_TS_HD_NA_XAC3,
    &MPEG_TS_HD_NA_XAC3_T,
    &MPEG_TS_HD_NA_XAC3_ISO,
];

/// Look a record up by its profile id.
pub fn lookup(id: &str) -> Option<&'static ProfileRecord> {
    CATALOG.iter().copied().find(|record| record.id == id)
}

/// All records of one media class.
pub fn by_class(class: MediaClass) -> impl Iterator<Item = &'static ProfileRecord> {
    CATALOG
        .iter()
        .copied()
        .filter(move |record| record.media_class == class)
}
