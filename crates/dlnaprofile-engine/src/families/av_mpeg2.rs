//! MPEG-2 video in elementary, program and transport streams.

use dlnaprofile_common::{CodecKind, ContainerKind, FrameRate, TimestampField};
use dlnaprofile_probe::{AudioStreamInfo, StreamDescriptor, VideoStreamInfo};

use super::{FamilyClassifier, MediaFamily};
use crate::catalog::{self, ProfileRecord};
use crate::region::{self, Definition, PsEsRegion, TsRegion};
use crate::validators;

/// Ceiling on the multiplex rate of North American transport streams.
pub const NA_MAX_SYSTEM_BIT_RATE: u32 = 19_392_700;

const MP_LL_MAX_VIDEO_BIT_RATE: u32 = 4_000_000;
const MP_LL_MAX_AUDIO_BIT_RATE: u32 = 256_000;
const AC3_STANDARD_MAX_BIT_RATE: u32 = 448_000;
const AC3_EXTENDED_MAX_BIT_RATE: u32 = 640_000;

/// Records for one program/elementary stream flavour.
struct PsEsRecords {
    ntsc: &'static ProfileRecord,
    ntsc_xac3: &'static ProfileRecord,
    pal: &'static ProfileRecord,
    pal_xac3: &'static ProfileRecord,
}

static PS_RECORDS: PsEsRecords = PsEsRecords {
    ntsc: &catalog::MPEG_PS_NTSC,
    ntsc_xac3: &catalog::MPEG_PS_NTSC_XAC3,
    pal: &catalog::MPEG_PS_PAL,
    pal_xac3: &catalog::MPEG_PS_PAL_XAC3,
};

static ES_RECORDS: PsEsRecords = PsEsRecords {
    ntsc: &catalog::MPEG_ES_NTSC,
    ntsc_xac3: &catalog::MPEG_ES_NTSC_XAC3,
    pal: &catalog::MPEG_ES_PAL,
    pal_xac3: &catalog::MPEG_ES_PAL_XAC3,
};

/// The three timestamp flavours of one transport stream profile.
struct TsVariants {
    zero: &'static ProfileRecord,
    valid: &'static ProfileRecord,
    absent: &'static ProfileRecord,
}

impl TsVariants {
    fn pick(&self, timestamp: TimestampField) -> &'static ProfileRecord {
        match timestamp {
            TimestampField::Zero => self.zero,
            TimestampField::Valid => self.valid,
            TimestampField::Absent => self.absent,
        }
    }
}

static MP_LL_AAC: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_MP_LL_AAC,
    valid: &catalog::MPEG_TS_MP_LL_AAC_T,
    absent: &catalog::MPEG_TS_MP_LL_AAC_ISO,
};

static SD_EU: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_SD_EU,
    valid: &catalog::MPEG_TS_SD_EU_T,
    absent: &catalog::MPEG_TS_SD_EU_ISO,
};

static SD_NA: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_SD_NA,
    valid: &catalog::MPEG_TS_SD_NA_T,
    absent: &catalog::MPEG_TS_SD_NA_ISO,
};

static SD_NA_XAC3: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_SD_NA_XAC3,
    valid: &catalog::MPEG_TS_SD_NA_XAC3_T,
    absent: &catalog::MPEG_TS_SD_NA_XAC3_ISO,
};

static HD_NA: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_HD_NA,
    valid: &catalog::MPEG_TS_HD_NA_T,
    absent: &catalog::MPEG_TS_HD_NA_ISO,
};

static HD_NA_XAC3: TsVariants = TsVariants {
    zero: &catalog::MPEG_TS_HD_NA_XAC3,
    valid: &catalog::MPEG_TS_HD_NA_XAC3_T,
    absent: &catalog::MPEG_TS_HD_NA_XAC3_ISO,
};

/// MPEG-2 video with a compliant audio stream.
#[derive(Debug, Default)]
pub struct Mpeg2Classifier;

impl FamilyClassifier for Mpeg2Classifier {
    fn family(&self) -> MediaFamily {
        MediaFamily::AvMpeg2
    }

    fn classify(&self, descriptor: &StreamDescriptor) -> Option<&'static ProfileRecord> {
        let video = descriptor
            .video
            .as_ref()
            .filter(|v| v.codec == CodecKind::Mpeg2Video)?;
        let audio = descriptor.audio.as_ref()?;

        match descriptor.container {
            ContainerKind::MpegElementaryStream => probe_ps_es(video, audio, &ES_RECORDS),
            ContainerKind::MpegProgramStream => probe_ps_es(video, audio, &PS_RECORDS),
            container => {
                let timestamp = container.timestamp_field()?;
                probe_ts(descriptor.system_bit_rate, video, audio, timestamp)
            }
        }
    }
}

fn probe_ps_es(
    video: &VideoStreamInfo,
    audio: &AudioStreamInfo,
    records: &PsEsRecords,
) -> Option<&'static ProfileRecord> {
    let Some(region) = region::ps_es_region(video) else {
        tracing::trace!(
            width = video.width,
            height = video.height,
            frame_rate = %video.frame_rate,
            "no NTSC/PAL program stream format"
        );
        return None;
    };

    let (plain, xac3) = match region {
        PsEsRegion::Ntsc => (records.ntsc, records.ntsc_xac3),
        PsEsRegion::Pal => (records.pal, records.pal_xac3),
    };

    // Extended AC-3 covers the whole standard range and is tested first.
    if validators::ac3_ps_es_extended(audio) {
        Some(xac3)
    } else if validators::lpcm_ps_es(audio)
        || validators::ac3_ps_es_standard(audio)
        || validators::mpeg_audio_ps_es(audio)
    {
        Some(plain)
    } else {
        tracing::trace!(codec = %audio.codec, "program stream audio outside envelope");
        None
    }
}

fn probe_ts(
    system_bit_rate: Option<u32>,
    video: &VideoStreamInfo,
    audio: &AudioStreamInfo,
    timestamp: TimestampField,
) -> Option<&'static ProfileRecord> {
    if audio.codec == CodecKind::Aac {
        return probe_ts_mp_ll_aac(video, audio, timestamp);
    }

    match TsRegion::from_frame_rate(video.frame_rate) {
        TsRegion::Europe => {
            if !region::matches_eu_sd(video) {
                tracing::trace!(width = video.width, height = video.height, "not an EU SD format");
                return None;
            }
            (validators::ac3_ts(audio) || validators::mpeg_audio_ts(audio))
                .then(|| SD_EU.pick(timestamp))
        }
        TsRegion::NorthAmerica => probe_ts_na(system_bit_rate, video, audio, timestamp),
    }
}

/// Main profile at low level with AAC audio. Applies to any AAC-carrying
/// transport stream and never falls through to the region rules.
fn probe_ts_mp_ll_aac(
    video: &VideoStreamInfo,
    audio: &AudioStreamInfo,
    timestamp: TimestampField,
) -> Option<&'static ProfileRecord> {
    let ok = video.width == 352
        && video.height == 288
        && video.frame_rate.same_rate(FrameRate::FPS_30)
        && video.bit_rate_bps <= MP_LL_MAX_VIDEO_BIT_RATE
        && audio.channels > 0
        && audio.bit_rate_bps <= MP_LL_MAX_AUDIO_BIT_RATE;
    ok.then(|| MP_LL_AAC.pick(timestamp))
}

/// North America and Korea: AC-3 only, SD table first, then HD.
fn probe_ts_na(
    system_bit_rate: Option<u32>,
    video: &VideoStreamInfo,
    audio: &AudioStreamInfo,
    timestamp: TimestampField,
) -> Option<&'static ProfileRecord> {
    if system_bit_rate.is_some_and(|rate| rate > NA_MAX_SYSTEM_BIT_RATE) {
        tracing::trace!(?system_bit_rate, "system bit rate above NA ceiling");
        return None;
    }

    let audio_ok = audio.codec == CodecKind::Ac3
        && audio.sample_rate_hz == 48_000
        && (1..=5).contains(&audio.channels)
        && audio.bit_rate_bps <= AC3_EXTENDED_MAX_BIT_RATE;
    if !audio_ok {
        return None;
    }
    let xac3 = audio.bit_rate_bps > AC3_STANDARD_MAX_BIT_RATE;

    let variants = match (region::na_definition(video)?, xac3) {
        (Definition::Sd, false) => &SD_NA,
        (Definition::Sd, true) => &SD_NA_XAC3,
        (Definition::Hd, false) => &HD_NA,
        (Definition::Hd, true) => &HD_NA_XAC3,
    };
    Some(variants.pick(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mpeg2(width: u32, height: u32, rate: FrameRate) -> VideoStreamInfo {
        VideoStreamInfo::new(CodecKind::Mpeg2Video, width, height, rate)
    }

    fn ac3(bit_rate: u32) -> AudioStreamInfo {
        AudioStreamInfo::new(CodecKind::Ac3, 48_000, 2, bit_rate)
    }

    fn descriptor(
        container: ContainerKind,
        video: VideoStreamInfo,
        audio: AudioStreamInfo,
    ) -> StreamDescriptor {
        StreamDescriptor::new(container).with_video(video).with_audio(audio)
    }

    fn id(d: &StreamDescriptor) -> Option<&'static str> {
        Mpeg2Classifier.classify(d).map(|r| r.id)
    }

    // -----------------------------------------------------------------------
    // Program / elementary streams
    // -----------------------------------------------------------------------

    #[test]
    fn program_stream_ntsc_and_pal() {
        let ntsc = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(720, 480, FrameRate::NTSC),
            AudioStreamInfo::new(CodecKind::PcmS16Le, 48_000, 2, 1_536_000),
        );
        assert_eq!(id(&ntsc), Some("MPEG_PS_NTSC"));

        let pal = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(720, 576, FrameRate::PAL),
            AudioStreamInfo::new(CodecKind::Mp2, 48_000, 2, 224_000),
        );
        assert_eq!(id(&pal), Some("MPEG_PS_PAL"));
    }

    #[test]
    fn elementary_stream_extended_ac3() {
        let d = descriptor(
            ContainerKind::MpegElementaryStream,
            mpeg2(352, 240, FrameRate::NTSC),
            ac3(640_000),
        );
        assert_eq!(id(&d), Some("MPEG_ES_NTSC_XAC3"));

        let d = descriptor(
            ContainerKind::MpegElementaryStream,
            mpeg2(352, 288, FrameRate::PAL),
            AudioStreamInfo::new(CodecKind::PcmS16Be, 48_000, 2, 1_536_000),
        );
        assert_eq!(id(&d), Some("MPEG_ES_PAL"));
    }

    #[test]
    fn program_stream_ac3_takes_extended_record() {
        let d = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(704, 576, FrameRate::PAL),
            ac3(384_000),
        );
        assert_eq!(id(&d), Some("MPEG_PS_PAL_XAC3"));

        // Below the AC-3 floor nothing else matches either.
        let d = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(704, 576, FrameRate::PAL),
            ac3(32_000),
        );
        assert_eq!(id(&d), None);
    }

    #[test]
    fn program_stream_bad_audio_or_rate() {
        let d = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(720, 480, FrameRate::NTSC),
            AudioStreamInfo::new(CodecKind::Aac, 48_000, 2, 128_000),
        );
        assert_eq!(id(&d), None);

        let d = descriptor(
            ContainerKind::MpegProgramStream,
            mpeg2(720, 480, FrameRate::FPS_30),
            ac3(384_000),
        );
        assert_eq!(id(&d), None);
    }

    // -----------------------------------------------------------------------
    // Transport streams
    // -----------------------------------------------------------------------

    #[test]
    fn eu_sd_follows_timestamp_variant() {
        let cases = [
            (ContainerKind::MpegTransportStreamNoTimestamp, "MPEG_TS_SD_EU"),
            (ContainerKind::MpegTransportStreamWithTimestamp, "MPEG_TS_SD_EU_T"),
            (ContainerKind::MpegTransportStream, "MPEG_TS_SD_EU_ISO"),
        ];
        for (container, expected) in cases {
            let d = descriptor(container, mpeg2(720, 576, FrameRate::PAL), ac3(448_000));
            assert_eq!(id(&d), Some(expected));
        }
    }

    #[test]
    fn eu_sd_accepts_mpeg_audio() {
        let d = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(352, 288, FrameRate::PAL),
            AudioStreamInfo::new(CodecKind::Mp2, 48_000, 2, 192_000),
        );
        assert_eq!(id(&d), Some("MPEG_TS_SD_EU_T"));
    }

    #[test]
    fn na_hd_and_extended_ac3() {
        let hd = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(1920, 1080, FrameRate::NTSC).with_bit_rate(12_000_000),
            ac3(384_000),
        )
        .with_system_bit_rate(15_000_000);
        assert_eq!(id(&hd), Some("MPEG_TS_HD_NA_T"));

        let sd_xac3 = descriptor(
            ContainerKind::MpegTransportStream,
            mpeg2(704, 480, FrameRate::FPS_24),
            ac3(500_000),
        );
        assert_eq!(id(&sd_xac3), Some("MPEG_TS_SD_NA_XAC3_ISO"));
    }

    #[test]
    fn na_rejects_high_system_rate_and_non_ac3() {
        let d = descriptor(
            ContainerKind::MpegTransportStream,
            mpeg2(1280, 720, FrameRate::NTSC),
            ac3(384_000),
        )
        .with_system_bit_rate(NA_MAX_SYSTEM_BIT_RATE + 1);
        assert_eq!(id(&d), None);

        let d = descriptor(
            ContainerKind::MpegTransportStream,
            mpeg2(1280, 720, FrameRate::NTSC),
            AudioStreamInfo::new(CodecKind::Mp2, 48_000, 2, 192_000),
        );
        assert_eq!(id(&d), None);
    }

    #[test]
    fn na_rejects_zero_channel_ac3() {
        let d = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(1920, 1080, FrameRate::NTSC),
            AudioStreamInfo::new(CodecKind::Ac3, 48_000, 0, 384_000),
        );
        assert_eq!(id(&d), None);

        let d = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(1920, 1080, FrameRate::NTSC),
            AudioStreamInfo::new(CodecKind::Ac3, 48_000, 1, 384_000),
        );
        assert_eq!(id(&d), Some("MPEG_TS_HD_NA_T"));
    }

    #[test]
    fn na_without_system_rate_is_accepted() {
        let d = descriptor(
            ContainerKind::MpegTransportStreamNoTimestamp,
            mpeg2(1280, 720, FrameRate::FPS_24),
            ac3(640_000),
        );
        assert_eq!(id(&d), Some("MPEG_TS_HD_NA_XAC3"));
    }

    #[test]
    fn mp_ll_aac_short_circuits() {
        let aac = AudioStreamInfo::new(CodecKind::Aac, 48_000, 2, 256_000);
        let ok = descriptor(
            ContainerKind::MpegTransportStream,
            mpeg2(352, 288, FrameRate::FPS_30).with_bit_rate(4_000_000),
            aac.clone(),
        );
        assert_eq!(id(&ok), Some("MPEG_TS_MP_LL_AAC_ISO"));

        // 720x576@25 with AAC would be EU-shaped, but AAC never reaches the
        // region rules.
        let eu_shaped = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(720, 576, FrameRate::PAL),
            aac.clone(),
        );
        assert_eq!(id(&eu_shaped), None);

        // Width alone is not enough.
        let wrong_height = descriptor(
            ContainerKind::MpegTransportStream,
            mpeg2(352, 240, FrameRate::FPS_30),
            aac,
        );
        assert_eq!(id(&wrong_height), None);
    }

    #[test]
    fn unsupported_resolution() {
        let d = descriptor(
            ContainerKind::MpegTransportStreamWithTimestamp,
            mpeg2(640, 360, FrameRate::NTSC),
            ac3(384_000),
        );
        assert_eq!(id(&d), None);
    }

    #[test]
    fn requires_mpeg2_video_and_audio() {
        let h264 = descriptor(
            ContainerKind::MpegTransportStream,
            VideoStreamInfo::new(CodecKind::H264, 1920, 1080, FrameRate::NTSC),
            ac3(384_000),
        );
        assert_eq!(id(&h264), None);

        let silent = StreamDescriptor::new(ContainerKind::MpegTransportStream)
            .with_video(mpeg2(1920, 1080, FrameRate::NTSC));
        assert_eq!(id(&silent), None);

        let mp4 = descriptor(
            ContainerKind::Mpeg4SystemStream,
            mpeg2(1920, 1080, FrameRate::NTSC),
            ac3(384_000),
        );
        assert_eq!(id(&mp4), None);
    }
}
