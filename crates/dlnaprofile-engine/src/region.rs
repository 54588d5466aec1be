//! Region and resolution tables for MPEG-2 video.
//!
//! All lookups are linear exact-match scans. Frame rates are compared in
//! lowest terms, so `60000/2002` matches a `30000/1001` row.

use dlnaprofile_common::FrameRate;
use dlnaprofile_probe::VideoStreamInfo;

/// One permitted (resolution, frame rate) combination.
///
/// Program/elementary stream rows carry no frame rate; the region was
/// already chosen from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStreamSpec {
    pub width: u32,
    pub height: u32,
    pub frame_rate: Option<FrameRate>,
}

impl RegionStreamSpec {
    const fn size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_rate: None,
        }
    }

    const fn at(width: u32, height: u32, frame_rate: FrameRate) -> Self {
        Self {
            width,
            height,
            frame_rate: Some(frame_rate),
        }
    }

    pub fn matches(&self, video: &VideoStreamInfo) -> bool {
        self.width == video.width
            && self.height == video.height
            && self
                .frame_rate
                .map_or(true, |rate| rate.same_rate(video.frame_rate))
    }
}

const NTSC: FrameRate = FrameRate::NTSC;
const FILM: FrameRate = FrameRate::NTSC_FILM;
const PAL: FrameRate = FrameRate::PAL;
const F30: FrameRate = FrameRate::FPS_30;
const F24: FrameRate = FrameRate::FPS_24;

pub static PS_ES_NTSC: [RegionStreamSpec; 6] = [
    RegionStreamSpec::size(720, 480),
    RegionStreamSpec::size(704, 480),
    RegionStreamSpec::size(544, 480),
    RegionStreamSpec::size(480, 480),
    RegionStreamSpec::size(352, 480),
    RegionStreamSpec::size(352, 240),
];

pub static PS_ES_PAL: [RegionStreamSpec; 6] = [
    RegionStreamSpec::size(720, 576),
    RegionStreamSpec::size(704, 576),
    RegionStreamSpec::size(544, 576),
    RegionStreamSpec::size(480, 576),
    RegionStreamSpec::size(352, 576),
    RegionStreamSpec::size(352, 288),
];

pub static TS_EU_SD: [RegionStreamSpec; 5] = [
    RegionStreamSpec::at(720, 576, PAL),
    RegionStreamSpec::at(544, 576, PAL),
    RegionStreamSpec::at(480, 576, PAL),
    RegionStreamSpec::at(352, 576, PAL),
    RegionStreamSpec::at(352, 288, PAL),
];

pub static TS_NA_SD: [RegionStreamSpec; 12] = [
    RegionStreamSpec::at(720, 480, NTSC),
    RegionStreamSpec::at(704, 480, NTSC),
    RegionStreamSpec::at(704, 480, F30),
    RegionStreamSpec::at(704, 480, FILM),
    RegionStreamSpec::at(704, 480, F24),
    RegionStreamSpec::at(640, 480, NTSC),
    RegionStreamSpec::at(640, 480, F30),
    RegionStreamSpec::at(640, 480, FILM),
    RegionStreamSpec::at(640, 480, F24),
    RegionStreamSpec::at(544, 480, NTSC),
    RegionStreamSpec::at(480, 480, NTSC),
    RegionStreamSpec::at(352, 480, NTSC),
];

pub static TS_NA_HD: [RegionStreamSpec; 16] = [
    RegionStreamSpec::at(1920, 1080, NTSC),
    RegionStreamSpec::at(1920, 1080, F30),
    RegionStreamSpec::at(1920, 1080, FILM),
    RegionStreamSpec::at(1920, 1080, F24),
    RegionStreamSpec::at(1280, 720, NTSC),
    RegionStreamSpec::at(1280, 720, F30),
    RegionStreamSpec::at(1280, 720, FILM),
    RegionStreamSpec::at(1280, 720, F24),
    RegionStreamSpec::at(1440, 1080, NTSC),
    RegionStreamSpec::at(1440, 1080, F30),
    RegionStreamSpec::at(1440, 1080, FILM),
    RegionStreamSpec::at(1440, 1080, F24),
    RegionStreamSpec::at(1280, 1080, NTSC),
    RegionStreamSpec::at(1280, 1080, F30),
    RegionStreamSpec::at(1280, 1080, FILM),
    RegionStreamSpec::at(1280, 1080, F24),
];

fn find<'a>(table: &'a [RegionStreamSpec], video: &VideoStreamInfo) -> Option<&'a RegionStreamSpec> {
    table.iter().find(|row| row.matches(video))
}

// ---------------------------------------------------------------------------
// Program / elementary streams
// ---------------------------------------------------------------------------

/// Broadcast standard of a program or elementary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsEsRegion {
    Ntsc,
    Pal,
}

impl PsEsRegion {
    /// Exactly 30000/1001 is NTSC and exactly 25/1 is PAL; nothing else is.
    pub fn from_frame_rate(rate: FrameRate) -> Option<Self> {
        if rate.same_rate(FrameRate::NTSC) {
            Some(Self::Ntsc)
        } else if rate.same_rate(FrameRate::PAL) {
            Some(Self::Pal)
        } else {
            None
        }
    }

    pub fn table(self) -> &'static [RegionStreamSpec] {
        match self {
            Self::Ntsc => &PS_ES_NTSC,
            Self::Pal => &PS_ES_PAL,
        }
    }
}

/// Region of a program/elementary video stream whose resolution is in
/// that region's table.
pub fn ps_es_region(video: &VideoStreamInfo) -> Option<PsEsRegion> {
    let region = PsEsRegion::from_frame_rate(video.frame_rate)?;
    find(region.table(), video).map(|_| region)
}

// ---------------------------------------------------------------------------
// Transport streams
// ---------------------------------------------------------------------------

/// Transport stream region. Korea shares every North American requirement
/// and is reported as North America.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsRegion {
    Europe,
    NorthAmerica,
}

impl TsRegion {
    /// 25/1 selects Europe; every other rate goes to North America.
    pub fn from_frame_rate(rate: FrameRate) -> Self {
        if rate.same_rate(FrameRate::PAL) {
            Self::Europe
        } else {
            Self::NorthAmerica
        }
    }
}

/// Picture definition of a North American transport stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    Sd,
    Hd,
}

pub fn matches_eu_sd(video: &VideoStreamInfo) -> bool {
    find(&TS_EU_SD, video).is_some()
}

/// SD table first, then HD.
pub fn na_definition(video: &VideoStreamInfo) -> Option<Definition> {
    if find(&TS_NA_SD, video).is_some() {
        Some(Definition::Sd)
    } else if find(&TS_NA_HD, video).is_some() {
        Some(Definition::Hd)
    } else {
        None
    }
}
