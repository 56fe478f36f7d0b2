//! Viewport width to card and headline sizing.
//!
//! Widths at or above 1920 use fixed sizes. Below that, three bands scale
//! their anchor sizes with the viewport, a fluid three-card band interpolates
//! between 560 and 959, and anything narrower scales the 560 sizes down.
//! Each band starts from the value the band above it reaches at its lower
//! bound, so resizing never makes the cards jump. The one exception is at
//! 960, where the outer cards appear.

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;

const FIXED_FLOOR: u32 = 1920;
const COMPACT_FLOOR: u32 = 560;
const COMPACT_TOP: u32 = 959;
const MIN_SCALE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Box and font metrics for the headline card under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Typography {
    pub width: i32,
    pub height: i32,
    pub font_size: i32,
    pub line_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub large: Size,
    pub medium: Size,
    pub small: Size,
    pub typography: Typography,
    pub outer_slots_visible: bool,
}

impl LayoutConfig {
    /// Height of the stage; every slot is centered inside it.
    pub fn track_height(&self) -> i32 {
        self.large.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    large_w: f64,
    large_h: f64,
    medium_w: f64,
    medium_h: f64,
    small_w: f64,
    small_h: f64,
    type_w: f64,
    type_h: f64,
    font_size: f64,
    line_height: f64,
}

impl Metrics {
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            large_w: f(self.large_w),
            large_h: f(self.large_h),
            medium_w: f(self.medium_w),
            medium_h: f(self.medium_h),
            small_w: f(self.small_w),
            small_h: f(self.small_h),
            type_w: f(self.type_w),
            type_h: f(self.type_h),
            font_size: f(self.font_size),
            line_height: f(self.line_height),
        }
    }

    fn scale(self, s: f64) -> Self {
        self.map(|v| v * s)
    }

    fn lerp(self, other: Metrics, t: f64) -> Self {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self {
            large_w: lerp(self.large_w, other.large_w),
            large_h: lerp(self.large_h, other.large_h),
            medium_w: lerp(self.medium_w, other.medium_w),
            medium_h: lerp(self.medium_h, other.medium_h),
            small_w: lerp(self.small_w, other.small_w),
            small_h: lerp(self.small_h, other.small_h),
            type_w: lerp(self.type_w, other.type_w),
            type_h: lerp(self.type_h, other.type_h),
            font_size: lerp(self.font_size, other.font_size),
            line_height: lerp(self.line_height, other.line_height),
        }
    }

    fn without_small(self) -> Self {
        Self {
            small_w: 0.0,
            small_h: 0.0,
            ..self
        }
    }

    fn round(self, outer_slots_visible: bool) -> LayoutConfig {
        let px = |v: f64| v.round() as i32;
        LayoutConfig {
            large: Size {
                width: px(self.large_w),
                height: px(self.large_h),
            },
            medium: Size {
                width: px(self.medium_w),
                height: px(self.medium_h),
            },
            small: Size {
                width: px(self.small_w),
                height: px(self.small_h),
            },
            typography: Typography {
                width: px(self.type_w),
                height: px(self.type_h),
                font_size: px(self.font_size),
                line_height: px(self.line_height),
            },
            outer_slots_visible,
        }
    }
}

// sizes at 1920 and above
const WIDE: Metrics = Metrics {
    large_w: 490.0,
    large_h: 653.0,
    medium_w: 392.0,
    medium_h: 522.0,
    small_w: 343.0,
    small_h: 457.0,
    type_w: 692.0,
    type_h: 237.0,
    font_size: 40.0,
    line_height: 48.0,
};

// sizes at exactly 560, three cards
const COMPACT: Metrics = Metrics {
    large_w: 487.0,
    large_h: 650.0,
    medium_w: 390.0,
    medium_h: 520.0,
    small_w: 0.0,
    small_h: 0.0,
    type_w: 503.0,
    type_h: 172.0,
    font_size: 34.0,
    line_height: 42.0,
};

struct ScaledBand {
    floor: u32,
    top: u32,
}

// highest first; the anchor of each band is its size at `top`
const SCALED_BANDS: [ScaledBand; 3] = [
    ScaledBand {
        floor: 1440,
        top: 1919,
    },
    ScaledBand {
        floor: 1280,
        top: 1439,
    },
    ScaledBand {
        floor: 960,
        top: 1279,
    },
];

fn ratio(numerator: f64, denominator: u32) -> f64 {
    (numerator / denominator.max(1) as f64).max(MIN_SCALE)
}

fn scaled_anchor(band: usize) -> Metrics {
    SCALED_BANDS[..band]
        .iter()
        .fold(WIDE, |m, b| m.scale(ratio(b.floor as f64, b.top)))
}

fn narrowest_five_card() -> Metrics {
    let last = SCALED_BANDS.len() - 1;
    let band = &SCALED_BANDS[last];
    scaled_anchor(last).scale(ratio(band.floor as f64, band.top))
}

pub fn resolve(viewport_width: u32) -> LayoutConfig {
    if viewport_width >= FIXED_FLOOR {
        return WIDE.round(true);
    }
    if let Some((i, band)) = SCALED_BANDS
        .iter()
        .enumerate()
        .find(|(_, b)| viewport_width >= b.floor)
    {
        return scaled_anchor(i)
            .scale(ratio(viewport_width as f64, band.top))
            .round(true);
    }
    if viewport_width >= COMPACT_FLOOR {
        let span = (COMPACT_TOP - COMPACT_FLOOR).max(1) as f64;
        let t = ((viewport_width - COMPACT_FLOOR) as f64 / span).clamp(0.0, 1.0);
        return COMPACT
            .lerp(narrowest_five_card(), t)
            .without_small()
            .round(false);
    }
    COMPACT
        .scale(ratio(viewport_width as f64, COMPACT_FLOOR))
        .without_small()
        .round(false)
}

/// Distance between the stage and the playback controls.
pub fn controls_offset(viewport_width: u32) -> i32 {
    let rem = if viewport_width >= 1440 {
        8.9375
    } else if viewport_width >= 960 {
        6.6875
    } else {
        3.0
    };
    (rem * 16.0_f64).round() as i32
}

/// Browsers report fractional widths and the server reports none at all.
pub fn viewport_width(reported: f64) -> u32 {
    if reported.is_finite() && reported >= 0.0 {
        reported.round().min(u32::MAX as f64) as u32
    } else {
        DEFAULT_VIEWPORT_WIDTH
    }
}
