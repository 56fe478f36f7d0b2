use super::layout::{LayoutConfig, Size};
use super::rotation::{CENTER_SLOT, SLOT_COUNT};
use super::settings::CarouselSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    OuterLeft,
    InnerLeft,
    Center,
    InnerRight,
    OuterRight,
}

impl SlotRole {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn z_index(self) -> i32 {
        match self {
            SlotRole::OuterLeft | SlotRole::OuterRight => 10,
            SlotRole::InnerLeft | SlotRole::InnerRight => 20,
            SlotRole::Center => 40,
        }
    }

    pub fn shadow(self) -> ShadowDepth {
        match self {
            SlotRole::OuterLeft | SlotRole::OuterRight => ShadowDepth::Low,
            SlotRole::InnerLeft | SlotRole::InnerRight => ShadowDepth::Mid,
            SlotRole::Center => ShadowDepth::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowDepth {
    Low,
    Mid,
    High,
}

impl ShadowDepth {
    pub fn css(self) -> &'static str {
        match self {
            ShadowDepth::Low => "0 12px 40px -10px rgba(0,0,0,0.18)",
            ShadowDepth::Mid => "0 16px 50px -10px rgba(0,0,0,0.2)",
            ShadowDepth::High => "0 24px 70px -12px rgba(0,0,0,0.26)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub role: SlotRole,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: i32,
    pub opacity: f64,
    pub shadow: ShadowDepth,
}

impl SlotGeometry {
    fn new(role: SlotRole, left: i32, size: Size, track_height: i32, centered_on: i32) -> Self {
        Self {
            role,
            left,
            top: ((track_height - centered_on) as f64 / 2.0).round() as i32,
            width: size.width,
            height: size.height,
            z_index: role.z_index(),
            opacity: if size.is_empty() { 0.0 } else { 1.0 },
            shadow: role.shadow(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Lays the five slots out around the horizontal middle of the viewport.
///
/// Hidden outer slots keep their index with a zero size and are parked
/// `hidden_outer_offset` further off the stage. They are centered vertically
/// as if they were medium cards so a card sliding out of them only moves
/// sideways.
pub fn compute_slots(
    cfg: &LayoutConfig,
    viewport_width: u32,
    settings: &CarouselSettings,
) -> [SlotGeometry; SLOT_COUNT] {
    let gap = settings.gap;
    let track = cfg.track_height();
    let (large, medium) = (cfg.large, cfg.medium);
    let (outer, outer_center, parked) = if cfg.outer_slots_visible {
        (cfg.small, cfg.small.height, 0)
    } else {
        (Size::default(), medium.height, settings.hidden_outer_offset)
    };

    let center_left = ((viewport_width as f64 - large.width as f64) / 2.0).round() as i32;
    let inner_left = center_left - gap - medium.width;
    let inner_right = center_left + large.width + gap;
    let outer_left = inner_left - gap - outer.width - parked;
    let outer_right = inner_right + medium.width + gap + parked;

    let slots = [
        SlotGeometry::new(SlotRole::OuterLeft, outer_left, outer, track, outer_center),
        SlotGeometry::new(SlotRole::InnerLeft, inner_left, medium, track, medium.height),
        SlotGeometry::new(SlotRole::Center, center_left, large, track, large.height),
        SlotGeometry::new(SlotRole::InnerRight, inner_right, medium, track, medium.height),
        SlotGeometry::new(SlotRole::OuterRight, outer_right, outer, track, outer_center),
    ];
    debug_assert_eq!(slots[CENTER_SLOT].role, SlotRole::Center);
    slots
}
