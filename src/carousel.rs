//! Five-slot hero carousel: sizing, slot layout, rotation and autoplay.
//!
//! Nothing in here touches the DOM. The page feeds in viewport widths, frame
//! deltas and [`Command`]s and renders what comes back.

mod autoplay;
mod content;
mod geometry;
mod layout;
mod rotation;
mod settings;
mod transition;

pub use autoplay::{AutoplayTimer, ProgressRing};
pub use content::{item, ContentItem, Headline, ItemId, CONTENT_ITEMS};
pub use geometry::{compute_slots, ShadowDepth, SlotGeometry, SlotRole};
pub use layout::{
    controls_offset, resolve, viewport_width, LayoutConfig, Size, Typography,
    DEFAULT_VIEWPORT_WIDTH,
};
pub use rotation::{slot_index_of, RotationState, CENTER_SLOT, SLOT_COUNT};
pub use settings::{CarouselSettings, SettingsError};
pub use transition::{
    plan_transition, start_frame, wraparound, CardMotion, Frame, Placement, Spring, Wraparound,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    TogglePlayback,
}

impl Command {
    /// Keyboard shortcuts: arrows navigate, space toggles autoplay.
    pub fn from_key(key: &str, code: &str) -> Option<Self> {
        match (key, code) {
            ("ArrowLeft", _) => Some(Self::Prev),
            ("ArrowRight", _) => Some(Self::Next),
            (_, "Space") => Some(Self::TogglePlayback),
            _ => None,
        }
    }
}

/// Rotation plus the autoplay clock that drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    rotation: RotationState,
    timer: AutoplayTimer,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            rotation: RotationState::new(),
            timer: AutoplayTimer::default(),
        }
    }
}

impl Carousel {
    pub fn new(settings: &CarouselSettings) -> Result<Self, SettingsError> {
        let settings = settings.validated()?;
        Ok(Self {
            rotation: RotationState::new(),
            timer: AutoplayTimer::new(settings.interval_ms),
        })
    }

    /// Feeds one animation frame; returns true when autoplay rotated.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if !self.timer.tick(delta_ms) {
            return false;
        }
        self.rotation.advance();
        log::debug!(
            "autoplay advanced to shift {} ({})",
            self.rotation.shift(),
            self.center().id.as_str()
        );
        true
    }

    // manual navigation restarts the interval so the ring starts over
    pub fn next(&mut self) {
        self.rotation.advance();
        self.timer.reset();
    }

    pub fn prev(&mut self) {
        self.rotation.retreat();
        self.timer.reset();
    }

    pub fn toggle_playback(&mut self) {
        self.timer.toggle();
        log::debug!(
            "autoplay {}",
            if self.timer.is_running() {
                "resumed"
            } else {
                "paused"
            }
        );
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::TogglePlayback => self.toggle_playback(),
        }
    }

    pub fn set_interval(&mut self, interval_ms: f64) {
        self.timer.set_interval(interval_ms);
    }

    pub fn shift(&self) -> usize {
        self.rotation.shift()
    }

    pub fn center_item(&self) -> usize {
        self.rotation.center_item()
    }

    pub fn center(&self) -> &'static ContentItem {
        item(self.center_item())
    }

    pub fn progress(&self) -> f64 {
        self.timer.progress()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key("ArrowLeft", "ArrowLeft"), Some(Command::Prev));
        assert_eq!(
            Command::from_key("ArrowRight", "ArrowRight"),
            Some(Command::Next)
        );
        assert_eq!(
            Command::from_key(" ", "Space"),
            Some(Command::TogglePlayback)
        );
        assert_eq!(Command::from_key("Enter", "Enter"), None);
    }

    #[test]
    fn test_unhandled_keys_pass_through() {
        // only mapped keys have their default action suppressed by the page
        for (key, code) in [
            ("ArrowUp", "ArrowUp"),
            ("ArrowDown", "ArrowDown"),
            ("Tab", "Tab"),
            ("Enter", "Enter"),
            ("a", "KeyA"),
            ("PageDown", "PageDown"),
        ] {
            assert_eq!(Command::from_key(key, code), None, "{key} should not be handled");
        }
    }

    #[test]
    fn test_three_advances_center_ux() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.center().id, ItemId::Frontend);
        for _ in 0..3 {
            carousel.apply(Command::Next);
        }
        assert_eq!(carousel.shift(), 3);
        assert_eq!(carousel.center_item(), 3);
        assert_eq!(carousel.center().id, ItemId::Ux);
    }

    #[test]
    fn test_manual_navigation_resets_timer() {
        let mut carousel = Carousel::default();
        assert!(!carousel.tick(4000.0));
        assert!(carousel.progress() > 0.0);
        carousel.next();
        assert_eq!(carousel.progress(), 0.0);

        assert!(!carousel.tick(2500.0));
        carousel.prev();
        assert_eq!(carousel.progress(), 0.0);
        assert_eq!(carousel.shift(), 0);
    }

    #[test]
    fn test_autoplay_rotates_once_per_interval() {
        let mut carousel = Carousel::default();
        let mut advances = 0;
        for _ in 0..625 {
            if carousel.tick(16.0) {
                advances += 1;
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(carousel.shift(), 1);
        assert!(carousel.timer().accumulated_ms() < 16.0);
    }

    #[test]
    fn test_toggle_playback_pauses_rotation() {
        let mut carousel = Carousel::default();
        carousel.apply(Command::TogglePlayback);
        assert!(!carousel.is_running());
        assert!(!carousel.tick(20_000.0));
        assert_eq!(carousel.shift(), 0);

        carousel.apply(Command::TogglePlayback);
        assert!(carousel.is_running());
        assert!(carousel.tick(10_000.0));
        assert_eq!(carousel.shift(), 1);
    }

    #[test]
    fn test_new_validates_settings() {
        let settings = CarouselSettings {
            interval_ms: 4000.0,
            ..Default::default()
        };
        let carousel = Carousel::new(&settings).expect("valid settings");
        assert_eq!(carousel.timer().interval_ms(), 4000.0);

        let bad = CarouselSettings {
            interval_ms: -1.0,
            ..Default::default()
        };
        assert_eq!(Carousel::new(&bad), Err(SettingsError::Interval(-1.0)));
    }

    #[test]
    fn test_center_agrees_with_stage_layout() {
        let mut carousel = Carousel::default();
        for _ in 0..SLOT_COUNT {
            let assignments = carousel.rotation().assignments();
            assert_eq!(assignments[carousel.center_item()], CENTER_SLOT);
            carousel.prev();
        }
    }
}
