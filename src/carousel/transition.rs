//! Where every card starts and ends when the carousel rotates, and the spring
//! that carries it between the two.

use super::geometry::{SlotGeometry, SlotRole};
use super::layout::LayoutConfig;
use super::rotation::{slot_index_of, SLOT_COUNT};
use super::settings::CarouselSettings;

const REST_EPSILON: f64 = 0.01;

/// Animated box of one card, in pixels (opacity in 0..1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

impl From<&SlotGeometry> for Frame {
    fn from(slot: &SlotGeometry) -> Self {
        Self {
            left: slot.left as f64,
            top: slot.top as f64,
            width: slot.width as f64,
            height: slot.height as f64,
            opacity: slot.opacity,
        }
    }
}

impl Frame {
    fn channels(&self) -> [f64; 5] {
        [self.left, self.top, self.width, self.height, self.opacity]
    }

    fn from_channels(c: [f64; 5]) -> Self {
        Self {
            left: c[0],
            top: c[1],
            width: c[2],
            height: c[3],
            opacity: c[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wraparound {
    /// Outer-left to outer-right: the card re-enters from beyond the right edge.
    EnterFromRight,
    /// Outer-right to outer-left: the card re-enters from beyond the left edge.
    EnterFromLeft,
}

/// Decided from the slot pair alone; either navigation direction can produce
/// either case.
pub fn wraparound(from_slot: usize, to_slot: usize) -> Option<Wraparound> {
    let outer_left = SlotRole::OuterLeft.index();
    let outer_right = SlotRole::OuterRight.index();
    if from_slot == outer_left && to_slot == outer_right {
        Some(Wraparound::EnterFromRight)
    } else if from_slot == outer_right && to_slot == outer_left {
        Some(Wraparound::EnterFromLeft)
    } else {
        None
    }
}

pub fn start_frame(
    from: &SlotGeometry,
    to: &SlotGeometry,
    cfg: &LayoutConfig,
    settings: &CarouselSettings,
) -> Frame {
    let Some(wrap) = wraparound(from.role.index(), to.role.index()) else {
        return Frame::from(from);
    };
    // collapsed outer slots have no width of their own
    let card_width = [to.width, cfg.medium.width, cfg.large.width]
        .into_iter()
        .find(|w| *w > 0)
        .unwrap_or(0);
    let offset = card_width + settings.gap + settings.wrap_margin;
    let left = match wrap {
        Wraparound::EnterFromRight => to.left + offset,
        Wraparound::EnterFromLeft => to.left - offset,
    };
    Frame {
        left: left as f64,
        opacity: from.opacity,
        ..Frame::from(to)
    }
}

/// One card's move for a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub item: usize,
    pub from_slot: usize,
    pub to_slot: usize,
    pub start: Frame,
    pub target: Frame,
}

impl Placement {
    pub fn wraparound(&self) -> Option<Wraparound> {
        wraparound(self.from_slot, self.to_slot)
    }
}

pub fn plan_transition(
    prev_shift: usize,
    shift: usize,
    slots: &[SlotGeometry; SLOT_COUNT],
    cfg: &LayoutConfig,
    settings: &CarouselSettings,
) -> [Placement; SLOT_COUNT] {
    std::array::from_fn(|item| {
        let from_slot = slot_index_of(item, prev_shift);
        let to_slot = slot_index_of(item, shift);
        let (from, to) = (&slots[from_slot], &slots[to_slot]);
        Placement {
            item,
            from_slot,
            to_slot,
            start: start_frame(from, to, cfg, settings),
            target: Frame::from(to),
        }
    })
}

/// Critically damped spring, stepped in closed form so any frame length
/// gives the same path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            mass: 0.6,
        }
    }
}

impl Spring {
    fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass.max(f64::EPSILON)).sqrt()
    }

    /// Advances one channel by `dt` seconds: x(t) = (A + B t) e^(-wt).
    fn step(&self, value: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64) {
        let omega = self.angular_frequency();
        let a = value - target;
        let b = velocity + omega * a;
        let decay = (-omega * dt).exp();
        let offset = (a + b * dt) * decay;
        let velocity = (velocity - omega * b * dt) * decay;
        (target + offset, velocity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    current: Frame,
    velocity: [f64; 5],
    target: Frame,
}

impl CardMotion {
    pub fn at_rest(frame: Frame) -> Self {
        Self {
            current: frame,
            velocity: [0.0; 5],
            target: frame,
        }
    }

    /// Jumps to `start` and springs towards `target` from standstill.
    pub fn restart(&mut self, start: Frame, target: Frame) {
        self.current = start;
        self.velocity = [0.0; 5];
        self.target = target;
    }

    /// Keeps position and velocity, only the destination moves.
    pub fn retarget(&mut self, target: Frame) {
        self.target = target;
    }

    pub fn frame(&self) -> Frame {
        self.current
    }

    pub fn target(&self) -> Frame {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity.iter().all(|v| *v == 0.0)
    }

    /// Returns true once the card has come to rest on its target.
    pub fn step(&mut self, dt_ms: f64, spring: &Spring) -> bool {
        if self.is_settled() {
            return true;
        }
        let dt = if dt_ms.is_finite() {
            dt_ms.max(0.0) / 1000.0
        } else {
            0.0
        };
        let current = self.current.channels();
        let target = self.target.channels();
        let mut next = current;
        let mut resting = true;
        for i in 0..next.len() {
            let (value, velocity) = spring.step(current[i], self.velocity[i], target[i], dt);
            next[i] = value;
            self.velocity[i] = velocity;
            resting &= (value - target[i]).abs() < REST_EPSILON && velocity.abs() < REST_EPSILON;
        }
        if resting {
            self.current = self.target;
            self.velocity = [0.0; 5];
        } else {
            self.current = Frame::from_channels(next);
        }
        resting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::geometry::compute_slots;
    use crate::carousel::layout::resolve;

    fn stage(width: u32) -> (LayoutConfig, [SlotGeometry; SLOT_COUNT], CarouselSettings) {
        let settings = CarouselSettings::default();
        let cfg = resolve(width);
        let slots = compute_slots(&cfg, width, &settings);
        (cfg, slots, settings)
    }

    #[test]
    fn test_wraparound_detection() {
        assert_eq!(wraparound(0, 4), Some(Wraparound::EnterFromRight));
        assert_eq!(wraparound(4, 0), Some(Wraparound::EnterFromLeft));
        assert_eq!(wraparound(0, 1), None);
        assert_eq!(wraparound(4, 3), None);
        assert_eq!(wraparound(2, 2), None);
    }

    #[test]
    fn test_wrap_start_positions() {
        let (cfg, slots, settings) = stage(1920);
        let next = &slots[4];
        let start = start_frame(&slots[0], next, &cfg, &settings);
        assert_eq!(
            start.left,
            (next.left + next.width + settings.gap + 60) as f64
        );
        assert_eq!(start.top, next.top as f64);
        assert_eq!(start.width, next.width as f64);

        let next = &slots[0];
        let start = start_frame(&slots[4], next, &cfg, &settings);
        assert_eq!(
            start.left,
            (next.left - next.width - settings.gap - 60) as f64
        );
    }

    #[test]
    fn test_wrap_start_with_collapsed_slots() {
        let (cfg, slots, settings) = stage(800);
        let start = start_frame(&slots[0], &slots[4], &cfg, &settings);
        assert_eq!(
            start.left,
            (slots[4].left + cfg.medium.width + settings.gap + settings.wrap_margin) as f64
        );
        assert_eq!(start.opacity, 0.0);
    }

    #[test]
    fn test_plain_moves_start_from_previous_slot() {
        let (cfg, slots, settings) = stage(1500);
        let start = start_frame(&slots[3], &slots[2], &cfg, &settings);
        assert_eq!(start, Frame::from(&slots[3]));
    }

    #[test]
    fn test_plan_next_and_prev() {
        let (cfg, slots, settings) = stage(1920);

        // next: item in slot 0 wraps to slot 4
        let plan = plan_transition(0, 1, &slots, &cfg, &settings);
        let wrapped: Vec<_> = plan.iter().filter(|p| p.wraparound().is_some()).collect();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].from_slot, 0);
        assert_eq!(wrapped[0].to_slot, 4);
        assert_eq!(wrapped[0].wraparound(), Some(Wraparound::EnterFromRight));

        // prev: item in slot 4 wraps to slot 0
        let plan = plan_transition(1, 0, &slots, &cfg, &settings);
        let wrapped: Vec<_> = plan.iter().filter(|p| p.wraparound().is_some()).collect();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].wraparound(), Some(Wraparound::EnterFromLeft));

        for placement in &plan {
            assert_eq!(placement.target, Frame::from(&slots[placement.to_slot]));
        }
    }

    #[test]
    fn test_plan_without_rotation_is_still() {
        let (cfg, slots, settings) = stage(1300);
        for placement in plan_transition(2, 2, &slots, &cfg, &settings) {
            assert_eq!(placement.from_slot, placement.to_slot);
            assert_eq!(placement.start, placement.target);
        }
    }

    #[test]
    fn test_spring_settles_without_overshoot() {
        let spring = Spring::default();
        let start = Frame {
            left: 0.0,
            top: 10.0,
            width: 200.0,
            height: 300.0,
            opacity: 0.0,
        };
        let target = Frame {
            left: 500.0,
            top: 40.0,
            width: 400.0,
            height: 500.0,
            opacity: 1.0,
        };
        let mut motion = CardMotion::at_rest(start);
        motion.restart(start, target);

        let mut last_left = start.left;
        let mut settled = false;
        for _ in 0..600 {
            settled = motion.step(16.0, &spring);
            let frame = motion.frame();
            assert!(frame.left >= last_left);
            assert!(frame.left <= target.left);
            assert!(frame.opacity <= 1.0);
            last_left = frame.left;
            if settled {
                break;
            }
        }
        assert!(settled);
        assert_eq!(motion.frame(), target);
        assert!(motion.is_settled());
    }

    #[test]
    fn test_spring_path_independent_of_frame_rate() {
        let spring = Spring::default();
        let start = Frame::default();
        let target = Frame {
            left: 300.0,
            ..Frame::default()
        };

        let mut coarse = CardMotion::at_rest(start);
        coarse.restart(start, target);
        let _ = coarse.step(100.0, &spring);

        let mut fine = CardMotion::at_rest(start);
        fine.restart(start, target);
        for _ in 0..10 {
            let _ = fine.step(10.0, &spring);
        }
        assert!((coarse.frame().left - fine.frame().left).abs() < 1e-6);
    }

    #[test]
    fn test_retarget_keeps_position() {
        let spring = Spring::default();
        let mut motion = CardMotion::at_rest(Frame::default());
        motion.restart(
            Frame::default(),
            Frame {
                left: 100.0,
                ..Frame::default()
            },
        );
        let _ = motion.step(50.0, &spring);
        let before = motion.frame();
        let moved = Frame {
            left: 120.0,
            ..Frame::default()
        };
        motion.retarget(moved);
        assert_eq!(motion.frame(), before);
        assert_eq!(motion.target(), moved);
    }

    #[test]
    fn test_settled_motion_ignores_steps() {
        let frame = Frame {
            left: 12.0,
            ..Frame::default()
        };
        let mut motion = CardMotion::at_rest(frame);
        assert!(motion.step(16.0, &Spring::default()));
        assert_eq!(motion.frame(), frame);
    }
}
