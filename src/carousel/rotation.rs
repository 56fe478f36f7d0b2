pub const SLOT_COUNT: usize = 5;
pub const CENTER_SLOT: usize = 2;

/// Slot occupied by `item` after the carousel has been rotated `shift` times.
///
/// Both the stage layout and center detection go through this function.
pub fn slot_index_of(item: usize, shift: usize) -> usize {
    (item % SLOT_COUNT + CENTER_SLOT + SLOT_COUNT - shift % SLOT_COUNT) % SLOT_COUNT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    shift: usize,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn advance(&mut self) {
        self.shift = (self.shift + 1) % SLOT_COUNT;
    }

    pub fn retreat(&mut self) {
        self.shift = (self.shift + SLOT_COUNT - 1) % SLOT_COUNT;
    }

    pub fn slot_of(&self, item: usize) -> usize {
        slot_index_of(item, self.shift)
    }

    /// Index of the item sitting in the center slot.
    pub fn center_item(&self) -> usize {
        (0..SLOT_COUNT)
            .find(|&item| self.slot_of(item) == CENTER_SLOT)
            .unwrap_or(CENTER_SLOT)
    }

    /// Slot index for every item, in item order.
    pub fn assignments(&self) -> [usize; SLOT_COUNT] {
        std::array::from_fn(|item| self.slot_of(item))
    }
}
