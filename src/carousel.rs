//! Wrap-around navigation state machine for the home-page slider.
//!
//! A controller owns a `CarouselState` over an ordered, possibly-empty
//! slide sequence. Navigation cycles (last `next` wraps to the first slide
//! and vice versa), out-of-range jumps are rejected rather than clamped,
//! and a content swap resets the index to 0 because slide identities are
//! not stable across a language change.

/// Position of a carousel over its slide sequence.
///
/// Invariant: `Positioned(i)` always satisfies `0 <= i < length`; `Empty`
/// is the only state when the sequence has no slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Empty,
    Positioned(usize),
}

/// Index controller for one mounted carousel instance.
///
/// Lives as long as the owning carousel; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    length: usize,
    state: CarouselState,
}

impl CarouselController {
    /// Create a controller over a sequence of `length` slides.
    ///
    /// Starts at `Positioned(0)`, or `Empty` when the sequence is empty.
    pub fn new(length: usize) -> Self {
        let state = if length == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Positioned(0)
        };
        Self { length, state }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// The current index, or `None` when the sequence is empty.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CarouselState::Empty => None,
            CarouselState::Positioned(index) => Some(index),
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Advance one slide, wrapping from the last back to the first.
    /// No-op when empty.
    pub fn next(&mut self) {
        if let CarouselState::Positioned(index) = self.state {
            self.state = CarouselState::Positioned((index + 1) % self.length);
        }
    }

    /// Step back one slide, wrapping from the first to the last.
    /// No-op when empty.
    pub fn previous(&mut self) {
        if let CarouselState::Positioned(index) = self.state {
            self.state = CarouselState::Positioned((index + self.length - 1) % self.length);
        }
    }

    /// Jump to slide `index` (the dots indicator).
    ///
    /// Out-of-range requests are rejected as no-ops rather than clamped,
    /// so a caller bug shows up in tests instead of landing on a wrong
    /// slide. Returns whether the jump was accepted.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.length {
            self.state = CarouselState::Positioned(index);
            true
        } else {
            false
        }
    }

    /// Reset for a new backing sequence of `new_length` slides.
    ///
    /// Always lands on `Positioned(0)` (or `Empty`); the old index is never
    /// preserved across a content swap.
    pub fn reset(&mut self, new_length: usize) {
        self.length = new_length;
        self.state = if new_length == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Positioned(0)
        };
    }

    /// Auto-advance timer entry point.
    ///
    /// Re-checks the current length, so a tick that fires after `reset(0)`
    /// is a no-op instead of advancing into an invalid index.
    pub fn tick(&mut self) {
        if !self.is_empty() {
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Initial State Tests ====================

    #[test]
    fn test_new_empty_sequence() {
        let carousel = CarouselController::new(0);
        assert_eq!(carousel.state(), CarouselState::Empty);
        assert_eq!(carousel.current_index(), None);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_new_non_empty_starts_at_zero() {
        let carousel = CarouselController::new(4);
        assert_eq!(carousel.state(), CarouselState::Positioned(0));
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.len(), 4);
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_next_advances() {
        let mut carousel = CarouselController::new(4);
        carousel.next();
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(3));
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let mut carousel = CarouselController::new(4);
        carousel.previous();
        assert_eq!(carousel.current_index(), Some(3));
    }

    #[test]
    fn test_wraparound_scenario() {
        // Length 4, index 3: next -> 0, previous -> 3.
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(3));

        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));

        carousel.previous();
        assert_eq!(carousel.current_index(), Some(3));
    }

    #[test]
    fn test_next_on_empty_is_noop() {
        let mut carousel = CarouselController::new(0);
        carousel.next();
        assert_eq!(carousel.state(), CarouselState::Empty);
    }

    #[test]
    fn test_previous_on_empty_is_noop() {
        let mut carousel = CarouselController::new(0);
        carousel.previous();
        assert_eq!(carousel.state(), CarouselState::Empty);
    }

    #[test]
    fn test_single_slide_wraps_to_itself() {
        let mut carousel = CarouselController::new(1);
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
        carousel.previous();
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_n_steps_return_to_start() {
        let n = 5;
        let mut carousel = CarouselController::new(n);
        assert!(carousel.jump_to(2));

        for _ in 0..n {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), Some(2));

        for _ in 0..n {
            carousel.previous();
        }
        assert_eq!(carousel.current_index(), Some(2));
    }

    // ==================== jump_to Tests ====================

    #[test]
    fn test_jump_to_valid_index() {
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(2));
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn test_jump_to_out_of_range_rejected() {
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(1));

        assert!(!carousel.jump_to(4));
        assert!(!carousel.jump_to(100));
        // Rejected jumps leave the position unchanged.
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn test_jump_to_on_empty_rejected() {
        let mut carousel = CarouselController::new(0);
        assert!(!carousel.jump_to(0));
        assert_eq!(carousel.state(), CarouselState::Empty);
    }

    // ==================== reset Tests ====================

    #[test]
    fn test_reset_to_zero_yields_empty() {
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(3));

        carousel.reset(0);
        assert_eq!(carousel.state(), CarouselState::Empty);
    }

    #[test]
    fn test_reset_to_positive_yields_position_zero() {
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(3));

        // Old index is never preserved across a content swap.
        carousel.reset(2);
        assert_eq!(carousel.state(), CarouselState::Positioned(0));
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn test_reset_from_empty_to_positive() {
        let mut carousel = CarouselController::new(0);
        carousel.reset(3);
        assert_eq!(carousel.state(), CarouselState::Positioned(0));
    }

    // ==================== tick Tests ====================

    #[test]
    fn test_tick_advances_like_next() {
        let mut carousel = CarouselController::new(3);
        carousel.tick();
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn test_tick_after_reset_to_empty_is_noop() {
        // A timer tick landing after the slide sequence emptied must not
        // advance into an invalid index.
        let mut carousel = CarouselController::new(4);
        assert!(carousel.jump_to(2));
        carousel.reset(0);

        carousel.tick();
        assert_eq!(carousel.state(), CarouselState::Empty);
    }

    // ==================== Invariant Tests ====================

    #[test]
    fn test_index_always_within_bounds() {
        let mut carousel = CarouselController::new(3);
        for step in 0..20 {
            if step % 3 == 0 {
                carousel.next();
            } else if step % 3 == 1 {
                carousel.previous();
            } else {
                carousel.tick();
            }
            let index = carousel.current_index().expect("non-empty");
            assert!(index < carousel.len());
        }
    }
}
