//! Property tests for the carousel state machine.

use delve_site::carousel::{CarouselController, CarouselState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    Tick,
    JumpTo(usize),
    Reset(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        Just(Op::Tick),
        (0usize..16).prop_map(Op::JumpTo),
        (0usize..8).prop_map(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn next_n_times_returns_to_start(length in 1usize..50, start in 0usize..50) {
        let start = start % length;
        let mut carousel = CarouselController::new(length);
        prop_assert!(carousel.jump_to(start));

        for _ in 0..length {
            carousel.next();
        }
        prop_assert_eq!(carousel.current_index(), Some(start));
    }

    #[test]
    fn previous_n_times_returns_to_start(length in 1usize..50, start in 0usize..50) {
        let start = start % length;
        let mut carousel = CarouselController::new(length);
        prop_assert!(carousel.jump_to(start));

        for _ in 0..length {
            carousel.previous();
        }
        prop_assert_eq!(carousel.current_index(), Some(start));
    }

    #[test]
    fn next_then_previous_is_identity(length in 1usize..50, start in 0usize..50) {
        let start = start % length;
        let mut carousel = CarouselController::new(length);
        prop_assert!(carousel.jump_to(start));

        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.current_index(), Some(start));
    }

    #[test]
    fn reset_lands_on_first_slide_or_empty(initial in 0usize..20, new_length in 0usize..20) {
        let mut carousel = CarouselController::new(initial);
        carousel.next();
        carousel.reset(new_length);

        let expected = if new_length == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Positioned(0)
        };
        prop_assert_eq!(carousel.state(), expected);
    }

    #[test]
    fn index_stays_in_bounds_under_any_operation_sequence(
        length in 0usize..10,
        ops in prop::collection::vec(op_strategy(), 0..100),
    ) {
        let mut carousel = CarouselController::new(length);

        for op in ops {
            match op {
                Op::Next => carousel.next(),
                Op::Previous => carousel.previous(),
                Op::Tick => carousel.tick(),
                Op::JumpTo(index) => {
                    let accepted = carousel.jump_to(index);
                    prop_assert_eq!(accepted, index < carousel.len());
                }
                Op::Reset(new_length) => carousel.reset(new_length),
            }

            match carousel.state() {
                CarouselState::Empty => prop_assert!(carousel.is_empty()),
                CarouselState::Positioned(index) => prop_assert!(index < carousel.len()),
            }
        }
    }
}
