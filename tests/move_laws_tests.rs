//! Algebraic laws of the move engine.
//!
//! The permutation tables are only correct if every law below holds from
//! arbitrary reachable states, so most of these are property tests over
//! random move sequences.

use proptest::prelude::*;

use rust_cube::core::{CubeState, Face};
use rust_cube::moves::{
    apply_sequence, format_sequence, invert_sequence, parse_sequence, turn_clockwise, Move,
};

fn any_move() -> impl Strategy<Value = Move> {
    (0..Move::ALL.len()).prop_map(|i| Move::ALL[i])
}

fn any_face() -> impl Strategy<Value = Face> {
    (0..6usize).prop_map(Face::from_index)
}

fn reachable_state() -> impl Strategy<Value = CubeState> {
    prop::collection::vec(any_move(), 0..40).prop_map(|moves| {
        let mut cube = CubeState::solved();
        apply_sequence(&mut cube, &moves);
        cube
    })
}

fn assert_nine_of_each(cube: &CubeState) {
    for (color, count) in cube.color_counts() {
        assert_eq!(count, 9, "{} appears {} times", color.name(), count);
    }
}

// =============================================================================
// Golden Fixtures
// =============================================================================

#[test]
fn test_single_turn_breaks_solved() {
    for mv in Move::ALL {
        let mut cube = CubeState::solved();
        cube.apply_move(mv);
        assert!(!cube.is_solved(), "{} left the cube solved", mv);
    }
}

#[test]
fn test_four_r_turns_restore_solved() {
    let mut cube = CubeState::solved();
    for i in 1..=4 {
        cube.execute_move("R").unwrap();
        assert_eq!(cube.is_solved(), i == 4);
    }
}

/// `R U R' U'` has order 6 on a physical cube.
#[test]
fn test_sexy_move_has_order_six() {
    let sequence = parse_sequence("R U R' U'").unwrap();
    let mut cube = CubeState::solved();

    for i in 1..=6 {
        apply_sequence(&mut cube, &sequence);
        assert_eq!(cube.is_solved(), i == 6, "after {} repetitions", i);
    }
}

/// Orders of a few well-known sequences. A table with a mis-oriented strip
/// still gives order 4 per face but breaks these.
#[test]
fn test_known_sequence_orders() {
    for (text, order) in [("R U", 105), ("R U2", 30), ("R U'", 63), ("F R", 105)] {
        let sequence = parse_sequence(text).unwrap();
        let mut cube = CubeState::solved();
        let mut n = 0;
        loop {
            apply_sequence(&mut cube, &sequence);
            n += 1;
            if cube.is_solved() || n > order {
                break;
            }
        }
        assert_eq!(n, order, "order of {}", text);
    }
}

#[test]
fn test_superflip_keeps_corners_and_centers() {
    let superflip =
        parse_sequence("U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2").unwrap();
    let mut cube = CubeState::solved();
    apply_sequence(&mut cube, &superflip);

    for face in Face::ALL {
        let grid = cube.face_grid(face);
        let solved = face.solved_color();
        for (row, col) in [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)] {
            assert_eq!(grid[row][col], solved, "{} ({}, {})", face, row, col);
        }
        for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_ne!(grid[row][col], solved, "{} ({}, {})", face, row, col);
        }
    }
}

#[test]
fn test_centers_never_move() {
    let mut cube = CubeState::solved();
    apply_sequence(&mut cube, &parse_sequence("R U F L D B R' U2 F' L2 D' B2").unwrap());

    for face in Face::ALL {
        assert_eq!(cube.facelet(face, 1, 1), face.solved_color());
    }
}

#[test]
fn test_turn_leaves_opposite_face_alone() {
    let opposite = |face| match face {
        Face::Up => Face::Down,
        Face::Down => Face::Up,
        Face::Front => Face::Back,
        Face::Back => Face::Front,
        Face::Left => Face::Right,
        Face::Right => Face::Left,
    };

    let mut start = CubeState::solved();
    apply_sequence(&mut start, &parse_sequence("R U F' L D2 B").unwrap());

    for face in Face::ALL {
        let mut cube = start.clone();
        turn_clockwise(&mut cube, face);
        assert_eq!(cube.face_grid(opposite(face)), start.face_grid(opposite(face)));
    }
}

#[test]
fn test_round_trip_through_canonical() {
    let mut cube = CubeState::solved();
    apply_sequence(&mut cube, &parse_sequence("B' D L2 F U' R").unwrap());

    let encoded = cube.encode_canonical();
    assert_eq!(encoded.len(), 54);
    assert!(encoded.chars().all(|c| "URFDLB".contains(c)));
    assert_eq!(CubeState::from_canonical(&encoded).unwrap(), cube);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_move_then_inverse_is_identity(start in reachable_state(), mv in any_move()) {
        let mut cube = start.clone();
        cube.apply_move(mv);
        cube.apply_move(mv.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn prop_quarter_turn_has_order_four(start in reachable_state(), face in any_face()) {
        let mut cube = start.clone();
        for _ in 0..4 {
            cube.apply_move(Move::clockwise(face));
        }
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn prop_double_turn_has_order_two(start in reachable_state(), face in any_face()) {
        let mut cube = start.clone();
        cube.apply_move(Move::double(face));
        cube.apply_move(Move::double(face));
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn prop_double_is_two_clockwise(start in reachable_state(), face in any_face()) {
        let mut doubled = start.clone();
        doubled.apply_move(Move::double(face));

        let mut twice = start;
        twice.apply_move(Move::clockwise(face));
        twice.apply_move(Move::clockwise(face));
        prop_assert_eq!(doubled, twice);
    }

    #[test]
    fn prop_color_counts_preserved(moves in prop::collection::vec(any_move(), 0..60)) {
        let mut cube = CubeState::solved();
        apply_sequence(&mut cube, &moves);
        assert_nine_of_each(&cube);
    }

    #[test]
    fn prop_sequence_then_inverse_sequence(start in reachable_state(),
                                           moves in prop::collection::vec(any_move(), 0..30)) {
        let mut cube = start.clone();
        apply_sequence(&mut cube, &moves);
        apply_sequence(&mut cube, &invert_sequence(&moves));
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn prop_face_encoding_round_trip(start in reachable_state(), face in any_face()) {
        let mut cube = start.clone();
        let encoded = cube.encode_face(face);
        cube.decode_face(face, &encoded).unwrap();
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn prop_canonical_round_trip(start in reachable_state()) {
        let decoded = CubeState::from_canonical(&start.encode_canonical()).unwrap();
        prop_assert_eq!(decoded, start);
    }

    #[test]
    fn prop_sequence_text_round_trip(moves in prop::collection::vec(any_move(), 0..30)) {
        let text = format_sequence(&moves);
        prop_assert_eq!(parse_sequence(&text).unwrap(), moves);
    }

    #[test]
    fn prop_counter_clockwise_is_three_clockwise(start in reachable_state(), face in any_face()) {
        let mut direct = start.clone();
        direct.apply_move(Move::counter_clockwise(face));

        let mut thrice = start;
        for _ in 0..3 {
            turn_clockwise(&mut thrice, face);
        }
        prop_assert_eq!(direct, thrice);
    }
}
