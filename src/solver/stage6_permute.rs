//! Stage 6 — SOLVED.
//!
//! Given UP's face solved, permutes the UP corners and edges into their
//! final places using the beginner's A-permutation (corners) and U-
//! permutations (edges), realigned with UP turns between applications.

use crate::cube::Cube;
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

use super::moves::{a_perm, quarter_turns_excluding_down, search_until, u_perm_a, u_perm_b, Maneuver};

fn correct_sticker_count(cube: &Cube) -> i64 {
    let mut count = 0;
    for face in FacePosition::ALL {
        let center = cube.face_color(face);
        for coord in face.coords() {
            if cube.color_at(coord, face) == Some(center) {
                count += 1;
            }
        }
    }
    count
}

fn score(cube: &Cube) -> i64 {
    let prior = cube.is_down_layer_solved() as i64
        + cube.is_middle_layer_solved() as i64
        + cube.has_up_cross() as i64
        + cube.is_up_face_solved() as i64;
    prior * 100_000 + correct_sticker_count(cube)
}

fn move_set() -> Vec<Maneuver> {
    let mut set = quarter_turns_excluding_down();
    set.push(a_perm());
    set.push(u_perm_a());
    set.push(u_perm_b());
    set
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    search_until(cube, output, |c| c.is_fully_solved(), score, &move_set(), 4, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FacePosition::*;
    use crate::geometry::FaceRotationDirection::*;

    #[test]
    fn fully_solves_a_cube_that_only_needs_permuting() {
        // Cycle three UP corners and three UP edges with an A-perm-ish
        // scramble, leaving every piece correctly oriented but mispermuted.
        let mut cube = Cube::solved();
        for _ in 0..2 {
            cube.rotate_face(Right, Clockwise);
            cube.rotate_face(Up, Clockwise);
            cube.rotate_face(Right, CounterClockwise);
            cube.rotate_face(Up, CounterClockwise);
        }
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.is_fully_solved());
    }

    #[test]
    fn is_a_no_op_when_already_fully_solved() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
