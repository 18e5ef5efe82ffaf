//! Stage 5 — DOWN + MID LAYERS + UP FACE.
//!
//! Given UP's cross solved, orients the four UP corners in place using the
//! sune trigger, repeated with UP realignments between applications (the
//! standard two-look approach: this single trigger, applied enough times
//! from enough UP-face orientations, reaches every corner-orientation case
//! without a full 57-entry OLL table).

use crate::cube::{self, Cube};
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

use super::moves::{quarter_turns_excluding_down, search_until, sune, Maneuver};

fn corners_oriented(cube: &Cube) -> i64 {
    let up_color = cube.face_color(FacePosition::Up);
    cube::corner_coords(FacePosition::Up)
        .iter()
        .filter(|&&coord| cube.color_at(coord, FacePosition::Up) == Some(up_color))
        .count() as i64
}

fn score(cube: &Cube) -> i64 {
    (cube.is_down_layer_solved() as i64 + cube.is_middle_layer_solved() as i64 + cube.has_up_cross() as i64) * 1000
        + corners_oriented(cube)
}

fn move_set() -> Vec<Maneuver> {
    let mut set = quarter_turns_excluding_down();
    set.push(sune());
    set
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    search_until(cube, output, |c| c.is_up_face_solved(), score, &move_set(), 5, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FacePosition::*;
    use crate::geometry::FaceRotationDirection::*;

    #[test]
    fn orients_up_corners_after_the_up_cross_is_formed() {
        let mut cube = Cube::solved();
        cube.rotate_face(Right, Clockwise);
        cube.rotate_face(Up, Clockwise);
        cube.rotate_face(Right, CounterClockwise);
        cube.rotate_face(Up, CounterClockwise);
        cube.rotate_face(Front, Clockwise);
        cube.rotate_face(Up, Clockwise);
        cube.rotate_face(Front, CounterClockwise);
        let mut output = Vec::new();
        super::super::stage1_down_cross::run(&mut cube, &mut output).unwrap();
        output.clear();
        super::super::stage2_down_layer::run(&mut cube, &mut output).unwrap();
        output.clear();
        super::super::stage3_middle_layer::run(&mut cube, &mut output).unwrap();
        output.clear();
        super::super::stage4_up_cross::run(&mut cube, &mut output).unwrap();
        output.clear();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.is_up_face_solved());
        assert!(cube.is_down_layer_solved());
        assert!(cube.is_middle_layer_solved());
    }

    #[test]
    fn is_a_no_op_when_the_up_face_already_holds() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
