//! Stage 4 — DOWN + MID LAYERS + UP CROSS.
//!
//! Given DOWN and the equatorial edges solved, forms the cross on UP using
//! the `F U R U' R' F'` trigger, applied up to twice with a `U2` realignment
//! between applications, to go from a "dot" to a full cross.

use crate::cube::{self, Cube};
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

use super::moves::{quarter_turns_excluding_down, search_until, up_cross_trigger, Maneuver};

fn up_cross_edges_solved(cube: &Cube) -> i64 {
    let up_color = cube.face_color(FacePosition::Up);
    cube::up_edge_coords()
        .iter()
        .filter(|&&coord| cube.color_at(coord, FacePosition::Up) == Some(up_color))
        .count() as i64
}

fn score(cube: &Cube) -> i64 {
    (cube.is_down_layer_solved() as i64 + cube.is_middle_layer_solved() as i64) * 1000 + up_cross_edges_solved(cube)
}

fn move_set() -> Vec<Maneuver> {
    let mut set = quarter_turns_excluding_down();
    set.push(up_cross_trigger());
    set
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    search_until(cube, output, |c| c.has_up_cross(), score, &move_set(), 4, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_the_up_cross_from_a_dot_pattern() {
        // a cube whose UP face starts as a lone center dot.
        let code = crate::codec::CubeCode::parse(
            "gbgbbbbbbyyyrrrrrrbobggggggyyyoooooooyrrygoyrwwwwwwwww",
        )
        .unwrap();
        let mut cube = crate::codec::decode(&code);
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.has_up_cross());

        // spec.md §8 scenario 5: the trigger twice, with a UP half-turn
        // realignment between applications.
        use FacePosition::{Front, Right, Up};
        use FaceRotationDirection::{Clockwise as CW, CounterClockwise as CCW};
        assert_eq!(
            output,
            vec![
                (Front, CW), (Up, CW), (Right, CW), (Up, CCW), (Right, CCW), (Front, CCW),
                (Up, CW), (Up, CW),
                (Front, CW), (Up, CW), (Right, CW), (Up, CCW), (Right, CCW), (Front, CCW),
            ]
        );
    }

    #[test]
    fn is_a_no_op_when_the_up_cross_already_holds() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
