//! Stage 2 — DOWN LAYER.
//!
//! Given the cross already solved, places the four DOWN corners one slot at
//! a time. For each slot: locate the corner that belongs there, evict it
//! out of the DOWN layer if it is stuck in one (misoriented, or simply in
//! the wrong place), align it into the UP layer above its home slot, read
//! off which of the slot's two side faces its DOWN-colored sticker faces
//! (spec.md §4.5.2's orientation case split), and insert with the matching
//! trigger.

use std::collections::HashSet;

use crate::color::Color;
use crate::cube::{self, Cube};
use crate::error::SolverError;
use crate::geometry::{Coord, FacePosition, FaceRotationDirection};

use super::moves::{align_up_until, apply_and_record, corner_evict, corner_insert_facing_earlier, corner_insert_facing_later};

fn sticker_set(cube: &Cube, coord: Coord, faces: [FacePosition; 3]) -> HashSet<Color> {
    faces.iter().map(|&f| cube.color_at(coord, f).expect("corner cubelet carries all three stickers")).collect()
}

fn slot_solved(cube: &Cube, coord: Coord, earlier: FacePosition, later: FacePosition) -> bool {
    cube.color_at(coord, FacePosition::Down) == Some(cube.face_color(FacePosition::Down))
        && cube.color_at(coord, earlier) == Some(cube.face_color(earlier))
        && cube.color_at(coord, later) == Some(cube.face_color(later))
}

/// Which side face a DOWN corner sitting in the UP layer above its slot has
/// its DOWN-colored sticker facing (spec.md §4.5.2).
enum Facing {
    Earlier,
    Later,
    Up,
}

fn facing(cube: &Cube, up_coord: Coord, earlier: FacePosition, later: FacePosition, down_color: Color) -> Facing {
    if cube.color_at(up_coord, earlier) == Some(down_color) {
        Facing::Earlier
    } else if cube.color_at(up_coord, later) == Some(down_color) {
        Facing::Later
    } else {
        Facing::Up
    }
}

fn up_above(down_coord: Coord) -> Coord {
    (down_coord.0, 0, down_coord.2)
}

fn place_corner(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    coord: Coord,
    earlier: FacePosition,
    later: FacePosition,
) -> Result<(), SolverError> {
    let down_color = cube.face_color(FacePosition::Down);
    let target_set: HashSet<Color> = [down_color, cube.face_color(earlier), cube.face_color(later)].into_iter().collect();

    for _round in 0..6 {
        if slot_solved(cube, coord, earlier, later) {
            return Ok(());
        }

        // If the belonging piece is stuck in some DOWN slot (this one,
        // misoriented, or another not-yet-processed one), evict it first.
        for &(down_slot, slot_earlier, slot_later) in cube::down_corner_slots().iter() {
            if sticker_set(cube, down_slot, [FacePosition::Down, slot_earlier, slot_later]) == target_set {
                apply_and_record(cube, output, &corner_evict(slot_later));
                break;
            }
        }

        align_up_until(cube, output, |c| {
            sticker_set(c, up_above(coord), [FacePosition::Up, earlier, later]) == target_set
        })?;

        match facing(cube, up_above(coord), earlier, later, down_color) {
            Facing::Earlier => apply_and_record(cube, output, &corner_insert_facing_earlier(earlier)),
            Facing::Later => apply_and_record(cube, output, &corner_insert_facing_later(later)),
            Facing::Up => apply_and_record(cube, output, &corner_evict(later)),
        }
    }
    Err(SolverError::ProgrammerError(format!("DOWN corner slot bordered by {earlier}/{later} did not resolve")))
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    if cube.is_down_layer_solved() {
        return Ok(());
    }
    for (coord, earlier, later) in cube::down_corner_slots() {
        place_corner(cube, output, coord, earlier, later)?;
    }
    if cube.is_down_layer_solved() {
        Ok(())
    } else {
        Err(SolverError::ProgrammerError("DOWN layer did not solve after placing every corner".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FacePosition::*;
    use crate::geometry::FaceRotationDirection::*;

    #[test]
    fn solves_the_down_layer_after_the_cross_is_formed() {
        let mut cube = Cube::solved();
        cube.rotate_face(Right, Clockwise);
        cube.rotate_face(Up, Clockwise);
        cube.rotate_face(Right, CounterClockwise);
        let mut output = Vec::new();
        super::super::stage1_down_cross::run(&mut cube, &mut output).unwrap();
        output.clear();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.is_down_layer_solved());
    }

    #[test]
    fn solves_the_down_layer_from_a_heavier_scramble() {
        let mut cube = Cube::solved();
        for (face, dir) in [
            (Right, Clockwise),
            (Front, CounterClockwise),
            (Down, Clockwise),
            (Left, Clockwise),
            (Up, CounterClockwise),
            (Back, Clockwise),
            (Right, CounterClockwise),
        ] {
            cube.rotate_face(face, dir);
        }
        let mut output = Vec::new();
        super::super::stage1_down_cross::run(&mut cube, &mut output).unwrap();
        output.clear();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.is_down_layer_solved());
        assert!(cube.has_down_cross());
    }

    #[test]
    fn is_a_no_op_when_the_down_layer_already_holds() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
