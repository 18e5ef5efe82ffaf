//! Stage 3 — DOWN AND MIDDLE LAYERS.
//!
//! Given the DOWN layer solved, places the four equatorial edges. Each
//! round: if a middle slot holds the wrong piece, bump it back into the UP
//! layer; otherwise rotate UP until a side face shows a UP-layer edge
//! correctly facing it, read which neighbor the edge's other sticker
//! belongs to (spec.md §4.5.3's travel-direction classification), and
//! insert with the matching F2L trigger.

use crate::color::Color;
use crate::cube::{self, Cube};
use crate::error::SolverError;
use crate::geometry::{Coord, FacePosition, FaceRotationDirection};

use super::moves::{apply_and_record, f2l_insert_from_earlier, f2l_insert_from_later, turn};

fn slot_matches(cube: &Cube, coord: Coord, earlier: FacePosition, later: FacePosition) -> bool {
    cube.color_at(coord, earlier) == Some(cube.face_color(earlier)) && cube.color_at(coord, later) == Some(cube.face_color(later))
}

fn side_of_polar_edge(coord: Coord) -> FacePosition {
    let (x, _, z) = coord;
    if z == 0 {
        FacePosition::Front
    } else if z == 2 {
        FacePosition::Back
    } else if x == 0 {
        FacePosition::Left
    } else {
        FacePosition::Right
    }
}

/// If the UP-layer edge at `coord` carries neither UP's nor DOWN's color,
/// it is a loose equatorial piece; returns its `(reference_sticker,
/// up_sticker)` pair.
fn equatorial_piece(cube: &Cube, coord: Coord) -> Option<(Color, Color)> {
    let up_color = cube.face_color(FacePosition::Up);
    let down_color = cube.face_color(FacePosition::Down);
    let side = side_of_polar_edge(coord);
    let reference = cube.color_at(coord, side)?;
    let up = cube.color_at(coord, FacePosition::Up)?;
    if [reference, up].iter().any(|&c| c == up_color || c == down_color) {
        None
    } else {
        Some((reference, up))
    }
}

fn later_neighbor_of(reference: FacePosition) -> (FacePosition, FacePosition) {
    cube::middle_edge_slots().into_iter().find_map(|(_, earlier, later)| (earlier == reference).then_some((earlier, later))).unwrap()
}

fn earlier_neighbor_of(reference: FacePosition) -> (FacePosition, FacePosition) {
    cube::middle_edge_slots().into_iter().find_map(|(_, earlier, later)| (later == reference).then_some((earlier, later))).unwrap()
}

/// Rotates UP until `reference`'s own UP-layer edge slot holds a piece
/// correctly facing `reference`, then reads its other sticker to decide
/// which of the two adjacent slots it travels into.
fn try_insert_via_reference(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    reference: FacePosition,
) -> Result<bool, SolverError> {
    let up_slot = cube::up_edge_coords().into_iter().find(|&c| side_of_polar_edge(c) == reference).unwrap();
    let reference_color = cube.face_color(reference);

    let mut found = false;
    for _ in 0..4 {
        if let Some((side_sticker, _)) = equatorial_piece(cube, up_slot) {
            if side_sticker == reference_color {
                found = true;
                break;
            }
        }
        apply_and_record(cube, output, &turn(FacePosition::Up, FaceRotationDirection::Clockwise));
    }
    if !found {
        return Ok(false);
    }

    let (_, up_sticker) = equatorial_piece(cube, up_slot).expect("alignment just confirmed a matching piece");
    let (earlier, later) = later_neighbor_of(reference);
    if up_sticker == cube.face_color(later) {
        apply_and_record(cube, output, &f2l_insert_from_later(earlier, later));
        return Ok(true);
    }
    let (earlier, later) = earlier_neighbor_of(reference);
    if up_sticker == cube.face_color(earlier) {
        apply_and_record(cube, output, &f2l_insert_from_earlier(earlier, later));
        return Ok(true);
    }
    Ok(false)
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    if cube.is_middle_layer_solved() {
        return Ok(());
    }
    for _round in 0..16 {
        if cube.is_middle_layer_solved() {
            return Ok(());
        }
        if let Some((_, earlier, later)) = cube::middle_edge_slots().into_iter().find(|&(c, e, l)| !slot_matches(cube, c, e, l))
        {
            apply_and_record(cube, output, &f2l_insert_from_later(earlier, later));
            continue;
        }
        let mut progressed = false;
        for reference in [FacePosition::Front, FacePosition::Right, FacePosition::Back, FacePosition::Left] {
            if try_insert_via_reference(cube, output, reference)? {
                progressed = true;
                break;
            }
        }
        if !progressed {
            return Err(SolverError::ProgrammerError("no equatorial edge presented itself for insertion".into()));
        }
    }
    if cube.is_middle_layer_solved() {
        Ok(())
    } else {
        Err(SolverError::ProgrammerError("middle layer did not solve within the expected bound".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FacePosition::*;
    use crate::geometry::FaceRotationDirection::*;

    #[test]
    fn solves_the_middle_layer_after_the_down_layer_is_solved() {
        let mut cube = Cube::solved();
        cube.rotate_face(Front, Clockwise);
        cube.rotate_face(Up, CounterClockwise);
        cube.rotate_face(Right, Clockwise);
        cube.rotate_face(Up, Clockwise);
        let mut output = Vec::new();
        super::super::stage1_down_cross::run(&mut cube, &mut output).unwrap();
        output.clear();
        super::super::stage2_down_layer::run(&mut cube, &mut output).unwrap();
        output.clear();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.is_middle_layer_solved());
        assert!(cube.is_down_layer_solved(), "must not disturb the down layer");
    }

    #[test]
    fn is_a_no_op_when_the_middle_layer_already_holds() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
