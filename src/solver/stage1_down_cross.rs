//! Stage 1 — DOWN CROSS.
//!
//! Forms the cross on DOWN via the classic daisy method: first classify
//! each of the four DOWN-colored edges into one of five cases and bring it
//! up into a "petal" (DOWN's color showing on its UP sticker), then drop
//! each petal straight down into its matching DOWN slot.

use crate::cube::{self, Cube};
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

use super::moves::{apply_and_record, double_turn, turn};

/// Where one of the four DOWN-colored edges currently sits, relative to
/// forming the daisy (spec.md §4.5.1's classification).
enum PetalCase {
    /// Already a correctly-oriented petal: DOWN's color shows on UP.
    Petal,
    /// Sitting in the UP layer with DOWN's color on its side sticker
    /// instead of UP. A single turn of `side` sends it to that side's own
    /// equatorial slot, DOWN's color remaining on `side`.
    UpFlipped { side: FacePosition },
    /// Sitting in the equatorial layer, DOWN's color showing on
    /// `down_face`. The universal equatorial-extraction rule: turning
    /// whichever of the slot's two side faces is NOT `down_face` sends it
    /// straight up as a petal.
    Equatorial { earlier: FacePosition, later: FacePosition, down_face: FacePosition },
    /// Sitting in the DOWN layer, correctly oriented (DOWN's color on the
    /// DOWN sticker). A double turn of `side` sends it straight up as a
    /// petal.
    DownNormal { side: FacePosition },
    /// Sitting in the DOWN layer, flipped (DOWN's color on the side
    /// sticker). A single turn of `side` converts it to an `Equatorial`
    /// case.
    DownFlipped { side: FacePosition },
}

fn side_of_polar_edge(coord: (usize, usize, usize)) -> FacePosition {
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

fn classify(cube: &Cube, down_color: crate::color::Color, coord: (usize, usize, usize)) -> PetalCase {
    let (_, y, _) = coord;
    if y == 0 {
        if cube.color_at(coord, FacePosition::Up) == Some(down_color) {
            PetalCase::Petal
        } else {
            PetalCase::UpFlipped { side: side_of_polar_edge(coord) }
        }
    } else if y == 2 {
        let side = side_of_polar_edge(coord);
        if cube.color_at(coord, FacePosition::Down) == Some(down_color) {
            PetalCase::DownNormal { side }
        } else {
            PetalCase::DownFlipped { side }
        }
    } else {
        let &(_, earlier, later) = cube::middle_edge_slots()
            .iter()
            .find(|&&(c, _, _)| c == coord)
            .expect("equatorial edge coordinate must be one of the four middle slots");
        let down_face = if cube.color_at(coord, earlier) == Some(down_color) { earlier } else { later };
        PetalCase::Equatorial { earlier, later, down_face }
    }
}

/// Finds the one DOWN-colored edge not yet a petal, if any.
fn next_unplaced_edge(cube: &Cube, down_color: crate::color::Color) -> Option<(usize, usize, usize)> {
    cube::edge_coords().into_iter().find(|&coord| {
        FacePosition::ALL.iter().any(|&f| cube.color_at(coord, f) == Some(down_color))
            && !matches!(classify(cube, down_color, coord), PetalCase::Petal)
    })
}

/// Every DOWN-colored edge not yet a petal applies exactly one fixed move
/// (or double move) for its case and is reclassified from scratch next
/// round, so a fix that happens to disturb another edge's progress is
/// self-correcting rather than compounding.
fn form_daisy(cube: &mut Cube, output: &mut Vec<(FacePosition, FaceRotationDirection)>) -> Result<(), SolverError> {
    let down_color = cube.face_color(FacePosition::Down);
    for _round in 0..20 {
        if cube.has_up_daisy() {
            return Ok(());
        }
        let Some(coord) = next_unplaced_edge(cube, down_color) else {
            return Ok(());
        };
        match classify(cube, down_color, coord) {
            PetalCase::Petal => {}
            PetalCase::UpFlipped { side } => {
                apply_and_record(cube, output, &turn(side, FaceRotationDirection::Clockwise))
            }
            PetalCase::Equatorial { earlier, later, down_face } => {
                if down_face == earlier {
                    apply_and_record(cube, output, &turn(later, FaceRotationDirection::Clockwise));
                } else {
                    apply_and_record(cube, output, &turn(earlier, FaceRotationDirection::CounterClockwise));
                }
            }
            PetalCase::DownNormal { side } => apply_and_record(cube, output, &double_turn(side)),
            PetalCase::DownFlipped { side } => {
                apply_and_record(cube, output, &turn(side, FaceRotationDirection::Clockwise))
            }
        }
    }
    Err(SolverError::ProgrammerError("daisy did not form within the expected bound".into()))
}

fn cross_piece_placed(cube: &Cube, target: FacePosition) -> bool {
    let down_color = cube.face_color(FacePosition::Down);
    let &(coord, _) = cube::down_edge_coords().iter().find(|&&(_, s)| s == target).expect("every side has a DOWN edge");
    cube.color_at(coord, FacePosition::Down) == Some(down_color) && cube.color_at(coord, target) == Some(cube.face_color(target))
}

/// Rotates UP until `target`'s petal sits above its own slot, then
/// double-turns `target` to drop it — a move that only ever touches
/// `target`'s own UP/DOWN edge slot and corners, so it never disturbs an
/// already-dropped cross edge or a not-yet-processed petal.
fn drop_petal(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    target: FacePosition,
) -> Result<(), SolverError> {
    let down_color = cube.face_color(FacePosition::Down);
    let target_color = cube.face_color(target);
    let up_slot = cube::up_edge_coords()
        .into_iter()
        .find(|&c| side_of_polar_edge(c) == target)
        .expect("every side face borders exactly one UP-layer edge slot");

    let aligned = |cube: &Cube| {
        cube.color_at(up_slot, FacePosition::Up) == Some(down_color) && cube.color_at(up_slot, target) == Some(target_color)
    };
    for _ in 0..4 {
        if aligned(cube) {
            break;
        }
        apply_and_record(cube, output, &turn(FacePosition::Up, FaceRotationDirection::Clockwise));
    }
    if !aligned(cube) {
        return Err(SolverError::ProgrammerError(format!("no UP alignment delivers a petal to {target}")));
    }
    apply_and_record(cube, output, &double_turn(target));
    Ok(())
}

pub(crate) fn run(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    if cube.has_down_cross() {
        return Ok(());
    }
    form_daisy(cube, output)?;
    for target in [FacePosition::Front, FacePosition::Right, FacePosition::Back, FacePosition::Left] {
        if !cross_piece_placed(cube, target) {
            drop_petal(cube, output, target)?;
        }
    }
    if cube.has_down_cross() {
        Ok(())
    } else {
        Err(SolverError::ProgrammerError("cross did not form after dropping every petal".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FacePosition::*;
    use crate::geometry::FaceRotationDirection::*;

    #[test]
    fn solves_the_cross_from_a_light_scramble() {
        let mut cube = Cube::solved();
        cube.rotate_face(Front, Clockwise);
        cube.rotate_face(Up, CounterClockwise);
        cube.rotate_face(Right, Clockwise);
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.has_down_cross());
    }

    #[test]
    fn solves_the_cross_from_a_heavier_scramble() {
        let mut cube = Cube::solved();
        for (face, dir) in [
            (Right, Clockwise),
            (Up, Clockwise),
            (Front, CounterClockwise),
            (Down, Clockwise),
            (Left, Clockwise),
            (Back, CounterClockwise),
            (Up, Clockwise),
            (Right, CounterClockwise),
        ] {
            cube.rotate_face(face, dir);
        }
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(cube.has_down_cross());
    }

    #[test]
    fn is_a_no_op_when_the_cross_already_holds() {
        let mut cube = Cube::solved();
        let mut output = Vec::new();
        run(&mut cube, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
