//! The 27-cubelet cube state model : storage, the `rotate_face`
//! operator, and the geometric predicates the solver depends on.

use ndarray::{Array, Array3};

use crate::color::Color;
use crate::cubelet::Cubelet;
use crate::geometry::{coordinate_transform, cubelet_rotation, Coord, FacePosition, FaceRotationDirection};

/// A full Rubik's cube: a mapping `(x, y, z) -> Cubelet` for all 27
/// coordinates in `{0,1,2}^3`, backed by an owned `Array3` (the natural
/// 3-dimensional generalization of a per-face 2D color grid).
///
/// Each `Cube` owns its 27 cubelets independently; constructing two cubes and
/// mutating one never affects the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    cubelets: Array3<Cubelet>,
}

impl Cube {
    /// An uncolored cube (every cubelet has no stickers). Mostly useful as a
    /// base for tests and for the codec to populate.
    pub fn empty() -> Cube {
        Cube {
            cubelets: Array::from_elem((3, 3, 3), Cubelet::new()),
        }
    }

    /// A solved cube using the canonical center-color assignment: FRONT
    /// blue, RIGHT red, BACK green, LEFT orange, UP yellow, DOWN white.
    pub fn solved() -> Cube {
        const ASSIGNMENT: [(FacePosition, Color); 6] = [
            (FacePosition::Front, Color::Blue),
            (FacePosition::Right, Color::Red),
            (FacePosition::Back, Color::Green),
            (FacePosition::Left, Color::Orange),
            (FacePosition::Up, Color::Yellow),
            (FacePosition::Down, Color::White),
        ];
        let mut cube = Cube::empty();
        for (face, color) in ASSIGNMENT {
            for coord in face.coords() {
                cube.cubelet_mut(coord).set_color(face, color);
            }
        }
        cube
    }

    pub(crate) fn cubelet(&self, coord: Coord) -> &Cubelet {
        &self.cubelets[[coord.0, coord.1, coord.2]]
    }

    pub(crate) fn cubelet_mut(&mut self, coord: Coord) -> &mut Cubelet {
        &mut self.cubelets[[coord.0, coord.1, coord.2]]
    }

    /// The color on `face` at `coord`, or `None` if that cubelet has no
    /// sticker there.
    pub fn color_at(&self, coord: Coord, face: FacePosition) -> Option<Color> {
        self.cubelet(coord).color_of(face)
    }

    /// The color of `face`'s center sticker.
    pub fn face_color(&self, face: FacePosition) -> Color {
        self.cubelet(face.center_coord())
            .color_of(face)
            .expect("center cubelet always carries its face's color")
    }

    /// Applies a 90-degree turn of `face` in `direction`. Moves each cubelet
    /// at a coordinate on `face` to its transformed coordinate and relabels
    /// the moved cubelet's stickers. Pieces are gathered into a temporary
    /// buffer before being installed, so no
    /// coordinate is read after being overwritten mid-rotation.
    pub fn rotate_face(&mut self, face: FacePosition, direction: FaceRotationDirection) {
        let transform = coordinate_transform(face, direction);
        let spin = cubelet_rotation(face, direction);

        let moved: Vec<(Coord, Cubelet)> = face
            .coords()
            .iter()
            .map(|&from| {
                let mut cubelet = *self.cubelet(from);
                cubelet.rotate(spin);
                (transform(from), cubelet)
            })
            .collect();

        for (to, cubelet) in moved {
            *self.cubelet_mut(to) = cubelet;
        }
    }

    /// `true` if the four edges adjacent to UP's center show DOWN's color
    /// on their UP sticker (a "daisy").
    pub fn has_up_daisy(&self) -> bool {
        let down_color = self.face_color(FacePosition::Down);
        up_edge_coords().iter().all(|&coord| self.color_at(coord, FacePosition::Up) == Some(down_color))
    }

    /// `true` if DOWN's four edges show DOWN's color on their DOWN sticker
    /// and each edge's side sticker matches its side face's center color.
    pub fn has_down_cross(&self) -> bool {
        let down_color = self.face_color(FacePosition::Down);
        down_edge_coords().iter().all(|&(coord, side)| {
            self.color_at(coord, FacePosition::Down) == Some(down_color)
                && self.color_at(coord, side) == Some(self.face_color(side))
        })
    }

    /// `true` if DOWN is uniformly DOWN's color and, for each side face,
    /// the three stickers in that face's bottom row match the face's
    /// center color.
    pub fn is_down_layer_solved(&self) -> bool {
        let down_color = self.face_color(FacePosition::Down);
        let down_uniform = FacePosition::Down
            .coords()
            .iter()
            .all(|&c| self.color_at(c, FacePosition::Down) == Some(down_color));
        down_uniform
            && [FacePosition::Front, FacePosition::Left, FacePosition::Back, FacePosition::Right]
                .iter()
                .all(|&side| self.bottom_row_matches_center(side))
    }

    fn bottom_row_matches_center(&self, side: FacePosition) -> bool {
        let center = self.face_color(side);
        bottom_row_coords(side).iter().all(|&c| self.color_at(c, side) == Some(center))
    }

    /// `true` if, for each side face, the left- and right-of-center
    /// stickers match that face's center color.
    pub fn is_middle_layer_solved(&self) -> bool {
        [FacePosition::Front, FacePosition::Left, FacePosition::Back, FacePosition::Right]
            .iter()
            .all(|&side| {
                let center = self.face_color(side);
                middle_row_flank_coords(side)
                    .iter()
                    .all(|&c| self.color_at(c, side) == Some(center))
            })
    }

    /// `true` if UP's four edges show UP's color on their UP sticker.
    pub fn has_up_cross(&self) -> bool {
        let up_color = self.face_color(FacePosition::Up);
        up_edge_coords().iter().all(|&coord| self.color_at(coord, FacePosition::Up) == Some(up_color))
    }

    /// `true` if all nine UP stickers equal UP's color.
    pub fn is_up_face_solved(&self) -> bool {
        let up_color = self.face_color(FacePosition::Up);
        FacePosition::Up
            .coords()
            .iter()
            .all(|&c| self.color_at(c, FacePosition::Up) == Some(up_color))
    }

    /// `true` if, for each side face, its top row (three stickers) matches
    /// its center color.
    pub fn is_up_edges_solved(&self) -> bool {
        [FacePosition::Front, FacePosition::Left, FacePosition::Back, FacePosition::Right]
            .iter()
            .all(|&side| self.top_row_matches_center(side))
    }

    fn top_row_matches_center(&self, side: FacePosition) -> bool {
        let center = self.face_color(side);
        top_row_coords(side).iter().all(|&c| self.color_at(c, side) == Some(center))
    }

    /// `is_up_face_solved() && is_up_edges_solved()`.
    pub fn is_up_layer_solved(&self) -> bool {
        self.is_up_face_solved() && self.is_up_edges_solved()
    }

    /// `true` if every face is uniformly its own center color (fully
    /// solved).
    pub fn is_fully_solved(&self) -> bool {
        FacePosition::ALL.iter().all(|&face| {
            let center = self.face_color(face);
            face.coords().iter().all(|&c| self.color_at(c, face) == Some(center))
        })
    }
}

/// The coordinates of the four edges adjacent to the UP center, i.e. the
/// middle-of-row/column positions of the UP face.
pub(crate) fn up_edge_coords() -> [Coord; 4] {
    let c = FacePosition::Up.coords();
    [c[1], c[3], c[5], c[7]]
}

/// The DOWN-face coordinate and side face for each of the four DOWN edges.
pub(crate) fn down_edge_coords() -> [(Coord, FacePosition); 4] {
    let c = FacePosition::Down.coords();
    [
        (c[1], FacePosition::Front),
        (c[3], FacePosition::Left),
        (c[5], FacePosition::Right),
        (c[7], FacePosition::Back),
    ]
}

/// The three coordinates of `side`'s bottom row (nearest DOWN), in `side`'s
/// own face-local coordinate order.
pub(crate) fn bottom_row_coords(side: FacePosition) -> [Coord; 3] {
    let c = side.coords();
    [c[6], c[7], c[8]]
}

/// The three coordinates of `side`'s top row (nearest UP).
pub(crate) fn top_row_coords(side: FacePosition) -> [Coord; 3] {
    let c = side.coords();
    [c[0], c[1], c[2]]
}

/// The left-of-center and right-of-center coordinates of `side`'s middle
/// row.
pub(crate) fn middle_row_flank_coords(side: FacePosition) -> [Coord; 2] {
    let c = side.coords();
    [c[3], c[5]]
}

/// The four corner coordinates of `face`, in `face`'s own coordinate order.
pub(crate) fn corner_coords(face: FacePosition) -> [Coord; 4] {
    let c = face.coords();
    [c[0], c[2], c[6], c[8]]
}

/// All twelve edge-cubelet coordinates (exactly one of `x, y, z` is `1`).
pub(crate) fn edge_coords() -> [Coord; 12] {
    [
        (1, 0, 0), (0, 0, 1), (2, 0, 1), (1, 0, 2),
        (0, 1, 0), (2, 1, 0), (0, 1, 2), (2, 1, 2),
        (1, 2, 0), (0, 2, 1), (2, 2, 1), (1, 2, 2),
    ]
}

/// The four equatorial-edge coordinates, each paired with the two side
/// faces it borders, in clockwise (seen from UP) adjacency order: FRONT is
/// "earlier" than RIGHT, RIGHT earlier than BACK, and so on around. This
/// ordering is load-bearing for `stage1_down_cross`'s extraction rule.
pub(crate) fn middle_edge_slots() -> [(Coord, FacePosition, FacePosition); 4] {
    use FacePosition::*;
    [((2, 1, 0), Front, Right), ((2, 1, 2), Right, Back), ((0, 1, 2), Back, Left), ((0, 1, 0), Left, Front)]
}

/// The four DOWN-layer corner coordinates, each paired with the two side
/// faces it borders, in the same clockwise adjacency order as
/// `middle_edge_slots`.
pub(crate) fn down_corner_slots() -> [(Coord, FacePosition, FacePosition); 4] {
    use FacePosition::*;
    [((2, 2, 0), Front, Right), ((2, 2, 2), Right, Back), ((0, 2, 2), Back, Left), ((0, 2, 0), Left, Front)]
}

/// The four UP-layer corner coordinates, each paired with the two side
/// faces it borders, in the same clockwise adjacency order as
/// `middle_edge_slots`.
pub(crate) fn up_corner_slots() -> [(Coord, FacePosition, FacePosition); 4] {
    use FacePosition::*;
    [((2, 0, 0), Front, Right), ((2, 0, 2), Right, Back), ((0, 0, 2), Back, Left), ((0, 0, 0), Left, Front)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_satisfies_every_stage_invariant() {
        let cube = Cube::solved();
        assert!(cube.has_down_cross());
        assert!(cube.is_down_layer_solved());
        assert!(cube.is_middle_layer_solved());
        assert!(cube.has_up_cross());
        assert!(cube.is_up_face_solved());
        assert!(cube.is_up_edges_solved());
        assert!(cube.is_up_layer_solved());
        assert!(cube.is_fully_solved());
    }

    #[test]
    fn rotate_face_four_times_restores_the_cube() {
        for face in FacePosition::ALL {
            for dir in [FaceRotationDirection::Clockwise, FaceRotationDirection::CounterClockwise] {
                let mut cube = Cube::solved();
                let original = cube.clone();
                for _ in 0..4 {
                    cube.rotate_face(face, dir);
                }
                assert_eq!(cube, original, "{face} {dir:?} x4 must be identity");
            }
        }
    }

    #[test]
    fn rotate_then_inverse_restores_the_cube() {
        for face in FacePosition::ALL {
            let mut cube = Cube::solved();
            let original = cube.clone();
            cube.rotate_face(face, FaceRotationDirection::Clockwise);
            cube.rotate_face(face, FaceRotationDirection::CounterClockwise);
            assert_eq!(cube, original);
        }
    }

    #[test]
    fn rotation_preserves_sticker_counts_per_color() {
        let mut cube = Cube::solved();
        cube.rotate_face(FacePosition::Front, FaceRotationDirection::Clockwise);
        cube.rotate_face(FacePosition::Up, FaceRotationDirection::CounterClockwise);
        for color in Color::ALL {
            let mut count = 0;
            for face in FacePosition::ALL {
                for coord in face.coords() {
                    if cube.color_at(coord, face) == Some(color) {
                        count += 1;
                    }
                }
            }
            assert_eq!(count, 9, "{color} must have exactly 9 stickers after rotation");
        }
    }

    #[test]
    fn rotation_preserves_center_colors() {
        let mut cube = Cube::solved();
        let centers_before: Vec<Color> = FacePosition::ALL.iter().map(|&f| cube.face_color(f)).collect();
        cube.rotate_face(FacePosition::Right, FaceRotationDirection::Clockwise);
        cube.rotate_face(FacePosition::Down, FaceRotationDirection::Clockwise);
        let centers_after: Vec<Color> = FacePosition::ALL.iter().map(|&f| cube.face_color(f)).collect();
        assert_eq!(centers_before, centers_after);
    }

    #[test]
    fn two_cubes_are_independent() {
        let cube_a = Cube::solved();
        let mut cube_b = Cube::solved();
        cube_b.rotate_face(FacePosition::Front, FaceRotationDirection::Clockwise);
        assert_ne!(cube_a, cube_b);
        assert!(cube_a.is_fully_solved());
    }

    #[test]
    fn up_clockwise_moves_front_top_row_sticker_to_left() {
        // Regression for a recurring bug: UP CW spins the
        // top layer so that the sticker at FRONT moves to LEFT.
        let mut cube = Cube::solved();
        let front_color = cube.face_color(FacePosition::Front);
        cube.rotate_face(FacePosition::Up, FaceRotationDirection::Clockwise);
        let left_top = top_row_coords(FacePosition::Left);
        for coord in left_top {
            assert_eq!(cube.color_at(coord, FacePosition::Left), Some(front_color));
        }
    }
}
