//! Color-independent geometry: face positions, rotation directions, the
//! coordinate system, and the fixed per-face coordinate/transform tables that
//! drive `Cube::rotate_face` and the codec's serialization order.

use std::fmt::Display;

/// A point in the cube's coordinate system, `x,y,z` each in `0..=2`.
/// `x`: LEFT(0)→RIGHT(2). `y`: UP(0)→DOWN(2). `z`: FRONT(0)→BACK(2).
pub type Coord = (usize, usize, usize);

/// One of the six faces of the cube.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FacePosition {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl FacePosition {
    /// All six faces, in the order the cube-code alphabet lists face blocks:
    /// FRONT, RIGHT, BACK, LEFT, UP, DOWN.
    pub const ALL: [FacePosition; 6] = [
        FacePosition::Front,
        FacePosition::Right,
        FacePosition::Back,
        FacePosition::Left,
        FacePosition::Up,
        FacePosition::Down,
    ];

    /// The coordinate of this face's center cubelet.
    pub fn center_coord(self) -> Coord {
        match self {
            FacePosition::Front => (1, 1, 0),
            FacePosition::Back => (1, 1, 2),
            FacePosition::Left => (0, 1, 1),
            FacePosition::Right => (2, 1, 1),
            FacePosition::Up => (1, 0, 1),
            FacePosition::Down => (1, 2, 1),
        }
    }

    /// The nine coordinates belonging to this face, in the fixed row-major
    /// order that defines the cube-code's serialization order.
    pub fn coords(self) -> [Coord; 9] {
        match self {
            FacePosition::Front => [
                (0, 0, 0), (1, 0, 0), (2, 0, 0),
                (0, 1, 0), (1, 1, 0), (2, 1, 0),
                (0, 2, 0), (1, 2, 0), (2, 2, 0),
            ],
            FacePosition::Right => [
                (2, 0, 0), (2, 0, 1), (2, 0, 2),
                (2, 1, 0), (2, 1, 1), (2, 1, 2),
                (2, 2, 0), (2, 2, 1), (2, 2, 2),
            ],
            FacePosition::Back => [
                (2, 0, 2), (1, 0, 2), (0, 0, 2),
                (2, 1, 2), (1, 1, 2), (0, 1, 2),
                (2, 2, 2), (1, 2, 2), (0, 2, 2),
            ],
            FacePosition::Left => [
                (0, 0, 2), (0, 0, 1), (0, 0, 0),
                (0, 1, 2), (0, 1, 1), (0, 1, 0),
                (0, 2, 2), (0, 2, 1), (0, 2, 0),
            ],
            FacePosition::Up => [
                (0, 0, 2), (1, 0, 2), (2, 0, 2),
                (0, 0, 1), (1, 0, 1), (2, 0, 1),
                (0, 0, 0), (1, 0, 0), (2, 0, 0),
            ],
            FacePosition::Down => [
                (0, 2, 0), (1, 2, 0), (2, 2, 0),
                (0, 2, 1), (1, 2, 1), (2, 2, 1),
                (0, 2, 2), (1, 2, 2), (2, 2, 2),
            ],
        }
    }

    /// The four faces adjacent to this one (excludes `self` and its
    /// opposite), in no particular order. Useful for predicates that scan
    /// "the side faces".
    pub fn side_faces(self) -> [FacePosition; 4] {
        use FacePosition::*;
        match self {
            Up | Down => [Front, Right, Back, Left],
            Front | Back => [Up, Right, Down, Left],
            Left | Right => [Up, Front, Down, Back],
        }
    }
}

impl Display for FacePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FacePosition::Front => "F",
            FacePosition::Right => "R",
            FacePosition::Back => "B",
            FacePosition::Left => "L",
            FacePosition::Up => "U",
            FacePosition::Down => "D",
        };
        write!(f, "{s}")
    }
}

/// The direction a face is turned, as seen looking at the named face from
/// outside the cube.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FaceRotationDirection {
    Clockwise,
    CounterClockwise,
}

impl FaceRotationDirection {
    pub fn opposite(self) -> FaceRotationDirection {
        match self {
            FaceRotationDirection::Clockwise => FaceRotationDirection::CounterClockwise,
            FaceRotationDirection::CounterClockwise => FaceRotationDirection::Clockwise,
        }
    }
}

impl Display for FaceRotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceRotationDirection::Clockwise => Ok(()),
            FaceRotationDirection::CounterClockwise => write!(f, "'"),
        }
    }
}

/// How a cubelet's stickers are relabeled when the cubelet is carried by a
/// face turn.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CubeletRotationDirection {
    /// UP -> RIGHT -> DOWN -> LEFT -> UP (FRONT/BACK fixed).
    FlipRightward,
    /// Inverse of `FlipRightward`.
    FlipLeftward,
    /// UP -> FRONT -> DOWN -> BACK -> UP (LEFT/RIGHT fixed).
    FlipForward,
    /// Inverse of `FlipForward`.
    FlipBackward,
    /// FRONT -> LEFT -> BACK -> RIGHT -> FRONT (UP/DOWN fixed).
    SpinLeftward,
    /// Inverse of `SpinLeftward`.
    SpinRightward,
}

/// The coordinate transform `T` for `(face, direction)`,
/// applied only to the nine coordinates on `face` (identity elsewhere).
pub fn coordinate_transform(face: FacePosition, direction: FaceRotationDirection) -> fn(Coord) -> Coord {
    use FacePosition::*;
    use FaceRotationDirection::*;
    match (face, direction) {
        (Front, Clockwise) | (Back, CounterClockwise) => |(x, y, z)| (2 - y, x, z),
        (Front, CounterClockwise) | (Back, Clockwise) => |(x, y, z)| (y, 2 - x, z),
        (Left, Clockwise) | (Right, CounterClockwise) => |(x, y, z)| (x, 2 - z, y),
        (Left, CounterClockwise) | (Right, Clockwise) => |(x, y, z)| (x, z, 2 - y),
        (Up, Clockwise) | (Down, CounterClockwise) => |(x, y, z)| (z, y, 2 - x),
        (Up, CounterClockwise) | (Down, Clockwise) => |(x, y, z)| (2 - z, y, x),
    }
}

/// The cubelet self-rotation applied to every cubelet moved by `(face,
/// direction)`.
pub fn cubelet_rotation(face: FacePosition, direction: FaceRotationDirection) -> CubeletRotationDirection {
    use CubeletRotationDirection::*;
    use FacePosition::*;
    use FaceRotationDirection::*;
    match (face, direction) {
        (Front, Clockwise) | (Back, CounterClockwise) => FlipRightward,
        (Front, CounterClockwise) | (Back, Clockwise) => FlipLeftward,
        (Left, Clockwise) | (Right, CounterClockwise) => FlipForward,
        (Left, CounterClockwise) | (Right, Clockwise) => FlipBackward,
        (Up, Clockwise) | (Down, CounterClockwise) => SpinLeftward,
        (Up, CounterClockwise) | (Down, Clockwise) => SpinRightward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_coords_are_nine_distinct_points_on_the_fixed_plane() {
        for face in FacePosition::ALL {
            let coords = face.coords();
            let mut seen = coords.to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 9, "{face} coords must be 9 distinct points");
        }
    }

    #[test]
    fn transform_is_a_bijection_on_the_face() {
        for face in FacePosition::ALL {
            for dir in [FaceRotationDirection::Clockwise, FaceRotationDirection::CounterClockwise] {
                let t = coordinate_transform(face, dir);
                let coords = face.coords();
                let mut mapped: Vec<Coord> = coords.iter().map(|&c| t(c)).collect();
                mapped.sort();
                let mut original = coords.to_vec();
                original.sort();
                assert_eq!(mapped, original, "{face:?} {dir:?} transform must permute the face");
            }
        }
    }

    #[test]
    fn transform_applied_four_times_is_identity() {
        for face in FacePosition::ALL {
            for dir in [FaceRotationDirection::Clockwise, FaceRotationDirection::CounterClockwise] {
                let t = coordinate_transform(face, dir);
                for &c in face.coords().iter() {
                    let mut p = c;
                    for _ in 0..4 {
                        p = t(p);
                    }
                    assert_eq!(p, c);
                }
            }
        }
    }
}
