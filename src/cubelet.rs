//! A single unit piece of the cube.

use crate::color::Color;
use crate::geometry::{CubeletRotationDirection, FacePosition};

/// One of the 27 unit pieces making up the cube.
///
/// Holds a partial `face -> color` map: corners carry 3 stickers, edges 2,
/// centers 1, and the single interior piece carries none. Unused face slots
/// are `None` — a never-visible face has no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cubelet {
    faces: [Option<Color>; 6],
}

impl Cubelet {
    /// An uncolored cubelet (all faces empty).
    pub fn new() -> Cubelet {
        Cubelet { faces: [None; 6] }
    }

    fn index(face: FacePosition) -> usize {
        FacePosition::ALL.iter().position(|&f| f == face).expect("FacePosition::ALL is exhaustive")
    }

    /// The color on `face`, or `None` if this cubelet has no sticker there.
    pub fn color_of(&self, face: FacePosition) -> Option<Color> {
        self.faces[Self::index(face)]
    }

    /// Assigns the color on `face`.
    pub fn set_color(&mut self, face: FacePosition, color: Color) {
        self.faces[Self::index(face)] = Some(color);
    }

    /// How many stickers this cubelet carries (0, 1, 2, or 3).
    pub fn sticker_count(&self) -> usize {
        self.faces.iter().filter(|c| c.is_some()).count()
    }

    /// Applies one quarter-turn step of `direction` to this cubelet's
    /// stickers: relabels face slots via the corresponding 4-cycle, without
    /// adding or removing any sticker. Two calls with the same direction
    /// equal a 180-degree re-labeling.
    pub fn rotate(&mut self, direction: CubeletRotationDirection) {
        use CubeletRotationDirection::*;
        use FacePosition::*;
        let cycle: [FacePosition; 4] = match direction {
            FlipRightward => [Up, Right, Down, Left],
            FlipLeftward => [Up, Left, Down, Right],
            FlipForward => [Up, Front, Down, Back],
            FlipBackward => [Up, Back, Down, Front],
            SpinLeftward => [Front, Left, Back, Right],
            SpinRightward => [Front, Right, Back, Left],
        };
        let old = self.faces;
        for i in 0..4 {
            let from = cycle[(i + 3) % 4];
            let to = cycle[i];
            self.faces[Self::index(to)] = old[Self::index(from)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cubelet_has_no_stickers() {
        let c = Cubelet::new();
        for face in FacePosition::ALL {
            assert_eq!(c.color_of(face), None);
        }
        assert_eq!(c.sticker_count(), 0);
    }

    #[test]
    fn rotate_only_relabels_does_not_add_or_remove_stickers() {
        let mut c = Cubelet::new();
        c.set_color(FacePosition::Up, Color::White);
        c.set_color(FacePosition::Front, Color::Orange);
        assert_eq!(c.sticker_count(), 2);
        c.rotate(CubeletRotationDirection::FlipRightward);
        assert_eq!(c.sticker_count(), 2);
    }

    #[test]
    fn four_rotations_of_the_same_direction_restore_the_cubelet() {
        for direction in [
            CubeletRotationDirection::FlipRightward,
            CubeletRotationDirection::FlipLeftward,
            CubeletRotationDirection::FlipForward,
            CubeletRotationDirection::FlipBackward,
            CubeletRotationDirection::SpinLeftward,
            CubeletRotationDirection::SpinRightward,
        ] {
            let mut c = Cubelet::new();
            for (i, face) in FacePosition::ALL.iter().enumerate() {
                c.set_color(*face, Color::ALL[i]);
            }
            let original = c;
            for _ in 0..4 {
                c.rotate(direction);
            }
            assert_eq!(c, original);
        }
    }

    #[test]
    fn flip_rightward_moves_up_sticker_to_right() {
        let mut c = Cubelet::new();
        c.set_color(FacePosition::Up, Color::White);
        c.rotate(CubeletRotationDirection::FlipRightward);
        assert_eq!(c.color_of(FacePosition::Right), Some(Color::White));
        assert_eq!(c.color_of(FacePosition::Up), None);
    }

    #[test]
    fn spin_leftward_moves_front_sticker_to_left() {
        let mut c = Cubelet::new();
        c.set_color(FacePosition::Front, Color::Orange);
        c.rotate(CubeletRotationDirection::SpinLeftward);
        assert_eq!(c.color_of(FacePosition::Left), Some(Color::Orange));
        assert_eq!(c.color_of(FacePosition::Front), None);
    }
}
