//! The 54-character cube-code serialization.

use std::fmt::Display;

use crate::color::Color;
use crate::cube::Cube;
use crate::error::{InvalidCubeReason, SolverError};
use crate::geometry::FacePosition;

/// The positions (0-indexed into the 54-character code) of the six center
/// stickers, one per face block.
const FACE_CENTER_INDICES: [usize; 6] = [4, 13, 22, 31, 40, 49];

const CODE_LENGTH: usize = 54;

/// A validated 54-character cube code: exactly `CODE_LENGTH` characters over
/// `{b,r,g,o,y,w}`, all six colors present in equal (9-each) distribution,
/// and six distinct center colors.
///
/// Construction validates; there is no way to hold an invalid `CubeCode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeCode {
    text: String,
}

impl CubeCode {
    /// Validates `text` against every validation rule and wraps it.
    pub fn parse(text: &str) -> Result<CubeCode, SolverError> {
        if text.len() != CODE_LENGTH {
            return Err(SolverError::InputMalformed(InvalidCubeReason::Length));
        }

        let mut counts = [0usize; 6];
        for c in text.chars() {
            let color = Color::try_from(c)?;
            counts[Color::ALL.iter().position(|&x| x == color).unwrap()] += 1;
        }

        if counts.iter().any(|&n| n == 0) {
            return Err(SolverError::InputMalformed(InvalidCubeReason::MissingColor));
        }
        if counts.iter().any(|&n| n != counts[0]) {
            return Err(SolverError::InputMalformed(InvalidCubeReason::UnevenDistribution));
        }

        let mut center_colors: Vec<Color> = Vec::with_capacity(6);
        for &idx in FACE_CENTER_INDICES.iter() {
            let c = text.chars().nth(idx).expect("length already validated");
            center_colors.push(Color::try_from(c)?);
        }
        let mut deduped = center_colors.clone();
        deduped.sort_by_key(|c| c.letter());
        deduped.dedup();
        if deduped.len() != center_colors.len() {
            return Err(SolverError::InputMalformed(InvalidCubeReason::DuplicateCenterColor));
        }

        Ok(CubeCode { text: text.to_string() })
    }

    /// The underlying 54-character text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for CubeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Decodes a validated `CubeCode` into a `Cube`.
///
/// Visits the six face blocks in the fixed order FRONT, RIGHT, BACK, LEFT,
/// UP, DOWN and, within each block, the nine coordinates of that face's
/// fixed row-major order, assigning each next character as the
/// color on that face of the cubelet at that coordinate.
pub fn decode(code: &CubeCode) -> Cube {
    let mut cube = Cube::empty();
    let mut chars = code.as_str().chars();
    for face in FacePosition::ALL {
        for coord in face.coords() {
            let c = chars.next().expect("CubeCode is exactly 54 characters");
            let color = Color::try_from(c).expect("CubeCode alphabet already validated");
            cube.cubelet_mut(coord).set_color(face, color);
        }
    }
    cube
}

/// Encodes `cube` into its `CubeCode`: for each face in the fixed order, for
/// each of its nine coordinates, emits the color on that face of the
/// cubelet there.
///
/// `encode(decode(s)) == s` for every valid `s`; `decode(encode(c)) == c`
/// structurally for any `c` reachable by face turns from a decoded input.
pub fn encode(cube: &Cube) -> CubeCode {
    let mut text = String::with_capacity(CODE_LENGTH);
    for face in FacePosition::ALL {
        for coord in face.coords() {
            let color = cube
                .color_at(coord, face)
                .expect("every face coordinate carries a sticker on its own face");
            text.push(color.letter());
        }
    }
    CubeCode { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FaceRotationDirection;

    const SOLVED: &str = "bbbbbbbbbrrrrrrrrrgggggggggoooooooooyyyyyyyyywwwwwwwww";

    #[test]
    fn encode_decode_round_trips_on_solved_code() {
        let code = CubeCode::parse(SOLVED).unwrap();
        let cube = decode(&code);
        assert_eq!(encode(&cube).as_str(), SOLVED);
    }

    #[test]
    fn decode_then_encode_is_identity_after_rotations() {
        let code = CubeCode::parse(SOLVED).unwrap();
        let mut cube = decode(&code);
        cube.rotate_face(FacePosition::Front, FaceRotationDirection::Clockwise);
        cube.rotate_face(FacePosition::Right, FaceRotationDirection::CounterClockwise);
        let round_tripped = decode(&encode(&cube));
        assert_eq!(round_tripped, cube);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = CubeCode::parse("bryogw").unwrap_err();
        assert_eq!(err, SolverError::InputMalformed(InvalidCubeReason::Length));
    }

    #[test]
    fn rejects_non_alphabet_character() {
        let bad = SOLVED.replacen('b', "!", 1);
        let err = CubeCode::parse(&bad).unwrap_err();
        assert_eq!(err, SolverError::InputMalformed(InvalidCubeReason::Alphabet));
    }

    #[test]
    fn rejects_missing_color() {
        // replace every yellow with white: white now has 18, yellow 0.
        let bad: String = SOLVED.chars().map(|c| if c == 'y' { 'w' } else { c }).collect();
        let err = CubeCode::parse(&bad).unwrap_err();
        assert_eq!(err, SolverError::InputMalformed(InvalidCubeReason::MissingColor));
    }

    #[test]
    fn rejects_uneven_distribution() {
        // swap a single blue sticker for red: now 8 blue, 10 red, all colors present.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars[0] = 'r';
        let bad: String = chars.into_iter().collect();
        let err = CubeCode::parse(&bad).unwrap_err();
        assert_eq!(err, SolverError::InputMalformed(InvalidCubeReason::UnevenDistribution));
    }

    #[test]
    fn rejects_duplicate_center_colors() {
        // make the RIGHT center (index 13) also blue, and a BLUE sticker (index 0) red to
        // preserve the 9-each distribution while duplicating a center color.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars[13] = 'b';
        chars[0] = 'r';
        let bad: String = chars.into_iter().collect();
        let err = CubeCode::parse(&bad).unwrap_err();
        assert_eq!(err, SolverError::InputMalformed(InvalidCubeReason::DuplicateCenterColor));
    }
}
