use std::fmt::Display;

use crate::error::{InvalidCubeReason, SolverError};

/// One of the six colors that can appear on a sticker.
///
/// Each color appears on exactly one face in the solved state; the color of a
/// face is defined as the color of its center sticker.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
    White,
}

impl Color {
    /// All six colors, in a fixed (arbitrary but stable) order.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Yellow,
        Color::White,
    ];

    /// The single lower-case letter used in the cube-code alphabet.
    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Orange => 'o',
            Color::Yellow => 'y',
            Color::White => 'w',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Color {
    type Error = SolverError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'b' => Ok(Color::Blue),
            'r' => Ok(Color::Red),
            'g' => Ok(Color::Green),
            'o' => Ok(Color::Orange),
            'y' => Ok(Color::Yellow),
            'w' => Ok(Color::White),
            _ => Err(SolverError::InputMalformed(InvalidCubeReason::Alphabet)),
        }
    }
}
