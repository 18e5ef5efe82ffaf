//! Layer-by-layer solver for the 3x3x3 Rubik's cube: parse a 54-character
//! cube code, solve it up to any of the six layer-by-layer stages, and get
//! back the sequence of face turns that gets there.

pub mod codec;
pub mod color;
mod cubelet;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod solver;

#[cfg(feature = "stats")]
pub mod stats;

pub use codec::{decode, encode, CubeCode};
pub use color::Color;
pub use cube::Cube;
pub use error::{InvalidCubeReason, SolverError};
pub use geometry::{FacePosition, FaceRotationDirection};
pub use solver::{solve, SolveStage, Solver};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    /// `Cube` and `Solver` hold no interior mutability or non-thread-safe
    /// handles, so independent cubes may be solved from independent threads
    /// (spec.md §5).
    #[test]
    fn core_types_are_send_and_sync() {
        assert_send_sync::<Cube>();
        assert_send_sync::<Solver>();
        assert_send_sync::<Color>();
        assert_send_sync::<SolverError>();
    }
}
