//! The layer-by-layer solver six ordered stages, each advancing
//! the cube from the previous stage's invariant to its own, emitting the
//! face turns it applies.

mod moves;
mod stage1_down_cross;
mod stage2_down_layer;
mod stage3_middle_layer;
mod stage4_up_cross;
mod stage5_up_face;
mod stage6_permute;

use crate::cube::Cube;
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

/// The six stages of the layer-by-layer method , in solving
/// order. Each variant names the invariant that holds once the stage is
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStage {
    /// DOWN's four edges form a cross: `Cube::has_down_cross`.
    DownCross,
    /// The whole DOWN layer (cross and corners) is solved: `Cube::is_down_layer_solved`.
    DownLayer,
    /// DOWN layer and the four equatorial edges are solved: `Cube::is_middle_layer_solved`.
    DownAndMiddleLayers,
    /// The above, plus UP's cross: `Cube::has_up_cross`.
    DownMidLayersAndUpCross,
    /// The above, plus UP's face uniformly UP's color: `Cube::is_up_face_solved`.
    DownMidLayersUpFace,
    /// The cube is fully solved: `Cube::is_fully_solved`.
    Solved,
}

impl SolveStage {
    /// All six stages, in solving order.
    pub const ALL: [SolveStage; 6] = [
        SolveStage::DownCross,
        SolveStage::DownLayer,
        SolveStage::DownAndMiddleLayers,
        SolveStage::DownMidLayersAndUpCross,
        SolveStage::DownMidLayersUpFace,
        SolveStage::Solved,
    ];

    /// Whether `cube` already satisfies this stage's invariant.
    pub fn is_satisfied_by(self, cube: &Cube) -> bool {
        match self {
            SolveStage::DownCross => cube.has_down_cross(),
            SolveStage::DownLayer => cube.is_down_layer_solved(),
            SolveStage::DownAndMiddleLayers => cube.is_down_layer_solved() && cube.is_middle_layer_solved(),
            SolveStage::DownMidLayersAndUpCross => {
                cube.is_down_layer_solved() && cube.is_middle_layer_solved() && cube.has_up_cross()
            }
            SolveStage::DownMidLayersUpFace => {
                cube.is_down_layer_solved()
                    && cube.is_middle_layer_solved()
                    && cube.has_up_cross()
                    && cube.is_up_face_solved()
            }
            SolveStage::Solved => cube.is_fully_solved(),
        }
    }
}

/// Solves `cube` up to (and including) `target_stage`, returning the face
/// turns applied, in order. `cube` is left in the solved state for
/// `target_stage`.
///
/// Stages before `target_stage` run first, in order, each assuming the
/// previous stage's invariant already holds (skipped instantly if it
/// already does).
pub fn solve(cube: &mut Cube, target_stage: SolveStage) -> Result<Vec<(FacePosition, FaceRotationDirection)>, SolverError> {
    let mut output = Vec::new();

    for stage in SolveStage::ALL {
        if stage.is_satisfied_by(cube) {
            log::debug!("{stage:?} already satisfied, skipping");
        } else {
            log::debug!("solving {stage:?}");
            run_stage(stage, cube, &mut output)?;
        }
        if stage == target_stage {
            break;
        }
    }

    Ok(output)
}

fn run_stage(
    stage: SolveStage,
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
) -> Result<(), SolverError> {
    match stage {
        SolveStage::DownCross => stage1_down_cross::run(cube, output),
        SolveStage::DownLayer => stage2_down_layer::run(cube, output),
        SolveStage::DownAndMiddleLayers => stage3_middle_layer::run(cube, output),
        SolveStage::DownMidLayersAndUpCross => stage4_up_cross::run(cube, output),
        SolveStage::DownMidLayersUpFace => stage5_up_face::run(cube, output),
        SolveStage::Solved => stage6_permute::run(cube, output),
    }
}

/// A one-shot solver invocation : owns a working copy of the
/// cube it was constructed with and the list of face turns produced so far.
/// The caller's original cube/text is never mutated — construction decodes
/// or clones into the working copy.
pub struct Solver {
    cube: Cube,
    stage: SolveStage,
}

impl Solver {
    /// Constructs a solver over an already-decoded `Cube`, targeting
    /// `stage`. The `cube` argument is cloned into the solver's working copy.
    pub fn new(cube: &Cube, stage: SolveStage) -> Solver {
        Solver { cube: cube.clone(), stage }
    }

    /// Constructs a solver by decoding `cube_text` , targeting
    /// `stage`.
    pub fn from_code(cube_text: &str, stage: SolveStage) -> Result<Solver, SolverError> {
        let code = crate::codec::CubeCode::parse(cube_text)?;
        Ok(Solver::new(&crate::codec::decode(&code), stage))
    }

    /// Runs the solver's stages (1..=target, skipping any already satisfied)
    /// and returns the ordered list of face turns. For a cube already
    /// satisfying the requested stage's invariant, the list is empty.
    pub fn get_solution(&mut self) -> Result<Vec<(FacePosition, FaceRotationDirection)>, SolverError> {
        solve(&mut self.cube, self.stage)
    }

    /// The solver's working copy, reflecting every turn returned so far by
    /// `get_solution`.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
}
