//! Move vocabulary shared by every solver stage: the named human algorithms
//! spec.md's per-stage rule tables call out, the bounded UP-alignment
//! primitive several stages use to bring an already-identified piece into
//! the position a named algorithm expects, and (for stages 4-6)
//! `search_until`, a bounded score-guided composition engine that plays the
//! role of those stages' case tables without hand-writing one match arm per
//! last-layer pattern.

use crate::cube::Cube;
use crate::error::SolverError;
use crate::geometry::{FacePosition, FaceRotationDirection};

/// An ordered list of face turns, applied left to right.
pub type Maneuver = Vec<(FacePosition, FaceRotationDirection)>;

use FaceRotationDirection::Clockwise as CW;
use FaceRotationDirection::CounterClockwise as CCW;

/// Parses a whitespace-free move list like `["F", "U", "R", "U'", "R'", "F'"]`
/// into a `Maneuver`. `'` suffixes counter-clockwise, `2` doubles the turn.
/// Panics on malformed tokens — only ever called on this module's own
/// hardcoded algorithm literals below, never on user input.
fn alg(tokens: &[&str]) -> Maneuver {
    let mut out = Vec::new();
    for token in tokens {
        let mut chars = token.chars();
        let face = match chars.next().expect("empty move token") {
            'F' => FacePosition::Front,
            'R' => FacePosition::Right,
            'B' => FacePosition::Back,
            'L' => FacePosition::Left,
            'U' => FacePosition::Up,
            'D' => FacePosition::Down,
            other => panic!("unknown face letter '{other}' in move token"),
        };
        match chars.as_str() {
            "" => out.push((face, CW)),
            "'" => out.push((face, CCW)),
            "2" => {
                out.push((face, CW));
                out.push((face, CW));
            }
            other => panic!("unknown move suffix '{other}' in token '{token}'"),
        }
    }
    out
}

/// A single turn of `face` in `direction`, as a one-move maneuver.
pub fn turn(face: FacePosition, direction: FaceRotationDirection) -> Maneuver {
    vec![(face, direction)]
}

/// Two turns of `face`: a half-turn, its own inverse.
pub fn double_turn(face: FacePosition) -> Maneuver {
    vec![(face, CW), (face, CW)]
}

/// The up-cross trigger used to form the cross on UP: `F U R U' R' F'`.
pub fn up_cross_trigger() -> Maneuver {
    alg(&["F", "U", "R", "U'", "R'", "F'"])
}

/// The sune trigger, used to orient UP corners in place in stage 5.
pub fn sune() -> Maneuver {
    alg(&["R", "U", "R'", "U", "R", "U2", "R'"])
}

/// The beginner's A-permutation: cycles the three UP corners other than
/// UP-BACK-LEFT (this algorithm's move set excludes LEFT turns, so that
/// corner never moves), leaving it fixed in place.
pub fn a_perm() -> Maneuver {
    alg(&["R'", "F", "R'", "B2", "R", "F'", "R'", "B2", "R2", "U'"])
}

/// The Ua-permutation: cycles three UP edges, fixing the BACK edge.
pub fn u_perm_a() -> Maneuver {
    alg(&["R", "U'", "R", "U", "R", "U", "R", "U'", "R'", "U'", "R2"])
}

/// The Ub-permutation: the mirror of `u_perm_a`, cycling the same three UP
/// edges the other way.
pub fn u_perm_b() -> Maneuver {
    alg(&["R2", "U", "R", "U", "R'", "U'", "R'", "U'", "R'", "U", "R'"])
}

/// Inserts a DOWN-layer corner sitting in the UP layer above its target
/// slot, DOWN-colored sticker facing the slot's "later" side face (the cube
/// symmetry generalization of the classic `R U R'`, stated here against
/// whichever face plays RIGHT's role for this slot).
pub fn corner_insert_facing_later(later: FacePosition) -> Maneuver {
    vec![(later, CW), (FacePosition::Up, CW), (later, CCW)]
}

/// As `corner_insert_facing_later`, but for a DOWN-colored sticker facing
/// the slot's "earlier" side face (the generalization of `F' U' F`).
pub fn corner_insert_facing_earlier(earlier: FacePosition) -> Maneuver {
    vec![(earlier, CCW), (FacePosition::Up, CCW), (earlier, CW)]
}

/// Evicts a DOWN corner sitting in its own slot with its DOWN sticker facing
/// UP, lifting it into the UP layer without disturbing any already-placed
/// piece (the generalization of `R U R' U'`).
pub fn corner_evict(later: FacePosition) -> Maneuver {
    vec![(later, CW), (FacePosition::Up, CW), (later, CCW), (FacePosition::Up, CCW)]
}

/// An F2L pair insert bringing a corner+edge pair in from the slot's
/// "later" (RIGHT-like) side: the cube symmetry generalization of
/// `U R U' R' U' F' U F`.
pub fn f2l_insert_from_later(earlier: FacePosition, later: FacePosition) -> Maneuver {
    vec![
        (FacePosition::Up, CW),
        (later, CW),
        (FacePosition::Up, CCW),
        (later, CCW),
        (FacePosition::Up, CCW),
        (earlier, CCW),
        (FacePosition::Up, CW),
        (earlier, CW),
    ]
}

/// An F2L pair insert bringing a corner+edge pair in from the slot's
/// "earlier" (LEFT-like) side: the generalization of `U' L' U L U F U' F'`.
pub fn f2l_insert_from_earlier(earlier: FacePosition, later: FacePosition) -> Maneuver {
    vec![
        (FacePosition::Up, CCW),
        (earlier, CCW),
        (FacePosition::Up, CW),
        (earlier, CW),
        (FacePosition::Up, CW),
        (later, CW),
        (FacePosition::Up, CCW),
        (later, CCW),
    ]
}

/// Applies `maneuver` to `cube`, recording each turn onto `output` in
/// execution order.
pub fn apply_and_record(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    maneuver: &[(FacePosition, FaceRotationDirection)],
) {
    for &(face, direction) in maneuver {
        cube.rotate_face(face, direction);
        output.push((face, direction));
    }
}

/// Turns UP clockwise zero to three times, stopping as soon as `aligned`
/// holds, and leaves it turned that many times if it never does. Every
/// stage past stage 1 uses this to spin an already-identified piece into
/// the one position its next named algorithm expects — it is never used to
/// search for *which* algorithm to apply, only to rotate the fixed UP layer
/// into the case a prior classification already decided.
pub(crate) fn align_up_until(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    aligned: impl Fn(&Cube) -> bool,
) -> Result<(), SolverError> {
    for _ in 0..4 {
        if aligned(cube) {
            return Ok(());
        }
        apply_and_record(cube, output, &turn(FacePosition::Up, CW));
    }
    if aligned(cube) {
        Ok(())
    } else {
        Err(SolverError::ProgrammerError(
            "no UP alignment satisfies the expected case — classification or move table is broken".into(),
        ))
    }
}

/// Every quarter turn except DOWN's, as one-move maneuvers: the move
/// vocabulary for any stage past stage 2, which must never disturb the
/// already-solved DOWN layer.
pub(crate) fn quarter_turns_excluding_down() -> Vec<Maneuver> {
    let mut set = Vec::new();
    for face in [FacePosition::Front, FacePosition::Right, FacePosition::Back, FacePosition::Left, FacePosition::Up] {
        set.push(turn(face, CW));
        set.push(turn(face, CCW));
    }
    set
}

fn apply_maneuver(cube: &mut Cube, maneuver: &[(FacePosition, FaceRotationDirection)]) {
    for &(face, direction) in maneuver {
        cube.rotate_face(face, direction);
    }
}

/// Searches compositions of `moves`, shortest first, for one that either
/// reaches `goal` or strictly improves `score` over `cube`'s current value.
/// Tries every length-1 composition before any length-2 one, and so on up
/// to `max_depth`, returning the first (in `moves` order) that qualifies.
fn search_composition(
    cube: &Cube,
    goal: &dyn Fn(&Cube) -> bool,
    score: fn(&Cube) -> i64,
    moves: &[Maneuver],
    max_depth: usize,
) -> Option<Maneuver> {
    let baseline = score(cube);
    (1..=max_depth).find_map(|depth| search_exact_depth(cube, goal, score, moves, depth, baseline))
}

fn search_exact_depth(
    cube: &Cube,
    goal: &dyn Fn(&Cube) -> bool,
    score: fn(&Cube) -> i64,
    moves: &[Maneuver],
    depth: usize,
    baseline: i64,
) -> Option<Maneuver> {
    for m in moves {
        let mut next = cube.clone();
        apply_maneuver(&mut next, m);
        if depth == 1 {
            let next_score = score(&next);
            if (goal(&next) && next_score >= baseline) || next_score > baseline {
                return Some(m.clone());
            }
        } else if let Some(rest) = search_exact_depth(&next, goal, score, moves, depth - 1, baseline) {
            let mut seq = m.clone();
            seq.extend(rest);
            return Some(seq);
        }
    }
    None
}

/// Drives `cube` toward `goal` by repeatedly committing to the shortest
/// composition of `moves` (up to `max_depth` entries) that either reaches
/// `goal` outright or strictly improves `score`, for up to `max_rounds`
/// commits. `score` should dominate any earlier stage's invariant over the
/// current stage's own progress measure (see each stage's `score` function)
/// so that a composition which would undo prior work never looks like an
/// improvement. Fails with `ProgrammerError` if no round finds an improving
/// composition, or if `goal` still does not hold after `max_rounds` commits
/// — the stage's catalogue or scoring is incomplete.
pub(crate) fn search_until(
    cube: &mut Cube,
    output: &mut Vec<(FacePosition, FaceRotationDirection)>,
    goal: impl Fn(&Cube) -> bool,
    score: fn(&Cube) -> i64,
    moves: &[Maneuver],
    max_depth: usize,
    max_rounds: usize,
) -> Result<(), SolverError> {
    if goal(cube) {
        return Ok(());
    }
    for _round in 0..max_rounds {
        match search_composition(cube, &goal, score, moves, max_depth) {
            Some(maneuver) => {
                apply_and_record(cube, output, &maneuver);
                if goal(cube) {
                    return Ok(());
                }
            }
            None => {
                return Err(SolverError::ProgrammerError(
                    "no move composition improved the stage score within the search bound".into(),
                ));
            }
        }
    }
    if goal(cube) {
        Ok(())
    } else {
        Err(SolverError::ProgrammerError(
            "stage goal not reached within the round bound".into(),
        ))
    }
}
