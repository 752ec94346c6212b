use std::collections::BTreeMap;
use std::fmt;

use twisty_common::{Face, Sticker};
use twisty_kernel::Cube;

/// Cube inspector for developer tooling.
///
/// Read-only queries against cube state for debugging and the CLI.
pub struct CubeInspector;

impl CubeInspector {
    /// Produce a summary of the cube state.
    pub fn summary(cube: &Cube) -> CubeSummary {
        CubeSummary {
            turns: cube.turns(),
            solved: cube.is_solved(),
            pending_events: cube.events().len(),
            state_hash: cube.state_hash(),
        }
    }

    /// Label counts and center sticker of one face.
    pub fn inspect_face(cube: &Cube, face: Face) -> FaceInfo {
        let grid = cube.face(face);
        let mut counts = BTreeMap::new();
        for sticker in grid.iter().flatten() {
            *counts.entry(*sticker).or_insert(0) += 1;
        }
        FaceInfo {
            face,
            center: grid[1][1],
            counts,
        }
    }

    /// Faces whose stickers do not all match.
    pub fn mixed_faces(cube: &Cube) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|f| !Self::inspect_face(cube, *f).is_uniform())
            .collect()
    }
}

/// Summary of cube state for the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSummary {
    pub turns: u64,
    pub solved: bool,
    pub pending_events: usize,
    pub state_hash: u64,
}

impl fmt::Display for CubeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cube: turns={} solved={} pending_events={} hash={:#018x}",
            self.turns, self.solved, self.pending_events, self.state_hash
        )
    }
}

/// Detailed info about a single face.
#[derive(Debug, Clone)]
pub struct FaceInfo {
    pub face: Face,
    pub center: Sticker,
    /// How many cells carry each label.
    pub counts: BTreeMap<Sticker, usize>,
}

impl FaceInfo {
    pub fn is_uniform(&self) -> bool {
        self.counts.len() == 1
    }
}

impl fmt::Display for FaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} center={}", self.face, self.center)?;
        for (sticker, count) in &self.counts {
            write!(f, " {sticker}x{count}")?;
        }
        Ok(())
    }
}
