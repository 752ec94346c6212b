use serde::{Deserialize, Serialize};
use twisty_common::{Direction, Face, Sticker, Turn};

use crate::rotate::rotate;

/// Side length of every face.
pub const SIDE: usize = 3;

/// The 3x3 sticker grid of one face, row-major as seen facing it.
pub type FaceGrid = [[Sticker; SIDE]; SIDE];

type Line = [Sticker; SIDE];

/// Starting arrangement of a freshly built cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Every face uniformly its solved color.
    #[default]
    Solved,
    /// Every cell numbered 1..=54, row-major per face, faces in layout order.
    Numbered,
}

/// An event record produced by every turn applied to the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeEvent {
    /// The `seq`-th turn (1-based) was applied.
    Turned { seq: u64, turn: Turn },
}

/// The authoritative cube state.
///
/// Faces are stored in a fixed array indexed by `Face`, so a face can never
/// be missing. Every face operation first rotates the face itself, then
/// copies the affected neighbor edges into stack buffers, and only then
/// writes them back. Neighbors share edges, so reading after a write would
/// corrupt the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cube {
    faces: [FaceGrid; 6],
    turns: u64,
    /// Append-only log of applied turns.
    #[serde(skip)]
    event_log: Vec<CubeEvent>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube.
    pub fn new() -> Self {
        Self::with_layout(Layout::Solved)
    }

    /// A cube whose cells are numbered 1..=54, for checking index mappings.
    pub fn numbered() -> Self {
        Self::with_layout(Layout::Numbered)
    }

    pub fn with_layout(layout: Layout) -> Self {
        let mut faces = [[[Sticker::Number(0); SIDE]; SIDE]; 6];
        for face in Face::ALL {
            let grid = &mut faces[face.index()];
            for (row, cells) in grid.iter_mut().enumerate() {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = match layout {
                        Layout::Solved => Sticker::Color(face.solved_color()),
                        Layout::Numbered => {
                            let n = face.index() * SIDE * SIDE + row * SIDE + col + 1;
                            Sticker::Number(n as u8)
                        }
                    };
                }
            }
        }
        Self {
            faces,
            turns: 0,
            event_log: Vec::new(),
        }
    }

    /// Sticker grid of one face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// All six grids in layout order (Up, Left, Front, Right, Back, Down).
    pub fn faces(&self) -> &[FaceGrid; 6] {
        &self.faces
    }

    /// Number of turns applied through `apply`.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[CubeEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<CubeEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Every face shows a single label.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| {
            let first = grid[0][0];
            grid.iter().flatten().all(|cell| *cell == first)
        })
    }

    /// Apply one turn and record it.
    pub fn apply(&mut self, turn: Turn) {
        tracing::trace!(%turn, seq = self.turns + 1, "applying turn");
        match turn.face {
            Face::Front => self.rotate_front(turn.direction),
            Face::Right => self.rotate_right(turn.direction),
            Face::Up => self.rotate_up(turn.direction),
            Face::Back => self.rotate_back(turn.direction),
            Face::Left => self.rotate_left(turn.direction),
            Face::Down => self.rotate_down(turn.direction),
        }
        self.turns += 1;
        self.event_log.push(CubeEvent::Turned {
            seq: self.turns,
            turn,
        });
    }

    /// Rebuild a cube from a starting layout and a sequence of events.
    pub fn replay(layout: Layout, events: &[CubeEvent]) -> Self {
        let mut cube = Self::with_layout(layout);
        for event in events {
            match event {
                CubeEvent::Turned { turn, .. } => cube.apply(*turn),
            }
        }
        cube
    }

    /// Deterministic FNV-1a hash of the faces, for quick state comparison.
    /// The turn counter and event log are not part of the hash.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |byte: u8| {
            h ^= byte as u64;
            h = h.wrapping_mul(0x0100_0000_01b3);
        };
        for cell in self.faces.iter().flatten().flatten() {
            match cell {
                Sticker::Color(c) => {
                    mix(0);
                    mix(*c as u8);
                }
                Sticker::Number(n) => {
                    mix(1);
                    mix(*n);
                }
            }
        }
        h
    }

    /// Turn the front face; edges cycle through up, right, down and left.
    pub fn rotate_front(&mut self, direction: Direction) {
        let inv = direction.is_inverted();
        rotate(self.grid_mut(Face::Front), direction);

        let (left, right, up, down) = if inv {
            (
                self.row(Face::Up, 2),
                self.row(Face::Down, 0),
                self.column(Face::Right, 0),
                self.column(Face::Left, 2),
            )
        } else {
            (
                self.row(Face::Down, 0),
                self.row(Face::Up, 2),
                self.column(Face::Left, 2),
                self.column(Face::Right, 0),
            )
        };

        for i in 0..SIDE {
            let k = if inv { 2 - i } else { i };
            self.grid_mut(Face::Left)[i][2] = left[k];
            self.grid_mut(Face::Right)[i][0] = right[k];
            self.grid_mut(Face::Up)[2][i] = up[if inv { i } else { 2 - i }];
            self.grid_mut(Face::Down)[0][k] = down[2 - i];
        }
    }

    /// Turn the right face; edges cycle through up, front, down and back.
    pub fn rotate_right(&mut self, direction: Direction) {
        let inv = direction.is_inverted();
        rotate(self.grid_mut(Face::Right), direction);

        let (up, front, back, down) = if inv {
            (
                self.column(Face::Back, 0),
                self.column(Face::Up, 2),
                self.column(Face::Down, 2),
                self.column(Face::Front, 2),
            )
        } else {
            (
                self.column(Face::Front, 2),
                self.column(Face::Down, 2),
                self.column(Face::Up, 2),
                self.column(Face::Back, 0),
            )
        };

        for i in 0..SIDE {
            self.grid_mut(Face::Up)[i][2] = up[if inv { 2 - i } else { i }];
            self.grid_mut(Face::Front)[i][2] = front[i];
            self.grid_mut(Face::Back)[i][0] = back[2 - i];
            self.grid_mut(Face::Down)[i][2] = down[if inv { i } else { 2 - i }];
        }
    }

    /// Turn the up face; the top rows of the four side faces cycle.
    pub fn rotate_up(&mut self, direction: Direction) {
        rotate(self.grid_mut(Face::Up), direction);
        self.cycle_rows(0, direction.is_inverted());
    }

    /// Turn the back face; edges cycle through up, left, down and right.
    pub fn rotate_back(&mut self, direction: Direction) {
        let inv = direction.is_inverted();
        rotate(self.grid_mut(Face::Back), direction);

        let (left, right, up, down) = if inv {
            (
                self.row(Face::Down, 2),
                self.row(Face::Up, 0),
                self.column(Face::Left, 0),
                self.column(Face::Right, 2),
            )
        } else {
            (
                self.row(Face::Up, 0),
                self.row(Face::Down, 2),
                self.column(Face::Right, 2),
                self.column(Face::Left, 0),
            )
        };

        for i in 0..SIDE {
            let side = if inv { i } else { 2 - i };
            let cap = if inv { 2 - i } else { i };
            self.grid_mut(Face::Left)[i][0] = left[side];
            self.grid_mut(Face::Right)[i][2] = right[side];
            self.grid_mut(Face::Up)[0][i] = up[cap];
            self.grid_mut(Face::Down)[2][i] = down[cap];
        }
    }

    /// Turn the left face; edges cycle through up, back, down and front.
    pub fn rotate_left(&mut self, direction: Direction) {
        let inv = direction.is_inverted();
        rotate(self.grid_mut(Face::Left), direction);

        let (up, front, back, down) = if inv {
            (
                self.column(Face::Front, 0),
                self.column(Face::Down, 0),
                self.column(Face::Up, 0),
                self.column(Face::Back, 2),
            )
        } else {
            (
                self.column(Face::Back, 2),
                self.column(Face::Up, 0),
                self.column(Face::Down, 0),
                self.column(Face::Front, 0),
            )
        };

        for i in 0..SIDE {
            self.grid_mut(Face::Up)[i][0] = up[if inv { i } else { 2 - i }];
            self.grid_mut(Face::Front)[i][0] = front[i];
            self.grid_mut(Face::Back)[i][2] = back[2 - i];
            self.grid_mut(Face::Down)[i][0] = down[if inv { 2 - i } else { i }];
        }
    }

    /// Turn the down face; the bottom rows of the four side faces cycle.
    pub fn rotate_down(&mut self, direction: Direction) {
        rotate(self.grid_mut(Face::Down), direction);
        // Seen from below, the side rows travel the opposite way to an up turn.
        self.cycle_rows(2, !direction.is_inverted());
    }

    /// Move row `row` of the side faces one step around the cube.
    ///
    /// Forward: right -> front -> left -> back -> right.
    /// Backward: left -> front -> right -> back -> left.
    fn cycle_rows(&mut self, row: usize, backward: bool) {
        let left = self.row(Face::Left, row);
        let front = self.row(Face::Front, row);
        let right = self.row(Face::Right, row);
        let back = self.row(Face::Back, row);

        let (new_left, new_front, new_right, new_back) = if backward {
            (back, left, front, right)
        } else {
            (front, right, back, left)
        };

        self.grid_mut(Face::Left)[row] = new_left;
        self.grid_mut(Face::Front)[row] = new_front;
        self.grid_mut(Face::Right)[row] = new_right;
        self.grid_mut(Face::Back)[row] = new_back;
    }

    fn grid_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    fn row(&self, face: Face, row: usize) -> Line {
        self.faces[face.index()][row]
    }

    fn column(&self, face: Face, col: usize) -> Line {
        let grid = &self.faces[face.index()];
        [grid[0][col], grid[1][col], grid[2][col]]
    }
}
