use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six faces of the cube.
///
/// Declaration order is the storage and layout order: Up, Left, Front,
/// Right, Back, Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    /// All faces in layout order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Storage slot of this face, `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter notation used in command strings.
    pub fn notation(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }

    /// Parse a notation letter, case-insensitively.
    pub fn from_notation(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'L' => Some(Face::Left),
            'F' => Some(Face::Front),
            'R' => Some(Face::Right),
            'B' => Some(Face::Back),
            'D' => Some(Face::Down),
            _ => None,
        }
    }

    /// Color every sticker of this face carries on a solved cube.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Left => Color::Orange,
            Face::Front => Color::Green,
            Face::Right => Color::Red,
            Face::Back => Color::Blue,
            Face::Down => Color::Yellow,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
}

impl Color {
    /// Single-letter code (W, O, G, R, B, Y).
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Display color as 8-bit RGB.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::Orange => (0xFF, 0xA5, 0x00),
            Color::Green => (0x00, 0xFF, 0x00),
            Color::Red => (0xFF, 0x00, 0x00),
            Color::Blue => (0x00, 0x44, 0xFF),
            Color::Yellow => (0xFF, 0xFF, 0x00),
        }
    }
}

/// The label held by a single cell.
///
/// Solved cubes use colors; the numbered debug layout gives every cell a
/// unique number in `1..=54` so index mappings can be checked cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sticker {
    Color(Color),
    Number(u8),
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sticker::Color(c) => write!(f, "{}", c.code()),
            Sticker::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<Color> for Sticker {
    fn from(color: Color) -> Self {
        Sticker::Color(color)
    }
}

/// Rotation sense of a quarter turn, viewed facing the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// True for counter-clockwise (the `'` suffix in notation).
    pub fn is_inverted(self) -> bool {
        self == Direction::CounterClockwise
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A quarter turn of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub face: Face,
    pub direction: Direction,
}

impl Turn {
    pub fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    pub fn clockwise(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    pub fn counter_clockwise(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The turn that undoes this one.
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.notation())?;
        if self.direction.is_inverted() {
            write!(f, "'")?;
        }
        Ok(())
    }
}
