use twisty_common::{Face, Sticker};
use twisty_kernel::{Cube, FaceGrid};

/// Left margin that puts the Up and Down faces above and below Front.
const INDENT: &str = "        ";
const RULE: &str = "         ------";
const BLOCK: &str = "██";

/// Side faces in the order they are unfolded around the middle band.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads cube state and produces output. It never mutates the
/// cube, which is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    fn render(&self, cube: &Cube) -> Self::Output;
}

/// How each cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Color codes doubled (`WW`) or numbers right-aligned in two columns.
    #[default]
    Plain,
    /// Truecolor ANSI blocks. Numbered stickers fall back to plain labels.
    Ansi,
}

/// Draws the unfolded cube:
///
/// ```text
///         |UUUUUU|
///          ------
/// |LLLLLL||FFFFFF||RRRRRR||BBBBBB|
///          ------
///         |DDDDDD|
/// ```
#[derive(Debug, Default)]
pub struct NetTextRenderer {
    palette: Palette,
}

impl NetTextRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    fn cell(&self, sticker: Sticker) -> String {
        match (self.palette, sticker) {
            (Palette::Ansi, Sticker::Color(c)) => {
                let (r, g, b) = c.rgb();
                format!("\x1b[38;2;{r};{g};{b}m{BLOCK}\x1b[0m")
            }
            (_, Sticker::Color(c)) => format!("{0}{0}", c.code()),
            (_, Sticker::Number(n)) => format!("{n:>2}"),
        }
    }

    fn row(&self, grid: &FaceGrid, row: usize) -> String {
        let cells: String = grid[row].iter().map(|s| self.cell(*s)).collect();
        format!("|{cells}|")
    }

    fn cap(&self, out: &mut String, grid: &FaceGrid) {
        for row in 0..grid.len() {
            out.push_str(INDENT);
            out.push_str(&self.row(grid, row));
            out.push('\n');
        }
    }
}

impl Renderer for NetTextRenderer {
    type Output = String;

    fn render(&self, cube: &Cube) -> String {
        let mut out = String::new();
        self.cap(&mut out, cube.face(Face::Up));
        out.push_str(RULE);
        out.push('\n');

        for row in 0..cube.face(Face::Front).len() {
            for face in BAND {
                out.push_str(&self.row(cube.face(face), row));
            }
            out.push('\n');
        }

        out.push_str(RULE);
        out.push('\n');
        self.cap(&mut out, cube.face(Face::Down));
        out
    }
}
