use twisty_common::{Direction, Face, Turn};
use twisty_kernel::Cube;

/// Marks a counter-clockwise turn when it follows the face letter.
const INVERT_MARK: char = '\'';

/// Syntax errors from parsing a command string.
///
/// `index` is the 0-based position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("syntax error: token {index} is empty")]
    EmptyToken { index: usize },
    #[error("syntax error: token {index} ({token:?}) has unknown face '{letter}'")]
    UnknownFace {
        index: usize,
        token: String,
        letter: char,
    },
    #[error("syntax error: token {index} ({token:?}) may only be followed by '")]
    InvalidModifier { index: usize, token: String },
}

impl CommandError {
    /// Position of the token that failed.
    pub fn index(&self) -> usize {
        match self {
            Self::EmptyToken { index }
            | Self::UnknownFace { index, .. }
            | Self::InvalidModifier { index, .. } => *index,
        }
    }
}

/// Parse a single token such as `F`, `r` or `U'`.
pub fn parse_turn(token: &str) -> Result<Turn, CommandError> {
    parse_token(0, token)
}

fn parse_token(index: usize, token: &str) -> Result<Turn, CommandError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(CommandError::EmptyToken { index })?;
    let face = Face::from_notation(letter).ok_or_else(|| CommandError::UnknownFace {
        index,
        token: token.to_string(),
        letter,
    })?;
    let direction = match (chars.next(), chars.next()) {
        (None, _) => Direction::Clockwise,
        (Some(INVERT_MARK), None) => Direction::CounterClockwise,
        _ => {
            return Err(CommandError::InvalidModifier {
                index,
                token: token.to_string(),
            });
        }
    };
    Ok(Turn::new(face, direction))
}

fn tokens(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.split_whitespace().enumerate()
}

/// Parse a whole command string without touching any cube.
pub fn parse(input: &str) -> Result<Vec<Turn>, CommandError> {
    tokens(input)
        .map(|(index, token)| parse_token(index, token))
        .collect()
}

/// Apply every token of `input` to `cube`, left to right.
///
/// Returns the number of turns applied. On a syntax error the remaining
/// tokens are skipped and the cube keeps the turns applied so far.
pub fn execute(cube: &mut Cube, input: &str) -> Result<usize, CommandError> {
    execute_with(cube, input, |_, _, _| {})
}

/// Like [`execute`], calling `on_step(index, turn, cube)` after each turn.
pub fn execute_with<F>(cube: &mut Cube, input: &str, mut on_step: F) -> Result<usize, CommandError>
where
    F: FnMut(usize, Turn, &Cube),
{
    let mut applied = 0;
    for (index, token) in tokens(input) {
        let turn = match parse_token(index, token) {
            Ok(turn) => turn,
            Err(e) => {
                tracing::warn!(index, token, applied, "command aborted: {e}");
                return Err(e);
            }
        };
        tracing::debug!(index, %turn, "executing token");
        cube.apply(turn);
        applied += 1;
        on_step(index, turn, cube);
    }
    Ok(applied)
}

/// The sequence that undoes `turns`: reversed, each turn inverted.
pub fn inverse_sequence(turns: &[Turn]) -> Vec<Turn> {
    turns.iter().rev().map(|t| t.inverse()).collect()
}

/// Render turns back into notation, space separated.
pub fn format_sequence(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
