use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of shuffles a freshly generated board starts with.
pub const DEFAULT_SHUFFLE_BUDGET: u32 = 3;

/// Wire form of a board: the grid flattened to a single row-major string of
/// uppercase letters plus the remaining shuffle budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub letters: String,
    pub shuffle_available_count: u32,
}

impl Board {
    pub fn new(letters: impl Into<String>, shuffle_available_count: u32) -> Self {
        Self {
            letters: letters.into(),
            shuffle_available_count,
        }
    }
}

/// Wire form of a move: a comma-separated list of `(x,y)` tuples in the
/// order the tiles were selected, e.g. `"(2,3),(3,3),(3,4)"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub coordinates: String,
}

/// Error parsing the `(x,y),(x,y)` coordinate grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected '{expected}' at position {pos}")]
    Expected { expected: char, pos: usize },
    #[error("expected a coordinate number at position {pos}")]
    ExpectedNumber { pos: usize },
    #[error("coordinate ({x},{y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
}

impl Move {
    pub fn new(coordinates: impl Into<String>) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }

    /// True when no tiles have been selected yet.
    pub fn is_empty(&self) -> bool {
        self.coordinates.trim().is_empty()
    }

    /// Parse the coordinate string into `(x, y)` pairs in selection order.
    ///
    /// An empty string is a valid, empty move. Bounds against a particular
    /// board are the caller's concern (see `TileBoard::move_tiles`).
    pub fn positions(&self) -> Result<Vec<(usize, usize)>, MoveParseError> {
        let bytes = self.coordinates.trim().as_bytes();
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        let mut pos = 0;
        loop {
            expect_byte(bytes, &mut pos, b'(')?;
            let x = parse_number(bytes, &mut pos)?;
            expect_byte(bytes, &mut pos, b',')?;
            let y = parse_number(bytes, &mut pos)?;
            expect_byte(bytes, &mut pos, b')')?;
            out.push((x, y));
            if pos == bytes.len() {
                return Ok(out);
            }
            expect_byte(bytes, &mut pos, b',')?;
        }
    }

    /// Rebuild the coordinate string from `(x, y)` pairs.
    pub fn from_positions(positions: &[(usize, usize)]) -> Self {
        let coordinates = positions
            .iter()
            .map(|(x, y)| format!("({},{})", x, y))
            .collect::<Vec<_>>()
            .join(",");
        Self { coordinates }
    }
}

fn expect_byte(bytes: &[u8], pos: &mut usize, expected: u8) -> Result<(), MoveParseError> {
    if bytes.get(*pos) == Some(&expected) {
        *pos += 1;
        Ok(())
    } else {
        Err(MoveParseError::Expected {
            expected: expected as char,
            pos: *pos,
        })
    }
}

fn parse_number(bytes: &[u8], pos: &mut usize) -> Result<usize, MoveParseError> {
    let start = *pos;
    let mut value: usize = 0;
    while let Some(digit) = bytes.get(*pos).filter(|b| b.is_ascii_digit()) {
        value = value * 10 + (digit - b'0') as usize;
        *pos += 1;
    }
    if *pos == start {
        return Err(MoveParseError::ExpectedNumber { pos: start });
    }
    Ok(value)
}
