use std::fmt;

use crate::Cell;
use crate::stone::Stone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// The coordinate lies outside the grid.
    NotOnBoard { cell: Cell, rows: u8, cols: u8 },
    /// The cell already holds a stone.
    Overwrite(Cell),
    /// The move would capture nothing and leave the mover's group without liberties.
    Suicide(Cell),
    /// The move would recreate a position the mover has already produced.
    KoViolation(Cell),
    InvalidDimensions { rows: usize, cols: usize },
    InvalidCaptureThreshold(u32),
    /// A group was seeded from a cell without a stone.
    EmptyCell(Cell),
    /// Groups of different colors cannot be merged.
    ColorMismatch { expected: Stone, found: Stone },
    /// A replayed move was made by the side not on turn.
    OutOfTurn(Stone),
    GameOver,
}

impl GoError {
    /// True for the errors that mean "legal coordinates, illegal move".
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GoError::Overwrite(_) | GoError::Suicide(_) | GoError::KoViolation(_)
        )
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard { cell, rows, cols } => write!(
                f,
                "cell ({}, {}) is not on a {rows}x{cols} board",
                cell.0, cell.1
            ),
            GoError::Overwrite((row, col)) => write!(f, "cell ({row}, {col}) is occupied"),
            GoError::Suicide((row, col)) => write!(f, "suicide at ({row}, {col})"),
            GoError::KoViolation((row, col)) => write!(f, "ko violation at ({row}, {col})"),
            GoError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid board dimensions {rows}x{cols}")
            }
            GoError::InvalidCaptureThreshold(n) => write!(f, "invalid capture threshold {n}"),
            GoError::EmptyCell((row, col)) => write!(f, "cell ({row}, {col}) is empty"),
            GoError::ColorMismatch { expected, found } => {
                write!(f, "cannot merge a {found} group into a {expected} group")
            }
            GoError::OutOfTurn(stone) => write!(f, "{stone} played out of turn"),
            GoError::GameOver => write!(f, "game over"),
        }
    }
}

impl std::error::Error for GoError {}
