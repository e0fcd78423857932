//! Common types for Connect Four: board positions and error types.

/// A `(row, column)` board coordinate. Row 0 is the top row.
pub type Position = (usize, usize);

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row is outside [0..H) or column is outside [0..W).
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., index out of bounds).
    BitBoardError(BitBoardError),
    /// Column index is not in [0..WIDTH).
    ColumnOutOfRange { column: usize },
    /// Column already holds HEIGHT pieces.
    ColumnFull { column: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ColumnOutOfRange { column } => {
                write!(f, "Column {} is out of range", column)
            }
            BoardError::ColumnFull { column } => write!(f, "Column {} is full", column),
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum IllegalMoveReason {
    ColumnFull,
    ColumnOutOfRange,
    GameAlreadyOver,
}

/// A refused move. Refusal never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub column: usize,
    pub reason: IllegalMoveReason,
}

impl IllegalMoveError {
    pub fn new(column: usize, reason: IllegalMoveReason) -> Self {
        Self { column, reason }
    }

    /// Classify a board error raised while dropping into `column`.
    pub fn from_board_error(column: usize, err: &BoardError) -> Self {
        let reason = match err {
            BoardError::ColumnFull { .. } => IllegalMoveReason::ColumnFull,
            BoardError::ColumnOutOfRange { .. } | BoardError::BitBoardError(_) => {
                IllegalMoveReason::ColumnOutOfRange
            }
        };
        Self::new(column, reason)
    }
}

impl core::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IllegalMoveReason::ColumnFull => write!(f, "column is full"),
            IllegalMoveReason::ColumnOutOfRange => write!(f, "column is out of range"),
            IllegalMoveReason::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

impl core::fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Illegal move in column {}: {}", self.column, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::BitBoardError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IllegalMoveError {}
