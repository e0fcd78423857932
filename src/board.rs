//! Game board: one occupancy `BitBoard` per player over a fixed
//! `WIDTH × HEIGHT` grid, with gravity drops and four-in-a-row scanning.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Position};
use crate::config::{CONNECT, DIRECTIONS, HEIGHT, WIDTH};
use crate::player::PlayerId;

/// Bitboard sized to the Connect Four grid.
pub type BB = BitBoard<u64, WIDTH, HEIGHT>;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// The grid. Row 0 is the top, row `HEIGHT - 1` the bottom; pieces settle
/// from the bottom up in each column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pieces: [BB; 2],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            pieces: [BB::new(); 2],
        }
    }

    /// Cell at (row, column), or an error if either coordinate is off the board.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        for player in PlayerId::ALL {
            if self.pieces[player.index()].get(row, column)? {
                return Ok(Cell::Occupied(player));
            }
        }
        Ok(Cell::Empty)
    }

    /// Occupancy mask of one player's pieces.
    pub fn pieces(&self, player: PlayerId) -> BB {
        self.pieces[player.index()]
    }

    /// Occupancy mask of all pieces.
    pub fn occupied(&self) -> BB {
        self.pieces[0] | self.pieces[1]
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Number of pieces stacked in `column`; zero for an out-of-range column.
    pub fn column_height(&self, column: usize) -> usize {
        let occupied = self.occupied();
        (0..HEIGHT)
            .filter(|&row| occupied.get(row, column).unwrap_or(false))
            .count()
    }

    /// Lowest empty row in `column`, or `None` if the column is full or out
    /// of range.
    pub fn find_drop_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        let occupied = self.occupied();
        (0..HEIGHT)
            .rev()
            .find(|&row| !occupied.get(row, column).unwrap_or(true))
    }

    /// Drop a piece for `player` into `column` and return the row it landed on.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Result<usize, BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        let row = self
            .find_drop_row(column)
            .ok_or(BoardError::ColumnFull { column })?;
        self.pieces[player.index()].set(row, column)?;
        Ok(row)
    }

    /// Returns `true` when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Returns `true` when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Returns `true` when every column is a contiguous run of pieces resting
    /// on the bottom row.
    pub fn is_settled(&self) -> bool {
        let occupied = self.occupied();
        (0..WIDTH).all(|column| {
            let height = self.column_height(column);
            (0..HEIGHT).all(|row| {
                let expected = row >= HEIGHT - height;
                occupied.get(row, column).unwrap_or(false) == expected
            })
        })
    }

    /// First four-in-a-row for `player`, scanning every cell as a line start
    /// (rows top to bottom, columns left to right) in each of the four
    /// directions.
    pub fn winning_line(&self, player: PlayerId) -> Option<[Position; CONNECT]> {
        let mine = self.pieces[player.index()];
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                for (dr, dc) in DIRECTIONS {
                    let Some(line) = line_from(row, column, dr, dc) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| mine.get(r, c).unwrap_or(false)) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// Returns `true` if `player` has four in a row anywhere on the board.
    pub fn has_four(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }
}

/// The `CONNECT` cells starting at (row, column) and stepping by (dr, dc), or
/// `None` if any of them falls off the board. Each cell's row is checked
/// against `HEIGHT` and its column against `WIDTH`.
fn line_from(row: usize, column: usize, dr: isize, dc: isize) -> Option<[Position; CONNECT]> {
    let mut line = [(0, 0); CONNECT];
    for (k, slot) in line.iter_mut().enumerate() {
        let r = row as isize + dr * k as isize;
        let c = column as isize + dc * k as isize;
        if r < 0 || r >= HEIGHT as isize || c < 0 || c >= WIDTH as isize {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(line)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let ch = match self.cell(row, column).map_err(|_| fmt::Error)? {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            if row + 1 < HEIGHT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
