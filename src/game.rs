use crate::{
    board::Board,
    common::{IllegalMoveError, IllegalMoveReason, Position},
    config::{CONNECT, WIDTH},
    player::PlayerId,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Status {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl Status {
    /// Returns `true` for `Won` and `Tied`.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Outcome of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub status: Status,
}

/// Core game logic: the board, whose turn it is, and whether the game is over.
///
/// The only mutation is [`GameState::apply_move`]. Once the status leaves
/// `InProgress` every further move is refused until the state is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
    status: Status,
    move_count: usize,
}

impl GameState {
    /// Create a fresh game: empty board, Player1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: PlayerId::Player1,
            status: Status::InProgress,
            move_count: 0,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose piece the next move places.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of successful moves so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Lowest empty row in `column`, or `None` if full or out of range.
    pub fn find_drop_row(&self, column: usize) -> Option<usize> {
        self.board.find_drop_row(column)
    }

    /// Columns that currently accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| !self.is_over() && self.find_drop_row(column).is_some())
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Fails without touching the state if the game is over, the column is
    /// out of range, or the column is full. On success the status is
    /// re-evaluated (win before tie) and the turn passes to the other player
    /// only while the game is still in progress.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, IllegalMoveError> {
        if self.is_over() {
            return Err(IllegalMoveError::new(
                column,
                IllegalMoveReason::GameAlreadyOver,
            ));
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player)
            .map_err(|e| IllegalMoveError::from_board_error(column, &e))?;
        self.move_count += 1;

        self.status = if self.check_win(player) {
            Status::Won(player)
        } else if self.check_tie() {
            Status::Tied
        } else {
            Status::InProgress
        };

        if !self.is_over() {
            self.current_player = player.other();
        }

        Ok(MoveResult {
            row,
            column,
            player,
            status: self.status,
        })
    }

    /// Returns `true` if `player` has four in a row anywhere on the board.
    pub fn check_win(&self, player: PlayerId) -> bool {
        self.board.has_four(player)
    }

    /// Returns `true` if the board is full and neither player has a line.
    pub fn check_tie(&self) -> bool {
        self.board.is_full() && PlayerId::ALL.iter().all(|&p| !self.check_win(p))
    }

    /// The line that decided a won game.
    pub fn winning_line(&self) -> Option<[Position; CONNECT]> {
        match self.status {
            Status::Won(player) => self.board.winning_line(player),
            _ => None,
        }
    }

    /// A freshly initialized game, independent of this one.
    pub fn reset(&self) -> GameState {
        GameState::new()
    }

    /// Replace this game wholesale with a fresh one.
    pub fn reset_in_place(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
