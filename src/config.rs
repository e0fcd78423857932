/// Number of columns on the board.
pub const WIDTH: usize = 7;
/// Number of rows on the board. Row 0 is the top.
pub const HEIGHT: usize = 6;
/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;
/// Total number of cells, which is also the maximum number of moves in a game.
pub const NUM_CELLS: usize = WIDTH * HEIGHT;

/// Environment variable read by `init_logging` for the log level.
pub const LOG_ENV_VAR: &str = "CONNECT_FOUR_LOG";

/// Line directions as `(row step, column step)`: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
