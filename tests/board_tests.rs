use connect_four::{Board, BoardError, Cell, PlayerId, HEIGHT, WIDTH};

use PlayerId::{Player1, Player2};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            assert_eq!(board.cell(row, col).unwrap(), Cell::Empty);
        }
    }
    assert!(board.is_empty());
    assert!(board.is_settled());
}

#[test]
fn test_find_drop_row_on_empty_board() {
    let board = Board::new();
    for col in 0..WIDTH {
        assert_eq!(board.find_drop_row(col), Some(HEIGHT - 1));
    }
    assert_eq!(board.find_drop_row(WIDTH), None);
    assert_eq!(board.find_drop_row(usize::MAX), None);
}

#[test]
fn test_drop_piece_stacks_from_bottom() {
    let mut board = Board::new();

    let row = board.drop_piece(3, Player1).unwrap();
    assert_eq!(row, 5);
    assert_eq!(board.cell(5, 3).unwrap(), Cell::Occupied(Player1));

    let row = board.drop_piece(3, Player2).unwrap();
    assert_eq!(row, 4);
    assert_eq!(board.cell(4, 3).unwrap(), Cell::Occupied(Player2));
    assert_eq!(board.column_height(3), 2);
    assert_eq!(board.piece_count(), 2);
}

#[test]
fn test_column_full() {
    let mut board = Board::new();
    for _ in 0..HEIGHT {
        board.drop_piece(0, Player1).unwrap();
    }
    assert_eq!(board.find_drop_row(0), None);
    assert_eq!(
        board.drop_piece(0, Player2),
        Err(BoardError::ColumnFull { column: 0 })
    );
    assert_eq!(board.column_height(0), HEIGHT);
}

#[test]
fn test_invalid_column() {
    let mut board = Board::new();
    assert_eq!(
        board.drop_piece(WIDTH, Player1),
        Err(BoardError::ColumnOutOfRange { column: WIDTH })
    );
    assert!(board.is_empty());
}

#[test]
fn test_cell_out_of_bounds() {
    let board = Board::new();
    assert!(board.cell(HEIGHT, 0).is_err());
    assert!(board.cell(0, WIDTH).is_err());
    assert!(board.cell(HEIGHT - 1, WIDTH - 1).is_ok());
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for col in 0..WIDTH {
        for _ in 0..HEIGHT {
            board.drop_piece(col, Player1).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(board.is_settled());
}

#[test]
fn test_horizontal_line_in_last_columns() {
    let mut board = Board::new();
    for col in 3..7 {
        board.drop_piece(col, Player1).unwrap();
    }
    assert_eq!(
        board.winning_line(Player1),
        Some([(5, 3), (5, 4), (5, 5), (5, 6)])
    );
    assert!(!board.has_four(Player2));
}

#[test]
fn test_vertical_line_reaching_top_row() {
    let mut board = Board::new();
    board.drop_piece(6, Player1).unwrap();
    board.drop_piece(6, Player1).unwrap();
    for _ in 0..4 {
        board.drop_piece(6, Player2).unwrap();
    }
    assert_eq!(
        board.winning_line(Player2),
        Some([(0, 6), (1, 6), (2, 6), (3, 6)])
    );
    assert!(!board.has_four(Player1));
}

#[test]
fn test_diagonal_down_right_line() {
    let mut board = Board::new();
    // Staircase rising to the left: (2,0), (3,1), (4,2), (5,3).
    for _ in 0..3 {
        board.drop_piece(0, Player2).unwrap();
    }
    board.drop_piece(0, Player1).unwrap();
    for _ in 0..2 {
        board.drop_piece(1, Player2).unwrap();
    }
    board.drop_piece(1, Player1).unwrap();
    board.drop_piece(2, Player2).unwrap();
    board.drop_piece(2, Player1).unwrap();
    board.drop_piece(3, Player1).unwrap();

    assert_eq!(
        board.winning_line(Player1),
        Some([(2, 0), (3, 1), (4, 2), (5, 3)])
    );
}

#[test]
fn test_diagonal_down_left_line() {
    let mut board = Board::new();
    // Staircase rising to the right: (2,6), (3,5), (4,4), (5,3).
    for _ in 0..3 {
        board.drop_piece(6, Player2).unwrap();
    }
    board.drop_piece(6, Player1).unwrap();
    for _ in 0..2 {
        board.drop_piece(5, Player2).unwrap();
    }
    board.drop_piece(5, Player1).unwrap();
    board.drop_piece(4, Player2).unwrap();
    board.drop_piece(4, Player1).unwrap();
    board.drop_piece(3, Player1).unwrap();

    assert_eq!(
        board.winning_line(Player1),
        Some([(2, 6), (3, 5), (4, 4), (5, 3)])
    );
}

#[test]
fn test_no_win_with_three() {
    let mut board = Board::new();
    for col in 0..3 {
        board.drop_piece(col, Player1).unwrap();
    }
    board.drop_piece(3, Player2).unwrap();
    assert!(!board.has_four(Player1));
    assert!(!board.has_four(Player2));
}

#[test]
fn test_line_does_not_wrap_between_rows() {
    let mut board = Board::new();
    // Row 4 columns 4..7 and row 5 column 0 are consecutive bits in
    // row-major order but not a line on the board.
    for col in 4..7 {
        board.drop_piece(col, Player2).unwrap();
        board.drop_piece(col, Player1).unwrap();
    }
    board.drop_piece(0, Player1).unwrap();
    assert_eq!(board.piece_count(), 7);
    assert!(!board.has_four(Player1));
    assert!(!board.has_four(Player2));
}

#[test]
fn test_display() {
    let mut board = Board::new();
    board.drop_piece(0, Player1).unwrap();
    board.drop_piece(6, Player2).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEIGHT);
    assert_eq!(lines[0], ". . . . . . .");
    assert_eq!(lines[HEIGHT - 1], "X . . . . . O");
}
