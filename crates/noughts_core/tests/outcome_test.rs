//! Tests for board evaluation.

use noughts_core::{Board, Outcome, Player, Square, WinLine, evaluate};

fn fill_line(line: WinLine, mark: Player, rest: Square) -> Board {
    let mut board = Board::from_squares([rest; 9]);
    for pos in line.cells() {
        board.set(pos, Square::Occupied(mark)).unwrap();
    }
    board
}

#[test]
fn test_every_line_wins_for_its_mark() {
    for line in WinLine::ALL {
        for mark in [Player::X, Player::O] {
            let board = fill_line(line, mark, Square::Empty);
            assert_eq!(evaluate(&board), Outcome::Win { mark, line }, "{line}");
        }
    }
}

fn held_by(board: &Board, line: WinLine) -> Option<Player> {
    let [a, b, c] = line.cells().map(|p| board.get(p).unwrap());
    if a == b && b == c { a.player() } else { None }
}

#[test]
fn test_line_wins_with_any_other_squares() {
    let fills = [
        Square::Empty,
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
    ];
    for (index, line) in WinLine::ALL.iter().enumerate() {
        let others: Vec<usize> = (0..9).filter(|p| !line.contains(*p)).collect();
        for code in 0..3usize.pow(6) {
            let mut board = fill_line(*line, Player::X, Square::Empty);
            let mut rest = code;
            for pos in &others {
                board.set(*pos, fills[rest % 3]).unwrap();
                rest /= 3;
            }

            let outcome = evaluate(&board);
            let reported = outcome.line().expect("a complete line always wins");
            let reported_index = WinLine::ALL.iter().position(|l| *l == reported).unwrap();
            assert!(reported_index <= index);
            assert_eq!(held_by(&board, reported), outcome.winner());
            assert!(WinLine::ALL[..reported_index].iter().all(|l| held_by(&board, *l).is_none()));
            if reported_index == index {
                assert_eq!(outcome.winner(), Some(Player::X));
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for text in ["XOXXOOOXX", "XOXOXXOXO", "OXOOXXXOX"] {
        let board: Board = text.parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw, "{text}");
    }
}

#[test]
fn test_open_board_without_line_is_in_progress() {
    for text in [".........", "X........", "XO.OX....", "XOXOXXOX."] {
        let board: Board = text.parse().unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome, Outcome::InProgress, "{text}");
        assert!(!outcome.is_decided());
    }
}

#[test]
fn test_simultaneous_lines_report_first_in_scan_order() {
    // Top row and right column both belong to X.
    let board: Board = "XXX..X..X".parse().unwrap();
    assert_eq!(
        evaluate(&board),
        Outcome::Win {
            mark: Player::X,
            line: WinLine::TOP_ROW,
        }
    );

    // Both diagonals: the main diagonal scans first.
    let board: Board = "O.O.O.O.O".parse().unwrap();
    assert_eq!(evaluate(&board).line(), Some(WinLine::MAIN_DIAGONAL));
}

#[test]
fn test_outcome_serializes_with_tag() {
    let board: Board = "..O.O.O..".parse().unwrap();
    let json = serde_json::to_value(evaluate(&board)).unwrap();
    assert_eq!(json["result"], "win");
    assert_eq!(json["mark"], "O");
    assert_eq!(json["line"], serde_json::json!([2, 4, 6]));
}
