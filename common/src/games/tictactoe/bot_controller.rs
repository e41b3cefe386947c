use super::board::Board;
use super::types::{AI_MARK, HUMAN_MARK, Position};
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const TIE_SCORE: i32 = 0;

/// Result of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub position: Position,
    /// Game-theoretic value of `position` for the AI.
    pub score: i32,
    /// Positions evaluated below the root.
    pub nodes: u64,
}

/// Value of `board` for the AI with perfect play from both sides.
///
/// The board is mutated while searching and restored before returning.
pub fn evaluate(board: &mut Board, maximizing: bool) -> i32 {
    let mut nodes = 0;
    minimax(board, maximizing, &mut nodes)
}

/// Picks the AI move with the highest minimax value.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn find_best_move(board: &mut Board) -> Position {
    search_best_move(board).position
}

/// Same as [`find_best_move`], with the score and search effort attached.
///
/// Moves are tried in row-major order and only a strictly greater score
/// replaces the current best, so the earliest of equal moves wins.
pub fn search_best_move(board: &mut Board) -> SearchReport {
    let available_moves = board.available_moves();
    assert!(
        !available_moves.is_empty(),
        "search_best_move called on a board with no empty cells"
    );

    let mut nodes = 0;
    let mut best_score = i32::MIN;
    let mut best_move = available_moves[0];

    for pos in available_moves {
        board.set(pos, AI_MARK);
        let score = minimax(board, false, &mut nodes);
        board.clear(pos);

        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    SearchReport {
        position: best_move,
        score: best_score,
        nodes,
    }
}

fn minimax(board: &mut Board, is_maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    let winner = check_win(board);
    if winner == Some(AI_MARK) {
        return WIN_SCORE;
    }
    if winner == Some(HUMAN_MARK) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return TIE_SCORE;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.set(pos, AI_MARK);
            let eval = minimax(board, false, nodes);
            board.clear(pos);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.set(pos, HUMAN_MARK);
            let eval = minimax(board, true, nodes);
            board.clear(pos);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    fn human_can_win_next(board: &mut Board) -> bool {
        for pos in board.available_moves() {
            board.set(pos, HUMAN_MARK);
            let wins = check_win(board) == Some(HUMAN_MARK);
            board.clear(pos);
            if wins {
                return true;
            }
        }
        false
    }

    fn assert_ai_never_loses(board: &mut Board, ai_to_move: bool) {
        match check_win(board) {
            Some(mark) => {
                assert_ne!(mark, HUMAN_MARK, "AI lost on\n{}", board);
                return;
            }
            None if board.is_full() => return,
            None => {}
        }

        if ai_to_move {
            let pos = find_best_move(board);
            board.set(pos, AI_MARK);
            assert_ai_never_loses(board, false);
            board.clear(pos);
        } else {
            for pos in board.available_moves() {
                board.set(pos, HUMAN_MARK);
                assert_ai_never_loses(board, true);
                board.clear(pos);
            }
        }
    }

    #[test]
    fn test_opening_move_is_first_cell() {
        let mut board = Board::new();
        let report = search_best_move(&mut board);
        assert_eq!(report.position, Position::new(0, 0));
        assert_eq!(report.score, TIE_SCORE);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_ai_win_ignores_turn_flag() {
        let mut board = Board::from_rows([[O, O, O], [X, X, E], [E, E, E]]);
        assert_eq!(evaluate(&mut board, true), WIN_SCORE);
        assert_eq!(evaluate(&mut board, false), WIN_SCORE);
    }

    #[test]
    fn test_terminal_human_win_and_tie() {
        let mut lost = Board::from_rows([[X, O, O], [X, O, E], [X, E, E]]);
        assert_eq!(evaluate(&mut lost, true), LOSS_SCORE);

        let mut tie = Board::from_rows([[O, X, O], [X, X, O], [X, O, X]]);
        assert_eq!(evaluate(&mut tie, true), TIE_SCORE);
        assert_eq!(evaluate(&mut tie, false), TIE_SCORE);
    }

    #[test]
    fn test_blocks_imminent_column_win() {
        let mut board = Board::from_rows([[X, O, E], [X, O, E], [E, E, E]]);
        let before = board;

        let pos = find_best_move(&mut board);
        assert_eq!(board, before);
        // (2, 0) blocks and sets up a fork; it precedes the immediate win at (2, 1).
        assert_eq!(pos, Position::new(2, 0));

        board.place(pos, AI_MARK).unwrap();
        assert!(!human_can_win_next(&mut board));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::from_rows([[O, O, E], [X, X, E], [X, E, E]]);
        let report = search_best_move(&mut board);
        assert_eq!(report.position, Position::new(0, 2));
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_search_is_repeatable_and_non_mutating() {
        let mut board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let before = board;

        let first = search_best_move(&mut board);
        assert_eq!(board, before);
        let second = search_best_move(&mut board);
        assert_eq!(board, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_empty_cell_visits_one_node() {
        let mut board = Board::from_rows([[O, X, O], [X, X, O], [X, O, E]]);
        let report = search_best_move(&mut board);
        assert_eq!(report.position, Position::new(2, 2));
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_evaluate_leaves_board_unchanged() {
        let mut board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let before = board;
        assert_eq!(evaluate(&mut board, true), TIE_SCORE);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "no empty cells")]
    fn test_search_on_full_board_panics() {
        let mut board = Board::from_rows([[O, X, O], [X, X, O], [X, O, X]]);
        search_best_move(&mut board);
    }

    #[test]
    fn test_ai_never_loses_when_moving_first() {
        let mut board = Board::new();
        assert_ai_never_loses(&mut board, true);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_ai_never_loses_when_moving_second() {
        let mut board = Board::new();
        assert_ai_never_loses(&mut board, false);
        assert_eq!(board, Board::new());
    }
}
