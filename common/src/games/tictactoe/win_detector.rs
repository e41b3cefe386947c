use super::board::Board;
use super::types::{GameOutcome, Mark, Position, WinningLine};

// Rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.rows();
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = cells[r0][c0];
        if mark != Mark::Empty && cells[r1][c1] == mark && cells[r2][c2] == mark {
            return Some(WinningLine::new(
                mark,
                Position::new(r0, c0),
                Position::new(r2, c2),
            ));
        }
    }
    None
}

pub fn game_outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        return GameOutcome::Winner(mark);
    }
    if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
