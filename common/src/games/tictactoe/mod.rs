mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    LOSS_SCORE, SearchReport, TIE_SCORE, WIN_SCORE, evaluate, find_best_move, search_best_move,
};
pub use game_state::TicTacToeGameState;
pub use types::{
    AI_MARK, BOARD_SIZE, FirstPlayerMode, GameOutcome, HUMAN_MARK, Mark, Position, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, game_outcome};
