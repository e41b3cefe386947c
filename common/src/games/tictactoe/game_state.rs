use rand::Rng;

use super::board::Board;
use super::bot_controller::{SearchReport, search_best_move};
use super::types::{AI_MARK, FirstPlayerMode, GameOutcome, HUMAN_MARK, Mark, Position};
use super::win_detector::game_outcome;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameOutcome,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        if first_mark == Mark::Empty {
            panic!("TicTacToe requires X or O to move first");
        }

        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameOutcome::InProgress,
            last_move: None,
        }
    }

    pub fn with_first_player<R: Rng>(first_player_mode: FirstPlayerMode, rng: &mut R) -> Self {
        Self::new(first_player_mode.resolve(rng))
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_mark == AI_MARK
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_mark == HUMAN_MARK
    }

    /// Places the current player's mark and passes the turn. On error the
    /// state is unchanged and the same player is still to move.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        self.board.place(pos, self.current_mark)?;
        self.last_move = Some(pos);

        self.check_game_over();

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    /// Runs the search for the AI and applies the chosen move.
    pub fn play_ai_move(&mut self) -> Result<SearchReport, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if !self.is_ai_turn() {
            return Err("Not the AI's turn".to_string());
        }

        let report = search_best_move(&mut self.board);
        self.place_mark(report.position)?;
        Ok(report)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameOutcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = game_outcome(&self.board);
    }
}
