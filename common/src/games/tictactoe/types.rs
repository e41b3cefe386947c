use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// The human always plays `X`.
pub const HUMAN_MARK: Mark = Mark::X;
/// The AI always plays `O`.
pub const AI_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// Derived from the board on demand, never stored independently of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Mark),
    Tie,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Ai,
    Human,
    Random,
}

impl FirstPlayerMode {
    /// Mark of the player who opens the game.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Mark {
        match self {
            FirstPlayerMode::Ai => AI_MARK,
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Random => {
                if rng.random::<bool>() {
                    AI_MARK
                } else {
                    HUMAN_MARK
                }
            }
        }
    }
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ai" => Ok(FirstPlayerMode::Ai),
            "human" => Ok(FirstPlayerMode::Human),
            "random" => Ok(FirstPlayerMode::Random),
            other => Err(format!(
                "Unknown first player '{}', expected one of: ai, human, random",
                other
            )),
        }
    }
}
