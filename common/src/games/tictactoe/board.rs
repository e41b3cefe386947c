use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        match self.cell(pos) {
            None => Err("Position out of bounds".to_string()),
            Some(Mark::Empty) => {
                self.cells[pos.row][pos.col] = mark;
                Ok(())
            }
            Some(_) => Err("Cell is already marked".to_string()),
        }
    }

    /// Search-only placement; the caller has taken `pos` from `available_moves`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        debug_assert_eq!(self.cells[pos.row][pos.col], Mark::Empty);
        self.cells[pos.row][pos.col] = mark;
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    /// Empty cells in row-major order. Search tie-breaking depends on this order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}|{}|{}", row[0], row[1], row[2])?;
            writeln!(f, "-----")?;
        }
        Ok(())
    }
}
