use anyhow::{anyhow, Result};

use crate::{COLUMNS, ROWS, WINDOW_LENGTH};

/// The identity of a placed piece, fixed for the whole game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mark {
    Player,
    Bot,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Bot,
            Mark::Bot => Mark::Player,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Taken(mark)
    }
}

/// A full game grid
///
/// The board is a plain value: search branches copy it and play
/// hypothetical moves on the copy, so two branches never alias.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; COLUMNS * ROWS], // cells are stored left-to-right, top row first
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; COLUMNS * ROWS],
        }
    }

    /// Builds a board from a string of one-indexed column digits,
    /// alternating marks starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Mark) -> Result<Self> {
        let mut board = Self::new();
        let mut mark = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLUMNS) => {
                    if !board.drop_piece(column - 1, mark) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    mark = mark.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * COLUMNS + column]
    }

    /// Drops `mark` into `column`, filling the lowest empty cell
    ///
    /// Returns `false` and leaves the board untouched if the column is full.
    pub fn drop_piece(&mut self, column: usize, mark: Mark) -> bool {
        for row in (0..ROWS).rev() {
            if self.get(row, column).is_empty() {
                self.cells[row * COLUMNS + column] = mark.into();
                return true;
            }
        }
        false
    }

    pub fn is_playable(&self, column: usize) -> bool {
        self.get(0, column).is_empty()
    }

    /// Returns the playable columns in ascending order
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.is_playable(c)).collect()
    }

    /// Checks whether `mark` has four in a row in any direction
    pub fn is_winning(&self, mark: Mark) -> bool {
        let target = Cell::from(mark);

        // check horizontal alignments
        for row in 0..ROWS {
            for column in 0..=COLUMNS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row, column + i) == target) {
                    return true;
                }
            }
        }

        // check vertical alignments
        for column in 0..COLUMNS {
            for row in 0..=ROWS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row + i, column) == target) {
                    return true;
                }
            }
        }

        // check diagonal alignments, both slopes
        for row in 0..=ROWS - WINDOW_LENGTH {
            for column in 0..=COLUMNS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row + i, column + i) == target) {
                    return true;
                }
                if (0..WINDOW_LENGTH)
                    .all(|i| self.get(row + WINDOW_LENGTH - 1 - i, column + i) == target)
                {
                    return true;
                }
            }
        }

        false
    }

    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|c| !self.is_playable(c))
    }

    /// A terminal board ends the game: either mark has won, or no
    /// column has space left
    pub fn is_terminal(&self) -> bool {
        self.is_winning(Mark::Player) || self.is_winning(Mark::Bot) || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
