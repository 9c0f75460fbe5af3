//! An agent to pick moves with bounded minimax search

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Cell, Mark};
use crate::{COLUMNS, ROWS, WINDOW_LENGTH};

/// The default search depth in plies
///
/// Higher is strictly stronger but node counts grow with the branching
/// factor (at most 7) per extra ply.
pub const DEFAULT_DEPTH: usize = 5;

/// The scoring constants consumed by the evaluator and the terminal cases
/// of the search
#[derive(Copy, Clone, Debug)]
pub struct Scoring {
    /// Four own marks in a window
    pub four: i64,
    /// Three own marks and one empty cell in a window
    pub three: i64,
    /// Two own marks and two empty cells in a window
    pub two: i64,
    /// Three opponent marks and one empty cell in a window; negative, the
    /// sum stays additive
    pub opponent_three: i64,
    /// Sentinel for a board the bot has won
    pub win: i64,
    /// Sentinel for a board the player has won
    pub loss: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
            win: 100_000_000_000_000,
            loss: -10_000_000_000_000,
        }
    }
}

/// An agent that picks the bot's column with fixed-depth minimax and
/// alpha-beta pruning
///
/// # Notes
/// Each call is a pure function of the supplied board and the configured
/// depth: there is no transposition table and no state carried between
/// searches. The only mutable piece is the random source used to break
/// ties when no branch improves on the initial bound, which is seedable
/// so move selection stays reproducible in tests.
pub struct Engine {
    pub depth: usize,
    pub scoring: Scoring,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine searching `depth` plies, seeded from entropy
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            scoring: Scoring::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed random seed for reproducible
    /// tie-breaking
    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self {
            depth,
            scoring: Scoring::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the scoring constants on an existing `Engine`
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Scores one window of four cells for `mark`
    ///
    /// The own-mark buckets are mutually exclusive; the opponent threat
    /// term is independent and added on top.
    pub fn evaluate_window(&self, window: &[Cell; WINDOW_LENGTH], mark: Mark) -> i64 {
        let own = window.iter().filter(|&&c| c == Cell::from(mark)).count();
        let opponent = window
            .iter()
            .filter(|&&c| c == Cell::from(mark.opponent()))
            .count();
        let empty = window.iter().filter(|c| c.is_empty()).count();

        let mut score = 0;
        if own == 4 {
            score += self.scoring.four;
        } else if own == 3 && empty == 1 {
            score += self.scoring.three;
        } else if own == 2 && empty == 2 {
            score += self.scoring.two;
        }

        // opponent_three is negative, so an open opponent three lowers the score
        if opponent == 3 && empty == 1 {
            score += self.scoring.opponent_three;
        }

        score
    }

    /// Scores a whole position for `mark` by summing every four-cell
    /// window plus a center-column bonus
    pub fn score_position(&self, board: &Board, mark: Mark) -> i64 {
        let mut score = 0;

        // center control is worth a flat bonus per piece
        let center = COLUMNS / 2;
        let center_count = (0..ROWS)
            .filter(|&row| board.get(row, center) == Cell::from(mark))
            .count();
        score += center_count as i64 * 3;

        let mut window = [Cell::Empty; WINDOW_LENGTH];

        // horizontal windows
        for row in 0..ROWS {
            for column in 0..=COLUMNS - WINDOW_LENGTH {
                for i in 0..WINDOW_LENGTH {
                    window[i] = board.get(row, column + i);
                }
                score += self.evaluate_window(&window, mark);
            }
        }

        // vertical windows
        for column in 0..COLUMNS {
            for row in 0..=ROWS - WINDOW_LENGTH {
                for i in 0..WINDOW_LENGTH {
                    window[i] = board.get(row + i, column);
                }
                score += self.evaluate_window(&window, mark);
            }
        }

        // diagonal windows, both slopes
        for row in 0..=ROWS - WINDOW_LENGTH {
            for column in 0..=COLUMNS - WINDOW_LENGTH {
                for i in 0..WINDOW_LENGTH {
                    window[i] = board.get(row + i, column + i);
                }
                score += self.evaluate_window(&window, mark);

                for i in 0..WINDOW_LENGTH {
                    window[i] = board.get(row + WINDOW_LENGTH - 1 - i, column + i);
                }
                score += self.evaluate_window(&window, mark);
            }
        }

        score
    }

    /// Performs the depth-limited game tree search
    ///
    /// Returns the best column for the side to move and the minimax value
    /// of the position. Terminal boards return `None` with the win/loss
    /// sentinel (or 0 for a draw); an exhausted depth returns `None` with
    /// the heuristic score, always from the bot's perspective.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        let columns = board.playable_columns();
        let terminal = board.is_terminal();

        if depth == 0 || terminal {
            if terminal {
                return if board.is_winning(Mark::Bot) {
                    (None, self.scoring.win)
                } else if board.is_winning(Mark::Player) {
                    (None, self.scoring.loss)
                } else {
                    (None, 0)
                };
            }
            return (None, self.score_position(board, Mark::Bot));
        }

        // start from a random playable column so a move is always produced,
        // even if no branch improves on the initial bound
        let mut best = columns.choose(&mut self.rng).copied();

        if maximizing {
            let mut value = i64::MIN;
            for &column in &columns {
                let mut next = *board;
                next.drop_piece(column, Mark::Bot);
                let (_, score) = self.minimax(&next, depth - 1, alpha, beta, false);
                if score > value {
                    value = score;
                    best = Some(column);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    // the opponent will never allow this branch
                    break;
                }
            }
            (best, value)
        } else {
            let mut value = i64::MAX;
            for &column in &columns {
                let mut next = *board;
                next.drop_piece(column, Mark::Player);
                let (_, score) = self.minimax(&next, depth - 1, alpha, beta, true);
                if score < value {
                    value = score;
                    best = Some(column);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (best, value)
        }
    }

    /// Picks the bot's column for the current position
    ///
    /// Returns `None` only when no column is playable; a root search that
    /// produces no column on a playable board falls back to a uniformly
    /// random playable column.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let (column, _value) = self.minimax(board, self.depth, i64::MIN, i64::MAX, true);

        column.or_else(|| {
            let columns = board.playable_columns();
            columns.choose(&mut self.rng).copied()
        })
    }
}
