use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_bot::board::{Board, Cell, Mark};
use connect4_bot::{COLUMNS, ROWS};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    BotWin,
    Draw,
}

/// One interactive game session: the live board, the chosen glyphs and
/// the current state
pub struct Game {
    pub board: Board,
    pub state: GameState,
    player_glyph: char,
    bot_glyph: char,
}

impl Game {
    pub fn new(player_glyph: char) -> Self {
        let bot_glyph = if player_glyph == 'X' { 'O' } else { 'X' };
        Self {
            board: Board::new(),
            state: GameState::Playing,
            player_glyph,
            bot_glyph,
        }
    }

    /// Plays a one-indexed column for `mark`, updating the game state
    pub fn play_checked(&mut self, column_one_indexed: usize, mark: Mark) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > COLUMNS {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                COLUMNS
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.drop_piece(column, mark) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.state = if self.board.is_winning(mark) {
            match mark {
                Mark::Player => GameState::PlayerWin,
                Mark::Bot => GameState::BotWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=COLUMNS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let (glyph, color) = match self.board.get(row, column) {
                    Cell::Taken(Mark::Player) => (self.player_glyph, Color::Red),
                    Cell::Taken(Mark::Bot) => (self.bot_glyph, Color::Yellow),
                    Cell::Empty => ('.', Color::Grey),
                };
                stdout.queue(PrintStyledContent(
                    style(glyph)
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(color),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
