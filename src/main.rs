use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_bot::board::Mark;
use connect4_bot::engine::{Engine, DEFAULT_DEPTH};

mod game;
use game::*;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the human's glyph; X always moves first
    let mut player_glyph = 'X';
    loop {
        print!("Play as X or O? (X moves first): ");
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'x') => break,
            Some(_letter @ 'o') => {
                player_glyph = 'O';
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    let mut game = Game::new(player_glyph);
    let mut engine = Engine::new(DEFAULT_DEPTH);
    let mut turn = if player_glyph == 'X' {
        Mark::Player
    } else {
        Mark::Bot
    };

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                match turn {
                    // human player
                    Mark::Player => {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        let column = match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        };

                        if let Err(err) = game.play_checked(column, Mark::Player) {
                            println!("{}", err);
                            // try the move again
                            continue;
                        }
                    }

                    // bot player
                    Mark::Bot => {
                        println!("Bot is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // cosmetic pause so the bot appears to deliberate
                        std::thread::sleep(std::time::Duration::from_millis(300));

                        match engine.choose_move(&game.board) {
                            Some(column) => {
                                game.play_checked(column + 1, Mark::Bot)?;
                                println!("Bot plays column {}", column + 1);
                            }
                            // only reachable on a full board, which the
                            // state check above already ends the game on
                            None => break,
                        }
                    }
                }
                turn = turn.opponent();
            }

            // end states
            GameState::PlayerWin => {
                println!("You win!");
                break;
            }
            GameState::BotWin => {
                println!("Bot wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
