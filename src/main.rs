//! Interactive two-seat match driver.
//!
//! Reads long-algebraic moves from stdin ("e2e4", promotions as "a7a8q" or
//! a bare exchange letter when prompted), plays them against one match,
//! renders the board after every accepted action, and prints the rejection
//! reason for refused ones.

use std::io::{self, BufRead, Write};

use chess_arbiter::game_state::chess_types::PieceKind;
use chess_arbiter::game_state::game::Game;
use chess_arbiter::utils::long_algebraic::parse_long_algebraic;
use chess_arbiter::utils::render_board::render_board;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::setup()?;
    println!("{}", render_board(&game));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_ended() {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let token = line?.trim().to_owned();
        if token.is_empty() {
            continue;
        }
        if token == "quit" || token == "exit" {
            break;
        }

        if let Some(position) = game.pending_exchange() {
            let kind = single_exchange_letter(&token);
            match kind {
                Some(kind) => match game.exchange(position, kind) {
                    Ok(_) => println!("{}", render_board(&game)),
                    Err(refusal) => println!("refused: {refusal}"),
                },
                None => println!("exchange the pawn on {position} first: q, r, b or n"),
            }
            continue;
        }

        let move_text = match parse_long_algebraic(&token) {
            Ok(move_text) => move_text,
            Err(refusal) => {
                println!("refused: {refusal}");
                continue;
            }
        };
        match game.play_move(move_text.source, move_text.destination) {
            Ok(outcome) => {
                for event in &outcome.events {
                    println!("{event}");
                }
                if let (Some(position), Some(kind)) =
                    (game.pending_exchange(), move_text.exchange_kind)
                {
                    if let Err(refusal) = game.exchange(position, kind) {
                        println!("refused: {refusal}");
                    }
                }
                println!("{}", render_board(&game));
            }
            Err(refusal) => println!("refused: {refusal}"),
        }
    }
    Ok(())
}

fn single_exchange_letter(token: &str) -> Option<PieceKind> {
    let mut chars = token.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match PieceKind::from_letter(letter) {
        Some(PieceKind::Pawn) | Some(PieceKind::King) | None => None,
        kind => kind,
    }
}
