//! Random playout harness.
//!
//! Probes every source/destination pair for the color on turn, plays one
//! uniformly chosen approved move per ply (resolving promotions to a random
//! allowed kind), and stops at a terminal state or the ply cap.
//!
//! Run with:
//! `cargo run --release --bin random_match`
//! `cargo run --release --bin random_match -- --plies 300 --seed 7`

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_arbiter::game_state::chess_types::PieceKind;
use chess_arbiter::game_state::game::Game;
use chess_arbiter::geometry::coordinate::Coordinate;
use chess_arbiter::utils::fen_generator::generate_fen;
use chess_arbiter::utils::render_board::render_board;

const EXCHANGE_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

fn main() -> Result<(), String> {
    let (max_plies, seed) = parse_args()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::setup().map_err(|e| e.to_string())?;

    let mut plies = 0u32;
    while !game.is_ended() && plies < max_plies {
        let approved = approved_moves(&game);
        let Some(&(source, destination)) = approved.choose(&mut rng) else {
            break;
        };
        game.play_move(source, destination).map_err(|e| e.to_string())?;
        if let Some(position) = game.pending_exchange() {
            let kind = EXCHANGE_KINDS
                .choose(&mut rng)
                .copied()
                .unwrap_or(PieceKind::Queen);
            game.exchange(position, kind).map_err(|e| e.to_string())?;
        }
        plies += 1;
    }

    println!("{}", render_board(&game));
    println!("fen: {}", generate_fen(&game));
    println!("plies played: {plies}");
    Ok(())
}

fn approved_moves(game: &Game) -> Vec<(Coordinate, Coordinate)> {
    let mut approved = Vec::new();
    for (source, piece) in game.board().pieces() {
        if piece.color != game.turn() {
            continue;
        }
        for destination in Coordinate::all() {
            if game.can_move(source, destination) {
                approved.push((source, destination));
            }
        }
    }
    approved
}

fn parse_args() -> Result<(u32, u64), String> {
    let mut max_plies = 200u32;
    let mut seed = 0u64;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--plies" => {
                let value = args.next().ok_or("--plies needs a value")?;
                max_plies = value
                    .parse()
                    .map_err(|_| format!("invalid ply cap: {value}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok((max_plies, seed))
}
