//! Crate root module declarations for the chess arbiter engine.
//!
//! This file exposes all subsystems (board geometry, per-kind movement
//! rules, the match aggregate, and the boundary utilities for FEN,
//! long-algebraic text, and board rendering) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod geometry {
    pub mod coordinate;
    pub mod direction;
}

pub mod game_state {
    pub mod actions;
    pub mod board;
    pub mod check_inspection;
    pub mod chess_types;
    pub mod events;
    pub mod game;
}

pub mod rules {
    pub mod bishop_rule;
    pub mod king_rule;
    pub mod knight_rule;
    pub mod movement_rule;
    pub mod pawn_rule;
    pub mod queen_rule;
    pub mod rook_rule;
    pub mod rule_set;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}
