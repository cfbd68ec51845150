//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a match for debugging, tests, and the
//! interactive driver. The engine types themselves carry no formatting.

use crate::game_state::game::Game;
use crate::geometry::coordinate::Coordinate;

/// Render the board as a Unicode grid with a one-line status trailer.
pub fn render_board(game: &Game) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");
    for rank_index in (0u8..8).rev() {
        out.push(char::from(b'1' + rank_index));
        out.push(' ');
        for file_index in 0..8 {
            let at = Coordinate::from_indices(file_index, rank_index);
            match game.board().piece_at(at) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }
            if file_index < 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(char::from(b'1' + rank_index));
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");

    out.push_str(&status_line(game));
    out
}

fn status_line(game: &Game) -> String {
    if game.is_ended() {
        return match game.winner() {
            Some(winner) => format!("checkmate, {winner} wins"),
            None => "stalemate, drawn".to_owned(),
        };
    }
    if let Some(position) = game.pending_exchange() {
        return format!("{} must exchange the pawn on {position}", game.turn());
    }
    match game.checked() {
        Some(checked) => format!("{} to move, {checked} is in check", game.turn()),
        None => format!("{} to move", game.turn()),
    }
}
