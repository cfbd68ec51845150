use crate::game_state::chess_types::{CastlingEntitlements, Color};
use crate::game_state::game::Game;
use crate::geometry::coordinate::Coordinate;

/// Serialize the aggregate as Forsyth-Edwards Notation.
///
/// The two clock fields are emitted as the constant `0 1`: the aggregate
/// keeps no move counts, and [`parse_fen`](crate::utils::fen_parser::parse_fen)
/// only validates them syntactically.
pub fn generate_fen(game: &Game) -> String {
    format!(
        "{} {} {} {} 0 1",
        placement_field(game),
        match game.turn() {
            Color::White => "w",
            Color::Black => "b",
        },
        entitlements_field(game.entitlements()),
        match game.en_passant_window() {
            Some(square) => square.to_string(),
            None => "-".to_owned(),
        },
    )
}

fn placement_field(game: &Game) -> String {
    let mut out = String::new();
    for rank_index in (0u8..8).rev() {
        let mut vacant_run = 0u8;
        for file_index in 0..8 {
            let at = Coordinate::from_indices(file_index, rank_index);
            match game.board().piece_at(at) {
                Some(piece) => {
                    if vacant_run > 0 {
                        out.push(char::from(b'0' + vacant_run));
                        vacant_run = 0;
                    }
                    out.push(piece.record_letter());
                }
                None => vacant_run += 1,
            }
        }
        if vacant_run > 0 {
            out.push(char::from(b'0' + vacant_run));
        }
        if rank_index > 0 {
            out.push('/');
        }
    }
    out
}

fn entitlements_field(entitlements: CastlingEntitlements) -> String {
    let mut out = String::new();
    if entitlements.white_kingside {
        out.push('K');
    }
    if entitlements.white_queenside {
        out.push('Q');
    }
    if entitlements.black_kingside {
        out.push('k');
    }
    if entitlements.black_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game::Game;
    use crate::geometry::coordinate::Coordinate;
    use crate::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};

    fn at(text: &str) -> Coordinate {
        Coordinate::from_text(text).expect("test coordinate should parse")
    }

    #[test]
    fn a_fresh_match_serializes_to_the_starting_fen() {
        let game = Game::setup().expect("setup should assemble");
        assert_eq!(generate_fen(&game), STARTING_POSITION_FEN);
    }

    #[test]
    fn a_custom_position_round_trips() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 0 1";
        let parsed = parse_fen(fen).expect("the position should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn a_played_match_round_trips_through_fen() {
        let mut game = Game::setup().expect("setup should assemble");
        game.play_move(at("e2"), at("e4")).expect("1. e4");
        game.play_move(at("c7"), at("c5")).expect("1... c5");
        game.play_move(at("g1"), at("f3")).expect("2. Nf3");
        let fen = generate_fen(&game);
        let restored = parse_fen(&fen).expect("the generated FEN should parse");
        assert_eq!(*restored.board(), *game.board());
        assert_eq!(restored.turn(), game.turn());
        assert_eq!(restored.entitlements(), game.entitlements());
        assert_eq!(restored.en_passant_window(), game.en_passant_window());
        assert_eq!(restored.checked(), game.checked());
        assert_eq!(restored.is_ended(), game.is_ended());
        assert_eq!(restored.winner(), game.winner());
    }

    #[test]
    fn the_en_passant_window_survives_the_round_trip() {
        let mut game = Game::setup().expect("setup should assemble");
        game.play_move(at("d2"), at("d4")).expect("1. d4");
        assert_eq!(game.en_passant_window(), Some(at("d3")));
        let restored = parse_fen(&generate_fen(&game)).expect("the FEN should parse");
        assert_eq!(restored.en_passant_window(), Some(at("d3")));
    }

    #[test]
    fn a_pending_exchange_survives_the_round_trip() {
        let mut game = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("the promotion position should parse");
        game.play_move(at("a7"), at("a8")).expect("the push should pass");
        assert_eq!(game.pending_exchange(), Some(at("a8")));
        let restored = parse_fen(&generate_fen(&game)).expect("the FEN should parse");
        assert_eq!(restored.pending_exchange(), Some(at("a8")));
        assert_eq!(restored.turn(), Color::White);
        assert_eq!(
            restored.board().piece_at(at("a8")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }
}
