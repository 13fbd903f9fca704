//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Opening, en passant, castling, promotion, mate and rejection walkthroughs
//! - `special_moves.rs` - Castling, en passant and promotion edge cases
//! - `game_end.rs` - Checkmate and stalemate detection under both detection modes
//! - `proptest.rs` - Property-based tests over random legal playouts


use crate::board::Square;
use crate::game::Game;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Play a space-separated list of coordinate moves, asserting each succeeds.
pub(super) fn play_line(game: &mut Game, line: &str) {
    for mv in line.split_whitespace() {
        let (from, to) = mv.split_at(2);
        let (to, promotion) = to.split_at(2);
        let promotion = promotion.chars().next();
        assert!(
            game.make_move(from, to, promotion).is_ok(),
            "move {mv} rejected: {:?}",
            game.check_move(from, to)
        );
    }
}
