use std::collections::BTreeMap;

use serde::Deserialize;

use chess_core::{Game, GameOptions};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    options: BTreeMap<String, String>,
    moves: String,
    #[serde(default)]
    rejected: Vec<String>,
    expect: Expectation,
}

#[derive(Deserialize)]
struct Expectation {
    status: String,
    result: String,
    side_to_move: String,
    #[serde(default)]
    en_passant: Option<String>,
    #[serde(default)]
    pieces: BTreeMap<String, String>,
}

/// Split `e2e4` / `e7e8q` into origin, destination and promotion.
fn split_move(mv: &str) -> (&str, &str, Option<char>) {
    let (from, rest) = mv.split_at(2);
    let (to, promotion) = rest.split_at(2);
    (from, to, promotion.chars().next())
}

fn piece_symbol(game: &Game, square: &str) -> String {
    match game.piece_at(square).expect("bad square in scenarios.json") {
        Some((color, piece)) => piece.to_display_char(color).to_string(),
        None => ".".to_string(),
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let mut options = GameOptions::default();
        for (name, value) in &scenario.options {
            options
                .apply_option(name, Some(value.as_str()))
                .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));
        }
        let mut game = Game::with_options(options);

        for mv in scenario.moves.split_whitespace() {
            let (from, to, promotion) = split_move(mv);
            if let Err(reason) = game.make_move(from, to, promotion) {
                panic!("{}: {mv} rejected: {reason}", scenario.name);
            }
        }
        assert_eq!(game.moves_uci(), scenario.moves, "{}", scenario.name);

        for mv in &scenario.rejected {
            let (from, to, _) = split_move(mv);
            let before = game.board().clone();
            assert!(
                !game.try_make_move(from, to),
                "{}: {mv} should be rejected",
                scenario.name
            );
            assert_eq!(game.board(), &before, "{}", scenario.name);
        }

        let expect = &scenario.expect;
        assert_eq!(format!("{:?}", game.status()), expect.status, "{}", scenario.name);
        assert_eq!(format!("{:?}", game.result()), expect.result, "{}", scenario.name);
        assert_eq!(game.side_to_move().to_string(), expect.side_to_move, "{}", scenario.name);
        if let Some(target) = &expect.en_passant {
            assert_eq!(
                game.en_passant_target().map(|sq| sq.to_string()).as_ref(),
                Some(target),
                "{}",
                scenario.name
            );
        }
        for (square, symbol) in &expect.pieces {
            assert_eq!(&piece_symbol(&game, square), symbol, "{}: {square}", scenario.name);
        }
    }
}
