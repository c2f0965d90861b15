#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn team1_token(index: usize) -> TokenId {
    TokenId::new(TokenGroup::Team1, index)
}

fn ball_token(index: usize) -> TokenId {
    TokenId::new(TokenGroup::Balls, index)
}

// =============================================================
// Role / BallKind serde
// =============================================================

#[test]
fn role_serde_roundtrip() {
    let json = serde_json::to_string(&Role::Chaser).unwrap();
    assert_eq!(json, "\"chaser\"");
    let back: Role = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Role::Chaser);
}

#[test]
fn role_serde_all_variants() {
    let cases = [
        (Role::Chaser, "\"chaser\""),
        (Role::Keeper, "\"keeper\""),
        (Role::Beater, "\"beater\""),
        (Role::Seeker, "\"seeker\""),
    ];
    for (role, expected) in cases {
        assert_eq!(serde_json::to_string(&role).unwrap(), expected);
    }
}

#[test]
fn role_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<Role>("\"referee\"").is_err());
}

#[test]
fn ball_kind_serde_all_variants() {
    let cases = [
        (BallKind::Quaffle, "\"quaffle\""),
        (BallKind::Bludger, "\"bludger\""),
        (BallKind::Snitch, "\"snitch\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: BallKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn player_serde_roundtrip() {
    let p = Player { x: 150.0, y: 100.0, role: Role::Seeker, orientation: 1.5 };
    let json = serde_json::to_string(&p).unwrap();
    let back: Player = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn board_state_serde_roundtrip() {
    let board = BoardState::initial();
    let json = serde_json::to_string(&board).unwrap();
    let back: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

// =============================================================
// Initial layout
// =============================================================

#[test]
fn initial_roster_composition() {
    let board = BoardState::initial();
    for roster in [&board.team1, &board.team2] {
        let count = |role: Role| roster.iter().filter(|p| p.role == role).count();
        assert_eq!(count(Role::Chaser), 3);
        assert_eq!(count(Role::Keeper), 1);
        assert_eq!(count(Role::Beater), 2);
        assert_eq!(count(Role::Seeker), 1);
    }
}

#[test]
fn initial_ball_composition() {
    let board = BoardState::initial();
    let count = |kind: BallKind| board.balls.iter().filter(|b| b.kind == kind).count();
    assert_eq!(count(BallKind::Quaffle), 1);
    assert_eq!(count(BallKind::Bludger), 3);
    assert_eq!(count(BallKind::Snitch), 1);
}

#[test]
fn initial_team1_positions() {
    let board = BoardState::initial();
    assert_eq!((board.team1[0].x, board.team1[0].y), (150.0, 100.0));
    assert_eq!((board.team1[3].x, board.team1[3].y), (200.0, 130.0));
    assert_eq!((board.team1[6].x, board.team1[6].y), (285.0, 320.0));
    assert_eq!(board.team1[6].role, Role::Seeker);
}

#[test]
fn initial_team2_positions() {
    let board = BoardState::initial();
    assert_eq!((board.team2[0].x, board.team2[0].y), (500.0, 100.0));
    assert_eq!((board.team2[3].x, board.team2[3].y), (450.0, 130.0));
    assert_eq!((board.team2[6].x, board.team2[6].y), (315.0, 320.0));
}

#[test]
fn initial_ball_positions() {
    let board = BoardState::initial();
    assert_eq!((board.balls[0].x, board.balls[0].y), (300.0, 150.0));
    assert_eq!(board.balls[0].kind, BallKind::Quaffle);
    assert_eq!((board.balls[4].x, board.balls[4].y), (300.0, 310.0));
    assert_eq!(board.balls[4].kind, BallKind::Snitch);
}

#[test]
fn initial_orientations_are_uniform_per_team() {
    let board = BoardState::initial();
    assert!(board.team1.iter().all(|p| p.orientation == 49.75));
    assert!(board.team2.iter().all(|p| p.orientation == PI / 5.8));
}

#[test]
fn default_is_initial() {
    assert_eq!(BoardState::default(), BoardState::initial());
}

// =============================================================
// Token access
// =============================================================

#[test]
fn group_len_matches_composition() {
    let board = BoardState::initial();
    assert_eq!(board.group_len(TokenGroup::Team1), 7);
    assert_eq!(board.group_len(TokenGroup::Team2), 7);
    assert_eq!(board.group_len(TokenGroup::Balls), 5);
}

#[test]
fn position_returns_stored_coordinates() {
    let board = BoardState::initial();
    let pos = board.position(team1_token(0)).unwrap();
    assert_eq!(pos, Point::new(150.0, 100.0));
    let pos = board.position(ball_token(4)).unwrap();
    assert_eq!(pos, Point::new(300.0, 310.0));
}

#[test]
fn position_out_of_range_is_none() {
    let board = BoardState::initial();
    assert!(board.position(team1_token(7)).is_none());
    assert!(board.position(ball_token(5)).is_none());
}

#[test]
fn set_position_moves_token() {
    let mut board = BoardState::initial();
    assert!(board.set_position(team1_token(2), Point::new(333.0, 44.5)));
    assert_eq!(board.position(team1_token(2)).unwrap(), Point::new(333.0, 44.5));
}

#[test]
fn set_position_preserves_other_attributes() {
    let mut board = BoardState::initial();
    let before = board.team2[3];
    board.set_position(TokenId::new(TokenGroup::Team2, 3), Point::new(10.0, 20.0));
    assert_eq!(board.team2[3].role, before.role);
    assert_eq!(board.team2[3].orientation, before.orientation);
}

#[test]
fn set_position_out_of_range_is_rejected() {
    let mut board = BoardState::initial();
    assert!(!board.set_position(ball_token(5), Point::new(0.0, 0.0)));
    assert_eq!(board, BoardState::initial());
}

// =============================================================
// Snapshot semantics
// =============================================================

#[test]
fn clone_is_a_deep_copy() {
    let mut live = BoardState::initial();
    let snapshot = live.clone();
    live.set_position(team1_token(0), Point::new(1.0, 2.0));
    assert_eq!(snapshot, BoardState::initial());
    assert_ne!(snapshot, live);
}

#[test]
fn token_id_equality() {
    assert_eq!(team1_token(3), team1_token(3));
    assert_ne!(team1_token(3), team1_token(4));
    assert_ne!(team1_token(3), TokenId::new(TokenGroup::Team2, 3));
}

#[test]
fn token_id_debug_format() {
    let s = format!("{:?}", ball_token(1));
    assert!(s.contains("Balls"));
}
