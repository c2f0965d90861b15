//! Board model: token types, rosters, the ball set, and the owned store.
//!
//! This module defines what is on the pitch. The composition is fixed at
//! startup and never changes: two rosters of seven players each and five
//! balls, all stored in fixed-size arrays. Tokens carry no stable id; a
//! token is identified by its collection and index ([`TokenId`]), which is
//! valid for the lifetime of the store.
//!
//! [`BoardState`] is the single mutable store. It is mutated in place by the
//! drag controller and replaced wholesale by history restoration; the
//! renderer and hit tester only read from it.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// The position a player fills within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ball handler; three per team.
    Chaser,
    /// Goal defender; one per team.
    Keeper,
    /// Blocker; two per team.
    Beater,
    /// Snitch catcher; one per team.
    Seeker,
}

/// The kind of a ball token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallKind {
    /// The primary scoring ball; one in play.
    Quaffle,
    /// Blocking balls; three in play.
    Bludger,
    /// The rare match-deciding ball; one in play.
    Snitch,
}

/// A player token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position in logical units.
    pub x: f64,
    /// Vertical position in logical units.
    pub y: f64,
    /// The roster position this token represents.
    pub role: Role,
    /// Facing angle in radians, applied about the token center when drawn.
    pub orientation: f64,
}

/// A ball token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Horizontal position in logical units.
    pub x: f64,
    /// Vertical position in logical units.
    pub y: f64,
    /// Which ball this is.
    pub kind: BallKind,
}

/// The seven players fielded by one team: 3 chasers, 1 keeper, 2 beaters,
/// 1 seeker. Order is irrelevant to semantics but stable.
pub type Roster = [Player; 7];

/// The five balls in play: 1 quaffle, 3 bludgers, 1 snitch.
pub type BallSet = [Ball; 5];

/// Which collection a token lives in. Listed in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    Team1,
    Team2,
    Balls,
}

/// Positional identity of a token: its collection and index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenId {
    pub group: TokenGroup,
    pub index: usize,
}

impl TokenId {
    #[must_use]
    pub fn new(group: TokenGroup, index: usize) -> Self {
        Self { group, index }
    }
}

/// The full board: both rosters and the ball set.
///
/// `Clone` is the snapshot operation. The state is plain data with no heap
/// indirection, so a clone shares nothing with the live store and mutating
/// one can never change the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub team1: Roster,
    pub team2: Roster,
    pub balls: BallSet,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// The fixed starting layout.
    ///
    /// Team 1 lines up on the left half, team 2 mirrored on the right, with
    /// the balls along the center line.
    #[must_use]
    pub fn initial() -> Self {
        let team1_facing = 49.75;
        let team2_facing = PI / 5.8;
        Self {
            team1: [
                player(150.0, 100.0, Role::Chaser, team1_facing),
                player(150.0, 150.0, Role::Chaser, team1_facing),
                player(150.0, 200.0, Role::Chaser, team1_facing),
                player(200.0, 130.0, Role::Keeper, team1_facing),
                player(220.0, 110.0, Role::Beater, team1_facing),
                player(220.0, 180.0, Role::Beater, team1_facing),
                player(285.0, 320.0, Role::Seeker, team1_facing),
            ],
            team2: [
                player(500.0, 100.0, Role::Chaser, team2_facing),
                player(500.0, 150.0, Role::Chaser, team2_facing),
                player(500.0, 200.0, Role::Chaser, team2_facing),
                player(450.0, 130.0, Role::Keeper, team2_facing),
                player(430.0, 110.0, Role::Beater, team2_facing),
                player(430.0, 180.0, Role::Beater, team2_facing),
                player(315.0, 320.0, Role::Seeker, team2_facing),
            ],
            balls: [
                ball(300.0, 150.0, BallKind::Quaffle),
                ball(250.0, 80.0, BallKind::Bludger),
                ball(350.0, 80.0, BallKind::Bludger),
                ball(300.0, 260.0, BallKind::Bludger),
                ball(300.0, 310.0, BallKind::Snitch),
            ],
        }
    }

    /// Number of tokens in a group.
    #[must_use]
    pub fn group_len(&self, group: TokenGroup) -> usize {
        match group {
            TokenGroup::Team1 => self.team1.len(),
            TokenGroup::Team2 => self.team2.len(),
            TokenGroup::Balls => self.balls.len(),
        }
    }

    /// Logical position of a token, or `None` for an out-of-range index.
    #[must_use]
    pub fn position(&self, id: TokenId) -> Option<Point> {
        match id.group {
            TokenGroup::Team1 => self.team1.get(id.index).map(|p| Point::new(p.x, p.y)),
            TokenGroup::Team2 => self.team2.get(id.index).map(|p| Point::new(p.x, p.y)),
            TokenGroup::Balls => self.balls.get(id.index).map(|b| Point::new(b.x, b.y)),
        }
    }

    /// Move a token to a new logical position.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn set_position(&mut self, id: TokenId, pos: Point) -> bool {
        match id.group {
            TokenGroup::Team1 => move_player(&mut self.team1, id.index, pos),
            TokenGroup::Team2 => move_player(&mut self.team2, id.index, pos),
            TokenGroup::Balls => move_ball(&mut self.balls, id.index, pos),
        }
    }
}

fn player(x: f64, y: f64, role: Role, orientation: f64) -> Player {
    Player { x, y, role, orientation }
}

fn ball(x: f64, y: f64, kind: BallKind) -> Ball {
    Ball { x, y, kind }
}

fn move_player(roster: &mut Roster, index: usize, pos: Point) -> bool {
    let Some(p) = roster.get_mut(index) else {
        return false;
    };
    p.x = pos.x;
    p.y = pos.y;
    true
}

fn move_ball(balls: &mut BallSet, index: usize, pos: Point) -> bool {
    let Some(b) = balls.get_mut(index) else {
        return false;
    };
    b.x = pos.x;
    b.y = pos.y;
    true
}
