//! Hit-testing pointer positions against board tokens.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::board::{BoardState, TokenGroup, TokenId};
use crate::consts::HIT_TOLERANCE_PX;
use crate::viewport::{Point, Viewport};

/// Collections in hit-test priority order.
const GROUP_PRIORITY: [TokenGroup; 3] = [TokenGroup::Team1, TokenGroup::Team2, TokenGroup::Balls];

/// Find the token under `physical` on the current surface.
///
/// Groups are tested in fixed priority order (team 1, team 2, balls) and
/// tokens within a group in stored order; the first token whose center is
/// strictly closer than the tolerance radius wins. Overlapping tokens
/// resolve by that order, never by distance. The tolerance scales with the
/// surface the same way token rendering size does.
#[must_use]
pub fn hit_test(physical: Point, board: &BoardState, viewport: &Viewport) -> Option<TokenId> {
    let tolerance = HIT_TOLERANCE_PX * viewport.scale_x();
    for group in GROUP_PRIORITY {
        for index in 0..board.group_len(group) {
            let id = TokenId::new(group, index);
            let Some(center) = board.position(id) else {
                continue;
            };
            if distance(physical, viewport.to_physical(center)) < tolerance {
                return Some(id);
            }
        }
    }
    None
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
