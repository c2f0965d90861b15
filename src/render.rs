//! Rendering: draws the pitch and all tokens to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! board state and viewport and produces pixels; it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::board::{Ball, BallKind, BoardState, Player, Role};
use crate::consts::{BALL_RADIUS, BALL_SCALE, PLAYER_SCALE, PLAYER_SIZE};
use crate::viewport::{Point, Viewport};

/// Field line stroke width in physical pixels.
const LINE_WIDTH: f64 = 2.0;

/// Court line color.
const COURT_COLOR: &str = "#F2F0F5";

/// Goal hoop color.
const GOAL_COLOR: &str = "#FFFFFF";

/// Keeper-zone line offset from the center line, as a fraction of surface
/// width (11 m on the 60 m pitch).
const KEEPER_ZONE_RATIO: f64 = 11.0 / 60.0;

/// Goal hoop radius as a fraction of surface width.
const GOAL_RADIUS_RATIO: f64 = 0.015;

/// Goal hoop centers as fractions of the surface size, three per goal line.
const GOAL_POSITIONS: [(f64, f64); 6] = [
    (0.20, 0.25),
    (0.20, 0.50),
    (0.20, 0.75),
    (0.80, 0.25),
    (0.80, 0.50),
    (0.80, 0.75),
];

/// Draw the full scene: field geometry, then team 1, team 2, and balls in
/// that fixed order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, board: &BoardState, viewport: &Viewport) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport.width(), viewport.height());

    draw_field_lines(ctx, viewport);
    draw_goals(ctx, viewport)?;

    for player in &board.team1 {
        draw_player(ctx, player, viewport)?;
    }
    for player in &board.team2 {
        draw_player(ctx, player, viewport)?;
    }
    for ball in &board.balls {
        draw_ball(ctx, ball, viewport)?;
    }

    Ok(())
}

// =============================================================
// Field geometry
// =============================================================

fn draw_field_lines(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
    let w = viewport.width();
    let h = viewport.height();
    let half = w / 2.0;

    ctx.set_stroke_style_str(COURT_COLOR);
    ctx.set_line_width(LINE_WIDTH);

    // Side and end lines.
    ctx.stroke_rect(0.0, 0.0, w, h);

    // Center line.
    ctx.begin_path();
    ctx.move_to(half, 0.0);
    ctx.line_to(half, h);
    ctx.stroke();

    // Keeper zone lines.
    let offset = KEEPER_ZONE_RATIO * w;
    for x in [half - offset, half + offset] {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
    }
}

fn draw_goals(ctx: &CanvasRenderingContext2d, viewport: &Viewport) -> Result<(), JsValue> {
    let radius = viewport.width() * GOAL_RADIUS_RATIO;

    ctx.set_stroke_style_str(GOAL_COLOR);
    ctx.set_line_width(LINE_WIDTH);
    for (fx, fy) in GOAL_POSITIONS {
        ctx.begin_path();
        ctx.arc(viewport.width() * fx, viewport.height() * fy, radius, 0.0, 2.0 * PI)?;
        ctx.stroke();
    }
    Ok(())
}

// =============================================================
// Token renderers
// =============================================================

/// Draw a player as an equilateral triangle pointing along its orientation,
/// rotated about the token center.
fn draw_player(ctx: &CanvasRenderingContext2d, player: &Player, viewport: &Viewport) -> Result<(), JsValue> {
    let size = PLAYER_SIZE * viewport.scale_x() * PLAYER_SCALE;
    let half_base = size * 3.0_f64.sqrt() / 2.0;
    let center = viewport.to_physical(Point::new(player.x, player.y));

    ctx.save();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(player.orientation)?;

    ctx.set_fill_style_str(role_fill(player.role));
    ctx.begin_path();
    ctx.move_to(0.0, -size);
    ctx.line_to(-half_base, size / 2.0);
    ctx.line_to(half_base, size / 2.0);
    ctx.close_path();
    ctx.fill();

    ctx.restore();
    Ok(())
}

fn draw_ball(ctx: &CanvasRenderingContext2d, ball: &Ball, viewport: &Viewport) -> Result<(), JsValue> {
    let radius = BALL_RADIUS * viewport.scale_x() * BALL_SCALE;
    let center = viewport.to_physical(Point::new(ball.x, ball.y));

    ctx.set_fill_style_str(ball_fill(ball.kind));
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

/// Fill color for a player token, by roster position.
fn role_fill(role: Role) -> &'static str {
    match role {
        Role::Chaser => "white",
        Role::Keeper => "green",
        Role::Beater => "black",
        Role::Seeker => "yellow",
    }
}

/// Fill color for a ball token.
fn ball_fill(kind: BallKind) -> &'static str {
    match kind {
        BallKind::Quaffle => "#FFA500",
        BallKind::Bludger => "#8B4513",
        BallKind::Snitch => "#F5C242",
    }
}
