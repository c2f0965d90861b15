//! Shared numeric constants for the board crate.

// ── Logical space ───────────────────────────────────────────────

/// Width of the fixed logical coordinate space.
pub const LOGICAL_WIDTH: f64 = 600.0;

/// Height of the fixed logical coordinate space.
pub const LOGICAL_HEIGHT: f64 = 330.0;

/// Smallest physical surface dimension the viewport accepts.
pub const MIN_SURFACE_PX: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit tolerance radius in physical pixels at the reference surface scale.
///
/// Scaled with the surface exactly as token rendering size is, so the hit
/// area stays proportional at any canvas size.
pub const HIT_TOLERANCE_PX: f64 = 30.0;

// ── Token geometry ──────────────────────────────────────────────

/// Player triangle size in physical pixels at the reference surface scale.
pub const PLAYER_SIZE: f64 = 12.5;

/// Ball radius in physical pixels at the reference surface scale.
pub const BALL_RADIUS: f64 = 7.5;

/// Size multiplier applied to player tokens.
pub const PLAYER_SCALE: f64 = 0.95;

/// Size multiplier applied to ball tokens.
pub const BALL_SCALE: f64 = 0.95;
