//! Tuning values for the simulation. World units; seconds; degrees.

use super::engine::Rgba8;

// ── World ──────────────────────────────────────────────────────────────
pub const WORLD_SIZE_X: f32 = 200.0;
pub const WORLD_SIZE_Y: f32 = 100.0;
pub const WORLD_CENTER_X: f32 = WORLD_SIZE_X / 2.0;
pub const WORLD_CENTER_Y: f32 = WORLD_SIZE_Y / 2.0;

// ── Player ship ────────────────────────────────────────────────────────
pub const PLAYER_SHIP_ACCELERATION: f32 = 30.0;
pub const PLAYER_SHIP_TURN_SPEED: f32 = 300.0;
pub const PLAYER_SHIP_PHYSICS_RADIUS: f32 = 1.75;
pub const PLAYER_SHIP_COSMETIC_RADIUS: f32 = 2.25;
pub const PLAYER_SHIP_START_X: f32 = 20.0;
pub const PLAYER_SHIP_START_Y: f32 = WORLD_CENTER_Y;
pub const PLAYER_SHIP_COLOR: Rgba8 = Rgba8::opaque(102, 153, 204);

// ── Bullets ────────────────────────────────────────────────────────────
pub const MAX_BULLETS_NUM: usize = 100;
pub const BULLET_SPEED: f32 = 50.0;
pub const BULLET_PHYSICS_RADIUS: f32 = 0.5;
pub const BULLET_COSMETIC_RADIUS: f32 = 2.0;
pub const BULLET_YELLOW_OPAQUE: Rgba8 = Rgba8::opaque(255, 255, 0);
pub const BULLET_RED_OPAQUE: Rgba8 = Rgba8::opaque(255, 0, 0);
pub const BULLET_RED_TRANSPARENT: Rgba8 = Rgba8::new(255, 0, 0, 0);

// ── Asteroids ──────────────────────────────────────────────────────────
pub const MAX_ASTEROIDS_NUM: usize = 30;
pub const ASTEROID_TRIS_NUM: usize = 16;
pub const ASTEROID_SPEED: f32 = 10.0;
pub const ASTEROID_PHYSICS_RADIUS: f32 = 1.6;
pub const ASTEROID_COSMETIC_RADIUS: f32 = 2.0;
pub const ASTEROID_HEALTH: i32 = 3;
pub const ASTEROID_MAX_SPIN: f32 = 200.0;
pub const ASTEROID_COLOR: Rgba8 = Rgba8::opaque(100, 100, 100);

// ── Beetles ────────────────────────────────────────────────────────────
pub const MAX_BEETLE_NUM: usize = 20;
pub const BEETLE_PHYSICS_RADIUS: f32 = 1.5;
pub const BEETLE_COSMETIC_RADIUS: f32 = 2.25;
pub const BEETLE_HEALTH: i32 = 3;
pub const BEETLE_MIN_SPEED: f32 = 5.0;
pub const BEETLE_MAX_SPEED: f32 = 12.0;
pub const BEETLE_COLOR: Rgba8 = Rgba8::opaque(60, 200, 70);

// ── Wasps ──────────────────────────────────────────────────────────────
pub const MAX_WASP_NUM: usize = 20;
pub const WASP_ACCELERATION: f32 = 10.0;
pub const WASP_PHYSICS_RADIUS: f32 = 1.73;
pub const WASP_COSMETIC_RADIUS: f32 = 2.0;
pub const WASP_HEALTH: i32 = 3;
pub const WASP_COLOR: Rgba8 = Rgba8::opaque(235, 190, 40);

// ── Debris ─────────────────────────────────────────────────────────────
pub const MAX_DEBRIS_NUM: usize = 200_000;
pub const DEBRIS_TRI_NUM: usize = 8;
pub const DEBRIS_LIFETIME_SECONDS: f32 = 2.0;
pub const DEBRIS_ALPHA: u8 = 127;
pub const DEBRIS_SPEED: f32 = 5.0;
pub const DEBRIS_MAX_SPIN: f32 = 200.0;
pub const ENTITY_HIT_DEBRIS_RADIUS: f32 = 0.1;
pub const ENTITY_DEAD_DEBRIS_RADIUS: f32 = 0.3;
pub const PLAYER_DEATH_DEBRIS_NUM: usize = 30;
pub const ENEMY_DEATH_DEBRIS_NUM: usize = 12;
pub const ENTITY_HIT_DEBRIS_NUM: usize = 3;
pub const BOX_BUMP_DEBRIS_NUM: usize = 8;

// ── Boxes ──────────────────────────────────────────────────────────────
pub const MAX_BOX_NUM: usize = 10_000;
pub const BOX_SIDE_LENGTH: f32 = 4.0;
pub const BOX_SPACING: f32 = 1.1 * BOX_SIDE_LENGTH;
pub const BOX_HEALTH: i32 = 5;
pub const BOX_MAX_PER_ROW: i32 = 10;
pub const BOX_CLUSTER_INTERVAL_SECONDS: f32 = 1.0;
pub const BOX_SWAY_PERIOD_SECONDS: f32 = 1.0;
pub const BOX_SWAY_EASE_SECONDS: f32 = 0.5;
pub const BOX_SWAY_DISTANCE: f32 = BOX_SPACING;
pub const BOX_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 200);

// ── Scoring ────────────────────────────────────────────────────────────
pub const ASTEROID_HIT_SCORE: u32 = 10;
pub const ASTEROID_KILL_SCORE: u32 = 100;
pub const BEETLE_HIT_SCORE: u32 = 20;
pub const BEETLE_KILL_SCORE: u32 = 200;
pub const WASP_HIT_SCORE: u32 = 50;
pub const WASP_KILL_SCORE: u32 = 500;
pub const BOX_HIT_SCORE: u32 = 1;
pub const BOX_KILL_SCORE: u32 = 1;

// ── Game flow ──────────────────────────────────────────────────────────
pub const RESET_GRACE_SECONDS: f32 = 3.0;
pub const SLOW_MO_SCALE: f32 = 0.1;

// ── Debug draw ─────────────────────────────────────────────────────────
pub const DEBUG_RENDER_GREY: Rgba8 = Rgba8::new(50, 50, 50, 255);
pub const DEBUG_RENDER_RED: Rgba8 = Rgba8::opaque(255, 0, 0);
pub const DEBUG_RENDER_GREEN: Rgba8 = Rgba8::opaque(0, 255, 0);
pub const DEBUG_RENDER_MAGENTA: Rgba8 = Rgba8::opaque(255, 0, 255);
pub const DEBUG_RENDER_CYAN: Rgba8 = Rgba8::opaque(0, 255, 255);
pub const DEBUG_RENDER_YELLOW: Rgba8 = Rgba8::opaque(255, 255, 0);
pub const DEBUG_LINE_THICKNESS: f32 = 0.2;
