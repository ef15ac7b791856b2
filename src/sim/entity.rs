use std::fmt;

use super::constants::*;
use super::engine::{Rgba8, Vertex, VertexSink};
use super::geometry::{add_verts_for_line, add_verts_for_ring, transform_into};
use super::math::{from_polar_degrees, Vec2};
use super::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    PlayerShip,
    Bullet,
    Asteroid,
    Beetle,
    Wasp,
    Debris,
    Box,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EntityKind::PlayerShip => "player ship",
            EntityKind::Bullet => "bullet",
            EntityKind::Asteroid => "asteroid",
            EntityKind::Beetle => "beetle",
            EntityKind::Wasp => "wasp",
            EntityKind::Debris => "debris",
            EntityKind::Box => "box",
        };
        f.write_str(name)
    }
}

/// State every entity carries regardless of kind.
#[derive(Debug, Clone)]
pub struct EntityCore {
    pub position: Vec2,
    pub velocity: Vec2,
    pub orientation_degrees: f32,
    pub angular_velocity: f32,
    pub color: Rgba8,
    physics_radius: f32,
    cosmetic_radius: f32,
    health: i32,
    is_dead: bool,
    is_garbage: bool,
}

impl EntityCore {
    /// The cosmetic radius is clamped so it never undercuts the physics radius.
    pub fn new(
        position: Vec2,
        orientation_degrees: f32,
        physics_radius: f32,
        cosmetic_radius: f32,
        health: i32,
        color: Rgba8,
    ) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            orientation_degrees,
            angular_velocity: 0.0,
            color,
            physics_radius,
            cosmetic_radius: cosmetic_radius.max(physics_radius),
            health: health.max(0),
            is_dead: false,
            is_garbage: false,
        }
    }

    pub fn physics_radius(&self) -> f32 {
        self.physics_radius
    }

    pub fn cosmetic_radius(&self) -> f32 {
        self.cosmetic_radius
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    pub fn is_garbage(&self) -> bool {
        self.is_garbage
    }

    pub fn mark_dead(&mut self) {
        self.is_dead = true;
    }

    pub fn mark_garbage(&mut self) {
        self.is_garbage = true;
    }

    /// Dead and scheduled for removal at the next garbage pass.
    pub fn destroy(&mut self) {
        self.is_dead = true;
        self.is_garbage = true;
    }

    /// Subtracts `amount` from health, never going below zero.
    /// Returns true when this call brought health to zero.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health = (self.health - amount.max(0)).max(0);
        self.health == 0
    }

    pub fn kill(&mut self) {
        self.health = 0;
        self.is_dead = true;
    }

    pub fn forward_normal(&self) -> Vec2 {
        from_polar_degrees(self.orientation_degrees, 1.0)
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.orientation_degrees += self.angular_velocity * dt;
    }

    /// Entirely outside the world rectangle, judged with the cosmetic radius.
    pub fn is_off_screen(&self) -> bool {
        let r = self.cosmetic_radius;
        self.position.x + r < 0.0
            || self.position.x - r > WORLD_SIZE_X
            || self.position.y + r < 0.0
            || self.position.y - r > WORLD_SIZE_Y
    }

    /// Teleport to the opposite edge once fully past one.
    pub fn wrap_around_world(&mut self) {
        let r = self.cosmetic_radius;
        if self.position.x < -r {
            self.position.x = WORLD_SIZE_X + r;
        } else if self.position.x > WORLD_SIZE_X + r {
            self.position.x = -r;
        }
        if self.position.y < -r {
            self.position.y = WORLD_SIZE_Y + r;
        } else if self.position.y > WORLD_SIZE_Y + r {
            self.position.y = -r;
        }
    }

    /// Keep the physics disc inside the world, reflecting the velocity
    /// component that pointed outward.
    pub fn bounce_off_walls(&mut self) {
        let r = self.physics_radius;
        if self.position.x < r {
            self.position.x = r;
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > WORLD_SIZE_X - r {
            self.position.x = WORLD_SIZE_X - r;
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < r {
            self.position.y = r;
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > WORLD_SIZE_Y - r {
            self.position.y = WORLD_SIZE_Y - r;
            self.velocity.y = -self.velocity.y.abs();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub is_alive: bool,
}

/// Read-only snapshot of the world that entities may consult while updating.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldView {
    pub player: Option<PlayerView>,
}

impl WorldView {
    pub fn live_player_position(&self) -> Option<Vec2> {
        self.player.filter(|p| p.is_alive).map(|p| p.position)
    }
}

/// Common behaviour of pooled entity kinds.
pub trait Entity {
    const KIND: EntityKind;

    fn core(&self) -> &EntityCore;
    fn core_mut(&mut self) -> &mut EntityCore;

    /// Advance one frame. Dead entities do nothing.
    fn update(&mut self, world: &WorldView, rng: &mut GameRng, dt: f32);

    fn local_verts(&self) -> &[Vertex];

    fn render(&self, sink: &mut dyn VertexSink) {
        let core = self.core();
        if core.is_dead() {
            return;
        }
        let mut verts = Vec::with_capacity(self.local_verts().len());
        transform_into(self.local_verts(), core.orientation_degrees, core.position, &mut verts);
        sink.draw_vertex_array(&verts);
    }

    fn debug_render(&self, sink: &mut dyn VertexSink) {
        let mut verts = Vec::new();
        add_debug_overlay(self.core(), &mut verts);
        sink.draw_vertex_array(&verts);
    }
}

/// Radii rings, facing axes and velocity for the debug overlay.
pub fn add_debug_overlay(core: &EntityCore, out: &mut Vec<Vertex>) {
    let pos = core.position;
    let fwd = core.forward_normal();
    let left = Vec2::new(-fwd.y, fwd.x);
    let t = DEBUG_LINE_THICKNESS;

    add_verts_for_ring(out, pos, core.cosmetic_radius(), t, DEBUG_RENDER_MAGENTA);
    add_verts_for_ring(out, pos, core.physics_radius(), t, DEBUG_RENDER_CYAN);
    add_verts_for_line(out, pos, pos + fwd * core.cosmetic_radius(), t, DEBUG_RENDER_RED);
    add_verts_for_line(out, pos, pos + left * core.cosmetic_radius(), t, DEBUG_RENDER_GREEN);
    add_verts_for_line(out, pos, pos + core.velocity, t, DEBUG_RENDER_YELLOW);
}
