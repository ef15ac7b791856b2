//! Enemies that hunt the player ship.

use super::constants::*;
use super::engine::{Vertex, VertexSink};
use super::entity::{add_debug_overlay, Entity, EntityCore, EntityKind, WorldView};
use super::geometry::{add_verts_for_line, polygon};
use super::math::{from_polar_degrees, orientation_degrees, Vec2};
use super::rng::GameRng;

/// Heading toward the live player, if any and not already on top of it.
fn heading_to_player(world: &WorldView, from: Vec2) -> Option<f32> {
    let target = world.live_player_position()?;
    let offset = target - from;
    if offset.norm_squared() <= f32::EPSILON {
        return None;
    }
    Some(orientation_degrees(&offset))
}

/// Standard overlay plus a line to the player the enemy last chased.
fn debug_render_hunter(core: &EntityCore, target: Option<Vec2>, sink: &mut dyn VertexSink) {
    let mut verts = Vec::new();
    add_debug_overlay(core, &mut verts);
    if let Some(target) = target {
        add_verts_for_line(&mut verts, core.position, target, DEBUG_LINE_THICKNESS, DEBUG_RENDER_GREY);
    }
    sink.draw_vertex_array(&verts);
}

/// Crawls forward at a jittery speed, steering directly at the player
/// whenever there is one to chase.
pub struct Beetle {
    core: EntityCore,
    verts: Vec<Vertex>,
    target: Option<Vec2>,
}

impl Beetle {
    pub fn new(position: Vec2) -> Self {
        Self {
            core: EntityCore::new(
                position,
                0.0,
                BEETLE_PHYSICS_RADIUS,
                BEETLE_COSMETIC_RADIUS,
                BEETLE_HEALTH,
                BEETLE_COLOR,
            ),
            verts: polygon(
                &[
                    [1.5, 1.0], [-1.5, 2.0], [1.5, -1.0],
                    [1.5, -1.0], [-1.5, 2.0], [-1.5, -2.0],
                ],
                BEETLE_COLOR,
            ),
            target: None,
        }
    }
}

impl Entity for Beetle {
    const KIND: EntityKind = EntityKind::Beetle;

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn update(&mut self, world: &WorldView, rng: &mut GameRng, dt: f32) {
        if self.core.is_dead() {
            return;
        }
        self.target = world.live_player_position();
        if let Some(heading) = heading_to_player(world, self.core.position) {
            self.core.orientation_degrees = heading;
        }
        let speed = rng.float_in_range(BEETLE_MIN_SPEED, BEETLE_MAX_SPEED);
        self.core.velocity = from_polar_degrees(self.core.orientation_degrees, speed);
        self.core.integrate(dt);
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }

    fn debug_render(&self, sink: &mut dyn VertexSink) {
        debug_render_hunter(&self.core, self.target, sink);
    }
}

/// Accelerates toward the player and keeps its momentum.
pub struct Wasp {
    core: EntityCore,
    verts: Vec<Vertex>,
    target: Option<Vec2>,
}

impl Wasp {
    pub fn new(position: Vec2) -> Self {
        Self {
            core: EntityCore::new(
                position,
                0.0,
                WASP_PHYSICS_RADIUS,
                WASP_COSMETIC_RADIUS,
                WASP_HEALTH,
                WASP_COLOR,
            ),
            verts: polygon(
                &[
                    [2.0, 0.0], [0.0, 2.0], [0.0, 1.0],
                    [2.0, 0.0], [0.0, 1.0], [-2.0, 0.0],
                    [2.0, 0.0], [-2.0, 0.0], [0.0, -1.0],
                    [2.0, 0.0], [0.0, -1.0], [0.0, -2.0],
                ],
                WASP_COLOR,
            ),
            target: None,
        }
    }
}

impl Entity for Wasp {
    const KIND: EntityKind = EntityKind::Wasp;

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn update(&mut self, world: &WorldView, _rng: &mut GameRng, dt: f32) {
        if self.core.is_dead() {
            return;
        }
        self.target = world.live_player_position();
        if let Some(heading) = heading_to_player(world, self.core.position) {
            self.core.orientation_degrees = heading;
            self.core.velocity += from_polar_degrees(heading, WASP_ACCELERATION * dt);
        }
        self.core.integrate(dt);
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }

    fn debug_render(&self, sink: &mut dyn VertexSink) {
        debug_render_hunter(&self.core, self.target, sink);
    }
}
