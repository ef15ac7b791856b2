use super::constants::*;
use super::engine::Vertex;
use super::entity::{Entity, EntityCore, EntityKind, WorldView};
use super::geometry::polygon;
use super::math::{from_polar_degrees, Vec2};
use super::rng::GameRng;

/// What the controls ask the ship to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    /// Thrust strength in [0, 1].
    pub thrust: f32,
    /// Absolute heading from an analog stick, overriding turning.
    pub stick_heading: Option<f32>,
    pub fire_pressed: bool,
    pub fire_held: bool,
}

pub struct PlayerShip {
    core: EntityCore,
    verts: Vec<Vertex>,
    score: u32,
    thrust: f32,
    turn_left: bool,
    turn_right: bool,
    ready_to_fire: bool,
}

impl PlayerShip {
    pub fn new(position: Vec2, orientation_degrees: f32, health: i32) -> Self {
        Self {
            core: EntityCore::new(
                position,
                orientation_degrees,
                PLAYER_SHIP_PHYSICS_RADIUS,
                PLAYER_SHIP_COSMETIC_RADIUS,
                health,
                PLAYER_SHIP_COLOR,
            ),
            verts: ship_verts(),
            score: 0,
            thrust: 0.0,
            turn_left: false,
            turn_right: false,
            // Armed only after the fire control has been let go once.
            ready_to_fire: false,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrust > 0.0
    }

    /// Latch this frame's controls. Returns true when a bullet should be fired.
    pub fn apply_intent(&mut self, intent: &ShipIntent) -> bool {
        if self.core.is_dead() {
            self.thrust = 0.0;
            return false;
        }
        self.turn_left = intent.turn_left;
        self.turn_right = intent.turn_right;
        self.thrust = intent.thrust.clamp(0.0, 1.0);
        if let Some(heading) = intent.stick_heading {
            self.core.orientation_degrees = heading;
        }

        let fire = intent.fire_pressed && self.ready_to_fire;
        if !intent.fire_held {
            self.ready_to_fire = true;
        }
        fire
    }

    /// Bullets leave one unit ahead of the ship's center.
    pub fn muzzle(&self) -> Vec2 {
        self.core.position + self.core.forward_normal()
    }
}

impl Entity for PlayerShip {
    const KIND: EntityKind = EntityKind::PlayerShip;

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn update(&mut self, _world: &WorldView, _rng: &mut GameRng, dt: f32) {
        if self.core.is_dead() {
            return;
        }
        if self.turn_left {
            self.core.orientation_degrees += PLAYER_SHIP_TURN_SPEED * dt;
        }
        if self.turn_right {
            self.core.orientation_degrees -= PLAYER_SHIP_TURN_SPEED * dt;
        }
        if self.thrust > 0.0 {
            let accel = from_polar_degrees(
                self.core.orientation_degrees,
                PLAYER_SHIP_ACCELERATION * self.thrust,
            );
            self.core.velocity += accel * dt;
        }
        self.core.integrate(dt);
        self.core.bounce_off_walls();
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }
}

fn ship_verts() -> Vec<Vertex> {
    polygon(
        &[
            // left wing
            [-2.0, 1.0], [2.0, 1.0], [0.0, 2.0],
            // body
            [0.0, 1.0], [-2.0, 1.0], [-2.0, -1.0],
            [0.0, 1.0], [-2.0, -1.0], [0.0, -1.0],
            // nose
            [1.0, 0.0], [0.0, 1.0], [0.0, -1.0],
            // right wing
            [2.0, -1.0], [-2.0, -1.0], [0.0, -2.0],
        ],
        PLAYER_SHIP_COLOR,
    )
}
