//! Entity storage and spawning.

use log::{trace, warn};

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::cargo_box::CargoBox;
use super::collision::Effect;
use super::constants::*;
use super::debris::Debris;
use super::enemy::{Beetle, Wasp};
use super::engine::{EngineHandles, Rgba8, VertexSink};
use super::entity::{Entity, EntityKind, PlayerView, WorldView};
use super::math::{from_polar_degrees, Vec2};
use super::pool::{EntityId, Pool};
use super::rng::GameRng;
use super::ship::PlayerShip;
use super::waves::WaveSpec;
use crate::error::SpawnError;

/// Exhaustion of gameplay pools is worth a warning; cosmetic and scripted
/// spawns fail quietly.
fn report_spawn_failure(err: &SpawnError) {
    match err {
        SpawnError::PoolExhausted {
            kind: EntityKind::Bullet | EntityKind::Asteroid,
            ..
        } => warn!("{err}"),
        _ => trace!("{err}"),
    }
}

fn logged(result: Result<EntityId, SpawnError>) -> Result<EntityId, SpawnError> {
    if let Err(err) = &result {
        report_spawn_failure(err);
    }
    result
}

pub struct World {
    pub ship: Option<PlayerShip>,
    pub bullets: Pool<Bullet>,
    pub asteroids: Pool<Asteroid>,
    pub beetles: Pool<Beetle>,
    pub wasps: Pool<Wasp>,
    pub debris: Pool<Debris>,
    pub boxes: Pool<CargoBox>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            ship: None,
            bullets: Pool::new(MAX_BULLETS_NUM),
            asteroids: Pool::new(MAX_ASTEROIDS_NUM),
            beetles: Pool::new(MAX_BEETLE_NUM),
            wasps: Pool::new(MAX_WASP_NUM),
            debris: Pool::new(MAX_DEBRIS_NUM),
            boxes: Pool::new(MAX_BOX_NUM),
        }
    }

    /// Release every slot and drop the ship.
    pub fn clear(&mut self) {
        self.ship = None;
        self.bullets.clear();
        self.asteroids.clear();
        self.beetles.clear();
        self.wasps.clear();
        self.debris.clear();
        self.boxes.clear();
    }

    pub fn view(&self) -> WorldView {
        WorldView {
            player: self.ship.as_ref().map(|s| PlayerView {
                position: s.core().position,
                is_alive: s.core().is_alive(),
            }),
        }
    }

    pub fn player_is_alive(&self) -> bool {
        self.ship.as_ref().is_some_and(|s| s.core().is_alive())
    }

    // ── Spawning ───────────────────────────────────────────────────────

    pub fn spawn_player_ship(&mut self, health: i32, score: u32) {
        let ship = PlayerShip::new(Vec2::new(PLAYER_SHIP_START_X, PLAYER_SHIP_START_Y), 0.0, health)
            .with_score(score);
        self.ship = Some(ship);
    }

    pub fn spawn_bullet(&mut self, position: Vec2, orientation_degrees: f32) -> Result<EntityId, SpawnError> {
        logged(self.bullets.spawn(Bullet::new(position, orientation_degrees)))
    }

    pub fn spawn_asteroid(&mut self, position: Vec2, rng: &mut GameRng) -> Result<EntityId, SpawnError> {
        logged(self.asteroids.spawn(Asteroid::new(position, rng)))
    }

    pub fn spawn_beetle(&mut self, position: Vec2) -> Result<EntityId, SpawnError> {
        logged(self.beetles.spawn(Beetle::new(position)))
    }

    pub fn spawn_wasp(&mut self, position: Vec2) -> Result<EntityId, SpawnError> {
        logged(self.wasps.spawn(Wasp::new(position)))
    }

    pub fn spawn_box(&mut self, center: Vec2, drift_speed: f32) -> Result<EntityId, SpawnError> {
        logged(self.boxes.spawn(CargoBox::new(center, drift_speed)))
    }

    pub fn spawn_debris(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        color: Rgba8,
        rng: &mut GameRng,
    ) -> Result<EntityId, SpawnError> {
        logged(self.debris.spawn(Debris::new(position, velocity, radius, color, rng)))
    }

    /// `count` fragments around `origin`, each with a random size multiple
    /// of `radius` and a random kick added to `base_velocity`.
    pub fn spawn_debris_cluster(
        &mut self,
        origin: Vec2,
        base_velocity: Vec2,
        count: usize,
        radius: f32,
        color: Rgba8,
        rng: &mut GameRng,
    ) {
        for _ in 0..count {
            let size = rng.float_in_range(1.0, 5.0) * radius;
            let heading = rng.float_in_range(0.0, 360.0);
            let speed = rng.float_in_range(0.0, DEBRIS_SPEED);
            let velocity = base_velocity + from_polar_degrees(heading, speed);
            if self.spawn_debris(origin, velocity, size, color, rng).is_err() {
                break;
            }
        }
    }

    /// A point just outside a random world edge for a body of `cosmetic_radius`.
    pub fn off_screen_position(cosmetic_radius: f32, rng: &mut GameRng) -> Vec2 {
        let edge = rng.int_in_range(0, 3);
        let x = rng.float_in_range(0.0, WORLD_SIZE_X);
        let y = rng.float_in_range(0.0, WORLD_SIZE_Y);
        match edge {
            0 => Vec2::new(-cosmetic_radius, y),
            1 => Vec2::new(WORLD_SIZE_X + cosmetic_radius, y),
            2 => Vec2::new(x, -cosmetic_radius),
            _ => Vec2::new(x, WORLD_SIZE_Y + cosmetic_radius),
        }
    }

    pub fn spawn_wave(&mut self, wave: &WaveSpec, rng: &mut GameRng) {
        for _ in 0..wave.asteroids {
            let at = Self::off_screen_position(ASTEROID_COSMETIC_RADIUS, rng);
            let _ = self.spawn_asteroid(at, rng);
        }
        for _ in 0..wave.beetles {
            let at = Self::off_screen_position(BEETLE_COSMETIC_RADIUS, rng);
            let _ = self.spawn_beetle(at);
        }
        for _ in 0..wave.wasps {
            let at = Self::off_screen_position(WASP_COSMETIC_RADIUS, rng);
            let _ = self.spawn_wasp(at);
        }
    }

    /// Two rows of boxes entering from the right: one hanging from the top
    /// edge, one resting on the bottom.
    pub fn spawn_box_cluster(&mut self, drift_speed: f32, rng: &mut GameRng) {
        let half = BOX_SIDE_LENGTH * 0.5;
        let x = WORLD_SIZE_X + half;
        let top_count = rng.int_in_range(1, BOX_MAX_PER_ROW);
        let bottom_count = rng.int_in_range(1, BOX_MAX_PER_ROW);

        for i in 0..top_count {
            let y = WORLD_SIZE_Y - BOX_SPACING * (i as f32 + 1.0) + half;
            let _ = self.spawn_box(Vec2::new(x, y), drift_speed);
        }
        for i in 0..bottom_count {
            let y = BOX_SPACING * i as f32 + (BOX_SPACING - BOX_SIDE_LENGTH) + half;
            let _ = self.spawn_box(Vec2::new(x, y), drift_speed);
        }
    }

    /// Uniformly one of asteroid, beetle or wasp.
    pub fn spawn_random_enemy(&mut self, at: Vec2, rng: &mut GameRng) {
        let _ = match rng.int_in_range(0, 2) {
            0 => self.spawn_asteroid(at, rng),
            1 => self.spawn_beetle(at),
            _ => self.spawn_wasp(at),
        };
    }

    // ── Frame steps ────────────────────────────────────────────────────

    pub fn update_entities(&mut self, rng: &mut GameRng, dt: f32) {
        let view = self.view();
        if let Some(ship) = self.ship.as_mut() {
            ship.update(&view, rng, dt);
        }
        let view = self.view();
        self.bullets.update_all(&view, rng, dt);
        self.asteroids.update_all(&view, rng, dt);
        self.beetles.update_all(&view, rng, dt);
        self.wasps.update_all(&view, rng, dt);
        self.debris.update_all(&view, rng, dt);
        self.boxes.update_all(&view, rng, dt);
    }

    /// Asteroids wrap and enemies chase, so only these kinds can leave for good.
    pub fn mark_off_screen_as_garbage(&mut self) {
        self.bullets.mark_off_screen_as_garbage();
        self.debris.mark_off_screen_as_garbage();
        self.boxes.mark_off_screen_as_garbage();
    }

    pub fn apply_effects(&mut self, effects: Vec<Effect>, handles: &mut EngineHandles) {
        for effect in effects {
            match effect {
                Effect::DebrisBurst {
                    origin,
                    base_velocity,
                    count,
                    radius,
                    color,
                } => self.spawn_debris_cluster(origin, base_velocity, count, radius, color, &mut handles.rng),
                Effect::Score(points) => {
                    if let Some(ship) = self.ship.as_mut() {
                        ship.add_score(points);
                    }
                }
                Effect::Sound(sound) => handles.audio.play(sound),
                Effect::ReleaseEnemy { at } => self.spawn_random_enemy(at, &mut handles.rng),
            }
        }
    }

    pub fn collect_garbage(&mut self) -> usize {
        self.bullets.collect_garbage()
            + self.asteroids.collect_garbage()
            + self.beetles.collect_garbage()
            + self.wasps.collect_garbage()
            + self.debris.collect_garbage()
            + self.boxes.collect_garbage()
    }

    /// No asteroid, beetle or wasp is still alive. Empty pools count as dead.
    pub fn are_all_enemies_dead(&self) -> bool {
        self.asteroids.all_dead() && self.beetles.all_dead() && self.wasps.all_dead()
    }

    pub fn enemies_alive(&self) -> usize {
        self.asteroids.count_alive() + self.beetles.count_alive() + self.wasps.count_alive()
    }

    /// Destroy every enemy and box with a death burst each.
    pub fn kill_all_enemies(&mut self, rng: &mut GameRng) {
        let mut bursts = Vec::new();
        collect_kills(&mut self.asteroids, &mut bursts);
        collect_kills(&mut self.beetles, &mut bursts);
        collect_kills(&mut self.wasps, &mut bursts);
        collect_kills(&mut self.boxes, &mut bursts);
        for (at, color) in bursts {
            self.spawn_debris_cluster(at, Vec2::zeros(), PLAYER_DEATH_DEBRIS_NUM, ENTITY_DEAD_DEBRIS_RADIUS, color, rng);
        }
    }

    // ── Drawing ────────────────────────────────────────────────────────

    pub fn render(&self, sink: &mut dyn VertexSink) {
        self.boxes.render_all(sink);
        self.debris.render_all(sink);
        self.asteroids.render_all(sink);
        self.beetles.render_all(sink);
        self.wasps.render_all(sink);
        self.bullets.render_all(sink);
        if let Some(ship) = &self.ship {
            ship.render(sink);
        }
    }

    pub fn debug_render(&self, sink: &mut dyn VertexSink) {
        self.boxes.debug_render_all(sink);
        self.asteroids.debug_render_all(sink);
        self.beetles.debug_render_all(sink);
        self.wasps.debug_render_all(sink);
        self.bullets.debug_render_all(sink);
        if let Some(ship) = &self.ship {
            ship.debug_render(sink);
        }
    }
}

fn collect_kills<T: Entity>(pool: &mut Pool<T>, out: &mut Vec<(Vec2, Rgba8)>) {
    for entity in pool.values_mut() {
        let core = entity.core_mut();
        if core.is_alive() {
            out.push((core.position, core.color));
        }
        core.kill();
        core.mark_garbage();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;

    #[test]
    fn empty_world_has_no_enemies_alive() {
        let world = World::new();
        assert!(world.are_all_enemies_dead());
    }

    #[test]
    fn one_live_beetle_keeps_enemies_alive() {
        let mut world = World::new();
        world.spawn_beetle(vec2(10.0, 10.0)).unwrap();
        assert!(!world.are_all_enemies_dead());
        world.beetles.values_mut().for_each(|b| b.core_mut().mark_dead());
        assert!(world.are_all_enemies_dead());
    }

    #[test]
    fn debris_cluster_spawns_exact_count() {
        let mut rng = GameRng::seeded(8);
        let mut world = World::new();
        world.spawn_debris_cluster(vec2(50.0, 50.0), vec2(1.0, 0.0), 12, 0.3, Rgba8::WHITE, &mut rng);
        assert_eq!(world.debris.len(), 12);
        for d in world.debris.values() {
            let r = d.core().physics_radius() / 0.5;
            assert!((0.3..=1.5 + 1e-4).contains(&r));
        }
    }

    #[test]
    fn asteroid_pool_caps_at_capacity() {
        let mut rng = GameRng::seeded(8);
        let mut world = World::new();
        for _ in 0..MAX_ASTEROIDS_NUM {
            world.spawn_asteroid(vec2(50.0, 50.0), &mut rng).unwrap();
        }
        assert!(world.spawn_asteroid(vec2(50.0, 50.0), &mut rng).is_err());
        assert_eq!(world.asteroids.len(), MAX_ASTEROIDS_NUM);
    }

    #[test]
    fn off_screen_spawn_is_outside_world() {
        let mut rng = GameRng::seeded(13);
        for _ in 0..50 {
            let p = World::off_screen_position(2.0, &mut rng);
            let outside = p.x <= -2.0 || p.x >= WORLD_SIZE_X + 2.0 || p.y <= -2.0 || p.y >= WORLD_SIZE_Y + 2.0;
            assert!(outside);
        }
    }

    #[test]
    fn box_cluster_rows_stay_in_bounds() {
        let mut rng = GameRng::seeded(21);
        let mut world = World::new();
        world.spawn_box_cluster(4.4, &mut rng);
        assert!((2..=20).contains(&world.boxes.len()));
        for b in world.boxes.values() {
            let c = b.collider();
            assert!(c.mins.y >= 0.0 && c.maxs.y <= WORLD_SIZE_Y);
        }
    }

    #[test]
    fn kill_all_enemies_leaves_debris_and_garbage() {
        let mut rng = GameRng::seeded(21);
        let mut world = World::new();
        world.spawn_wasp(vec2(10.0, 10.0)).unwrap();
        world.spawn_beetle(vec2(20.0, 10.0)).unwrap();
        world.kill_all_enemies(&mut rng);
        assert!(world.are_all_enemies_dead());
        assert_eq!(world.debris.len(), 2 * PLAYER_DEATH_DEBRIS_NUM);
        world.collect_garbage();
        assert!(world.beetles.is_empty() && world.wasps.is_empty());
    }
}
