use super::constants::*;
use super::engine::Vertex;
use super::entity::{Entity, EntityCore, EntityKind, WorldView};
use super::geometry::random_fan;
use super::math::Vec2;
use super::rng::GameRng;

pub struct Asteroid {
    core: EntityCore,
    verts: Vec<Vertex>,
}

impl Asteroid {
    pub fn new(position: Vec2, rng: &mut GameRng) -> Self {
        let mut core = EntityCore::new(
            position,
            0.0,
            ASTEROID_PHYSICS_RADIUS,
            ASTEROID_COSMETIC_RADIUS,
            ASTEROID_HEALTH,
            ASTEROID_COLOR,
        );
        core.orientation_degrees = rng.float_in_range(0.0, 360.0);
        core.angular_velocity = rng.float_in_range(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN);
        let vx = rng.float_in_range(-ASTEROID_SPEED, ASTEROID_SPEED);
        let vy = if rng.int_in_range(0, 1) == 0 {
            ASTEROID_SPEED - vx.abs()
        } else {
            vx.abs() - ASTEROID_SPEED
        };
        core.velocity = Vec2::new(vx, vy);

        let verts = random_fan(
            rng,
            ASTEROID_TRIS_NUM,
            ASTEROID_PHYSICS_RADIUS,
            ASTEROID_COSMETIC_RADIUS,
            ASTEROID_COLOR,
        );
        Self { core, verts }
    }
}

impl Entity for Asteroid {
    const KIND: EntityKind = EntityKind::Asteroid;

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
        self.core.integrate(dt);
        self.core.wrap_around_world();
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let a = Asteroid::new(vec2(50.0, 50.0), &mut GameRng::seeded(11));
        let b = Asteroid::new(vec2(50.0, 50.0), &mut GameRng::seeded(11));
        assert_eq!(a.core().velocity, b.core().velocity);
        assert_eq!(a.local_verts(), b.local_verts());
    }

    #[test]
    fn wraps_instead_of_leaving() {
        let mut rng = GameRng::seeded(5);
        let mut a = Asteroid::new(vec2(WORLD_SIZE_X + 1.9, 50.0), &mut rng);
        a.core_mut().velocity = vec2(10.0, 0.0);
        a.update(&WorldView::default(), &mut rng, 0.1);
        assert_eq!(a.core().position.x, -ASTEROID_COSMETIC_RADIUS);
        assert!(!a.core().is_off_screen());
    }

    #[test]
    fn speed_components_sum_to_constant() {
        let mut rng = GameRng::seeded(21);
        for _ in 0..20 {
            let a = Asteroid::new(vec2(0.0, 0.0), &mut rng);
            let v = a.core().velocity;
            assert!((v.x.abs() + v.y.abs() - ASTEROID_SPEED).abs() < 1e-4);
        }
    }
}
