use super::constants::*;
use super::engine::Vertex;
use super::entity::{Entity, EntityCore, EntityKind, WorldView};
use super::math::{from_polar_degrees, Vec2};
use super::rng::GameRng;

pub struct Bullet {
    core: EntityCore,
    verts: Vec<Vertex>,
}

impl Bullet {
    pub fn new(position: Vec2, orientation_degrees: f32) -> Self {
        let mut core = EntityCore::new(
            position,
            orientation_degrees,
            BULLET_PHYSICS_RADIUS,
            BULLET_COSMETIC_RADIUS,
            1,
            BULLET_YELLOW_OPAQUE,
        );
        core.velocity = from_polar_degrees(orientation_degrees, BULLET_SPEED);
        Self {
            core,
            verts: bullet_verts(),
        }
    }
}

impl Entity for Bullet {
    const KIND: EntityKind = EntityKind::Bullet;

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
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }
}

// Yellow head, red tail fading out behind.
fn bullet_verts() -> Vec<Vertex> {
    let head = [(0.0, 0.5), (0.0, -0.5), (0.5, 0.0)];
    let tail = [
        (0.0, 0.5, BULLET_RED_OPAQUE),
        (-2.0, 0.0, BULLET_RED_TRANSPARENT),
        (0.0, -0.5, BULLET_RED_OPAQUE),
    ];
    head.iter()
        .map(|&(x, y)| Vertex::new(Vec2::new(x, y), BULLET_YELLOW_OPAQUE))
        .chain(tail.iter().map(|&(x, y, c)| Vertex::new(Vec2::new(x, y), c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;
    use approx::assert_relative_eq;

    #[test]
    fn travels_fifty_units_per_second() {
        let mut b = Bullet::new(vec2(10.0, 50.0), 0.0);
        b.update(&WorldView::default(), &mut GameRng::seeded(0), 1.0);
        assert_relative_eq!(b.core().position.x, 60.0, epsilon = 1e-4);
        assert_relative_eq!(b.core().position.y, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn dead_bullet_stays_put() {
        let mut b = Bullet::new(vec2(10.0, 50.0), 0.0);
        b.core_mut().destroy();
        b.update(&WorldView::default(), &mut GameRng::seeded(0), 1.0);
        assert_eq!(b.core().position, vec2(10.0, 50.0));
    }
}
