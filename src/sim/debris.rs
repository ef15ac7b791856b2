use super::constants::*;
use super::engine::{Rgba8, Vertex, VertexSink};
use super::entity::{Entity, EntityCore, EntityKind, WorldView};
use super::geometry::{random_fan, transform_into};
use super::math::Vec2;
use super::rng::GameRng;

/// Short-lived cosmetic fragment. Never collides.
pub struct Debris {
    core: EntityCore,
    verts: Vec<Vertex>,
    lifetime: f32,
}

impl Debris {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgba8, rng: &mut GameRng) -> Self {
        let color = color.with_alpha(DEBRIS_ALPHA);
        let mut core = EntityCore::new(position, 0.0, radius * 0.5, radius * 1.5, 1, color);
        core.velocity = velocity;
        core.orientation_degrees = rng.float_in_range(0.0, 360.0);
        core.angular_velocity = rng.float_in_range(-DEBRIS_MAX_SPIN, DEBRIS_MAX_SPIN);
        let verts = random_fan(
            rng,
            DEBRIS_TRI_NUM,
            core.physics_radius() * 0.5,
            core.cosmetic_radius() * 0.75,
            color,
        );
        Self {
            core,
            verts,
            lifetime: DEBRIS_LIFETIME_SECONDS,
        }
    }

    pub fn remaining_lifetime(&self) -> f32 {
        self.lifetime
    }
}

impl Entity for Debris {
    const KIND: EntityKind = EntityKind::Debris;

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
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.core.destroy();
        }
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }

    // Fades out with remaining lifetime.
    fn render(&self, sink: &mut dyn VertexSink) {
        if self.core.is_dead() {
            return;
        }
        let fade = self.lifetime / DEBRIS_LIFETIME_SECONDS;
        let mut verts = Vec::with_capacity(self.verts.len());
        transform_into(&self.verts, self.core.orientation_degrees, self.core.position, &mut verts);
        for v in &mut verts {
            v.color = v.color.faded(fade);
        }
        sink.draw_vertex_array(&verts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;

    #[test]
    fn expires_after_lifetime() {
        let mut rng = GameRng::seeded(4);
        let mut d = Debris::new(vec2(50.0, 50.0), vec2(1.0, 0.0), 0.3, Rgba8::WHITE, &mut rng);
        d.update(&WorldView::default(), &mut rng, 1.0);
        assert!(!d.core().is_garbage());
        d.update(&WorldView::default(), &mut rng, 1.0);
        assert!(d.core().is_dead() && d.core().is_garbage());
    }

    #[test]
    fn radii_derive_from_requested_size() {
        let mut rng = GameRng::seeded(4);
        let d = Debris::new(vec2(0.0, 0.0), vec2(0.0, 0.0), 2.0, Rgba8::WHITE, &mut rng);
        assert_eq!(d.core().physics_radius(), 1.0);
        assert_eq!(d.core().cosmetic_radius(), 3.0);
        assert_eq!(d.core().color.a, DEBRIS_ALPHA);
    }

    #[test]
    fn render_fades_alpha() {
        let mut rng = GameRng::seeded(4);
        let mut d = Debris::new(vec2(0.0, 0.0), vec2(0.0, 0.0), 1.0, Rgba8::WHITE, &mut rng);
        d.update(&WorldView::default(), &mut rng, 1.0);
        let mut out: Vec<Vertex> = Vec::new();
        d.render(&mut out);
        assert_eq!(out.len(), DEBRIS_TRI_NUM * 3);
        assert!(out.iter().all(|v| v.color.a < DEBRIS_ALPHA));
    }
}
