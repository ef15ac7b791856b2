use super::constants::*;
use super::engine::{Vertex, VertexSink};
use super::entity::{add_debug_overlay, Entity, EntityCore, EntityKind, WorldView};
use super::geometry::{add_verts_for_box_ring, polygon};
use super::math::{lerp, Aabb2, Vec2};
use super::rng::GameRng;

/// Destructible obstacle. Sways horizontally about an anchor that drifts
/// left, and may release an enemy when destroyed.
pub struct CargoBox {
    core: EntityCore,
    verts: Vec<Vertex>,
    anchor_x: f32,
    drift_speed: f32,
    sway_clock: f32,
    swayed_out: bool,
}

impl CargoBox {
    pub fn new(center: Vec2, drift_speed: f32) -> Self {
        let half = BOX_SIDE_LENGTH * 0.5;
        let core = EntityCore::new(
            center,
            0.0,
            half,
            half * std::f32::consts::SQRT_2,
            BOX_HEALTH,
            BOX_COLOR,
        );
        Self {
            core,
            verts: polygon(
                &[
                    [-half, -half], [half, -half], [half, half],
                    [-half, -half], [half, half], [-half, half],
                ],
                BOX_COLOR,
            ),
            anchor_x: center.x,
            drift_speed,
            sway_clock: 0.0,
            swayed_out: true,
        }
    }

    pub fn collider(&self) -> Aabb2 {
        Aabb2::from_center_half_extent(self.core.position, BOX_SIDE_LENGTH * 0.5)
    }

    fn sway_target_x(&self) -> f32 {
        if self.swayed_out {
            self.anchor_x - BOX_SWAY_DISTANCE
        } else {
            self.anchor_x
        }
    }
}

impl Entity for CargoBox {
    const KIND: EntityKind = EntityKind::Box;

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn update(&mut self, _world: &WorldView, _rng: &mut GameRng, dt: f32) {
        if self.core.is_dead() || dt <= 0.0 {
            return;
        }
        self.anchor_x -= self.drift_speed * dt;
        self.sway_clock += dt;

        let before = self.core.position.x;
        let t = (self.sway_clock / BOX_SWAY_EASE_SECONDS).clamp(0.0, 1.0);
        self.core.position.x = lerp(before, self.sway_target_x(), t);
        self.core.velocity = Vec2::new((self.core.position.x - before) / dt, 0.0);

        if self.sway_clock >= BOX_SWAY_PERIOD_SECONDS {
            self.sway_clock = 0.0;
            self.swayed_out = !self.swayed_out;
        }
    }

    fn local_verts(&self) -> &[Vertex] {
        &self.verts
    }

    fn debug_render(&self, sink: &mut dyn VertexSink) {
        let mut verts = Vec::new();
        add_debug_overlay(&self.core, &mut verts);
        add_verts_for_box_ring(
            &mut verts,
            self.core.position,
            BOX_SIDE_LENGTH * 0.5,
            DEBUG_LINE_THICKNESS,
            DEBUG_RENDER_GREY,
        );
        sink.draw_vertex_array(&verts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;

    #[test]
    fn drifts_left_over_time() {
        let mut rng = GameRng::seeded(0);
        let mut b = CargoBox::new(vec2(150.0, 50.0), 4.4);
        for _ in 0..240 {
            b.update(&WorldView::default(), &mut rng, 1.0 / 60.0);
        }
        assert!(b.core().position.x < 150.0 - 4.4 * 3.0);
    }

    #[test]
    fn never_sways_right_of_anchor() {
        let mut rng = GameRng::seeded(0);
        let mut b = CargoBox::new(vec2(WORLD_SIZE_X + 2.0, 20.0), 4.4);
        for _ in 0..120 {
            b.update(&WorldView::default(), &mut rng, 1.0 / 60.0);
            assert!(b.core().position.x <= WORLD_SIZE_X + 2.0);
            assert!(!b.core().is_off_screen());
        }
    }

    #[test]
    fn collider_tracks_position() {
        let b = CargoBox::new(vec2(10.0, 10.0), 0.0);
        assert!(b.collider().is_point_inside(&vec2(11.9, 8.1)));
        assert!(!b.collider().is_point_inside(&vec2(12.1, 10.0)));
    }
}
