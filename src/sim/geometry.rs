//! Triangle-list builders shared by the entity kinds.

use super::engine::{Rgba8, Vertex};
use super::math::{from_polar_degrees, rotate_degrees, Vec2};
use super::rng::GameRng;

const RING_SEGMENTS: usize = 16;

/// Irregular disc: `tri_count` triangles fanning around the origin with a
/// random rim radius per spoke. Deterministic given the rng state.
pub fn random_fan(
    rng: &mut GameRng,
    tri_count: usize,
    min_radius: f32,
    max_radius: f32,
    color: Rgba8,
) -> Vec<Vertex> {
    if tri_count == 0 {
        return Vec::new();
    }
    let radii: Vec<f32> = (0..tri_count)
        .map(|_| rng.float_in_range(min_radius, max_radius))
        .collect();
    let step = 360.0 / tri_count as f32;

    let mut verts = Vec::with_capacity(tri_count * 3);
    for i in 0..tri_count {
        let next = (i + 1) % tri_count;
        verts.push(Vertex::new(Vec2::zeros(), color));
        verts.push(Vertex::new(from_polar_degrees(step * i as f32, radii[i]), color));
        verts.push(Vertex::new(from_polar_degrees(step * next as f32, radii[next]), color));
    }
    verts
}

/// Build a triangle list from local-space corner triples sharing a color.
pub fn polygon(points: &[[f32; 2]], color: Rgba8) -> Vec<Vertex> {
    points
        .iter()
        .map(|p| Vertex::new(Vec2::new(p[0], p[1]), color))
        .collect()
}

/// Rotate then translate local-space verts into world space, appending to `out`.
pub fn transform_into(
    local: &[Vertex],
    orientation_degrees: f32,
    position: Vec2,
    out: &mut Vec<Vertex>,
) {
    out.extend(local.iter().map(|v| Vertex {
        position: rotate_degrees(&v.position, orientation_degrees) + position,
        color: v.color,
    }));
}

pub fn add_verts_for_line(out: &mut Vec<Vertex>, start: Vec2, end: Vec2, thickness: f32, color: Rgba8) {
    let dir = end - start;
    let len = dir.norm();
    if len <= f32::EPSILON {
        return;
    }
    let half = thickness * 0.5;
    let fwd = dir / len * half;
    let left = Vec2::new(-fwd.y, fwd.x);

    let a = start - fwd + left;
    let b = start - fwd - left;
    let c = end + fwd - left;
    let d = end + fwd + left;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::new(p, color));
    }
}

pub fn add_verts_for_ring(out: &mut Vec<Vertex>, center: Vec2, radius: f32, thickness: f32, color: Rgba8) {
    let inner = (radius - thickness * 0.5).max(0.0);
    let outer = radius + thickness * 0.5;
    let step = 360.0 / RING_SEGMENTS as f32;
    for i in 0..RING_SEGMENTS {
        let a0 = step * i as f32;
        let a1 = step * (i + 1) as f32;
        let in0 = center + from_polar_degrees(a0, inner);
        let in1 = center + from_polar_degrees(a1, inner);
        let out0 = center + from_polar_degrees(a0, outer);
        let out1 = center + from_polar_degrees(a1, outer);
        for p in [in0, out0, out1, in0, out1, in1] {
            out.push(Vertex::new(p, color));
        }
    }
}

/// Axis-aligned square outline made of four thick edges.
pub fn add_verts_for_box_ring(out: &mut Vec<Vertex>, center: Vec2, half_extent: f32, thickness: f32, color: Rgba8) {
    let corners = [
        center + Vec2::new(-half_extent, -half_extent),
        center + Vec2::new(half_extent, -half_extent),
        center + Vec2::new(half_extent, half_extent),
        center + Vec2::new(-half_extent, half_extent),
    ];
    for i in 0..4 {
        add_verts_for_line(out, corners[i], corners[(i + 1) % 4], thickness, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fan_has_three_verts_per_triangle_within_radius() {
        let mut rng = GameRng::seeded(3);
        let verts = random_fan(&mut rng, 16, 1.6, 2.0, Rgba8::WHITE);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            assert!(v.position.norm() <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn fan_rim_is_closed() {
        let mut rng = GameRng::seeded(9);
        let verts = random_fan(&mut rng, 8, 0.5, 1.0, Rgba8::WHITE);
        let last_tri_end = verts[verts.len() - 1].position;
        let first_tri_start = verts[1].position;
        assert_relative_eq!(last_tri_end.x, first_tri_start.x, epsilon = 1e-5);
        assert_relative_eq!(last_tri_end.y, first_tri_start.y, epsilon = 1e-5);
    }

    #[test]
    fn transform_rotates_then_translates() {
        let local = polygon(&[[1.0, 0.0]], Rgba8::WHITE);
        let mut out = Vec::new();
        transform_into(&local, 90.0, Vec2::new(10.0, 10.0), &mut out);
        assert_relative_eq!(out[0].position.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(out[0].position.y, 11.0, epsilon = 1e-5);
    }

    #[test]
    fn ring_emits_two_triangles_per_segment() {
        let mut out = Vec::new();
        add_verts_for_ring(&mut out, Vec2::zeros(), 2.0, 0.2, Rgba8::WHITE);
        assert_eq!(out.len(), RING_SEGMENTS * 6);
    }
}
