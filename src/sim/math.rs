use nalgebra::Vector2;

pub type Vec2 = Vector2<f32>;

pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Unit-or-longer vector pointing along `degrees`, counter-clockwise from +x.
pub fn from_polar_degrees(degrees: f32, length: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos() * length, radians.sin() * length)
}

pub fn orientation_degrees(v: &Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

pub fn normalized_or_zero(v: &Vec2) -> Vec2 {
    let len = v.norm();
    if len > f32::EPSILON {
        v / len
    } else {
        Vec2::zeros()
    }
}

pub fn rotate_degrees(v: &Vec2, degrees: f32) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Reflect `v` off a surface with unit normal `normal`.
pub fn reflected(v: &Vec2, normal: &Vec2) -> Vec2 {
    v - normal * (2.0 * v.dot(normal))
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Strict overlap: discs that merely touch do not collide.
pub fn discs_overlap(a: &Vec2, radius_a: f32, b: &Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    (a - b).norm_squared() < reach * reach
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub mins: Vec2,
    pub maxs: Vec2,
}

impl Aabb2 {
    pub fn from_center_half_extent(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::new(half_extent, half_extent);
        Self {
            mins: center - half,
            maxs: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.mins + self.maxs) * 0.5
    }

    pub fn is_point_inside(&self, p: &Vec2) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.y >= self.mins.y && p.y <= self.maxs.y
    }

    pub fn nearest_point(&self, p: &Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.mins.x, self.maxs.x),
            p.y.clamp(self.mins.y, self.maxs.y),
        )
    }
}

/// Moves `center` so a disc of `radius` no longer overlaps `aabb`.
/// Returns the outward contact normal when a push happened.
pub fn push_disc_out_of_aabb(center: &mut Vec2, radius: f32, aabb: &Aabb2) -> Option<Vec2> {
    let nearest = aabb.nearest_point(center);
    let offset = *center - nearest;
    let dist_sq = offset.norm_squared();

    if dist_sq > f32::EPSILON * f32::EPSILON {
        if dist_sq >= radius * radius {
            return None;
        }
        let normal = offset / dist_sq.sqrt();
        *center = nearest + normal * radius;
        return Some(normal);
    }

    // Center is inside the box: leave through the closest face.
    let exits = [
        (center.x - aabb.mins.x, Vec2::new(-1.0, 0.0)),
        (aabb.maxs.x - center.x, Vec2::new(1.0, 0.0)),
        (center.y - aabb.mins.y, Vec2::new(0.0, -1.0)),
        (aabb.maxs.y - center.y, Vec2::new(0.0, 1.0)),
    ];
    let (depth, normal) = exits
        .iter()
        .copied()
        .fold(exits[0], |best, e| if e.0 < best.0 { e } else { best });
    *center += normal * (depth + radius);
    Some(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polar_zero_degrees_points_right() {
        let v = from_polar_degrees(0.0, 50.0);
        assert_relative_eq!(v.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn orientation_round_trips_through_polar() {
        let v = from_polar_degrees(135.0, 3.0);
        assert_relative_eq!(orientation_degrees(&v), 135.0, epsilon = 1e-3);
    }

    #[test]
    fn touching_discs_do_not_overlap() {
        let a = vec2(0.0, 0.0);
        let b = vec2(2.0, 0.0);
        assert!(!discs_overlap(&a, 1.0, &b, 1.0));
        assert!(discs_overlap(&a, 1.0, &b, 1.01));
    }

    #[test]
    fn reflection_flips_normal_component() {
        let v = reflected(&vec2(3.0, -4.0), &vec2(0.0, 1.0));
        assert_relative_eq!(v.x, 3.0);
        assert_relative_eq!(v.y, 4.0);
    }

    #[test]
    fn disc_outside_box_is_left_alone() {
        let aabb = Aabb2::from_center_half_extent(vec2(10.0, 10.0), 2.0);
        let mut c = vec2(20.0, 10.0);
        assert!(push_disc_out_of_aabb(&mut c, 1.0, &aabb).is_none());
        assert_eq!(c, vec2(20.0, 10.0));
    }

    #[test]
    fn disc_grazing_face_is_pushed_along_face_normal() {
        let aabb = Aabb2::from_center_half_extent(vec2(10.0, 10.0), 2.0);
        let mut c = vec2(12.5, 10.0);
        let n = push_disc_out_of_aabb(&mut c, 1.0, &aabb).unwrap();
        assert_relative_eq!(n.x, 1.0);
        assert_relative_eq!(c.x, 13.0, epsilon = 1e-5);
    }

    #[test]
    fn disc_center_inside_leaves_through_nearest_face() {
        let aabb = Aabb2::from_center_half_extent(vec2(10.0, 10.0), 2.0);
        let mut c = vec2(10.0, 11.5);
        let n = push_disc_out_of_aabb(&mut c, 1.0, &aabb).unwrap();
        assert_relative_eq!(n.y, 1.0);
        assert_relative_eq!(c.y, 13.0, epsilon = 1e-5);
    }
}
