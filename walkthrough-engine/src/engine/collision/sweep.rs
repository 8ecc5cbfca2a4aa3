use bevy::prelude::*;
use constants::locomotion::{COLLISION_SKIN, MAX_SLIDE_ITERATIONS};

use super::registry::CollidableRegistry;

/// Earliest contact along a swept unit sphere, in ellipsoid space.
struct SweepContact {
    t: f32,
    point: Vec3,
}

/// Resolve a candidate displacement for an ellipsoid against the registry.
///
/// Returns the largest sub-displacement along the candidate vector that does
/// not penetrate any registered triangle, with blocked motion redirected
/// along the obstructing surface rather than zeroed. An empty registry
/// passes the displacement through untouched.
pub fn slide_move(
    center: Vec3,
    radii: Vec3,
    displacement: Vec3,
    registry: &CollidableRegistry,
) -> Vec3 {
    if displacement.length_squared() <= f32::EPSILON {
        return Vec3::ZERO;
    }

    // Work in ellipsoid space, where the camera volume is a unit sphere.
    let inv = Vec3::ONE / radii;
    let start = center * inv;
    let mut pos = start;
    let mut vel = displacement * inv;

    for _ in 0..MAX_SLIDE_ITERATIONS {
        if vel.length_squared() < 1e-12 {
            break;
        }

        let Some(contact) = earliest_contact(pos, vel, inv, registry) else {
            pos += vel;
            break;
        };

        // Advance to just short of the contact so the next pass starts clear.
        let travel = vel * contact.t;
        let travel_len = travel.length();
        if travel_len > COLLISION_SKIN {
            pos += travel * ((travel_len - COLLISION_SKIN) / travel_len);
        }

        let normal = (pos - contact.point).normalize_or_zero();
        if normal == Vec3::ZERO {
            break;
        }

        let remaining = vel * (1.0 - contact.t);
        vel = remaining - normal * remaining.dot(normal);
    }

    (pos - start) * radii
}

fn earliest_contact(
    pos: Vec3,
    vel: Vec3,
    inv_radii: Vec3,
    registry: &CollidableRegistry,
) -> Option<SweepContact> {
    let mut nearest: Option<SweepContact> = None;
    for collider in registry.iter() {
        for tri in &collider.triangles {
            let tri_e = [
                tri[0] * inv_radii,
                tri[1] * inv_radii,
                tri[2] * inv_radii,
            ];
            if let Some(contact) = sweep_unit_sphere(pos, vel, &tri_e) {
                if nearest.as_ref().is_none_or(|n| contact.t < n.t) {
                    nearest = Some(contact);
                }
            }
        }
    }
    nearest
}

/// Sweep a unit sphere from `pos` along `vel` against one triangle.
///
/// Face contact is tested first, then the triangle's vertices and edges.
fn sweep_unit_sphere(pos: Vec3, vel: Vec3, tri: &[Vec3; 3]) -> Option<SweepContact> {
    let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).try_normalize()?;

    // Orient the plane normal toward the sphere so both triangle sides collide.
    let n = if (pos - tri[0]).dot(normal) < 0.0 {
        -normal
    } else {
        normal
    };
    let dist = (pos - tri[0]).dot(n);
    let ndotv = n.dot(vel);

    let mut embedded = false;
    let t0;
    if ndotv.abs() < 1e-8 {
        // Moving parallel to the plane: either clear of it or embedded in it.
        if dist >= 1.0 {
            return None;
        }
        embedded = true;
        t0 = 0.0;
    } else {
        let ta = (1.0 - dist) / ndotv;
        let tb = (-1.0 - dist) / ndotv;
        let (lo, hi) = if ta > tb { (tb, ta) } else { (ta, tb) };
        if lo > 1.0 || hi < 0.0 {
            return None;
        }
        t0 = lo.clamp(0.0, 1.0);
    }

    if !embedded {
        let plane_point = pos - n + vel * t0;
        if point_in_triangle(plane_point, tri) {
            return Some(SweepContact {
                t: t0,
                point: plane_point,
            });
        }
    }

    let mut best: Option<SweepContact> = None;

    for &vertex in tri {
        let a = vel.length_squared();
        let b = 2.0 * vel.dot(pos - vertex);
        let c = (vertex - pos).length_squared() - 1.0;
        if let Some(t) = lowest_root(a, b, c, 1.0) {
            if best.as_ref().is_none_or(|n| t < n.t) {
                best = Some(SweepContact { t, point: vertex });
            }
        }
    }

    for (va, vb) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
        let edge = vb - va;
        let base = va - pos;
        let edge_sq = edge.length_squared();
        if edge_sq < 1e-12 {
            continue;
        }
        let edge_dot_vel = edge.dot(vel);
        let edge_dot_base = edge.dot(base);

        let a = edge_sq * -vel.length_squared() + edge_dot_vel * edge_dot_vel;
        let b = edge_sq * (2.0 * vel.dot(base)) - 2.0 * edge_dot_vel * edge_dot_base;
        let c = edge_sq * (1.0 - base.length_squared()) + edge_dot_base * edge_dot_base;
        if let Some(t) = lowest_root(a, b, c, 1.0) {
            let f = (edge_dot_vel * t - edge_dot_base) / edge_sq;
            if (0.0..=1.0).contains(&f) {
                if best.as_ref().is_none_or(|n| t < n.t) {
                    best = Some(SweepContact {
                        t,
                        point: va + edge * f,
                    });
                }
            }
        }
    }

    best
}

fn point_in_triangle(p: Vec3, tri: &[Vec3; 3]) -> bool {
    let v0 = tri[1] - tri[0];
    let v1 = tri[2] - tri[0];
    let v2 = p - tri[0];
    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-12 {
        return false;
    }
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    v >= 0.0 && w >= 0.0 && v + w <= 1.0
}

/// Smallest root of `ax² + bx + c = 0` within `[0, max_t]`, if any.
fn lowest_root(a: f32, b: f32, c: f32, max_t: f32) -> Option<f32> {
    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return None;
        }
        let t = -c / b;
        return (0.0..=max_t).contains(&t).then_some(t);
    }

    let det = b * b - 4.0 * a * c;
    if det < 0.0 {
        return None;
    }
    let sqrt_det = det.sqrt();
    let mut r1 = (-b - sqrt_det) / (2.0 * a);
    let mut r2 = (-b + sqrt_det) / (2.0 * a);
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }
    if (0.0..=max_t).contains(&r1) {
        return Some(r1);
    }
    if (0.0..=max_t).contains(&r2) {
        return Some(r2);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADII: Vec3 = Vec3::ONE;

    fn floor_registry(height: f32) -> CollidableRegistry {
        let mut registry = CollidableRegistry::default();
        registry.register("Floor", floor_quad(height, 100.0), true);
        registry
    }

    fn floor_quad(height: f32, extent: f32) -> Vec<[Vec3; 3]> {
        let a = Vec3::new(-extent, height, -extent);
        let b = Vec3::new(extent, height, -extent);
        let c = Vec3::new(extent, height, extent);
        let d = Vec3::new(-extent, height, extent);
        vec![[a, b, c], [a, c, d]]
    }

    fn wall_quad(x: f32, extent: f32) -> Vec<[Vec3; 3]> {
        let a = Vec3::new(x, -extent, -extent);
        let b = Vec3::new(x, extent, -extent);
        let c = Vec3::new(x, extent, extent);
        let d = Vec3::new(x, -extent, extent);
        vec![[a, b, c], [a, c, d]]
    }

    #[test]
    fn empty_registry_passes_displacement_through() {
        let registry = CollidableRegistry::default();
        let resolved = slide_move(Vec3::new(0.0, 10.0, 0.0), RADII, Vec3::new(0.3, -0.2, 0.1), &registry);
        assert!((resolved - Vec3::new(0.3, -0.2, 0.1)).length() < 1e-6);
    }

    #[test]
    fn resolved_displacement_never_exceeds_candidate() {
        let registry = floor_registry(0.0);
        let candidate = Vec3::new(0.0, -0.5, 0.0);
        let mut pos = Vec3::new(0.0, 5.0, 0.0);
        for _ in 0..40 {
            let resolved = slide_move(pos, RADII, candidate, &registry);
            assert!(
                resolved.length() <= candidate.length() + 1e-4,
                "resolved {} exceeds candidate {}",
                resolved.length(),
                candidate.length()
            );
            pos += resolved;
        }
    }

    #[test]
    fn fall_settles_on_floor() {
        let registry = floor_registry(0.0);
        let gravity_step = Vec3::new(0.0, -9.81 / 60.0, 0.0);
        let mut pos = Vec3::new(0.0, 5.0, 0.0);
        let mut previous_y = pos.y;

        // Descent is strictly downward until the floor interrupts it.
        for _ in 0..60 {
            let resolved = slide_move(pos, RADII, gravity_step, &registry);
            pos += resolved;
            if previous_y > 1.01 {
                assert!(pos.y < previous_y, "fall should keep descending");
            }
            previous_y = pos.y;
        }

        // Settled just above the floor at the ellipsoid's vertical radius.
        assert!(
            (pos.y - 1.0).abs() < 0.01,
            "expected to rest near y=1, got y={}",
            pos.y
        );
        let settled = slide_move(pos, RADII, gravity_step, &registry);
        assert!(
            settled.y.abs() < 1e-3,
            "vertical displacement should settle to ~0, got {}",
            settled.y
        );
    }

    #[test]
    fn wall_contact_slides_instead_of_stopping() {
        let mut registry = CollidableRegistry::default();
        registry.register("Wall", wall_quad(2.0, 50.0), false);

        // Head toward the wall at a diagonal; the tangential part survives.
        let pos = Vec3::new(0.0, 0.0, 0.0);
        let candidate = Vec3::new(2.0, 0.0, 2.0);
        let resolved = slide_move(pos, RADII, candidate, &registry);

        assert!(
            pos.x + resolved.x <= 1.0 + 1e-3,
            "ellipsoid centre must stay a radius away from the wall, got x={}",
            pos.x + resolved.x
        );
        assert!(
            resolved.z > 0.5,
            "motion along the wall should continue, got z={}",
            resolved.z
        );
    }

    #[test]
    fn unobstructed_walk_keeps_full_speed() {
        let registry = floor_registry(0.0);
        let pos = Vec3::new(0.0, 1.0, 0.0);
        let candidate = Vec3::new(0.5, 0.0, 0.0);
        let resolved = slide_move(pos, RADII, candidate, &registry);
        assert!(
            (resolved.length() - candidate.length()).abs() < 1e-3,
            "free movement should resolve at full magnitude, got {}",
            resolved.length()
        );
    }

    #[test]
    fn elongated_ellipsoid_rests_at_its_vertical_radius() {
        let registry = floor_registry(0.0);
        let radii = Vec3::new(0.5, 1.8, 0.5);
        let mut pos = Vec3::new(0.0, 6.0, 0.0);
        for _ in 0..200 {
            let resolved = slide_move(pos, radii, Vec3::new(0.0, -0.1635, 0.0), &registry);
            pos += resolved;
        }
        assert!(
            (pos.y - 1.8).abs() < 0.01,
            "expected rest height near 1.8, got {}",
            pos.y
        );
    }
}
