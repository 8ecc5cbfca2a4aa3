use bevy::prelude::*;

use super::registry::CollidableRegistry;

/// Nearest intersection of a pick ray with the registered geometry.
#[derive(Debug, Clone)]
pub struct RayHit {
    pub name: String,
    pub distance: f32,
    pub point: Vec3,
}

/// Cast a ray against every registered collider, nearest hit wins.
pub fn cast_ray(registry: &CollidableRegistry, origin: Vec3, direction: Vec3) -> Option<RayHit> {
    let direction = direction.try_normalize()?;
    let mut nearest: Option<RayHit> = None;
    for collider in registry.iter() {
        for tri in &collider.triangles {
            let Some(distance) = ray_triangle_intersection(origin, direction, tri) else {
                continue;
            };
            if nearest.as_ref().is_none_or(|hit| distance < hit.distance) {
                nearest = Some(RayHit {
                    name: collider.name.clone(),
                    distance,
                    point: origin + direction * distance,
                });
            }
        }
    }
    nearest
}

/// Möller–Trumbore ray/triangle intersection, both triangle sides.
///
/// Returns the distance along the (normalised) ray, or `None` on a miss.
pub fn ray_triangle_intersection(origin: Vec3, direction: Vec3, tri: &[Vec3; 3]) -> Option<f32> {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = direction.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > 1e-6).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle_at(z: f32) -> [Vec3; 3] {
        [
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn ray_hits_facing_triangle() {
        let tri = unit_triangle_at(-5.0);
        let t = ray_triangle_intersection(Vec3::ZERO, Vec3::NEG_Z, &tri);
        assert!(t.is_some());
        assert!((t.unwrap() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_triangle_outside_bounds() {
        let tri = unit_triangle_at(-5.0);
        let t = ray_triangle_intersection(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z, &tri);
        assert!(t.is_none());
    }

    #[test]
    fn ray_ignores_triangle_behind_origin() {
        let tri = unit_triangle_at(5.0);
        let t = ray_triangle_intersection(Vec3::ZERO, Vec3::NEG_Z, &tri);
        assert!(t.is_none());
    }

    #[test]
    fn nearest_collider_wins() {
        let mut registry = CollidableRegistry::default();
        registry.register("Wall_02", vec![unit_triangle_at(-8.0)], false);
        registry.register("Rock", vec![unit_triangle_at(-3.0)], false);

        let hit = cast_ray(&registry, Vec3::ZERO, Vec3::NEG_Z).expect("expected a hit");
        assert_eq!(hit.name, "Rock");
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert!((hit.point.z + 3.0).abs() < 1e-5);
    }

    #[test]
    fn miss_reports_none() {
        let mut registry = CollidableRegistry::default();
        registry.register("Wall_02", vec![unit_triangle_at(-8.0)], false);
        assert!(cast_ray(&registry, Vec3::ZERO, Vec3::Z).is_none());
    }
}
