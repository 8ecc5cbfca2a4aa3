use bevy::prelude::*;

/// Marker for scene entities whose geometry has been registered as collidable.
#[derive(Component)]
pub struct CollisionChecked;

/// A registered collidable: world-space triangle soup plus identity.
pub struct Collider {
    pub name: String,
    pub triangles: Vec<[Vec3; 3]>,
    pub is_floor: bool,
}

/// Everything the camera can collide with or pick against.
///
/// Until the environment finishes loading this may be empty or partial;
/// queries against an empty registry simply report no contact.
#[derive(Resource, Default)]
pub struct CollidableRegistry {
    colliders: Vec<Collider>,
}

impl CollidableRegistry {
    pub fn register(&mut self, name: impl Into<String>, triangles: Vec<[Vec3; 3]>, is_floor: bool) {
        self.colliders.push(Collider {
            name: name.into(),
            triangles,
            is_floor,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    /// Names of the designated floor surfaces, the only valid teleport targets.
    pub fn floor_names(&self) -> Vec<String> {
        self.colliders
            .iter()
            .filter(|c| c.is_floor)
            .map(|c| c.name.clone())
            .collect()
    }
}
