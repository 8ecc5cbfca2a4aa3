use bevy::prelude::*;
use constants::environment::GROUND_PLANE_NAME;

use crate::engine::assets::environment_manifest::GroundPlane;
use crate::engine::collision::registry::{CollidableRegistry, CollisionChecked};

#[derive(Component)]
pub struct GeneratedGround;

/// Spawn the manifest-declared ground plane and register it as the floor.
pub fn spawn_ground_plane(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    registry: &mut ResMut<CollidableRegistry>,
    ground: &GroundPlane,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.37, 0.34),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground.size, ground.size))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, ground.elevation, 0.0),
        Name::new(GROUND_PLANE_NAME),
        GeneratedGround,
        // Registered directly below; the streaming registration pass skips it.
        CollisionChecked,
    ));
    registry.register(GROUND_PLANE_NAME, ground_quad(ground.size, ground.elevation), true);
    info!("Ground plane created at elevation {}", ground.elevation);
}

/// Two world-space triangles covering the ground plane.
pub fn ground_quad(size: f32, elevation: f32) -> Vec<[Vec3; 3]> {
    let half = size * 0.5;
    let a = Vec3::new(-half, elevation, -half);
    let b = Vec3::new(half, elevation, -half);
    let c = Vec3::new(half, elevation, half);
    let d = Vec3::new(-half, elevation, half);
    vec![[a, b, c], [a, c, d]]
}
