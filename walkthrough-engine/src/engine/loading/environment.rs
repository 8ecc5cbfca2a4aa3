use bevy::gltf::GltfAssetLabel;
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use constants::locomotion::CAMERA_NEAR_CLIP;

use crate::engine::assets::environment_manifest::EnvironmentManifest;
use crate::engine::camera::first_person::{FirstPersonRig, WalkthroughCamera};
use crate::engine::collision::registry::{CollidableRegistry, CollisionChecked};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::ground::spawn_ground_plane;
use crate::engine::scene::sky::SkyboxLoader;

/// Root of the spawned environment scene.
#[derive(Component)]
pub struct EnvironmentRoot;

/// Spawn the scene, camera rig, and manifest-declared extras once the
/// manifest resource is available.
pub fn spawn_environment(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<EnvironmentManifest>>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<CollidableRegistry>,
) {
    if loading_progress.environment_spawned {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    // Scene geometry streams in asynchronously; collidables register as
    // individual meshes become readable.
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.scene_file.clone()));
    commands.spawn((SceneRoot(scene), EnvironmentRoot));

    spawn_camera(&mut commands, &manifest);

    if let Some(ground) = &manifest.ground_plane {
        spawn_ground_plane(&mut commands, &mut meshes, &mut materials, &mut registry, ground);
    }
    if let Some(skybox) = &manifest.skybox {
        commands.insert_resource(SkyboxLoader::new(
            asset_server.load(&skybox.texture),
            skybox.brightness,
        ));
    }

    loading_progress.environment_spawned = true;
    info!("→ Environment spawned: {}", manifest.scene_file);
}

fn spawn_camera(commands: &mut Commands, manifest: &EnvironmentManifest) {
    let heading = manifest.spawn_heading();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR_CLIP,
            ..default()
        }),
        Transform::from_translation(manifest.spawn_position())
            .with_rotation(Quat::from_euler(EulerRot::YXZ, heading, 0.0, 0.0)),
        WalkthroughCamera,
    ));
    commands.insert_resource(FirstPersonRig::with_heading(heading));
}

/// Register collision geometry for scene meshes as they finish loading.
///
/// Meshes whose data is not yet readable are retried on later ticks; until
/// then the camera treats them as absent.
pub fn register_scene_collidables(
    mut commands: Commands,
    manifest: Option<Res<EnvironmentManifest>>,
    meshes: Res<Assets<Mesh>>,
    mut registry: ResMut<CollidableRegistry>,
    pending: Query<(Entity, &Name, &Mesh3d, &GlobalTransform), Without<CollisionChecked>>,
) {
    let Some(manifest) = manifest else {
        return;
    };

    for (entity, name, mesh3d, transform) in &pending {
        let Some(mesh) = meshes.get(&mesh3d.0) else {
            continue;
        };
        let Some(triangles) = world_triangles(mesh, transform) else {
            // No readable triangle data; this mesh can never collide.
            commands.entity(entity).insert(CollisionChecked);
            continue;
        };
        let is_floor = manifest.is_ground_name(name.as_str());
        registry.register(name.as_str(), triangles, is_floor);
        commands.entity(entity).insert(CollisionChecked);
        info!("Collision enabled for mesh: {}", name.as_str());
    }
}

/// Extract a mesh's triangles in world space.
fn world_triangles(mesh: &Mesh, transform: &GlobalTransform) -> Option<Vec<[Vec3; 3]>> {
    if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
        return None;
    }
    let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION)? {
        VertexAttributeValues::Float32x3(values) => values,
        _ => return None,
    };
    let world: Vec<Vec3> = positions
        .iter()
        .map(|p| transform.transform_point(Vec3::from_array(*p)))
        .collect();

    let mut triangles = Vec::new();
    match mesh.indices() {
        Some(indices) => {
            let flat: Vec<usize> = indices.iter().collect();
            for chunk in flat.chunks_exact(3) {
                if chunk.iter().any(|&i| i >= world.len()) {
                    continue;
                }
                triangles.push([world[chunk[0]], world[chunk[1]], world[chunk[2]]]);
            }
        }
        None => {
            for chunk in world.chunks_exact(3) {
                triangles.push([chunk[0], chunk[1], chunk[2]]);
            }
        }
    }
    (!triangles.is_empty()).then_some(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::Indices;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0_f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        );
        mesh.insert_indices(Indices::U32(vec![0, 1, 2]));
        mesh
    }

    #[test]
    fn triangles_are_transformed_into_world_space() {
        let mesh = triangle_mesh();
        let transform = GlobalTransform::from(Transform::from_xyz(10.0, 0.0, 0.0));
        let triangles = world_triangles(&mesh, &transform).expect("expected triangles");
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0][0], Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(triangles[0][1], Vec3::new(11.0, 0.0, 0.0));
    }

    #[test]
    fn non_triangle_topology_yields_no_collision_data() {
        let mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        let transform = GlobalTransform::IDENTITY;
        assert!(world_triangles(&mesh, &transform).is_none());
    }
}
