use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Camera spawn placement within the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: [f32; 3],
    pub heading_degrees: f32,
}

/// Generated ground plane for environments whose model floats above a
/// reference elevation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundPlane {
    pub size: f32,
    pub elevation: f32,
}

/// Skybox cubemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyboxConfig {
    pub texture: String,
    pub brightness: f32,
}

/// Complete environment manifest as a Bevy asset. Mirrors JSON structure
/// exactly; promoted to a resource once loaded.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct EnvironmentManifest {
    pub scene_file: String,
    pub ground_mesh: String,
    pub spawn: SpawnPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_plane: Option<GroundPlane>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skybox: Option<SkyboxConfig>,
}

impl EnvironmentManifest {
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn.position)
    }

    /// Initial camera heading in radians.
    pub fn spawn_heading(&self) -> f32 {
        self.spawn.heading_degrees.to_radians()
    }

    /// Whether `name` is the designated ground handle from the scene file.
    pub fn is_ground_name(&self, name: &str) -> bool {
        name == self.ground_mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_from_json() {
        let json = r#"{
            "scene_file": "environments/downtown/downtown.glb",
            "ground_mesh": "Ground_01",
            "spawn": { "position": [-10.0, 50.0, -80.0], "heading_degrees": 90.0 },
            "ground_plane": { "size": 500.0, "elevation": 380.0 },
            "skybox": { "texture": "environments/downtown/sky.dds", "brightness": 1000.0 }
        }"#;
        let manifest: EnvironmentManifest =
            serde_json::from_str(json).expect("manifest should parse");
        assert_eq!(manifest.ground_mesh, "Ground_01");
        assert!(manifest.is_ground_name("Ground_01"));
        assert!(!manifest.is_ground_name("Wall_02"));
        assert!((manifest.spawn_heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(manifest.spawn_position(), Vec3::new(-10.0, 50.0, -80.0));
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let json = r#"{
            "scene_file": "environments/plaza/plaza.glb",
            "ground_mesh": "Terrain",
            "spawn": { "position": [0.0, 2.0, 0.0], "heading_degrees": 0.0 }
        }"#;
        let manifest: EnvironmentManifest =
            serde_json::from_str(json).expect("manifest should parse");
        assert!(manifest.ground_plane.is_none());
        assert!(manifest.skybox.is_none());
    }
}
