use bevy::prelude::*;

use constants::environment::RELATIVE_ENVIRONMENT_PATH;

use crate::engine::assets::environment_manifest::EnvironmentManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<EnvironmentManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_ENVIRONMENT_PATH);
    info!("Loading environment manifest from: {}", manifest_path);
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

// Promote the manifest to a resource once the JSON asset is parsed
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    manifests: Res<Assets<EnvironmentManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            info!("✓ Environment manifest loaded");
            commands.insert_resource(manifest.clone());
            loading_progress.manifest_loaded = true;
        }
    }
}
