use bevy::core_pipeline::Skybox;
use bevy::prelude::*;

use crate::engine::camera::first_person::WalkthroughCamera;

/// Pending skybox cubemap, attached to the camera once the image loads.
#[derive(Resource)]
pub struct SkyboxLoader {
    handle: Handle<Image>,
    brightness: f32,
    attached: bool,
}

impl SkyboxLoader {
    pub fn new(handle: Handle<Image>, brightness: f32) -> Self {
        Self {
            handle,
            brightness,
            attached: false,
        }
    }
}

pub fn attach_skybox_when_loaded(
    mut commands: Commands,
    loader: Option<ResMut<SkyboxLoader>>,
    asset_server: Res<AssetServer>,
    cameras: Query<Entity, With<WalkthroughCamera>>,
) {
    let Some(mut loader) = loader else {
        return;
    };
    if loader.attached {
        return;
    }
    if !asset_server.is_loaded_with_dependencies(&loader.handle) {
        return;
    }
    let Ok(camera) = cameras.single() else {
        return;
    };
    commands.entity(camera).insert(Skybox {
        image: loader.handle.clone(),
        brightness: loader.brightness,
        rotation: Quat::IDENTITY,
    });
    loader.attached = true;
    info!("✓ Skybox attached");
}
