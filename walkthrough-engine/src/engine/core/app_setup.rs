use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::environment::HELP_TEXT;
use constants::interaction::OVERLAY_FONT_SIZE;

// Crate engine modules
use crate::engine::assets::environment_manifest::EnvironmentManifest;
use crate::engine::camera::first_person::{GravityVector, locomotion_system};
use crate::engine::collision::registry::CollidableRegistry;
use crate::engine::core::app_state::{
    AppState, FpsText, UiOverlayRoot, transition_to_preparing, transition_to_running,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::pointer_capture::{PointerCapture, pointer_capture_system};
use crate::engine::loading::environment::{register_scene_collidables, spawn_environment};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_sun;
use crate::engine::scene::sky::attach_skybox_when_loaded;
use crate::engine::session::immersive::{
    ImmersiveSession, SessionRestartEvent, immersive_session_system, initialise_session,
};
use crate::engine::session::runtime::ImmersiveRuntimeHandle;
use crate::engine::systems::fps_tracking::fps_text_update_system;
// Crate tools modules
use crate::tools::annotate::{annotate_on_pick, expire_labels};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers EnvironmentManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<EnvironmentManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<CollidableRegistry>()
        .init_resource::<PointerCapture>()
        .init_resource::<GravityVector>()
        .init_resource::<ImmersiveSession>()
        .init_resource::<ImmersiveRuntimeHandle>()
        .add_event::<SessionRestartEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading, initialise_session).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_preparing)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (spawn_environment, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Preparing)),
        );

    // Systems independent of the lifecycle state. Collidables stream in
    // whenever their geometry becomes readable, and the immersive session
    // advances regardless of loading progress.
    app.add_systems(
        Update,
        (
            register_scene_collidables,
            attach_skybox_when_loaded,
            immersive_session_system,
            fps_text_update_system,
        ),
    );

    // Interaction systems: capture transitions resolve before locomotion
    // consumes them, and picking before label expiry, all within one tick.
    app.add_systems(
        Update,
        (
            pointer_capture_system,
            locomotion_system,
            annotate_on_pick,
            expire_labels,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_sun(&mut commands);
    create_overlays(&mut commands);
}

fn create_overlays(commands: &mut Commands) {
    let root = commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .id();
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text::new(HELP_TEXT),
            TextFont {
                font_size: OVERLAY_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            },
        ));
        parent.spawn((
            Text::new("FPS: "),
            TextFont {
                font_size: OVERLAY_FONT_SIZE,
                ..default()
            },
            TextColor(Color::srgb(1., 0., 0.)),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                right: Val::Px(12.0),
                ..default()
            },
            FpsText,
        ));
    });
    commands.insert_resource(UiOverlayRoot(root));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
