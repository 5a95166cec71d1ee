use bevy::prelude::*;
mod components;
mod config;
mod events;
mod gesture;
mod layout;
mod platform;
mod resources;
mod systems;

use config::ConfigPlugin;
use events::LifeChangedEvent;
use platform::wake_lock::ScreenWakeLock;
use resources::Session;
use systems::display::*;
use systems::game_screen::*;
use systems::input::*;
use systems::setup_screen::*;
use systems::wake_lock::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Setup,
    Playing,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Life Counter".into(),
                resolution: (720., 1280.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((ConfigPlugin::default(), LifeCounterPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Setup screen, game screen and the session that lives between them.
/// Expects `CounterConfig` and `SetupOptions` to be inserted already.
pub struct LifeCounterPlugin;

impl Plugin for LifeCounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ScreenWakeLock>()
            .add_event::<LifeChangedEvent>()
            .add_systems(OnEnter(AppState::Setup), spawn_setup_screen)
            .add_systems(OnExit(AppState::Setup), despawn_setup_screen)
            .add_systems(
                OnEnter(AppState::Playing),
                (start_session, acquire_wake_lock).chain(),
            )
            .add_systems(
                OnExit(AppState::Playing),
                (stop_session, release_wake_lock),
            )
            .add_systems(
                Update,
                (setup_button_system, sync_setup_values_system)
                    .chain()
                    .run_if(in_state(AppState::Setup)),
            )
            .add_systems(
                Update,
                (
                    tick_session_system,
                    region_press_system,
                    sync_region_text_system,
                    log_life_changes,
                )
                    .chain()
                    .run_if(resource_exists::<Session>),
            )
            .add_systems(
                Update,
                (
                    button_highlight_system,
                    (reset_button_system, follow_window_focus)
                        .run_if(in_state(AppState::Playing)),
                ),
            );
    }
}
