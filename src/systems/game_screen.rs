use crate::components::{
    ChangeIndicator, ControlArea, FirstPlayerBadge, GameScreen, LifeDisplay, PlayerRegion,
    ResetButton,
};
use crate::config::CounterConfig;
use crate::gesture::Direction;
use crate::layout::{player_color, region_rotation, GridLayout};
use crate::resources::{Session, SetupOptions};
use crate::AppState;
use bevy::prelude::*;

// Builds the session from the chosen options and lays out one region per player
pub fn start_session(
    mut commands: Commands,
    options: Res<SetupOptions>,
    config: Res<CounterConfig>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let mut session =
        match Session::start(options.player_count, options.initial_life, config.timing()) {
            Ok(session) => session,
            Err(err) => {
                warn!("Cannot start game: {err}");
                next_state.set(AppState::Setup);
                return;
            }
        };
    let first = session.pick_first_player(&mut rand::rng());

    let player_count = session.player_count();
    let grid = GridLayout::for_players(player_count);
    info!(
        "Session started: {} players in {}x{} grid, player {} goes first",
        player_count,
        grid.columns,
        grid.rows,
        first + 1
    );

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Grid,
                grid_template_columns: RepeatedGridTrack::flex(grid.columns as u16, 1.0),
                grid_template_rows: RepeatedGridTrack::flex(grid.rows as u16, 1.0),
                column_gap: Val::Px(4.0),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            GameScreen,
        ))
        .with_children(|grid_node| {
            for player in 0..player_count {
                spawn_player_region(grid_node, player, player_count, session.initial_life());
            }

            grid_node
                .spawn((
                    Button,
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Percent(50.0),
                        left: Val::Percent(50.0),
                        width: Val::Px(96.0),
                        height: Val::Px(40.0),
                        margin: UiRect {
                            left: Val::Px(-48.0),
                            top: Val::Px(-20.0),
                            ..default()
                        },
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.20, 0.20, 0.24)),
                    ZIndex(10),
                    ResetButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Reset"),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });

    commands.insert_resource(session);
}

fn spawn_player_region(parent: &mut ChildBuilder, player: usize, player_count: usize, life: i64) {
    parent
        .spawn((
            Node {
                position_type: PositionType::Relative,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(player_color(player)),
            Transform::from_rotation(region_rotation(player, player_count)),
            PlayerRegion { player },
        ))
        .with_children(|region| {
            region.spawn((
                Text::new("FIRST"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Visibility::Hidden,
                FirstPlayerBadge { player },
            ));
            region.spawn((
                Text::new(""),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
                Visibility::Hidden,
                ChangeIndicator { player },
            ));
            region.spawn((
                Text::new(life.to_string()),
                TextFont {
                    font_size: 120.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                LifeDisplay { player },
            ));

            for direction in [Direction::Minus, Direction::Plus] {
                spawn_control_area(region, player, direction);
            }
        });
}

fn spawn_control_area(region: &mut ChildBuilder, player: usize, direction: Direction) {
    let (side, glyph, justify) = match direction {
        Direction::Minus => (
            UiRect {
                left: Val::Px(0.0),
                ..default()
            },
            "-",
            JustifyContent::FlexStart,
        ),
        Direction::Plus => (
            UiRect {
                right: Val::Px(0.0),
                ..default()
            },
            "+",
            JustifyContent::FlexEnd,
        ),
    };

    region
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: side.left,
                right: side.right,
                top: Val::Px(0.0),
                width: Val::Percent(50.0),
                height: Val::Percent(100.0),
                justify_content: justify,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(24.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
            ControlArea { player, direction },
        ))
        .with_children(|area| {
            area.spawn((
                Text::new(glyph),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));
        });
}

pub fn reset_button_system(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if buttons.iter().any(|interaction| *interaction == Interaction::Pressed) {
        next_state.set(AppState::Setup);
    }
}

// Discards every player state and the grid, going back to setup
pub fn stop_session(
    mut commands: Commands,
    session: Option<Res<Session>>,
    mut options: ResMut<SetupOptions>,
    screens: Query<Entity, With<GameScreen>>,
) {
    if let Some(session) = session {
        *options = session.stop();
        info!("Session stopped after {:.1}s", session.clock().as_secs_f32());
    }
    commands.remove_resource::<Session>();

    for entity in screens.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
