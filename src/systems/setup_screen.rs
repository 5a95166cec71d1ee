use crate::components::{ResetButton, SetupButton, SetupScreen, SetupValue};
use crate::resources::SetupOptions;
use crate::AppState;
use bevy::prelude::*;

const BUTTON_NORMAL: Color = Color::srgb(0.20, 0.20, 0.24);
const BUTTON_HOVERED: Color = Color::srgb(0.30, 0.30, 0.36);
const BUTTON_PRESSED: Color = Color::srgb(0.13, 0.55, 0.35);

pub fn spawn_setup_screen(mut commands: Commands, options: Res<SetupOptions>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.07, 0.07, 0.09)),
            SetupScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Life Counter"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            spawn_stepper(
                parent,
                "Players",
                SetupValue::PlayerCount,
                options.player_count.to_string(),
                &[SetupButton::PlayerCount(-1)],
                &[SetupButton::PlayerCount(1)],
            );
            spawn_stepper(
                parent,
                "Life",
                SetupValue::Life,
                options.initial_life.to_string(),
                &[SetupButton::Life(-5), SetupButton::Life(-1)],
                &[SetupButton::Life(1), SetupButton::Life(5)],
            );

            spawn_button(parent, SetupButton::Start, "Start", 220.0);
        });
}

fn spawn_stepper(
    parent: &mut ChildBuilder,
    label: &str,
    value: SetupValue,
    current: String,
    decrease: &[SetupButton],
    increase: &[SetupButton],
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
                Node {
                    width: Val::Px(120.0),
                    ..default()
                },
            ));
            for &button in decrease {
                spawn_button(row, button, &button_label(button), 64.0);
            }
            row.spawn((
                Text::new(current),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    width: Val::Px(90.0),
                    ..default()
                },
                value,
            ));
            for &button in increase {
                spawn_button(row, button, &button_label(button), 64.0);
            }
        });
}

fn spawn_button(parent: &mut ChildBuilder, action: SetupButton, label: &str, width: f32) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(width),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL),
            action,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn button_label(button: SetupButton) -> String {
    match button {
        SetupButton::PlayerCount(delta) => format!("{delta:+}"),
        SetupButton::Life(delta) => format!("{delta:+}"),
        SetupButton::Start => "Start".to_string(),
    }
}

pub fn setup_button_system(
    buttons: Query<(&Interaction, &SetupButton), Changed<Interaction>>,
    mut options: ResMut<SetupOptions>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match *button {
            SetupButton::PlayerCount(delta) => options.adjust_player_count(delta),
            SetupButton::Life(delta) => options.adjust_life(delta),
            SetupButton::Start => {
                info!(
                    "Starting game: {} players at {} life",
                    options.player_count, options.initial_life
                );
                next_state.set(AppState::Playing);
            }
        }
    }
}

pub fn sync_setup_values_system(
    options: Res<SetupOptions>,
    mut values: Query<(&SetupValue, &mut Text)>,
) {
    if !options.is_changed() {
        return;
    }
    for (value, mut text) in values.iter_mut() {
        let current = match value {
            SetupValue::PlayerCount => options.player_count.to_string(),
            SetupValue::Life => options.initial_life.to_string(),
        };
        if text.0 != current {
            text.0 = current;
        }
    }
}

/// Hover and press feedback for every menu-style button.
pub fn button_highlight_system(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (
            Changed<Interaction>,
            Or<(With<SetupButton>, With<ResetButton>)>,
        ),
    >,
) {
    for (interaction, mut color) in buttons.iter_mut() {
        *color = match interaction {
            Interaction::Pressed => BUTTON_PRESSED.into(),
            Interaction::Hovered => BUTTON_HOVERED.into(),
            Interaction::None => BUTTON_NORMAL.into(),
        };
    }
}

pub fn despawn_setup_screen(mut commands: Commands, roots: Query<Entity, With<SetupScreen>>) {
    for entity in roots.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
