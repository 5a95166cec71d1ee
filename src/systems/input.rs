use crate::components::ControlArea;
use crate::events::LifeChangedEvent;
use crate::resources::Session;
use bevy::prelude::*;

// Feeds press/release transitions of the control areas into the session.
// Bevy keeps a node `Pressed` until the pointer or touch is lifted, so any
// change away from `Pressed` ends the gesture.
pub fn region_press_system(
    mut session: ResMut<Session>,
    areas: Query<(&Interaction, &ControlArea), Changed<Interaction>>,
    mut life_events: EventWriter<LifeChangedEvent>,
) {
    for (interaction, area) in areas.iter() {
        match interaction {
            Interaction::Pressed => session.pointer_down(area.player, area.direction),
            Interaction::Hovered => {
                if let Some(change) = session.pointer_up(area.player, area.direction) {
                    life_events.send(change.into());
                }
            }
            Interaction::None => {
                if let Some(change) = session.pointer_leave(area.player, area.direction) {
                    life_events.send(change.into());
                }
            }
        }
    }
}

// Runs the long-press and indicator timers off the frame clock
pub fn tick_session_system(
    time: Res<Time>,
    mut session: ResMut<Session>,
    mut life_events: EventWriter<LifeChangedEvent>,
) {
    for change in session.tick(time.delta()) {
        life_events.send(change.into());
    }
}

pub fn log_life_changes(mut life_events: EventReader<LifeChangedEvent>) {
    for event in life_events.read() {
        debug!(
            "Player {} {:+} -> {}",
            event.player + 1,
            event.amount,
            event.life
        );
    }
}
