// events.rs
use crate::resources::LifeChange;
use bevy::prelude::*;

// Sent whenever a press lands on a player's life total
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeChangedEvent {
    pub player: usize,
    pub amount: i64,
    pub life: i64,
}

impl From<LifeChange> for LifeChangedEvent {
    fn from(change: LifeChange) -> Self {
        Self {
            player: change.player,
            amount: change.amount,
            life: change.life,
        }
    }
}
