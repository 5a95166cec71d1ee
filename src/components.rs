// components.rs
use crate::gesture::Direction;
use bevy::prelude::*;

/// Root of the setup screen.
#[derive(Component)]
pub struct SetupScreen;

/// Root of the player grid.
#[derive(Component)]
pub struct GameScreen;

/// One player's region in the grid.
#[derive(Component)]
pub struct PlayerRegion {
    pub player: usize,
}

#[derive(Component)]
pub struct LifeDisplay {
    pub player: usize,
}

/// Recent-change indicator, e.g. "+3".
#[derive(Component)]
pub struct ChangeIndicator {
    pub player: usize,
}

#[derive(Component)]
pub struct FirstPlayerBadge {
    pub player: usize,
}

/// Half of a player region that raises or lowers their life.
#[derive(Component)]
pub struct ControlArea {
    pub player: usize,
    pub direction: Direction,
}

/// What a setup screen button does when pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupButton {
    PlayerCount(i32),
    Life(i64),
    Start,
}

/// Text that mirrors one of the setup options.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupValue {
    PlayerCount,
    Life,
}

#[derive(Component)]
pub struct ResetButton;
