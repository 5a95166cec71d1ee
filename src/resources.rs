// resources.rs
use crate::gesture::{Direction, Press, PressGesture};
use bevy::prelude::*;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 2..=9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("player count {0} is outside 2..=9")]
    PlayerCount(usize),
}

/// Timing and scaling knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub long_press: Duration,
    pub long_press_multiplier: i64,
    pub merge_window: Duration,
    pub indicator_hide: Duration,
    pub first_player_badge: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(500),
            long_press_multiplier: 5,
            merge_window: Duration::from_millis(3000),
            indicator_hide: Duration::from_millis(2500),
            first_player_badge: Duration::from_millis(3000),
        }
    }
}

/// Options picked on the setup screen. Survives across sessions so a reset
/// comes back to the last choice.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOptions {
    pub player_count: usize,
    pub initial_life: i64,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            player_count: 4,
            initial_life: 40,
        }
    }
}

impl SetupOptions {
    pub fn adjust_player_count(&mut self, delta: i32) {
        let (min, max) = PLAYER_COUNT_RANGE.into_inner();
        let next = self.player_count as i64 + delta as i64;
        self.player_count = next.clamp(min as i64, max as i64) as usize;
    }

    pub fn adjust_life(&mut self, delta: i64) {
        self.initial_life = self.initial_life.saturating_add(delta);
    }
}

/// A life change that was applied to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeChange {
    pub player: usize,
    pub amount: i64,
    pub life: i64,
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub life: i64,
    pub last_change: Option<Duration>,
    pub recent_change: i64,
    pub indicator: Option<Timer>,
    /// One gesture per half of the region, indexed by `Direction::index`.
    pub gestures: [PressGesture; 2],
}

impl PlayerState {
    fn new(life: i64) -> Self {
        Self {
            life,
            last_change: None,
            recent_change: 0,
            indicator: None,
            gestures: Default::default(),
        }
    }

    /// Signed text of the recent-change indicator, or `None` while hidden.
    pub fn indicator_label(&self) -> Option<String> {
        self.indicator
            .as_ref()
            .map(|_| format_change(self.recent_change))
    }
}

pub fn format_change(total: i64) -> String {
    if total > 0 {
        format!("+{total}")
    } else {
        total.to_string()
    }
}

/// One running game: every player's state plus the clock that drives the
/// press and indicator timers.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    players: Vec<PlayerState>,
    initial_life: i64,
    timing: Timing,
    clock: Duration,
    first_player: Option<usize>,
    first_player_badge: Option<Timer>,
}

impl Session {
    pub fn start(
        player_count: usize,
        initial_life: i64,
        timing: Timing,
    ) -> Result<Self, SessionError> {
        if !PLAYER_COUNT_RANGE.contains(&player_count) {
            return Err(SessionError::PlayerCount(player_count));
        }

        Ok(Self {
            players: (0..player_count)
                .map(|_| PlayerState::new(initial_life))
                .collect(),
            initial_life,
            timing,
            clock: Duration::ZERO,
            first_player: None,
            first_player_badge: None,
        })
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&PlayerState> {
        self.players.get(index)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn initial_life(&self) -> i64 {
        self.initial_life
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn first_player(&self) -> Option<usize> {
        self.first_player
    }

    /// Whether the "first player" badge should currently be drawn.
    pub fn first_player_badge_visible(&self) -> bool {
        self.first_player_badge.is_some()
    }

    pub fn pick_first_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let index = rng.random_range(0..self.players.len());
        self.first_player = Some(index);
        self.first_player_badge = Some(Timer::new(
            self.timing.first_player_badge,
            TimerMode::Once,
        ));
        index
    }

    pub fn pointer_down(&mut self, player: usize, direction: Direction) {
        let hold = self.timing.long_press;
        if let Some(state) = self.players.get_mut(player) {
            state.gestures[direction.index()].press(direction, hold);
        }
    }

    /// Ends the press on the `direction` half of the player's region. The
    /// other half keeps whatever press it has going.
    pub fn pointer_up(&mut self, player: usize, direction: Direction) -> Option<LifeChange> {
        let press = self.players.get_mut(player)?.gestures[direction.index()].release()?;
        self.change_life(player, press.amount(self.timing.long_press_multiplier))
    }

    /// Leaving a half ends its gesture exactly like a release.
    pub fn pointer_leave(&mut self, player: usize, direction: Direction) -> Option<LifeChange> {
        self.pointer_up(player, direction)
    }

    /// Advances the session clock by `delta`: fires due long presses and
    /// hides indicators whose quiet period ran out.
    pub fn tick(&mut self, delta: Duration) -> Vec<LifeChange> {
        self.clock += delta;

        if let Some(badge) = self.first_player_badge.as_mut() {
            if badge.tick(delta).finished() {
                self.first_player_badge = None;
            }
        }

        let multiplier = self.timing.long_press_multiplier;
        let mut changes = Vec::new();
        for index in 0..self.players.len() {
            let state = &mut self.players[index];
            if let Some(indicator) = state.indicator.as_mut() {
                if indicator.tick(delta).finished() {
                    state.indicator = None;
                }
            }
            let fired: Vec<Press> = state
                .gestures
                .iter_mut()
                .filter_map(|gesture| gesture.tick(delta))
                .collect();
            for press in fired {
                changes.extend(self.change_life(index, press.amount(multiplier)));
            }
        }
        changes
    }

    pub fn change_life(&mut self, player: usize, amount: i64) -> Option<LifeChange> {
        let state = self.players.get_mut(player)?;
        state.life = state.life.saturating_add(amount);
        let life = state.life;
        self.record_change(player, amount);
        Some(LifeChange {
            player,
            amount,
            life,
        })
    }

    /// Folds `amount` into the player's recent-change indicator and restarts
    /// its hide timer.
    pub fn record_change(&mut self, player: usize, amount: i64) {
        let now = self.clock;
        let Timing {
            merge_window,
            indicator_hide,
            ..
        } = self.timing;
        let Some(state) = self.players.get_mut(player) else {
            return;
        };

        let merges = state
            .last_change
            .is_some_and(|last| now.saturating_sub(last) < merge_window);
        state.recent_change = if merges {
            state.recent_change.saturating_add(amount)
        } else {
            amount
        };
        state.last_change = Some(now);
        state.indicator = Some(Timer::new(indicator_hide, TimerMode::Once));
    }

    /// The options this session was started with, handed back to the setup
    /// screen when the session is torn down.
    pub fn stop(&self) -> SetupOptions {
        SetupOptions {
            player_count: self.players.len(),
            initial_life: self.initial_life,
        }
    }
}
