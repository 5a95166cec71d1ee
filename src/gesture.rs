// gesture.rs
use bevy::prelude::*;
use std::time::Duration;

/// Which half of a player region was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Minus,
    Plus,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Minus => -1,
            Direction::Plus => 1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Direction::Minus => 0,
            Direction::Plus => 1,
        }
    }
}

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Short(Direction),
    Long(Direction),
}

impl Press {
    /// Life delta for this press; long presses are scaled by `multiplier`.
    pub fn amount(self, multiplier: i64) -> i64 {
        match self {
            Press::Short(direction) => direction.sign(),
            Press::Long(direction) => direction.sign() * multiplier,
        }
    }
}

/// Tap vs. hold discrimination for one player region.
///
/// `Pressed` holds the pending long-press timer. When it fires the gesture
/// moves to `Held`, which swallows the release.
#[derive(Debug, Clone, Default)]
pub enum PressGesture {
    #[default]
    Idle,
    Pressed {
        direction: Direction,
        hold: Timer,
    },
    Held {
        direction: Direction,
    },
}

impl PressGesture {
    /// Starts (or restarts) a press.
    pub fn press(&mut self, direction: Direction, hold: Duration) {
        *self = PressGesture::Pressed {
            direction,
            hold: Timer::new(hold, TimerMode::Once),
        };
    }

    /// Advances the hold timer, returning a long press the moment it fires.
    pub fn tick(&mut self, delta: Duration) -> Option<Press> {
        let PressGesture::Pressed { direction, hold } = self else {
            return None;
        };
        hold.tick(delta);
        if !hold.finished() {
            return None;
        }

        let direction = *direction;
        *self = PressGesture::Held { direction };
        Some(Press::Long(direction))
    }

    /// Ends the gesture. Only a press that never reached the hold time
    /// produces a short press.
    pub fn release(&mut self) -> Option<Press> {
        match std::mem::take(self) {
            PressGesture::Pressed { direction, .. } => Some(Press::Short(direction)),
            PressGesture::Held { .. } | PressGesture::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(500);

    #[test]
    fn quick_release_is_short_press() {
        let mut gesture = PressGesture::default();
        gesture.press(Direction::Plus, HOLD);
        assert_eq!(gesture.tick(Duration::from_millis(499)), None);
        assert_eq!(gesture.release(), Some(Press::Short(Direction::Plus)));
        assert!(matches!(gesture, PressGesture::Idle));
    }

    #[test]
    fn hold_fires_once_and_swallows_release() {
        let mut gesture = PressGesture::default();
        gesture.press(Direction::Minus, HOLD);
        assert_eq!(gesture.tick(Duration::from_millis(300)), None);
        assert_eq!(
            gesture.tick(Duration::from_millis(200)),
            Some(Press::Long(Direction::Minus))
        );
        assert_eq!(gesture.tick(Duration::from_secs(2)), None);
        assert_eq!(gesture.release(), None);
        assert!(matches!(gesture, PressGesture::Idle));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut gesture = PressGesture::default();
        assert_eq!(gesture.release(), None);
        assert_eq!(gesture.tick(HOLD), None);
    }

    #[test]
    fn repress_restarts_hold_timer() {
        let mut gesture = PressGesture::default();
        gesture.press(Direction::Plus, HOLD);
        gesture.tick(Duration::from_millis(400));
        gesture.press(Direction::Minus, HOLD);
        assert_eq!(gesture.tick(Duration::from_millis(400)), None);
        assert_eq!(gesture.release(), Some(Press::Short(Direction::Minus)));
    }

    #[test]
    fn long_press_scales_amount() {
        assert_eq!(Press::Short(Direction::Minus).amount(5), -1);
        assert_eq!(Press::Long(Direction::Plus).amount(5), 5);
        assert_eq!(Press::Long(Direction::Minus).amount(5), -5);
    }
}
