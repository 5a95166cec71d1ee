use crate::platform::wake_lock::ScreenWakeLock;
use bevy::prelude::*;
use bevy::window::WindowFocused;

pub fn acquire_wake_lock(mut wake_lock: ResMut<ScreenWakeLock>) {
    wake_lock.acquire();
}

pub fn release_wake_lock(mut wake_lock: ResMut<ScreenWakeLock>) {
    wake_lock.release();
}

// Platforms drop the lock while the window is in the background, so let
// go of it there and ask again once the window comes back.
pub fn follow_window_focus(
    mut focus_events: EventReader<WindowFocused>,
    mut wake_lock: ResMut<ScreenWakeLock>,
) {
    let Some(last) = focus_events.read().last() else {
        return;
    };
    if last.focused {
        wake_lock.acquire();
    } else {
        wake_lock.release();
    }
}
