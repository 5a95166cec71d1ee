pub mod display;
pub mod game_screen;
pub mod input;
pub mod setup_screen;
pub mod wake_lock;
