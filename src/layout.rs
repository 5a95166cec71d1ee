// layout.rs
use bevy::prelude::*;
use std::f32::consts::PI;

/// Region colours, handed out by player index.
pub const PLAYER_COLORS: [Color; 9] = [
    Color::srgb(0.937, 0.267, 0.267), // red
    Color::srgb(0.231, 0.510, 0.965), // blue
    Color::srgb(0.133, 0.773, 0.369), // green
    Color::srgb(0.918, 0.702, 0.031), // yellow
    Color::srgb(0.659, 0.333, 0.969), // purple
    Color::srgb(0.925, 0.282, 0.600), // pink
    Color::srgb(0.024, 0.714, 0.831), // cyan
    Color::srgb(0.976, 0.451, 0.086), // orange
    Color::srgb(0.518, 0.800, 0.086), // lime
];

/// Grid geometry for the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Up to three players stack in one column, more share two.
    pub fn for_players(player_count: usize) -> Self {
        let columns = if player_count <= 3 { 1 } else { 2 };
        Self {
            columns,
            rows: player_count.div_ceil(columns),
        }
    }
}

/// The first half of the players sit across the table and read their
/// region upside down.
pub fn is_upside_down(index: usize, player_count: usize) -> bool {
    2 * index < player_count
}

pub fn region_rotation(index: usize, player_count: usize) -> Quat {
    if is_upside_down(index, player_count) {
        Quat::from_rotation_z(PI)
    } else {
        Quat::IDENTITY
    }
}

pub fn player_color(index: usize) -> Color {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_tables_use_one_column() {
        assert_eq!(GridLayout::for_players(2), GridLayout { columns: 1, rows: 2 });
        assert_eq!(GridLayout::for_players(3), GridLayout { columns: 1, rows: 3 });
    }

    #[test]
    fn larger_tables_use_two_columns() {
        assert_eq!(GridLayout::for_players(4), GridLayout { columns: 2, rows: 2 });
        assert_eq!(GridLayout::for_players(5), GridLayout { columns: 2, rows: 3 });
        assert_eq!(GridLayout::for_players(9), GridLayout { columns: 2, rows: 5 });
    }

    #[test]
    fn every_player_gets_a_cell() {
        for count in 2..=9 {
            let grid = GridLayout::for_players(count);
            assert!(grid.columns * grid.rows >= count);
            assert!(grid.columns * (grid.rows - 1) < count);
        }
    }

    #[test]
    fn first_half_is_rotated() {
        let rotated: Vec<bool> = (0..5).map(|i| is_upside_down(i, 5)).collect();
        assert_eq!(rotated, vec![true, true, false, false, false]);

        let rotated: Vec<bool> = (0..4).map(|i| is_upside_down(i, 4)).collect();
        assert_eq!(rotated, vec![true, true, false, false]);

        assert_eq!(region_rotation(0, 2), Quat::from_rotation_z(PI));
        assert_eq!(region_rotation(1, 2), Quat::IDENTITY);
    }

    #[test]
    fn colors_wrap_around_palette() {
        assert_eq!(player_color(0), player_color(9));
        assert_ne!(player_color(0), player_color(1));
    }
}
