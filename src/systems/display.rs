use crate::components::{ChangeIndicator, FirstPlayerBadge, LifeDisplay};
use crate::resources::Session;
use bevy::prelude::*;

/// Mirrors life totals, change indicators and the first-player badge from
/// the session into the region text nodes.
pub fn sync_region_text_system(
    session: Res<Session>,
    mut lives: Query<(&LifeDisplay, &mut Text), Without<ChangeIndicator>>,
    mut indicators: Query<(&ChangeIndicator, &mut Text, &mut Visibility), Without<LifeDisplay>>,
    mut badges: Query<
        (&FirstPlayerBadge, &mut Visibility),
        (Without<ChangeIndicator>, Without<LifeDisplay>),
    >,
) {
    for (display, mut text) in lives.iter_mut() {
        let Some(player) = session.player(display.player) else {
            continue;
        };
        let life = player.life.to_string();
        if text.0 != life {
            text.0 = life;
        }
    }

    for (indicator, mut text, mut visibility) in indicators.iter_mut() {
        let label = session
            .player(indicator.player)
            .and_then(|player| player.indicator_label());
        match label {
            Some(label) => {
                if text.0 != label {
                    text.0 = label;
                }
                visibility.set_if_neq(Visibility::Inherited);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    let badge_owner = session
        .first_player()
        .filter(|_| session.first_player_badge_visible());
    for (badge, mut visibility) in badges.iter_mut() {
        let shown = if badge_owner == Some(badge.player) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(shown);
    }
}
