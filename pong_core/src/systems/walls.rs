use hecs::World;

use crate::{Config, Events, Puck, Side};

/// Ceiling/floor bounce and side-wall goals.
///
/// Returns the winning side once the puck touches a side wall. Runs after the
/// paddles, so an axis already reversed by a paddle this tick can be reversed
/// again here.
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) -> Option<Side> {
    let mut winner = None;

    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        if puck.top() <= 0.0 || puck.bottom() >= config.arena_height {
            puck.vel.reverse_y();
            events.puck_hit_wall = true;
        }

        if puck.left() <= 0.0 {
            winner = Some(Side::Right);
        } else if puck.right() >= config.arena_width {
            winner = Some(Side::Left);
        }
    }

    if winner.is_some() {
        events.game_over = true;
    }
    winner
}
