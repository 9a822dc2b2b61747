use hecs::{Entity, World};
use log::{debug, trace};

use crate::{Events, GameMode, Paddle, Puck, SimError};

/// Spin imparted when the puck only grazes a paddle's top or bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bend {
    Up(f32),
    Down(f32),
}

/// Bounce a free puck off a paddle it overlaps.
///
/// The puck is judged to have entered through whichever edge it overlaps
/// least on each axis. The axis with the smaller overlap bounces; equal
/// overlaps are a corner hit and bounce both. The puck is moved flush with
/// the edge so it cannot re-trigger next tick.
pub fn bounce_off(puck: &mut Puck, paddle: &Paddle) {
    let right_overlap = paddle.right() - puck.left();
    let left_overlap = puck.right() - paddle.left();

    let (x_teleport, x_overlap) = if right_overlap < left_overlap {
        (paddle.right(), right_overlap)
    } else {
        (paddle.left() - puck.width(), left_overlap)
    };

    let bottom_overlap = paddle.bottom() - puck.top();
    let top_overlap = puck.bottom() - paddle.top();
    let graze = puck.height() * 2.0;

    let (y_teleport, y_overlap, bend) = if bottom_overlap < top_overlap {
        let bend = (bottom_overlap < graze).then(|| Bend::Down(1.0 - bottom_overlap / graze));
        (paddle.bottom(), bottom_overlap, bend)
    } else {
        let bend = (top_overlap < graze).then(|| Bend::Up(1.0 - top_overlap / graze));
        (paddle.top() - puck.height(), top_overlap, bend)
    };

    if x_overlap <= y_overlap {
        puck.pos.x = x_teleport;
        puck.vel.reverse_x();
        match bend {
            Some(Bend::Up(factor)) => puck.vel.bend_up(factor),
            Some(Bend::Down(factor)) => puck.vel.bend_down(factor),
            None => {}
        }
    }
    if x_overlap >= y_overlap {
        puck.pos.y = y_teleport;
        puck.vel.reverse_y();
    }
}

/// Grab arbitration, then bounce, for one paddle touching the puck
pub fn resolve_paddle_contact(
    world: &mut World,
    paddle_entity: Entity,
    puck_entity: Entity,
    mode: &GameMode,
    events: &mut Events,
) -> Result<(), SimError> {
    let paddle = *world.get::<&Paddle>(paddle_entity)?;
    let mut puck = world.get::<&mut Puck>(puck_entity)?;

    if !puck.overlaps(&paddle) {
        return Ok(());
    }

    let wants_grab = paddle.wants_grab(mode);
    if wants_grab && puck.held_by.is_none() {
        puck.held_by = Some(paddle_entity);
        events.puck_grabbed = true;
        debug!("{:?} paddle grabbed the puck", paddle.side);
    } else if !wants_grab && puck.held_by == Some(paddle_entity) {
        puck.held_by = None;
        events.puck_released = true;
        debug!("{:?} paddle released the puck", paddle.side);
    }

    // A held puck is carried, not bounced
    if puck.held_by.is_none() {
        bounce_off(&mut puck, &paddle);
        events.puck_hit_paddle = true;
        trace!(
            "puck bounced off {:?} paddle, vel now ({:.3}, {:.3})",
            paddle.side,
            puck.vel.x(),
            puck.vel.y()
        );
    }
    Ok(())
}
