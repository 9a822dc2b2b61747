use glam::Vec2;
use hecs::{Entity, World};

use crate::{Config, GameMode, Paddle, Puck, SimError};

/// Move the puck by its velocity unless a paddle is carrying it
pub fn move_puck(world: &mut World) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        // A held puck keeps its velocity for when it is released
        if puck.is_held() {
            continue;
        }
        puck.pos += puck.vel.as_vec2();
    }
}

/// Pull a free puck toward every paddle that is pulling this tick
pub fn apply_pull(world: &mut World, mode: &GameMode, config: &Config) {
    let pullers: Vec<Vec2> = world
        .query::<&Paddle>()
        .iter()
        .filter(|(_e, paddle)| paddle.is_pulling(mode))
        .map(|(_e, paddle)| paddle.center())
        .collect();

    if pullers.is_empty() {
        return;
    }

    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        if puck.is_held() {
            continue;
        }
        for center in &pullers {
            let rel = *center - puck.center();
            puck.vel.apply_force_toward(config.pull_force, rel);
        }
    }
}

/// How far a paddle moves this tick given its intent.
///
/// Each direction is gated on the edge not yet touching its limit, and the
/// step is shortened so the paddle ends at most flush with it.
pub fn paddle_step(paddle: &Paddle, config: &Config) -> Vec2 {
    let speed = config.paddle_move_speed;
    let mut pos = paddle.pos;
    let size = paddle.size;

    if paddle.intent.moving_down && pos.y + size.y < config.arena_height {
        pos.y += speed.min(config.arena_height - (pos.y + size.y));
    }
    if paddle.intent.moving_up && pos.y > 0.0 {
        pos.y -= speed.min(pos.y);
    }

    if paddle.intent.moving_left && pos.x > paddle.left_boundary {
        pos.x -= speed.min(pos.x - paddle.left_boundary);
    }
    if paddle.intent.moving_right && pos.x + size.x < paddle.right_boundary {
        pos.x += speed.min(paddle.right_boundary - (pos.x + size.x));
    }

    pos - paddle.pos
}

/// Apply a paddle's movement, dragging the puck along if it holds it
pub fn move_paddle(
    world: &mut World,
    paddle_entity: Entity,
    puck_entity: Entity,
    config: &Config,
) -> Result<(), SimError> {
    let delta = {
        let mut paddle = world.get::<&mut Paddle>(paddle_entity)?;
        let delta = paddle_step(&paddle, config);
        paddle.pos += delta;
        delta
    };

    if delta != Vec2::ZERO {
        let mut puck = world.get::<&mut Puck>(puck_entity)?;
        if puck.held_by == Some(paddle_entity) {
            puck.pos += delta;
        }
    }
    Ok(())
}
