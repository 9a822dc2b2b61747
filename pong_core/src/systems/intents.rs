use hecs::World;

use crate::input::{Controller, InputContext};
use crate::{Config, Controls, Paddle, Puck};

/// Ask every paddle's strategy for this tick's intent
pub fn gather_intents(world: &mut World, config: &Config) {
    // Snapshot the puck first so the paddle query can borrow mutably
    let puck = world.query::<&Puck>().iter().next().map(|(_e, puck)| *puck);

    let Some(puck) = puck else {
        return; // No puck in world
    };

    for (_entity, (paddle, controller, controls)) in
        world.query_mut::<(&mut Paddle, &mut Controller, &Controls)>()
    {
        let ctx = InputContext {
            paddle: &*paddle,
            puck: &puck,
            controls: controls.0,
            config,
        };
        paddle.intent = controller.0.decide(&ctx);
    }
}
