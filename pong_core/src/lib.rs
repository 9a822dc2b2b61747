//! Simulation core for a Pong variant with magnetic pull and puck grabbing.
//!
//! The core owns the physics only. Hosts feed controls in, call
//! [`Simulation::tick`] at a fixed rate, and read paddle/puck snapshots back
//! out for drawing.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod velocity;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use velocity::*;

use hecs::{Entity, World};
use input::{Controller, InputStrategy};
use systems::*;

/// Handles to the entities one match is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entities {
    pub puck: Entity,
    pub paddles: [Entity; 2],
}

impl Entities {
    pub fn paddle(&self, side: Side) -> Entity {
        self.paddles[side.index()]
    }

    /// Side owning `entity`, if it is one of the paddles
    pub fn side_of(&self, entity: Entity) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.paddle(*side) == entity)
    }
}

/// Run one deterministic tick of the simulation.
///
/// Returns the winning side if the puck reached a side wall this tick.
pub fn step(
    world: &mut World,
    entities: &Entities,
    config: &Config,
    mode: &GameMode,
    events: &mut Events,
) -> Result<Option<Side>, SimError> {
    // Clear events at start of tick
    events.clear();

    // 1. Ask each paddle's strategy for its intent
    gather_intents(world, config);

    // 2. Move the free puck, then let pulling paddles attract it
    move_puck(world);
    apply_pull(world, mode, config);

    // 3. Each paddle moves (carrying a held puck) and resolves contact
    for side in Side::BOTH {
        let paddle = entities.paddle(side);
        move_paddle(world, paddle, entities.puck, config)?;
        resolve_paddle_contact(world, paddle, entities.puck, mode, events)?;
    }

    // 4. Ceiling/floor bounce, side walls end the game
    Ok(check_walls(world, config, events))
}

/// Helper to create a paddle entity at its kickoff position
pub fn create_paddle(
    world: &mut World,
    side: Side,
    config: &Config,
    controller: Controller,
) -> Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_spawn(side),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_bounds(side),
    );
    world.spawn((paddle, controller, Controls::default()))
}

/// Helper to create the puck entity with a random launch
pub fn create_puck(world: &mut World, config: &Config, rng: &mut GameRng) -> Entity {
    let vel = Velocity::random_with_magnitude(rng, config.puck_speed, config.puck_speed_cap());
    world.spawn((Puck::new(
        config.puck_spawn(),
        glam::Vec2::new(config.puck_width, config.puck_height),
        vel,
    ),))
}

/// Build a match in a `width` x `height` arena with default tuning
pub fn create_simulation(
    mode: GameMode,
    width: f32,
    height: f32,
    input_left: Box<dyn InputStrategy>,
    input_right: Box<dyn InputStrategy>,
    rng: GameRng,
) -> Result<Simulation, SimError> {
    Simulation::new(
        Config::with_arena(width, height),
        mode,
        input_left,
        input_right,
        rng,
    )
}
