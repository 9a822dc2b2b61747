use glam::Vec2;
use hecs::World;
use log::{debug, info};

use crate::input::{Controller, InputStrategy};
use crate::{
    create_paddle, create_puck, step, Config, Controls, Entities, Events, GameMode, GameRng,
    Intent, Paddle, Puck, Side, SimError, Velocity,
};

/// One match: two paddles, one puck, and the rules in force.
///
/// Single writer: only [`Simulation::tick`] mutates physics, and readers are
/// expected to look between ticks.
pub struct Simulation {
    world: World,
    entities: Entities,
    config: Config,
    mode: GameMode,
    events: Events,
    rng: GameRng,
    is_over: bool,
    winner: Option<Side>,
    ticks: u64,
}

impl Simulation {
    pub fn new(
        config: Config,
        mode: GameMode,
        input_left: Box<dyn InputStrategy>,
        input_right: Box<dyn InputStrategy>,
        mut rng: GameRng,
    ) -> Result<Self, SimError> {
        config.validate()?;

        info!(
            "new simulation {}x{} (grabbing: {}, magnetic: {}), {} vs {}",
            config.arena_width,
            config.arena_height,
            mode.grabbing,
            mode.magnetic,
            input_left.name(),
            input_right.name()
        );

        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, &config, Controller(input_left));
        let right = create_paddle(&mut world, Side::Right, &config, Controller(input_right));
        let puck = create_puck(&mut world, &config, &mut rng);

        Ok(Self {
            world,
            entities: Entities {
                puck,
                paddles: [left, right],
            },
            config,
            mode,
            events: Events::new(),
            rng,
            is_over: false,
            winner: None,
            ticks: 0,
        })
    }

    /// Advance one tick. Refused once the game is over.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.is_over {
            return Err(SimError::GameOver);
        }

        let winner = step(
            &mut self.world,
            &self.entities,
            &self.config,
            &self.mode,
            &mut self.events,
        )?;
        self.ticks += 1;

        if let Some(side) = winner {
            self.is_over = true;
            self.winner = Some(side);
            info!("game over after {} ticks, {:?} side wins", self.ticks, side);
        }
        Ok(())
    }

    /// Put paddles and puck back at kickoff with a fresh launch.
    ///
    /// Input strategies, mode and config carry over. Refused while the puck
    /// is still in play.
    pub fn restart(&mut self) -> Result<(), SimError> {
        if !self.is_over {
            return Err(SimError::NotOver);
        }

        for side in Side::BOTH {
            let entity = self.entities.paddle(side);
            let mut paddle = self.world.get::<&mut Paddle>(entity)?;
            paddle.pos = self.config.paddle_spawn(side);
            paddle.intent = Intent::default();
            drop(paddle);
            *self.world.get::<&mut Controls>(entity)? = Controls::default();
        }

        let vel = Velocity::random_with_magnitude(
            &mut self.rng,
            self.config.puck_speed,
            self.config.puck_speed_cap(),
        );
        {
            let mut puck = self.world.get::<&mut Puck>(self.entities.puck)?;
            puck.pos = self.config.puck_spawn();
            puck.vel = vel;
            puck.held_by = None;
        }

        self.events.clear();
        self.is_over = false;
        self.winner = None;
        self.ticks = 0;
        info!("simulation restarted");
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Side that scored, once the game is over
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Ticks completed since kickoff
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if mode != self.mode {
            debug!("game mode changed to {:?}", mode);
        }
        self.mode = mode;
    }

    /// What happened during the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Snapshot of the puck
    pub fn puck(&self) -> Result<Puck, SimError> {
        Ok(*self.world.get::<&Puck>(self.entities.puck)?)
    }

    /// Snapshot of one paddle
    pub fn paddle(&self, side: Side) -> Result<Paddle, SimError> {
        Ok(*self.world.get::<&Paddle>(self.entities.paddle(side))?)
    }

    pub fn is_pulling(&self, side: Side) -> Result<bool, SimError> {
        Ok(self.paddle(side)?.is_pulling(&self.mode))
    }

    /// Side currently carrying the puck
    pub fn puck_holder(&self) -> Result<Option<Side>, SimError> {
        Ok(self
            .puck()?
            .held_by
            .and_then(|entity| self.entities.side_of(entity)))
    }

    pub fn controls(&self, side: Side) -> Result<Intent, SimError> {
        Ok(self.world.get::<&Controls>(self.entities.paddle(side))?.0)
    }

    /// Write the host's controls for a paddle; relayed on the next tick
    pub fn set_controls(&mut self, side: Side, intent: Intent) -> Result<(), SimError> {
        self.world
            .get::<&mut Controls>(self.entities.paddle(side))?
            .0 = intent;
        Ok(())
    }

    /// Swap a paddle's input strategy without touching the paddle
    pub fn set_input(
        &mut self,
        side: Side,
        input: Box<dyn InputStrategy>,
    ) -> Result<(), SimError> {
        let mut controller = self
            .world
            .get::<&mut Controller>(self.entities.paddle(side))?;
        debug!(
            "{:?} input swapped: {} -> {}",
            side,
            controller.0.name(),
            input.name()
        );
        controller.0 = input;
        Ok(())
    }

    /// Place the puck, e.g. for a scripted serve
    pub fn place_puck(&mut self, pos: Vec2, vel: Velocity) -> Result<(), SimError> {
        let mut puck = self.world.get::<&mut Puck>(self.entities.puck)?;
        puck.pos = pos;
        puck.vel = vel;
        puck.held_by = None;
        Ok(())
    }

    /// Place a paddle's top-left corner; a puck it holds comes along
    pub fn place_paddle(&mut self, side: Side, pos: Vec2) -> Result<(), SimError> {
        let entity = self.entities.paddle(side);
        let delta = {
            let mut paddle = self.world.get::<&mut Paddle>(entity)?;
            let delta = pos - paddle.pos;
            paddle.pos = pos;
            delta
        };

        let mut puck = self.world.get::<&mut Puck>(self.entities.puck)?;
        if puck.held_by == Some(entity) {
            puck.pos += delta;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("is_over", &self.is_over)
            .field("winner", &self.winner)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
