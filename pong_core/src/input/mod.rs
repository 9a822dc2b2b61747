//! Per-tick sources of paddle intent.
//!
//! Each paddle entity owns one boxed [`InputStrategy`] in its [`Controller`]
//! component. The strategy sees the paddle and puck by reference every tick
//! and never keeps hold of either, so it can be swapped mid-game.

pub mod ai;
pub mod human;

pub use ai::{AutonomousController, Debounce, Direction};
pub use human::HumanRelay;

use crate::{Config, Intent, Paddle, Puck};

/// Everything a strategy may look at when deciding
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    pub paddle: &'a Paddle,
    pub puck: &'a Puck,
    /// Controls last written by the host for this paddle
    pub controls: Intent,
    pub config: &'a Config,
}

/// Decides a paddle's intent for the coming tick
pub trait InputStrategy: Send + Sync + 'static {
    fn decide(&mut self, ctx: &InputContext<'_>) -> Intent;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

/// Component holding a paddle's input strategy
pub struct Controller(pub Box<dyn InputStrategy>);

impl Controller {
    pub fn new(strategy: impl InputStrategy) -> Self {
        Self(Box::new(strategy))
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Controller").field(&self.0.name()).finish()
    }
}
