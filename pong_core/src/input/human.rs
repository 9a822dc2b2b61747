use super::{InputContext, InputStrategy};
use crate::Intent;

/// Passes the host's controls straight through, every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanRelay;

impl HumanRelay {
    pub fn new() -> Self {
        Self
    }
}

impl InputStrategy for HumanRelay {
    fn decide(&mut self, ctx: &InputContext<'_>) -> Intent {
        ctx.controls
    }

    fn name(&self) -> &'static str {
        "human"
    }
}
