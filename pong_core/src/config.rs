use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Params, Side, SimError};

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so hosts can load a partial
/// JSON document and override only what they care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_move_speed: f32,
    pub pull_force: f32,
    pub puck_width: f32,
    pub puck_height: f32,
    pub puck_speed: f32,
    pub puck_speed_cap_factor: f32,
    pub ai_dead_zone: f32,
    pub ai_vertical_debounce: u32,
    pub ai_horizontal_debounce: u32,
    pub tick_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_move_speed: Params::PADDLE_MOVE_SPEED,
            pull_force: Params::PULL_FORCE,
            puck_width: Params::PUCK_WIDTH,
            puck_height: Params::PUCK_HEIGHT,
            puck_speed: Params::PUCK_SPEED,
            puck_speed_cap_factor: Params::PUCK_SPEED_CAP_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_vertical_debounce: Params::AI_VERTICAL_DEBOUNCE,
            ai_horizontal_debounce: Params::AI_HORIZONTAL_DEBOUNCE,
            tick_hz: Params::TICK_HZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning inside an arena of the given size
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Reject geometry the physics cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_move_speed", self.paddle_move_speed),
            ("puck_width", self.puck_width),
            ("puck_height", self.puck_height),
            ("puck_speed", self.puck_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if !self.pull_force.is_finite() || self.pull_force < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "pull_force must be >= 0, got {}",
                self.pull_force
            )));
        }
        if !self.puck_speed_cap_factor.is_finite() || self.puck_speed_cap_factor < 1.0 {
            return Err(SimError::InvalidConfig(format!(
                "puck_speed_cap_factor must be >= 1, got {}",
                self.puck_speed_cap_factor
            )));
        }
        if self.paddle_height >= self.arena_height || self.puck_height >= self.arena_height {
            return Err(SimError::InvalidConfig(
                "paddle and puck must be shorter than the arena".to_string(),
            ));
        }
        if 2.0 * self.paddle_width + self.puck_width >= self.arena_width {
            return Err(SimError::InvalidConfig(
                "arena too narrow for two paddles and a puck".to_string(),
            ));
        }
        if self.ai_vertical_debounce == 0 || self.ai_horizontal_debounce == 0 {
            return Err(SimError::InvalidConfig(
                "AI debounce thresholds must be at least one tick".to_string(),
            ));
        }
        if self.tick_hz == 0 {
            return Err(SimError::InvalidConfig("tick_hz must be > 0".to_string()));
        }
        Ok(())
    }

    /// Highest speed the puck may ever reach
    pub fn puck_speed_cap(&self) -> f32 {
        self.puck_speed * self.puck_speed_cap_factor
    }

    /// Top-left corner of a paddle at kickoff
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let top = (self.arena_height / 2.0).floor() - (self.paddle_height / 2.0).round();
        let left = match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        };
        Vec2::new(left, top)
    }

    /// Horizontal range a paddle may occupy: its own half of the arena,
    /// kept clear of the midline by half a puck width
    pub fn paddle_bounds(&self, side: Side) -> (f32, f32) {
        let mid = self.arena_width / 2.0;
        let margin = self.puck_width / 2.0;
        match side {
            Side::Left => (0.0, mid - margin),
            Side::Right => (mid + margin, self.arena_width),
        }
    }

    /// Top-left corner of the puck at kickoff
    pub fn puck_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width / 2.0).floor(),
            (self.arena_height / 2.0).floor(),
        )
    }
}

/// Optional rules layered over classic bounce physics.
///
/// Read by the engine every tick, so a host may flip these mid-game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMode {
    /// Paddles may hold the puck while their grab control is down
    pub grabbing: bool,
    /// Moving paddles attract the puck
    pub magnetic: bool,
}

impl GameMode {
    pub fn classic() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            grabbing: true,
            magnetic: true,
        }
    }
}
