use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{GameMode, Velocity};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True if a puck with horizontal speed `vx` is heading for this side
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Movement and grab intent for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub moving_up: bool,
    pub moving_down: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub trying_to_grab: bool,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly one vertical or exactly one horizontal direction is held;
    /// opposite directions cancel
    pub fn is_moving(&self) -> bool {
        (self.moving_up != self.moving_down) || (self.moving_left != self.moving_right)
    }
}

/// Externally written controls for a paddle (keyboard, touch, network...).
///
/// Only read by input strategies that relay a human player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls(pub Intent);

/// Paddle component - a controllable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // fixed after creation
    pub intent: Intent,
    pub left_boundary: f32,
    pub right_boundary: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, boundaries: (f32, f32)) -> Self {
        Self {
            side,
            pos,
            size,
            intent: Intent::new(),
            left_boundary: boundaries.0,
            right_boundary: boundaries.1,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Attracts the puck this tick
    pub fn is_pulling(&self, mode: &GameMode) -> bool {
        mode.magnetic && self.intent.is_moving()
    }

    pub fn wants_grab(&self, mode: &GameMode) -> bool {
        mode.grabbing && self.intent.trying_to_grab
    }
}

/// Puck component - the body players deflect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puck {
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // fixed after creation
    pub vel: Velocity,
    /// Paddle entity currently carrying the puck
    pub held_by: Option<hecs::Entity>,
}

impl Puck {
    pub fn new(pos: Vec2, size: Vec2, vel: Velocity) -> Self {
        Self {
            pos,
            size,
            vel,
            held_by: None,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn is_held(&self) -> bool {
        self.held_by.is_some()
    }

    /// Touching counts as overlapping
    pub fn overlaps(&self, paddle: &Paddle) -> bool {
        self.left() <= paddle.right()
            && self.right() >= paddle.left()
            && self.top() <= paddle.bottom()
            && self.bottom() >= paddle.top()
    }
}
