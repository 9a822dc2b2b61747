use super::{InputContext, InputStrategy};
use crate::{Config, Intent, Params};

/// Requested movement along one axis.
///
/// `Minus` is up or left, `Plus` is down or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minus,
    Plus,
    Stop,
}

impl Direction {
    /// Direction that closes `offset`, ignoring anything inside the dead zone
    pub fn toward(offset: f32, dead_zone: f32) -> Self {
        if offset >= dead_zone {
            Direction::Plus
        } else if offset <= -dead_zone {
            Direction::Minus
        } else {
            Direction::Stop
        }
    }
}

/// Commits a direction only after it has been requested `threshold` ticks
/// in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    last_requested: Option<Direction>,
    counter: u32,
    threshold: u32,
}

impl Debounce {
    pub fn new(threshold: u32) -> Self {
        Self {
            last_requested: None,
            counter: 0,
            threshold,
        }
    }

    /// Feed this tick's desired direction; returns it once it should be
    /// committed
    pub fn request(&mut self, direction: Direction) -> Option<Direction> {
        if self.last_requested == Some(direction) {
            self.counter += 1;
            if self.counter >= self.threshold {
                self.counter = 0;
                return Some(direction);
            }
        } else {
            self.last_requested = Some(direction);
            self.counter = 1;
        }
        None
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn last_requested(&self) -> Option<Direction> {
        self.last_requested
    }
}

/// Built-in opponent.
///
/// Tracks the puck vertically while it is heading this way and walks back to
/// its home column; both axes are debounced so the paddle lags instead of
/// jittering.
#[derive(Debug, Clone)]
pub struct AutonomousController {
    vertical: Debounce,
    horizontal: Debounce,
    dead_zone: f32,
}

impl Default for AutonomousController {
    fn default() -> Self {
        Self {
            vertical: Debounce::new(Params::AI_VERTICAL_DEBOUNCE),
            horizontal: Debounce::new(Params::AI_HORIZONTAL_DEBOUNCE),
            dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl AutonomousController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            vertical: Debounce::new(config.ai_vertical_debounce),
            horizontal: Debounce::new(config.ai_horizontal_debounce),
            dead_zone: config.ai_dead_zone,
        }
    }

    pub fn vertical(&self) -> &Debounce {
        &self.vertical
    }

    pub fn horizontal(&self) -> &Debounce {
        &self.horizontal
    }
}

impl InputStrategy for AutonomousController {
    fn decide(&mut self, ctx: &InputContext<'_>) -> Intent {
        let paddle = ctx.paddle;
        let puck = ctx.puck;
        let approaching = paddle.side.is_approached_by(puck.vel.x());

        let (want_vertical, want_horizontal) = if approaching {
            let y_offset = puck.center().y - paddle.center().y;
            let home_x = ctx.config.paddle_spawn(paddle.side).x;
            (
                Direction::toward(y_offset, self.dead_zone),
                Direction::toward(home_x - paddle.left(), self.dead_zone),
            )
        } else {
            (Direction::Stop, Direction::Stop)
        };

        let mut intent = Intent {
            trying_to_grab: false,
            ..paddle.intent
        };
        if let Some(dir) = self.vertical.request(want_vertical) {
            intent.moving_up = dir == Direction::Minus;
            intent.moving_down = dir == Direction::Plus;
        }
        if let Some(dir) = self.horizontal.request(want_horizontal) {
            intent.moving_left = dir == Direction::Minus;
            intent.moving_right = dir == Direction::Plus;
        }
        intent
    }

    fn name(&self) -> &'static str {
        "ai"
    }
}
