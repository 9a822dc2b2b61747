/// Game tuning parameters for magnetic Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MOVE_SPEED: f32 = 3.0; // units per tick
    pub const PULL_FORCE: f32 = 0.1; // units per tick², toward a pulling paddle

    // Puck
    pub const PUCK_WIDTH: f32 = 20.0;
    pub const PUCK_HEIGHT: f32 = 20.0;
    pub const PUCK_SPEED: f32 = 3.0; // launch speed, units per tick
    pub const PUCK_SPEED_CAP_FACTOR: f32 = 1.5; // ceiling = launch speed * factor
    pub const BEND_DAMPING: f32 = 0.75;

    // AI
    pub const AI_DEAD_ZONE: f32 = 50.0;
    pub const AI_VERTICAL_DEBOUNCE: u32 = 10; // ticks
    pub const AI_HORIZONTAL_DEBOUNCE: u32 = 50; // ticks

    // Timing
    pub const TICK_HZ: u32 = 60;
}
