/// Random number generator
///
/// The only source of randomness in the simulation; seed it for replays and
/// tests.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub puck_hit_paddle: bool,
    pub puck_hit_wall: bool,
    pub puck_grabbed: bool,
    pub puck_released: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.puck_hit_paddle = false;
        self.puck_hit_wall = false;
        self.puck_grabbed = false;
        self.puck_released = false;
        self.game_over = false;
    }
}
