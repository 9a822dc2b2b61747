use thiserror::Error;

/// Errors surfaced by the simulation API
#[derive(Debug, Error)]
pub enum SimError {
    /// `tick` was called after the puck reached a side wall
    #[error("simulation is over; start a new one to keep playing")]
    GameOver,

    /// `restart` was called while the puck is still in play
    #[error("simulation is still running; only a finished game can be restarted")]
    NotOver,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    NoSuchEntity(#[from] hecs::NoSuchEntity),

    #[error(transparent)]
    Component(#[from] hecs::ComponentError),
}
