use thiserror::Error;

use crate::training_engine::models::{Card, Scenario};

/// Every way the trainer core can refuse an input.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// A string that is not one of the 169 starting-hand notations.
    #[error("unknown hand notation: {0:?}")]
    UnknownNotation(String),

    /// A position with no entry in the active range table.
    #[error("no such position: {0}")]
    UnknownPosition(String),

    /// Both cards of a deal are the same physical card.
    #[error("deal contains the same card twice: {0}")]
    DuplicateCard(Card),

    /// An action token outside `Fold | Call | Raise`.
    #[error("unknown action {0:?} (expected Fold, Call or Raise)")]
    UnknownAction(String),

    /// A hand ranking that is not a permutation of the 169 classes.
    #[error("invalid hand catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid card: {0:?}")]
    InvalidCard(String),

    /// Range thresholds are whole percentages in `0..=100`.
    #[error("range percentage {0} is outside 0..=100")]
    PercentOutOfRange(u32),

    /// The judge only has a policy for raise-first-in spots.
    #[error("no decision policy for scenario {0}")]
    UnsupportedScenario(Scenario),

    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
