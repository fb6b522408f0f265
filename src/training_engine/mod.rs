//! Core trainer engine: hand catalog, notation codec, range policy and judge.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, deals, hand classes, positions, actions, verdicts |
//! | `error`     | `TrainerError`, the single error type of the crate |
//! | `catalog`   | The 169 starting-hand classes in strength order |
//! | `codec`     | Deal <-> class conversion and random hand sampling |
//! | `deck`      | 52-card deck for combinatorially weighted deals |
//! | `ranges`    | Opening thresholds per position, range membership, 13x13 chart |
//! | `judge`     | Grades Fold / Call / Raise against the opening chart |
//! | `helpers`   | Shared formatting helpers |
//! | `settings`  | Trainer settings and JSON persistence |
//! | `session`   | Stateful trainer loop: seat rotation, dealing, scoring |
//! | `generator` | Seeded one-shot drills with pre-graded answers |

pub mod catalog;
pub mod codec;
pub mod deck;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod judge;
pub mod models;
pub mod ranges;
pub mod session;
pub mod settings;

// Re-export the public API surface so callers can use
// `training_engine::TrainingSession` without reaching into sub-modules.
pub use catalog::{HandCatalog, TOTAL_CLASSES, UNRANKED};
pub use codec::{classify, instantiate, random_deal};
pub use error::{Result, TrainerError};
pub use generator::{generate_drill, AnswerOption, Drill, DrillRequest};
pub use judge::DecisionJudge;
pub use models::{
    Action, Card, Deal, HandClass, MistakeKind, Position, Rank, Sampling, Scenario, Shape, Suit,
    TablePosition, TextStyle, Verdict,
};
pub use ranges::{GridCell, Percent, RangeGrid, RangeTable};
pub use session::{ActionOutcome, HandSnapshot, SessionStats, TrainingSession};
pub use settings::{SettingsPatch, TrainerSettings};
