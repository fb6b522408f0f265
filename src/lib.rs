//! # preflop_trainer
//!
//! The decision engine behind a pre-flop opening trainer.
//!
//! The hero is dealt a random starting hand at a 6-max seat with the action
//! folded to them, and must Fold, Call or Raise. The engine grades the answer
//! against a positional raise-first-in (RFI) chart and explains mistakes.
//!
//! ## How it works
//!
//! 1. [`HandCatalog`] holds the 169 starting-hand classes ranked 1 (AA) to
//!    169 (72o).
//! 2. [`classify`] / [`instantiate`] convert between a concrete two-card
//!    [`Deal`] and its [`HandClass`] notation (`"AKs"`, `"72o"`, `"JJ"`).
//! 3. [`RangeTable`] stores each position's opening threshold as a whole
//!    percentage; a class is in range when `rank / 169 * 100 <= threshold`.
//! 4. [`DecisionJudge`] turns that into a [`Verdict`]: raise in-range hands,
//!    fold the rest, never limp.
//! 5. [`TrainingSession`] strings it together: it deals, rotates the hero
//!    around the table and keeps score.
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_trainer::{TrainerSettings, TrainingSession};
//!
//! let mut session = TrainingSession::new(TrainerSettings::default(), Some(42))?;
//! let hand = session.snapshot();
//! println!("{} at {}", hand.class, hand.position);
//!
//! let outcome = session.act("Raise")?;
//! if !outcome.verdict.is_correct {
//!     println!("{}", outcome.verdict.explanation);
//! }
//! # Ok::<(), preflop_trainer::TrainerError>(())
//! ```
//!
//! One-shot drills with every answer pre-graded:
//!
//! ```rust
//! use preflop_trainer::{generate_drill, DrillRequest};
//!
//! let drill = generate_drill(DrillRequest::seeded(7))?;
//! for ans in &drill.answers {
//!     let mark = if ans.is_correct { "+" } else { " " };
//!     println!("[{mark}] {} {}", ans.id, ans.action);
//! }
//! # Ok::<(), preflop_trainer::TrainerError>(())
//! ```

pub mod training_engine;

// Convenience re-exports so callers can use `preflop_trainer::TrainingSession`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    classify, generate_drill, instantiate, random_deal, Action, ActionOutcome, AnswerOption,
    Card, Deal, DecisionJudge, Drill, DrillRequest, GridCell, HandCatalog, HandClass,
    HandSnapshot, MistakeKind, Percent, Position, RangeGrid, RangeTable, Rank, Result, Sampling,
    Scenario, SessionStats, SettingsPatch, Shape, Suit, TablePosition, TextStyle, TrainerError,
    TrainerSettings, TrainingSession, Verdict, TOTAL_CLASSES, UNRANKED,
};
