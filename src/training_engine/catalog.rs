//! The 169 starting-hand classes and their fixed strength order.
//!
//! Strength rank 1 is the strongest class (AA) and 169 the weakest (72o).
//! The built-in order ranks classes by all-in equity against two random
//! hands; it is data, loaded once and never recomputed.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;

use crate::training_engine::{
    error::{Result, TrainerError},
    models::{HandClass, Shape},
};

pub const TOTAL_CLASSES: u8 = 169;

/// Returned by [`HandCatalog::rank_of`] for strings that name no class.
/// Never a real rank.
pub const UNRANKED: u8 = 170;

#[rustfmt::skip]
const STANDARD_RANKING: [&str; 169] = [
    "AA",  "KK",  "QQ",  "JJ",  "TT",  "99",  "88",  "AKs", "AQs", "AJs", "KQs", "AKo", "ATs",
    "AQo", "KJs", "77",  "KTs", "AJo", "A9s", "QJs", "A8s", "66",  "KQo", "ATo", "KJo", "QTs",
    "K9s", "A9o", "KTo", "A8o", "A5s", "A7s", "K8s", "A6s", "QJo", "JTs", "A7o", "A4s", "Q9s",
    "55",  "A3s", "A2s", "QTo", "K7s", "J9s", "K9o", "J8s", "Q8s", "JTo", "A5o", "K5s", "44",
    "A4o", "K8o", "K6s", "98s", "T9s", "K7o", "K4s", "J9o", "T8s", "A6o", "Q7s", "K6o", "K3s",
    "T9o", "A3o", "K2s", "J7s", "Q9o", "A2o", "T7s", "Q6s", "J5s", "K5o", "97s", "Q5s", "Q4s",
    "Q8o", "87s", "98o", "J8o", "T8o", "Q3s", "Q6o", "K4o", "33",  "J6s", "K3o", "J4s", "Q7o",
    "K2o", "T6s", "Q2s", "76s", "T7o", "J2s", "96s", "75s", "T5s", "J7o", "85s", "22",  "Q5o",
    "86s", "65s", "T3s", "J3s", "T6o", "J5o", "Q3o", "Q4o", "J6o", "95s", "T4s", "76o", "94s",
    "97o", "87o", "T2s", "54s", "J4o", "74s", "93s", "86o", "85o", "64s", "84s", "96o", "Q2o",
    "53s", "75o", "T5o", "92s", "J3o", "65o", "T3o", "43s", "82s", "J2o", "95o", "73s", "T4o",
    "62s", "63s", "83s", "64o", "72s", "54o", "42s", "52s", "74o", "94o", "T2o", "53o", "32s",
    "84o", "93o", "63o", "92o", "83o", "52o", "43o", "73o", "32o", "42o", "82o", "62o", "72o",
];

static STANDARD: Lazy<HandCatalog> = Lazy::new(|| {
    HandCatalog::from_notations(&STANDARD_RANKING[..])
        .expect("built-in ranking lists every class exactly once")
});

/// An ordered, immutable ranking of all 169 classes.
#[derive(Debug, Clone)]
pub struct HandCatalog {
    classes: Vec<HandClass>,
    ranks: HashMap<HandClass, u8>,
}

impl HandCatalog {
    /// The built-in ranking, shared by every caller.
    pub fn standard() -> &'static HandCatalog {
        &STANDARD
    }

    /// Build a catalog from notations listed strongest first.
    ///
    /// The list must name each of the 169 classes exactly once; spellings
    /// are normalized, so `"KAs"` counts as `"AKs"`.
    pub fn from_notations<S: AsRef<str>>(ordered: &[S]) -> Result<Self> {
        if ordered.len() != TOTAL_CLASSES as usize {
            return Err(TrainerError::InvalidCatalog(format!(
                "expected {TOTAL_CLASSES} hands, got {}",
                ordered.len()
            )));
        }
        let mut classes = Vec::with_capacity(ordered.len());
        let mut ranks = HashMap::with_capacity(ordered.len());
        for (i, notation) in ordered.iter().enumerate() {
            let class: HandClass = notation.as_ref().parse()?;
            if ranks.insert(class, i as u8 + 1).is_some() {
                return Err(TrainerError::InvalidCatalog(format!("{class} listed twice")));
            }
            classes.push(class);
        }
        Ok(HandCatalog { classes, ranks })
    }

    /// Load a ranking from a JSON array of notations, strongest first.
    pub fn from_json(json: &str) -> Result<Self> {
        let ordered: Vec<String> = serde_json::from_str(json)?;
        let catalog = Self::from_notations(ordered.as_slice())?;
        log::info!("loaded hand catalog ({} classes)", catalog.classes.len());
        Ok(catalog)
    }

    /// All classes, strongest first.
    pub fn all_classes(&self) -> &[HandClass] {
        &self.classes
    }

    /// Strength rank of `class`, 1..=169.
    pub fn rank(&self, class: HandClass) -> u8 {
        self.ranks.get(&class).copied().unwrap_or(UNRANKED)
    }

    /// Strength rank of a notation string, or [`UNRANKED`] if it names no class.
    pub fn rank_of(&self, notation: &str) -> u8 {
        notation
            .parse::<HandClass>()
            .map(|class| self.rank(class))
            .unwrap_or(UNRANKED)
    }

    /// Like [`rank_of`](Self::rank_of) but resolves to the class, failing on
    /// unknown notation.
    pub fn lookup(&self, notation: &str) -> Result<HandClass> {
        let class: HandClass = notation.parse()?;
        self.ranks
            .contains_key(&class)
            .then_some(class)
            .ok_or_else(|| TrainerError::UnknownNotation(notation.to_string()))
    }

    /// The class holding strength rank `rank`.
    pub fn class_at(&self, rank: u8) -> Option<HandClass> {
        let index = (rank as usize).checked_sub(1)?;
        self.classes.get(index).copied()
    }

    /// Uniform draw: every class, pairs included, has probability 1/169
    /// regardless of how many physical combinations it covers.
    pub fn random_class<R: Rng>(&self, rng: &mut R) -> HandClass {
        self.classes[rng.gen_range(0..self.classes.len())]
    }

    pub fn count_by_shape(&self, shape: Shape) -> usize {
        self.classes.iter().filter(|c| c.shape() == shape).count()
    }
}
