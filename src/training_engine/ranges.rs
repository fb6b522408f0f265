//! Positional opening ranges.
//!
//! A range is "the strongest N% of the 169 classes by count". Every table in
//! this module stores whole percentages (0..=100); fractional shares are
//! rejected at construction so no consumer has to guess the unit.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    catalog::{HandCatalog, TOTAL_CLASSES, UNRANKED},
    error::{Result, TrainerError},
    models::{HandClass, Position, Rank, Shape},
};

/// A whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u32) -> Result<Self> {
        if value <= 100 {
            Ok(Percent(value as u8))
        } else {
            Err(TrainerError::PercentOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Percent {
    type Error = TrainerError;

    fn try_from(value: u32) -> Result<Self> {
        Percent::new(value)
    }
}

impl From<Percent> for u32 {
    fn from(p: Percent) -> u32 {
        p.0 as u32
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// True when strength rank `rank` falls inside the top `threshold` of classes.
///
/// Computed as `rank * 100 <= threshold * 169` so the boundary is exact: a
/// class whose percentile equals the threshold is in range.
pub fn rank_within(rank: u8, threshold: Percent) -> bool {
    if rank == 0 || rank > TOTAL_CLASSES {
        return false;
    }
    rank as u32 * 100 <= threshold.get() as u32 * TOTAL_CLASSES as u32
}

static RFI_DEFAULT: Lazy<RangeTable> = Lazy::new(|| {
    RangeTable::from_entries([
        (Position::UTG, Percent(15)),
        (Position::HJ, Percent(20)),
        (Position::CO, Percent(26)),
        (Position::BTN, Percent(42)),
        (Position::SB, Percent(50)),
        (Position::BB, Percent(100)),
    ])
});

/// Opening threshold per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable {
    thresholds: BTreeMap<Position, Percent>,
}

impl RangeTable {
    /// The 6-max raise-first-in chart.
    pub fn rfi() -> &'static RangeTable {
        &RFI_DEFAULT
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (Position, Percent)>) -> Self {
        RangeTable { thresholds: entries.into_iter().collect() }
    }

    /// Parse `{"UTG": 15, "BTN": 42, ...}`. Values must be whole percentages.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: RangeTable = serde_json::from_str(json)?;
        for position in Position::ALL {
            if !table.thresholds.contains_key(&position) {
                log::warn!("range table has no entry for {position}");
            }
        }
        log::info!("loaded range table ({} positions)", table.thresholds.len());
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Percentage of classes `position` should open. Positions missing from
    /// the table are an error, never an implicit 0%.
    pub fn opening_threshold(&self, position: Position) -> Result<Percent> {
        self.thresholds
            .get(&position)
            .copied()
            .ok_or_else(|| TrainerError::UnknownPosition(position.to_string()))
    }

    pub fn is_opening_hand(
        &self,
        catalog: &HandCatalog,
        class: HandClass,
        position: Position,
    ) -> Result<bool> {
        let threshold = self.opening_threshold(position)?;
        Ok(rank_within(catalog.rank(class), threshold))
    }

    /// Notation-level check. Unranked notation is never in range.
    pub fn is_opening_notation(
        &self,
        catalog: &HandCatalog,
        notation: &str,
        position: Position,
    ) -> Result<bool> {
        let threshold = self.opening_threshold(position)?;
        let rank = catalog.rank_of(notation);
        Ok(rank != UNRANKED && rank_within(rank, threshold))
    }

    /// Every class `position` opens, strongest first.
    pub fn opening_range(&self, catalog: &HandCatalog, position: Position) -> Result<Vec<HandClass>> {
        let threshold = self.opening_threshold(position)?;
        Ok(catalog
            .all_classes()
            .iter()
            .enumerate()
            .take_while(|(i, _)| rank_within(*i as u8 + 1, threshold))
            .map(|(_, c)| *c)
            .collect())
    }

    /// The 13x13 starting-hand chart for `position`.
    pub fn range_grid(&self, catalog: &HandCatalog, position: Position) -> Result<RangeGrid> {
        let threshold = self.opening_threshold(position)?;
        let ranks: Vec<Rank> = Rank::descending().collect();
        let mut cells = Vec::with_capacity(ranks.len());
        for (row, &row_rank) in ranks.iter().enumerate() {
            let mut line = Vec::with_capacity(ranks.len());
            for (col, &col_rank) in ranks.iter().enumerate() {
                let shape = match row.cmp(&col) {
                    std::cmp::Ordering::Equal => Shape::Pair,
                    std::cmp::Ordering::Less => Shape::Suited,
                    std::cmp::Ordering::Greater => Shape::Offsuit,
                };
                // Ranks differ off the diagonal and match on it, so this
                // always yields a class.
                if let Some(class) = HandClass::new(row_rank, col_rank, shape) {
                    let rank = catalog.rank(class);
                    line.push(GridCell { class, rank, in_range: rank_within(rank, threshold) });
                }
            }
            cells.push(line);
        }
        Ok(RangeGrid { position, threshold, cells })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub class: HandClass,
    pub rank: u8,
    pub in_range: bool,
}

/// Rows and columns run A..2. The diagonal holds pairs, cells above it
/// suited classes and cells below it offsuit classes.
#[derive(Debug, Clone, Serialize)]
pub struct RangeGrid {
    pub position: Position,
    pub threshold: Percent,
    pub cells: Vec<Vec<GridCell>>,
}

impl RangeGrid {
    pub fn in_range_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.in_range).count()
    }
}

impl fmt::Display for RangeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} opens {}", self.position, self.threshold)?;
        for line in &self.cells {
            for cell in line {
                if cell.in_range {
                    write!(f, "{:>4}", cell.class.notation())?;
                } else {
                    write!(f, "{:>4}", ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
