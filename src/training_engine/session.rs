//! The running trainer: current seat, current hand, settings and score.
//!
//! All state lives in an explicit [`TrainingSession`] value. Each mutation
//! (`act`, `reshuffle`, `update_settings`) updates it in place and hands back
//! a fresh [`HandSnapshot`] for display.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    catalog::HandCatalog,
    codec,
    error::Result,
    helpers::rank_label,
    judge::DecisionJudge,
    models::{Action, Deal, HandClass, Position, Scenario, Verdict},
    ranges::RangeTable,
    settings::{SettingsPatch, TrainerSettings},
};

/// Seats in clockwise order around the table.
pub const CLOCKWISE: [Position; 6] = [
    Position::SB, Position::BB, Position::UTG,
    Position::HJ, Position::CO, Position::BTN,
];

const START_SEAT: usize = 5; // BTN

fn seat_of(position: Position) -> usize {
    CLOCKWISE.iter().position(|&p| p == position).unwrap_or(START_SEAT)
}

/// What the UI shows for the hand in front of the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub position: Position,
    pub scenario: Scenario,
    pub class: HandClass,
    pub deal: Deal,
    pub rank: u8,
    /// `"(r/169)"`, present only when the settings show hand ranks.
    pub rank_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub verdict: Verdict,
    pub next: HandSnapshot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub judged: u32,
    pub correct: u32,
}

impl SessionStats {
    /// Share of correct answers in `0.0..=1.0`; 0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        if self.judged == 0 {
            return 0.0;
        }
        self.correct as f64 / self.judged as f64
    }
}

pub struct TrainingSession {
    settings: TrainerSettings,
    catalog: &'static HandCatalog,
    ranges: RangeTable,
    rng: StdRng,
    seat: usize,
    class: HandClass,
    deal: Deal,
    stats: SessionStats,
}

impl TrainingSession {
    /// Start a session on the built-in RFI chart.
    ///
    /// `rng_seed: Some(_)` makes every deal reproducible.
    pub fn new(settings: TrainerSettings, rng_seed: Option<u64>) -> Result<Self> {
        Self::with_ranges(settings, RangeTable::rfi().clone(), rng_seed)
    }

    pub fn with_ranges(
        settings: TrainerSettings,
        ranges: RangeTable,
        rng_seed: Option<u64>,
    ) -> Result<Self> {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = HandCatalog::standard();
        let seat = settings.hero_position.fixed().map_or(START_SEAT, seat_of);
        let (class, deal) = codec::random_deal(catalog, settings.sampling, &mut rng)?;
        log::debug!("session started at {} with {class}", CLOCKWISE[seat]);
        Ok(TrainingSession {
            settings,
            catalog,
            ranges,
            rng,
            seat,
            class,
            deal,
            stats: SessionStats::default(),
        })
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn position(&self) -> Position {
        CLOCKWISE[self.seat]
    }

    pub fn snapshot(&self) -> HandSnapshot {
        let rank = self.catalog.rank(self.class);
        HandSnapshot {
            position: self.position(),
            scenario: self.settings.scenario,
            class: self.class,
            deal: self.deal,
            rank,
            rank_label: self.settings.show_hand_rank.then(|| rank_label(rank)),
        }
    }

    /// Position labels around the table, starting at the hero and going
    /// clockwise.
    pub fn seat_labels(&self) -> [Position; 6] {
        std::array::from_fn(|i| CLOCKWISE[(self.seat + i) % CLOCKWISE.len()])
    }

    /// Judge `token` for the current hand, then move on to the next hand.
    ///
    /// On error (bad token, unsupported scenario) nothing changes.
    pub fn act(&mut self, token: &str) -> Result<ActionOutcome> {
        let action: Action = token.parse()?;
        let verdict = DecisionJudge::new(self.catalog, &self.ranges).judge(
            self.class,
            self.position(),
            self.settings.scenario,
            action,
            self.settings.text_style,
        )?;
        self.stats.judged += 1;
        if verdict.is_correct {
            self.stats.correct += 1;
        }
        self.advance()?;
        Ok(ActionOutcome { verdict, next: self.snapshot() })
    }

    /// Deal a new hand without judging the current one. Does not rotate.
    pub fn reshuffle(&mut self) -> Result<HandSnapshot> {
        self.deal_next()?;
        Ok(self.snapshot())
    }

    /// Merge `patch` into the settings. Choosing a fixed hero position moves
    /// the hero there immediately.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> HandSnapshot {
        self.settings.apply(patch);
        if let Some(position) = self.settings.hero_position.fixed() {
            self.seat = seat_of(position);
        }
        self.snapshot()
    }

    fn advance(&mut self) -> Result<()> {
        if self.settings.hero_position.fixed().is_none() {
            self.seat = (self.seat + 1) % CLOCKWISE.len();
            log::debug!("hero rotates to {}", self.position());
        }
        self.deal_next()
    }

    fn deal_next(&mut self) -> Result<()> {
        let (class, deal) = codec::random_deal(self.catalog, self.settings.sampling, &mut self.rng)?;
        log::debug!("dealt {deal} ({class}) at {}", self.position());
        self.class = class;
        self.deal = deal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::{
        error::TrainerError,
        models::{MistakeKind, TablePosition},
        ranges::Percent,
    };

    fn fixed(position: TablePosition) -> TrainerSettings {
        TrainerSettings { hero_position: position, ..Default::default() }
    }

    #[test]
    fn random_seat_starts_on_button_and_rotates_clockwise() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(1)).unwrap();
        assert_eq!(s.position(), Position::BTN);
        let mut order = Vec::new();
        for _ in 0..6 {
            s.act("Fold").unwrap();
            order.push(s.position());
        }
        assert_eq!(order, CLOCKWISE.to_vec());
    }

    #[test]
    fn fixed_seat_never_moves() {
        let mut s = TrainingSession::new(fixed(TablePosition::UTG), Some(2)).unwrap();
        for _ in 0..10 {
            let out = s.act("Raise").unwrap();
            assert_eq!(out.next.position, Position::UTG);
        }
    }

    #[test]
    fn choosing_a_position_moves_the_hero() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(3)).unwrap();
        let snap = s.update_settings(SettingsPatch {
            hero_position: Some(TablePosition::CO),
            ..Default::default()
        });
        assert_eq!(snap.position, Position::CO);
        s.act("Fold").unwrap();
        assert_eq!(s.position(), Position::CO);
    }

    #[test]
    fn seat_labels_start_at_hero() {
        let s = TrainingSession::new(fixed(TablePosition::UTG), Some(4)).unwrap();
        assert_eq!(
            s.seat_labels(),
            [Position::UTG, Position::HJ, Position::CO, Position::BTN, Position::SB, Position::BB]
        );
    }

    #[test]
    fn act_judges_the_hand_that_was_shown() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(5)).unwrap();
        for _ in 0..50 {
            let shown = s.snapshot();
            let expected = DecisionJudge::standard()
                .correct_action(shown.class, shown.position, Scenario::Rfi)
                .unwrap();
            let out = s.act(&expected.to_string()).unwrap();
            assert!(out.verdict.is_correct);
        }
        assert_eq!(s.stats(), SessionStats { judged: 50, correct: 50 });
        assert_eq!(s.stats().accuracy(), 1.0);
    }

    #[test]
    fn calls_count_against_accuracy() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(6)).unwrap();
        let out = s.act("Call").unwrap();
        assert_eq!(out.verdict.mistake, Some(MistakeKind::LimpError));
        assert_eq!(s.stats(), SessionStats { judged: 1, correct: 0 });
    }

    #[test]
    fn bad_token_leaves_state_untouched() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(7)).unwrap();
        let before = s.snapshot();
        assert!(matches!(s.act("fold"), Err(TrainerError::UnknownAction(_))));
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.stats().judged, 0);
    }

    #[test]
    fn response_mode_deals_but_cannot_judge() {
        let settings = TrainerSettings { scenario: Scenario::Response, ..Default::default() };
        let mut s = TrainingSession::new(settings, Some(8)).unwrap();
        assert!(matches!(s.act("Raise"), Err(TrainerError::UnsupportedScenario(_))));
        let snap = s.reshuffle().unwrap();
        assert_eq!(snap.scenario, Scenario::Response);
    }

    #[test]
    fn rank_label_follows_setting() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(9)).unwrap();
        let snap = s.snapshot();
        assert_eq!(snap.rank_label, Some(format!("({}/169)", snap.rank)));
        let hidden = s.update_settings(SettingsPatch { show_hand_rank: Some(false), ..Default::default() });
        assert_eq!(hidden.rank_label, None);
    }

    #[test]
    fn custom_table_without_the_seat_fails_loudly() {
        let ranges = RangeTable::from_entries([(Position::BTN, Percent::new(100).unwrap())]);
        let mut s = TrainingSession::with_ranges(fixed(TablePosition::UTG), ranges, Some(11)).unwrap();
        assert!(matches!(s.act("Fold"), Err(TrainerError::UnknownPosition(_))));
    }

    #[test]
    fn reshuffle_keeps_the_seat() {
        let mut s = TrainingSession::new(TrainerSettings::default(), Some(10)).unwrap();
        for _ in 0..5 {
            assert_eq!(s.reshuffle().unwrap().position, Position::BTN);
        }
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let run = |seed| {
            let mut s = TrainingSession::new(TrainerSettings::default(), Some(seed)).unwrap();
            (0..20).map(|_| s.act("Fold").unwrap().next.deal).collect::<Vec<_>>()
        };
        assert_eq!(run(77), run(77));
        assert_ne!(run(77), run(78));
    }
}
