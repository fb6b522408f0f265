use crate::training_engine::{
    catalog::HandCatalog,
    error::{Result, TrainerError},
    helpers::{percentile_str, styled},
    models::{Action, HandClass, MistakeKind, Position, Scenario, TextStyle, Verdict},
    ranges::RangeTable,
};

/// Grades one user action against the opening chart.
///
/// Stateless: the verdict depends only on the hand, the seat, the scenario
/// and the action.
#[derive(Debug, Clone, Copy)]
pub struct DecisionJudge<'a> {
    catalog: &'a HandCatalog,
    ranges: &'a RangeTable,
}

impl DecisionJudge<'static> {
    /// Built-in catalog and the 6-max RFI chart.
    pub fn standard() -> Self {
        DecisionJudge::new(HandCatalog::standard(), RangeTable::rfi())
    }
}

impl<'a> DecisionJudge<'a> {
    pub fn new(catalog: &'a HandCatalog, ranges: &'a RangeTable) -> Self {
        DecisionJudge { catalog, ranges }
    }

    /// Raise if the hand is in the seat's opening range, fold otherwise.
    /// Calling is never correct when first in.
    pub fn correct_action(
        &self,
        class: HandClass,
        position: Position,
        scenario: Scenario,
    ) -> Result<Action> {
        if scenario != Scenario::Rfi {
            return Err(TrainerError::UnsupportedScenario(scenario));
        }
        let open = self.ranges.is_opening_hand(self.catalog, class, position)?;
        Ok(if open { Action::Raise } else { Action::Fold })
    }

    pub fn judge(
        &self,
        class: HandClass,
        position: Position,
        scenario: Scenario,
        user_action: Action,
        style: TextStyle,
    ) -> Result<Verdict> {
        let correct_action = self.correct_action(class, position, scenario)?;
        let mistake = match (user_action, correct_action) {
            (user, correct) if user == correct => None,
            (Action::Call, _) => Some(MistakeKind::LimpError),
            (Action::Fold, Action::Raise) => Some(MistakeKind::MissedValue),
            _ => Some(MistakeKind::Overplay),
        };
        let explanation = match mistake {
            None => String::new(),
            Some(kind) => self.explain(kind, class, position, correct_action, style)?,
        };
        let verdict = Verdict {
            correct_action,
            user_action,
            is_correct: mistake.is_none(),
            mistake,
            explanation,
        };
        log::debug!(
            "{class} from {position}: chose {user_action}, expected {correct_action} ({})",
            mistake.map_or("correct", MistakeKind::as_str)
        );
        Ok(verdict)
    }

    /// Same as [`judge`](Self::judge) for a raw `Fold | Call | Raise` token.
    pub fn judge_token(
        &self,
        class: HandClass,
        position: Position,
        scenario: Scenario,
        token: &str,
        style: TextStyle,
    ) -> Result<Verdict> {
        self.judge(class, position, scenario, token.parse()?, style)
    }

    fn explain(
        &self,
        kind: MistakeKind,
        class: HandClass,
        position: Position,
        correct: Action,
        style: TextStyle,
    ) -> Result<String> {
        let rank = self.catalog.rank(class);
        let pct = percentile_str(rank);
        let threshold = self.ranges.opening_threshold(position)?;
        let seat = position.full_name();
        let text = match kind {
            MistakeKind::LimpError => styled(
                style,
                format!(
                    "Just calling when everyone has folded to you lets the blinds in cheaply. \
                     With {class} from the {seat}, the right play is to {}.",
                    correct.to_string().to_lowercase()
                ),
                format!(
                    "Limping is never part of an RFI strategy. {class} (rank {rank}, top {pct}%) \
                     from {position} with a {threshold} opening range: {correct}."
                ),
            ),
            MistakeKind::MissedValue => styled(
                style,
                format!(
                    "{class} is strong enough to raise from the {seat}. \
                     Folding throws away a profitable hand."
                ),
                format!(
                    "{class} is rank {rank} (top {pct}%), inside the {threshold} {position} \
                     opening range. Open-raise for value."
                ),
            ),
            MistakeKind::Overplay => styled(
                style,
                format!(
                    "{class} is too weak to raise from the {seat}. \
                     Fold and wait for a better hand."
                ),
                format!(
                    "{class} is rank {rank} (top {pct}%), outside the {threshold} {position} \
                     opening range. Opening it loses money; fold."
                ),
            ),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::ranges::Percent;

    fn class(s: &str) -> HandClass {
        s.parse().unwrap()
    }

    fn judge(hand: &str, position: Position, action: Action) -> Verdict {
        DecisionJudge::standard()
            .judge(class(hand), position, Scenario::Rfi, action, TextStyle::Technical)
            .unwrap()
    }

    #[test]
    fn folding_a_button_open_is_missed_value() {
        let j = DecisionJudge::standard();
        assert_eq!(
            j.correct_action(class("AKs"), Position::BTN, Scenario::Rfi).unwrap(),
            Action::Raise
        );
        let v = judge("AKs", Position::BTN, Action::Fold);
        assert!(!v.is_correct);
        assert_eq!(v.mistake, Some(MistakeKind::MissedValue));
        assert!(v.explanation.contains("AKs"));
    }

    #[test]
    fn raising_trash_under_the_gun_is_overplay() {
        let v = judge("72o", Position::UTG, Action::Raise);
        assert_eq!(v.correct_action, Action::Fold);
        assert!(!v.is_correct);
        assert_eq!(v.mistake, Some(MistakeKind::Overplay));
        assert!(v.explanation.contains("rank 169"));
    }

    #[test]
    fn calling_is_always_a_limp_error() {
        let catalog = HandCatalog::standard();
        for &c in catalog.all_classes() {
            for position in Position::ALL {
                let v = DecisionJudge::standard()
                    .judge(c, position, Scenario::Rfi, Action::Call, TextStyle::Simple)
                    .unwrap();
                assert!(!v.is_correct);
                assert_eq!(v.mistake, Some(MistakeKind::LimpError));
                assert!(!v.explanation.is_empty());
            }
        }
    }

    #[test]
    fn matching_the_chart_is_correct_with_no_explanation() {
        let raise = judge("AA", Position::UTG, Action::Raise);
        assert!(raise.is_correct);
        assert_eq!(raise.mistake, None);
        assert!(raise.explanation.is_empty());

        let fold = judge("72o", Position::CO, Action::Fold);
        assert!(fold.is_correct);
        assert_eq!(fold.correct_action, Action::Fold);
        assert!(fold.explanation.is_empty());
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let j = DecisionJudge::standard();
        let ok = j.judge_token(class("AA"), Position::BTN, Scenario::Rfi, "Raise", TextStyle::Simple);
        assert!(ok.unwrap().is_correct);
        for bad in ["raise", "FOLD", "Check", "", "3-Bet"] {
            let err = j
                .judge_token(class("AA"), Position::BTN, Scenario::Rfi, bad, TextStyle::Simple)
                .unwrap_err();
            assert!(matches!(err, TrainerError::UnknownAction(_)), "{bad:?}");
        }
    }

    #[test]
    fn response_scenario_has_no_policy() {
        let err = DecisionJudge::standard()
            .judge(class("AA"), Position::BTN, Scenario::Response, Action::Raise, TextStyle::Simple)
            .unwrap_err();
        assert!(matches!(err, TrainerError::UnsupportedScenario(Scenario::Response)));
    }

    #[test]
    fn unknown_position_surfaces_through_the_judge() {
        let table = RangeTable::from_entries([(Position::BTN, Percent::new(42).unwrap())]);
        let j = DecisionJudge::new(HandCatalog::standard(), &table);
        let err = j
            .judge(class("AA"), Position::SB, Scenario::Rfi, Action::Raise, TextStyle::Simple)
            .unwrap_err();
        assert!(matches!(err, TrainerError::UnknownPosition(_)));
    }

    #[test]
    fn style_changes_wording_not_verdict() {
        let j = DecisionJudge::standard();
        let simple = j
            .judge(class("72o"), Position::UTG, Scenario::Rfi, Action::Raise, TextStyle::Simple)
            .unwrap();
        let tech = j
            .judge(class("72o"), Position::UTG, Scenario::Rfi, Action::Raise, TextStyle::Technical)
            .unwrap();
        assert_eq!(simple.mistake, tech.mistake);
        assert_eq!(simple.correct_action, tech.correct_action);
        assert_ne!(simple.explanation, tech.explanation);
    }
}
