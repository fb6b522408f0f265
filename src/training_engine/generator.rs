use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    catalog::HandCatalog,
    codec,
    error::Result,
    helpers::{hand_str, percentile_str, styled},
    judge::DecisionJudge,
    models::{
        Action, Deal, HandClass, MistakeKind, Position, Sampling, Scenario, TablePosition,
        TextStyle,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub hero_position: TablePosition,
    pub rng_seed: Option<u64>,
    pub text_style: TextStyle,
    pub sampling: Sampling,
}

impl DrillRequest {
    /// Random seat, entropy seed, simple wording, uniform hands.
    pub fn new() -> Self {
        DrillRequest {
            hero_position: TablePosition::RANDOM,
            rng_seed: None,
            text_style: TextStyle::Simple,
            sampling: Sampling::Uniform,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        DrillRequest { rng_seed: Some(seed), ..Self::new() }
    }
}

impl Default for DrillRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub action: Action,
    pub is_correct: bool,
    pub mistake: Option<MistakeKind>,
    pub explanation: String,
}

/// A self-contained raise-first-in question with every answer pre-graded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    pub drill_id: String,
    pub position: Position,
    pub scenario: Scenario,
    pub class: HandClass,
    pub deal: Deal,
    pub rank: u8,
    pub question: String,
    pub answers: Vec<AnswerOption>,
}

impl Drill {
    pub fn correct_answer(&self) -> Option<&AnswerOption> {
        self.answers.iter().find(|a| a.is_correct)
    }
}

fn make_drill_id(rng: &mut impl RngCore) -> String {
    format!("RFI-{:08X}", rng.next_u32())
}

/// Build one drill. The same seed always yields the same drill.
pub fn generate_drill(request: DrillRequest) -> Result<Drill> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let drill_id = make_drill_id(&mut rng);
    let position = match request.hero_position.fixed() {
        Some(p) => p,
        None => Position::ALL[rng.gen_range(0..Position::ALL.len())],
    };
    let catalog = HandCatalog::standard();
    let (class, deal) = codec::random_deal(catalog, request.sampling, &mut rng)?;
    let rank = catalog.rank(class);
    let ts = request.text_style;

    let hand = hand_str(class, &deal);
    let question = styled(
        ts,
        format!(
            "You have {hand} in the {}. Everyone before you folded. What do you do?",
            position.full_name()
        ),
        format!(
            "Folded to you in {position} holding {hand}, rank {rank}/169 (top {}%). Action?",
            percentile_str(rank)
        ),
    );

    let judge = DecisionJudge::standard();
    let mut answers = Vec::with_capacity(Action::ALL.len());
    for (id, action) in ["A", "B", "C"].into_iter().zip(Action::ALL) {
        let verdict = judge.judge(class, position, Scenario::Rfi, action, ts)?;
        let explanation = if verdict.is_correct {
            styled(
                ts,
                format!("Correct. {action} is the right play with {class} from the {}.", position.full_name()),
                format!("Correct. {class} from {position}: {action} per the RFI chart."),
            )
        } else {
            verdict.explanation
        };
        answers.push(AnswerOption {
            id: id.to_string(),
            action,
            is_correct: verdict.is_correct,
            mistake: verdict.mistake,
            explanation,
        });
    }

    log::debug!("generated {drill_id}: {class} at {position}");
    Ok(Drill {
        drill_id,
        position,
        scenario: Scenario::Rfi,
        class,
        deal,
        rank,
        question,
        answers,
    })
}
