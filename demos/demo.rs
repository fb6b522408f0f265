//! Walk through a short training session.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=debug` to see every deal, rotation and verdict.
//!
//! 1. **Session** — a seeded session with the hero seat on RANDOM. Each hand
//!    is answered with the chart's move except every third, which is a limp,
//!    so both verdict kinds show up.
//! 2. **TextStyle comparison** — the same mistake explained in Simple and
//!    Technical wording.
//! 3. **Drill** — one self-contained question with every answer pre-graded.

use preflop_trainer::{
    generate_drill, Action, DecisionJudge, DrillRequest, HandClass, Position, Scenario, TextStyle,
    TrainerSettings, TrainingSession,
};

fn main() -> preflop_trainer::Result<()> {
    env_logger::init();

    // ── Session ───────────────────────────────────────────────────────────
    println!();
    println!("══ Session (seed 42) ══");
    println!();
    let mut session = TrainingSession::new(TrainerSettings::default(), Some(42))?;
    let judge = DecisionJudge::standard();
    for i in 0..9 {
        let hand = session.snapshot();
        let chart = judge.correct_action(hand.class, hand.position, Scenario::Rfi)?;
        let answer = if i % 3 == 2 { Action::Call } else { chart };
        let outcome = session.act(&answer.to_string())?;
        let mark = if outcome.verdict.is_correct { "✓" } else { "✗" };
        println!(
            "  {:<3} {} {:<8} {:<5} {mark} {}",
            hand.position,
            hand.deal,
            hand.rank_label.unwrap_or_default(),
            answer,
            outcome.verdict.explanation
        );
    }
    let stats = session.stats();
    println!();
    println!("  {}/{} correct ({:.0}%)", stats.correct, stats.judged, stats.accuracy() * 100.0);

    // ── TextStyle comparison ─────────────────────────────────────────────
    println!();
    println!("══ Same mistake, two styles: 72o raised UTG ══");
    println!();
    let hand: HandClass = "72o".parse()?;
    for style in [TextStyle::Simple, TextStyle::Technical] {
        let v = judge.judge(hand, Position::UTG, Scenario::Rfi, Action::Raise, style)?;
        println!("  [{style:?}] {}: {}", v.mistake.map(|m| m.as_str()).unwrap_or("-"), v.explanation);
    }

    // ── Drill ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Drill ══");
    println!();
    let drill = generate_drill(DrillRequest { text_style: TextStyle::Technical, ..DrillRequest::seeded(7) })?;
    println!("  {}  Q: {}", drill.drill_id, drill.question);
    for ans in &drill.answers {
        let marker = if ans.is_correct { "✓" } else { " " };
        println!("  [{}] {marker} {}", ans.id, ans.action);
        println!("       {}", ans.explanation);
    }
    println!();
    Ok(())
}
