//! Small formatting helpers shared by the judge, the session and the drill
//! generator.

use crate::training_engine::{
    catalog::TOTAL_CLASSES,
    models::{Deal, HandClass, TextStyle},
};

/// Pick the right wording based on the active text style.
///
/// `Simple` returns beginner-friendly English; `Technical` returns poker jargon.
/// The verdict itself never depends on the style.
pub fn styled(ts: TextStyle, simple: String, technical: String) -> String {
    match ts {
        TextStyle::Simple => simple,
        TextStyle::Technical => technical,
    }
}

/// `"AKs (AhKh)"`.
pub fn hand_str(class: HandClass, deal: &Deal) -> String {
    format!("{class} ({deal})")
}

/// `"(8/169)"`, the rank badge shown next to the hero's hand.
pub fn rank_label(rank: u8) -> String {
    format!("({rank}/{TOTAL_CLASSES})")
}

/// Percentile of a strength rank, one decimal place: rank 71 -> `"42.0"`.
pub fn percentile_str(rank: u8) -> String {
    format!("{:.1}", rank as f64 * 100.0 / TOTAL_CLASSES as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(rank_label(8), "(8/169)");
        assert_eq!(percentile_str(169), "100.0");
        assert_eq!(percentile_str(1), "0.6");
    }

    #[test]
    fn hand_string_shows_class_and_cards() {
        let class: HandClass = "AKs".parse().unwrap();
        let deal = Deal::new("Ah".parse().unwrap(), "Kh".parse().unwrap());
        assert_eq!(hand_str(class, &deal), "AKs (AhKh)");
    }
}
