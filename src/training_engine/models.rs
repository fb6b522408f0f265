use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// All thirteen ranks, Ace first.
    pub fn descending() -> impl Iterator<Item = Rank> {
        (2u8..=14).rev().map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Parse a rank symbol. `"10"` and `"T"` are the same rank.
    pub fn from_symbol(s: &str) -> Option<Rank> {
        let value = match s {
            "2" => 2, "3" => 3, "4" => 4, "5" => 5, "6" => 6,
            "7" => 7, "8" => 8, "9" => 9, "T" | "10" => 10,
            "J" => 11, "Q" => 12, "K" => 13, "A" => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// Split one leading rank token off `s`, returning the rank and the rest.
    pub(crate) fn split_leading(s: &str) -> Option<(Rank, &str)> {
        if let Some(rest) = s.strip_prefix("10") {
            return Some((Rank(10), rest));
        }
        let head = s.get(..1)?;
        Rank::from_symbol(head).map(|r| (r, &s[1..]))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses `"Ah"`, `"Ts"`, `"10s"`.
impl FromStr for Card {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrainerError::InvalidCard(s.to_string());
        let (rank, rest) = Rank::split_leading(s).ok_or_else(invalid)?;
        let mut chars = rest.chars();
        let suit = chars.next().and_then(Suit::from_symbol).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Card { rank, suit })
    }
}

/// The two hole cards dealt to the hero for one hand, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub cards: [Card; 2],
}

impl Deal {
    pub fn new(first: Card, second: Card) -> Self {
        Deal { cards: [first, second] }
    }

    /// Same cards, opposite order.
    pub fn swapped(self) -> Self {
        Deal { cards: [self.cards[1], self.cards[0]] }
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

// ---------------------------------------------------------------------------
// Starting-hand classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

/// One of the 169 strategically distinct starting hands.
///
/// `high >= low` always holds; `high == low` exactly when the shape is a pair.
/// Use [`HandClass::new`] or parse a notation string to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandClass {
    high: Rank,
    low: Rank,
    shape: Shape,
}

impl HandClass {
    /// Build a class from two ranks in any order.
    ///
    /// Returns `None` when the ranks and shape disagree (a suited pair, or an
    /// offsuit hand with equal ranks).
    pub fn new(a: Rank, b: Rank, shape: Shape) -> Option<Self> {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let valid = (2..=14).contains(&high.0)
            && (2..=14).contains(&low.0)
            && ((high == low) == (shape == Shape::Pair));
        valid.then_some(HandClass { high, low, shape })
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Canonical notation: `"AA"`, `"AKs"`, `"72o"`.
    pub fn notation(&self) -> String {
        match self.shape {
            Shape::Pair => format!("{}{}", self.high, self.low),
            Shape::Suited => format!("{}{}s", self.high, self.low),
            Shape::Offsuit => format!("{}{}o", self.high, self.low),
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.notation())
    }
}

/// Accepts the canonical form plus the spellings that normalize to it:
/// ranks in either order (`"KAs"`) and `"10"` for ten (`"A10o"`).
impl FromStr for HandClass {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TrainerError::UnknownNotation(s.to_string());
        let (a, rest) = Rank::split_leading(s).ok_or_else(unknown)?;
        let (b, suffix) = Rank::split_leading(rest).ok_or_else(unknown)?;
        let shape = match suffix {
            "" => Shape::Pair,
            "s" => Shape::Suited,
            "o" => Shape::Offsuit,
            _ => return Err(unknown()),
        };
        HandClass::new(a, b, shape).ok_or_else(unknown)
    }
}

impl TryFrom<String> for HandClass {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HandClass> for String {
    fn from(class: HandClass) -> String {
        class.notation()
    }
}

// ---------------------------------------------------------------------------
// Table metadata
// ---------------------------------------------------------------------------

/// 6-max seats, declared in preflop act order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    UTG,
    HJ,  // Hijack
    CO,  // Cutoff
    BTN, // Button
    SB,  // Small Blind
    BB,  // Big Blind
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::UTG, Position::HJ, Position::CO,
        Position::BTN, Position::SB, Position::BB,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::HJ  => "HJ",
            Position::CO  => "CO",
            Position::BTN => "BTN",
            Position::SB  => "SB",
            Position::BB  => "BB",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Position::UTG => "Under the Gun",
            Position::HJ  => "Hijack",
            Position::CO  => "Cutoff",
            Position::BTN => "Button",
            Position::SB  => "Small Blind",
            Position::BB  => "Big Blind",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Position {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| TrainerError::UnknownPosition(s.to_string()))
    }
}

/// The hero-seat setting: a fixed position, or `RANDOM` to rotate every hand.
///
/// Only the session layer understands `RANDOM`; range lookups take a
/// concrete [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TablePosition {
    UTG,
    HJ,
    CO,
    BTN,
    SB,
    BB,
    #[default]
    RANDOM,
}

impl TablePosition {
    pub fn fixed(self) -> Option<Position> {
        match self {
            TablePosition::UTG => Some(Position::UTG),
            TablePosition::HJ => Some(Position::HJ),
            TablePosition::CO => Some(Position::CO),
            TablePosition::BTN => Some(Position::BTN),
            TablePosition::SB => Some(Position::SB),
            TablePosition::BB => Some(Position::BB),
            TablePosition::RANDOM => None,
        }
    }
}

impl From<Position> for TablePosition {
    fn from(p: Position) -> Self {
        match p {
            Position::UTG => TablePosition::UTG,
            Position::HJ => TablePosition::HJ,
            Position::CO => TablePosition::CO,
            Position::BTN => TablePosition::BTN,
            Position::SB => TablePosition::SB,
            Position::BB => TablePosition::BB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scenario {
    /// Folded to the hero: raise first in or fold.
    #[default]
    #[serde(rename = "RFI")]
    Rfi,
    /// Facing a prior raise.
    #[serde(rename = "RESPONSE")]
    Response,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Rfi => write!(f, "RFI"),
            Scenario::Response => write!(f, "RESPONSE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions and verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Fold, Action::Call, Action::Raise];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Action::Fold => "Fold",
            Action::Call => "Call",
            Action::Raise => "Raise",
        })
    }
}

/// Tokens are matched case-sensitively: `"Fold"`, `"Call"`, `"Raise"`.
impl FromStr for Action {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fold" => Ok(Action::Fold),
            "Call" => Ok(Action::Call),
            "Raise" => Ok(Action::Raise),
            _ => Err(TrainerError::UnknownAction(s.to_string())),
        }
    }
}

/// Which way a wrong answer deviated from the opening policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MistakeKind {
    /// Called when first in.
    LimpError,
    /// Folded a hand that belongs in the opening range.
    MissedValue,
    /// Raised a hand outside the opening range.
    Overplay,
}

impl MistakeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MistakeKind::LimpError => "limp-error",
            MistakeKind::MissedValue => "missed-value",
            MistakeKind::Overplay => "overplay",
        }
    }
}

impl fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct_action: Action,
    pub user_action: Action,
    pub is_correct: bool,
    /// `None` exactly when `is_correct`.
    pub mistake: Option<MistakeKind>,
    /// Empty for a correct answer.
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextStyle {
    /// Plain English, no jargon.
    #[default]
    Simple,
    /// Poker vocabulary: RFI, percentiles, limping.
    Technical,
}

/// How the trainer picks the next hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sampling {
    /// Each of the 169 classes with probability 1/169.
    #[default]
    Uniform,
    /// Two cards off a shuffled deck, so classes appear with their real
    /// frequency (pairs 6/1326, suited 4/1326, offsuit 12/1326).
    Combinatorial,
}
