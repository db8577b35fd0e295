//! Symbol definitions and symbol-class rules

use serde::{Deserialize, Serialize};

/// A reel symbol
///
/// Closed enumeration — the evaluator matches exhaustively, so a symbol
/// without a paytable entry cannot slip in through a typo'd string key.
/// The declaration order is also the weight-table walk order used by the
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    Ten = 0,
    Jack = 1,
    Queen = 2,
    King = 3,
    WhiteDragon = 4,
    BlackDragon = 5,
    GreenDragon = 6,
    RedDragon = 7,
    /// Substitutes for any paying symbol; never anchors a win
    Wild = 8,
    /// Never pays on a line; never anchors a win
    Bonus = 9,
}

/// All symbols in weight-table order
pub const ALL_SYMBOLS: [Symbol; 10] = [
    Symbol::Ten,
    Symbol::Jack,
    Symbol::Queen,
    Symbol::King,
    Symbol::WhiteDragon,
    Symbol::BlackDragon,
    Symbol::GreenDragon,
    Symbol::RedDragon,
    Symbol::Wild,
    Symbol::Bonus,
];

impl Symbol {
    /// Check if this is the wild symbol
    pub fn is_wild(&self) -> bool {
        matches!(self, Symbol::Wild)
    }

    /// Check if this is the bonus symbol
    pub fn is_bonus(&self) -> bool {
        matches!(self, Symbol::Bonus)
    }

    /// Can this symbol anchor a winning run?
    ///
    /// Wild and Bonus carry paytable entries but a run anchored on either
    /// never pays. This is a deliberate game rule, not a table omission.
    pub fn can_anchor(&self) -> bool {
        !matches!(self, Symbol::Wild | Symbol::Bonus)
    }

    /// Minimum consecutive run that pays for this symbol class
    ///
    /// The two premium dragons pay from 2 of a kind; everything else needs
    /// at least 3.
    pub fn min_run(&self) -> u8 {
        match self {
            Symbol::RedDragon | Symbol::GreenDragon => 2,
            _ => 3,
        }
    }

    /// Stable wire name
    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Ten => "Ten",
            Symbol::Jack => "Jack",
            Symbol::Queen => "Queen",
            Symbol::King => "King",
            Symbol::WhiteDragon => "WhiteDragon",
            Symbol::BlackDragon => "BlackDragon",
            Symbol::GreenDragon => "GreenDragon",
            Symbol::RedDragon => "RedDragon",
            Symbol::Wild => "Wild",
            Symbol::Bonus => "Bonus",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
