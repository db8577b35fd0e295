//! Paytable, payline definitions, and line evaluation

use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::symbols::Symbol;

/// Number of fixed paylines
pub const PAYLINE_COUNT: usize = 25;

/// Base payouts for one symbol, indexed by run length: 5, 4, 3, 2 of a kind
///
/// Index 0 = 5-match, index 3 = 2-match. A zero entry means that count does
/// not pay for this symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub payouts: [f64; 4],
}

impl PaytableEntry {
    /// Base payout for a consecutive run of `run_length` (2..=5)
    pub fn base_payout(&self, run_length: u8) -> f64 {
        match run_length {
            2..=5 => self.payouts[(5 - run_length) as usize],
            _ => 0.0,
        }
    }
}

/// A fixed payline: one `(reel, row)` coordinate per reel, left to right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payline {
    /// Line number, 1..=25
    pub number: u8,
    /// Exactly one coordinate per reel
    pub coords: Vec<(u8, u8)>,
}

impl Payline {
    fn from_rows(number: u8, rows: [u8; 5]) -> Self {
        Self {
            number,
            coords: rows
                .iter()
                .enumerate()
                .map(|(reel, &row)| (reel as u8, row))
                .collect(),
        }
    }
}

/// The fixed 25 payline definitions, in line-number order
pub fn standard_25_paylines() -> Vec<Payline> {
    vec![
        // Straight lines
        Payline::from_rows(1, [1, 1, 1, 1, 1]),
        Payline::from_rows(2, [0, 0, 0, 0, 0]),
        Payline::from_rows(3, [2, 2, 2, 2, 2]),
        // V shapes
        Payline::from_rows(4, [0, 1, 2, 1, 0]),
        Payline::from_rows(5, [2, 1, 0, 1, 2]),
        // Zigzag
        Payline::from_rows(6, [0, 0, 1, 2, 2]),
        Payline::from_rows(7, [2, 2, 1, 0, 0]),
        Payline::from_rows(8, [1, 0, 0, 0, 1]),
        Payline::from_rows(9, [1, 2, 2, 2, 1]),
        // W shapes
        Payline::from_rows(10, [0, 1, 0, 1, 0]),
        Payline::from_rows(11, [2, 1, 2, 1, 2]),
        // Arches
        Payline::from_rows(12, [0, 1, 1, 1, 0]),
        Payline::from_rows(13, [2, 1, 1, 1, 2]),
        Payline::from_rows(14, [1, 1, 0, 1, 1]),
        Payline::from_rows(15, [1, 1, 2, 1, 1]),
        // Alternating
        Payline::from_rows(16, [0, 2, 0, 2, 0]),
        Payline::from_rows(17, [2, 0, 2, 0, 2]),
        Payline::from_rows(18, [1, 0, 1, 0, 1]),
        Payline::from_rows(19, [1, 2, 1, 2, 1]),
        // Spikes
        Payline::from_rows(20, [0, 0, 2, 0, 0]),
        Payline::from_rows(21, [2, 2, 0, 2, 2]),
        Payline::from_rows(22, [0, 2, 2, 2, 0]),
        Payline::from_rows(23, [2, 0, 0, 0, 2]),
        Payline::from_rows(24, [1, 0, 2, 0, 1]),
        Payline::from_rows(25, [1, 2, 0, 2, 1]),
    ]
}

/// A win on a single payline
///
/// Produced only for lines that win; immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningLine {
    /// Payline number (1..=25)
    pub line_number: u8,
    /// The 5 symbols observed on the line, reel order
    pub symbols: Vec<Symbol>,
    /// Consecutive matching run length from the anchor
    pub run_length: u8,
    /// The anchor symbol the run was scored against
    pub win_symbol: Symbol,
    /// Computed payout: base × 0.01 × multiplier
    pub payout: f64,
    /// The 5 grid coordinates, `[reel, row]` in evaluation order
    pub positions: Vec<(u8, u8)>,
}

/// Paytable plus the fixed payline set
#[derive(Debug, Clone)]
pub struct Paytable {
    grid: GridSpec,
    paylines: Vec<Payline>,
}

impl Paytable {
    /// Standard paytable for a 5×3 grid
    pub fn standard(grid: GridSpec) -> Self {
        Self {
            grid,
            paylines: standard_25_paylines(),
        }
    }

    /// Base payouts by symbol
    ///
    /// Wild carries real entries even though it can never anchor a win
    /// (the anchor rule in [`Paytable::evaluate_line`] excludes it).
    /// Bonus never pays.
    pub fn entry(&self, symbol: Symbol) -> PaytableEntry {
        let payouts = match symbol {
            Symbol::Ten => [40.0, 10.0, 5.0, 0.0],
            Symbol::Jack => [40.0, 10.0, 5.0, 0.0],
            Symbol::Queen => [60.0, 15.0, 5.0, 0.0],
            Symbol::King => [80.0, 20.0, 10.0, 0.0],
            Symbol::WhiteDragon => [100.0, 30.0, 10.0, 0.0],
            Symbol::BlackDragon => [150.0, 40.0, 15.0, 0.0],
            Symbol::GreenDragon => [200.0, 50.0, 10.0, 1.0],
            Symbol::RedDragon => [500.0, 100.0, 30.0, 2.0],
            Symbol::Wild => [1000.0, 200.0, 50.0, 0.0],
            Symbol::Bonus => [0.0, 0.0, 0.0, 0.0],
        };
        PaytableEntry { payouts }
    }

    /// The fixed payline definitions, ascending line-number order
    pub fn paylines(&self) -> &[Payline] {
        &self.paylines
    }

    /// Startup validation: every payline must span every reel and index
    /// only in-bounds coordinates
    pub fn validate(&self) -> Result<(), ConfigError> {
        for line in &self.paylines {
            if line.coords.len() != self.grid.reels as usize {
                return Err(ConfigError::PaylineWrongLength {
                    line: line.number,
                    expected: self.grid.reels,
                    actual: line.coords.len() as u8,
                });
            }
            for &(reel, row) in &line.coords {
                if reel >= self.grid.reels || row >= self.grid.rows {
                    return Err(ConfigError::PaylineOutOfBounds {
                        line: line.number,
                        reel,
                        row,
                    });
                }
            }
        }
        Ok(())
    }

    /// Evaluate one payline against a grid
    ///
    /// Returns `None` for non-winning lines. The anchor is the leftmost
    /// symbol; Wild- or Bonus-anchored lines never win. The run extends
    /// while the next symbol equals the anchor or is Wild.
    pub fn evaluate_line(
        &self,
        payline: &Payline,
        grid: &Grid,
        multiplier: u32,
    ) -> Option<WinningLine> {
        let symbols: Vec<Symbol> = payline
            .coords
            .iter()
            .map(|&(reel, row)| grid.symbol_at(reel, row))
            .collect();

        let win_symbol = symbols[0];
        if !win_symbol.can_anchor() {
            return None;
        }

        let mut run_length = 1u8;
        for &symbol in &symbols[1..] {
            if symbol == win_symbol || symbol.is_wild() {
                run_length += 1;
            } else {
                break;
            }
        }

        if run_length < win_symbol.min_run() {
            return None;
        }

        let base = self.entry(win_symbol).base_payout(run_length);
        if base <= 0.0 {
            return None;
        }

        Some(WinningLine {
            line_number: payline.number,
            symbols,
            run_length,
            win_symbol,
            payout: base * 0.01 * multiplier as f64,
            positions: payline.coords.clone(),
        })
    }

    /// Evaluate all 25 paylines in ascending line-number order
    ///
    /// The result ordering follows the payline table; callers rely on it
    /// for deterministic comparisons and first-line highlighting.
    pub fn evaluate_all(&self, grid: &Grid, multiplier: u32) -> Vec<WinningLine> {
        self.paylines
            .iter()
            .filter_map(|line| self.evaluate_line(line, grid, multiplier))
            .collect()
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::standard(GridSpec::default())
    }
}
