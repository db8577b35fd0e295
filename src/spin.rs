//! Spin result and wire-shaped response

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::paytable::WinningLine;
use crate::symbols::Symbol;

/// Complete outcome of one spin
///
/// Created once per spin call and never mutated afterwards. An empty
/// `win_lines` list with `total_win == 0` is a normal, successful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Final grid, reel-major
    pub grid: Grid,
    /// Winning lines in ascending line-number order (possibly empty)
    pub win_lines: Vec<WinningLine>,
    /// Sum of all winning-line payouts
    pub total_win: f64,
    /// Was this spin played under free-spin rules?
    pub is_free_spin: bool,
    /// Effective bet multiplier used for payout scaling
    pub multiplier: u32,
    /// Target RTP snapshotted for this spin
    pub rtp: f64,
    /// Any winning line's symbol set contains Bonus.
    ///
    /// Bonus can never anchor a win, but it can ride along at non-anchor
    /// positions of a winning line; this flag reflects presence anywhere
    /// in a winning line's symbols.
    pub has_bonus: bool,
}

impl SpinResult {
    /// Build a result from the evaluated lines
    pub fn new(
        grid: Grid,
        win_lines: Vec<WinningLine>,
        is_free_spin: bool,
        multiplier: u32,
        rtp: f64,
    ) -> Self {
        let total_win = win_lines.iter().map(|w| w.payout).sum();
        let has_bonus = win_lines
            .iter()
            .any(|w| w.symbols.iter().any(|s| s.is_bonus()));
        Self {
            grid,
            win_lines,
            total_win,
            is_free_spin,
            multiplier,
            rtp,
            has_bonus,
        }
    }

    /// Check if this is a winning spin
    pub fn is_win(&self) -> bool {
        self.total_win > 0.0
    }
}

/// Response status on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinStatus {
    Success,
    Failure,
}

/// Transport-independent response shape
///
/// `reels` is reel-major (outer = reel 0..4, inner = row 0..2 top to
/// bottom), matching the `(reel, row)` payline convention. Failure
/// responses carry no reels and an empty `winLines` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResponse {
    pub status: SpinStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reels: Option<Vec<Vec<Symbol>>>,
    #[serde(default)]
    pub win_lines: Vec<WinningLine>,
    pub total_win: f64,
    pub is_free_spin: bool,
    pub multiplier: u32,
    pub has_bonus: bool,
    pub message: String,
}

impl SpinResponse {
    /// Successful response from a spin result
    pub fn success(result: &SpinResult) -> Self {
        Self {
            status: SpinStatus::Success,
            reels: Some(result.grid.reels().to_vec()),
            win_lines: result.win_lines.clone(),
            total_win: result.total_win,
            is_free_spin: result.is_free_spin,
            multiplier: result.multiplier,
            has_bonus: result.has_bonus,
            message: String::new(),
        }
    }

    /// Failure response (invalid bet); no grid, empty win lines
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: SpinStatus::Failure,
            reels: None,
            win_lines: Vec::new(),
            total_win: 0.0,
            is_free_spin: false,
            multiplier: 0,
            has_bonus: false,
            message: message.into(),
        }
    }
}
