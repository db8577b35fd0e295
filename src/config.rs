//! Engine configuration: grid shape, bet schedule, RTP target

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SpinError};

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: u8,
    /// Number of visible rows per reel
    pub rows: u8,
}

impl GridSpec {
    /// Standard 5×3 layout
    pub fn standard_5x3() -> Self {
        Self { reels: 5, rows: 3 }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.reels as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::standard_5x3()
    }
}

/// One allowed bet amount and its payout multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BetTier {
    pub amount: f64,
    pub multiplier: u32,
}

/// The closed list of allowed bet amounts
///
/// Any amount not in the table is rejected with [`SpinError::InvalidBet`].
/// Amounts are chosen to be exactly representable in binary so equality
/// lookup is sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetSchedule {
    tiers: Vec<BetTier>,
}

impl BetSchedule {
    /// Standard seven-tier schedule
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                BetTier { amount: 0.25, multiplier: 1 },
                BetTier { amount: 0.5, multiplier: 2 },
                BetTier { amount: 1.25, multiplier: 4 },
                BetTier { amount: 2.5, multiplier: 8 },
                BetTier { amount: 3.75, multiplier: 12 },
                BetTier { amount: 6.25, multiplier: 20 },
                BetTier { amount: 12.5, multiplier: 40 },
            ],
        }
    }

    /// Look up the payout multiplier for a bet amount
    pub fn multiplier_for(&self, amount: f64) -> Result<u32, SpinError> {
        self.tiers
            .iter()
            .find(|t| t.amount == amount)
            .map(|t| t.multiplier)
            .ok_or(SpinError::InvalidBet(amount))
    }

    /// All configured tiers, lowest bet first
    pub fn tiers(&self) -> &[BetTier] {
        &self.tiers
    }

    /// Reject a degenerate schedule at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::EmptyBetSchedule);
        }
        Ok(())
    }
}

impl Default for BetSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lower bound for the target RTP percentage
pub const RTP_MIN: f64 = 50.0;
/// Upper bound for the target RTP percentage
pub const RTP_MAX: f64 = 95.0;

/// Target return-to-player percentage
///
/// Drives the symbol weight table. Operators may retune it at runtime;
/// every spin snapshots the value once at entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RtpConfig {
    target: f64,
}

impl RtpConfig {
    /// Create a config, clamping to the [50, 95] bound
    pub fn new(target: f64) -> Self {
        Self {
            target: target.clamp(RTP_MIN, RTP_MAX),
        }
    }

    /// The clamped target percentage
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for RtpConfig {
    fn default() -> Self {
        Self::new(92.0)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid shape
    pub grid: GridSpec,
    /// Allowed bets
    pub bets: BetSchedule,
    /// Initial RTP target
    pub rtp: RtpConfig,
    /// Free-spin wild weighting branch.
    ///
    /// OFF by default: the baseline weight rule ignores `is_free_spin`
    /// entirely. Turning this on requires product sign-off.
    pub free_spin_wild_boost: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            bets: BetSchedule::standard(),
            rtp: RtpConfig::default(),
            free_spin_wild_boost: false,
        }
    }
}
