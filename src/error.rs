//! Error types for the spin engine

use thiserror::Error;

/// Errors a spin request can surface to the caller
#[derive(Debug, Clone, Error)]
pub enum SpinError {
    /// Bet amount is not one of the configured tiers
    #[error("invalid bet amount: {0}")]
    InvalidBet(f64),

    /// Configuration defect detected at startup validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration defects
///
/// These are programming errors, not user input: they are rejected once at
/// engine construction rather than swallowed per spin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("payline {line} references out-of-bounds coordinate ({reel}, {row})")]
    PaylineOutOfBounds { line: u8, reel: u8, row: u8 },

    #[error("payline {line} must span exactly {expected} reels, has {actual}")]
    PaylineWrongLength { line: u8, expected: u8, actual: u8 },

    #[error("bet schedule is empty")]
    EmptyBetSchedule,
}

/// Result type alias
pub type EngineResult<T> = Result<T, SpinError>;
