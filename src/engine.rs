//! Spin engine — bet validation, orchestration, RTP administration

use log::debug;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, RtpConfig};
use crate::error::{ConfigError, EngineResult};
use crate::generator::SymbolGenerator;
use crate::grid::generate_grid;
use crate::paytable::Paytable;
use crate::spin::{SpinResponse, SpinResult};

/// Spin outcome engine
///
/// An explicit instance constructed from its configuration — no process
/// globals, so tests and multi-session hosts can run independent engines.
/// Generation and evaluation are synchronous, non-blocking computations;
/// the only long-lived mutable shared state is the RTP target, which every
/// spin snapshots once at entry.
pub struct SpinEngine {
    config: EngineConfig,
    paytable: Paytable,
    generator: SymbolGenerator,
    rtp: RwLock<RtpConfig>,
    rng: StdRng,
    stats: SessionStats,
}

/// Running session statistics
///
/// Carried so operators retuning the RTP target can compare it against the
/// observed return.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: f64,
    pub total_win: f64,
    pub wins: u64,
    pub losses: u64,
}

impl SessionStats {
    /// Observed RTP so far, percent
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0.0 {
            (self.total_win / self.total_bet) * 100.0
        } else {
            0.0
        }
    }

    /// Fraction of spins that won anything, percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl SpinEngine {
    /// Create an engine, validating the configuration up front
    ///
    /// Configuration defects (out-of-bounds payline coordinates, an empty
    /// bet schedule) are fatal here rather than swallowed per spin.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let paytable = Paytable::standard(config.grid);
        paytable.validate()?;
        config.bets.validate()?;

        Ok(Self {
            generator: SymbolGenerator::new(config.free_spin_wild_boost),
            rtp: RwLock::new(config.rtp),
            rng: StdRng::from_os_rng(),
            stats: SessionStats::default(),
            paytable,
            config,
        })
    }

    /// Engine with the standard configuration
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(EngineConfig::default())
    }

    /// Seed the RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Session stats
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    /// Current RTP target, percent
    pub fn rtp(&self) -> f64 {
        self.rtp.read().target()
    }

    /// Administrative RTP retune
    ///
    /// Clamps to [50, 95]. Effective for subsequent spins only; an
    /// in-flight or returned result keeps the value it snapshotted.
    pub fn set_rtp(&self, target: f64) {
        *self.rtp.write() = RtpConfig::new(target);
    }

    /// Execute one spin
    ///
    /// Validates the bet against the schedule, generates the grid under
    /// the snapshotted RTP, evaluates all 25 paylines, and aggregates the
    /// total win. "No winning lines" is a normal success.
    pub fn spin(&mut self, bet_amount: f64, is_free_spin: bool) -> EngineResult<SpinResult> {
        let multiplier = self.config.bets.multiplier_for(bet_amount)?;
        let rtp = self.rtp.read().target();

        let grid = generate_grid(
            self.config.grid,
            &self.generator,
            rtp,
            is_free_spin,
            &mut self.rng,
        );
        let win_lines = self.paytable.evaluate_all(&grid, multiplier);
        let result = SpinResult::new(grid, win_lines, is_free_spin, multiplier, rtp);

        debug!(
            "spin: bet={bet_amount} multiplier={multiplier} rtp={rtp} lines={} total_win={}",
            result.win_lines.len(),
            result.total_win
        );

        self.update_stats(bet_amount, &result);
        Ok(result)
    }

    /// Execute one spin and shape it for the wire
    ///
    /// An invalid bet becomes a failure response rather than an `Err`;
    /// configuration errors cannot occur here because construction
    /// validated them.
    pub fn spin_response(&mut self, bet_amount: f64, is_free_spin: bool) -> SpinResponse {
        match self.spin(bet_amount, is_free_spin) {
            Ok(result) => SpinResponse::success(&result),
            Err(e) => SpinResponse::failure(e.to_string()),
        }
    }

    fn update_stats(&mut self, bet_amount: f64, result: &SpinResult) {
        self.stats.total_spins += 1;
        self.stats.total_bet += bet_amount;
        self.stats.total_win += result.total_win;
        if result.is_win() {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
    }

    /// Paytable access for hosts that present pay information
    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpinError;
    use crate::symbols::Symbol;

    #[test]
    fn test_engine_creation() {
        let engine = SpinEngine::standard().unwrap();
        assert_eq!(engine.stats().total_spins, 0);
        assert_eq!(engine.rtp(), 92.0);
    }

    #[test]
    fn test_valid_bet_spins() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(12345);

        let result = engine.spin(0.25, false).unwrap();
        assert_eq!(result.multiplier, 1);
        assert_eq!(result.grid.reels().len(), 5);
        assert!(!result.is_free_spin);
    }

    #[test]
    fn test_invalid_bet_rejected_identically() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(1);

        for _ in 0..3 {
            match engine.spin(1.0, false) {
                Err(SpinError::InvalidBet(amount)) => assert_eq!(amount, 1.0),
                other => panic!("expected InvalidBet, got {other:?}"),
            }
        }
        // Rejected bets must not touch session stats.
        assert_eq!(engine.stats().total_spins, 0);
    }

    #[test]
    fn test_set_rtp_clamps_and_applies_later() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(2);

        engine.set_rtp(120.0);
        assert_eq!(engine.rtp(), 95.0);
        engine.set_rtp(10.0);
        assert_eq!(engine.rtp(), 50.0);

        engine.set_rtp(80.0);
        let result = engine.spin(0.25, false).unwrap();
        assert_eq!(result.rtp, 80.0);

        // Retune after the spin: the returned result keeps its snapshot.
        engine.set_rtp(60.0);
        assert_eq!(result.rtp, 80.0);
    }

    #[test]
    fn test_no_winning_line_anchored_on_wild_or_bonus() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(31);

        for _ in 0..500 {
            let result = engine.spin(0.25, false).unwrap();
            for win in &result.win_lines {
                assert_ne!(win.win_symbol, Symbol::Wild);
                assert_ne!(win.win_symbol, Symbol::Bonus);
                assert!(win.run_length >= 2 && win.run_length <= 5);
            }
        }
    }

    #[test]
    fn test_total_win_is_sum_of_lines() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(8);

        for _ in 0..200 {
            let result = engine.spin(6.25, false).unwrap();
            let sum: f64 = result.win_lines.iter().map(|w| w.payout).sum();
            assert_eq!(result.total_win, sum);
        }
    }

    #[test]
    fn test_session_stats_accumulate() {
        let mut engine = SpinEngine::standard().unwrap();
        engine.seed(11111);

        for _ in 0..100 {
            engine.spin(0.25, false).unwrap();
        }
        let stats = engine.stats();
        assert_eq!(stats.total_spins, 100);
        assert_eq!(stats.total_bet, 25.0);
        assert_eq!(stats.wins + stats.losses, 100);
    }

    #[test]
    fn test_seeded_engines_reproduce() {
        let mut a = SpinEngine::standard().unwrap();
        let mut b = SpinEngine::standard().unwrap();
        a.seed(555);
        b.seed(555);

        for _ in 0..20 {
            let ra = a.spin(0.5, false).unwrap();
            let rb = b.spin(0.5, false).unwrap();
            assert_eq!(ra.grid, rb.grid);
            assert_eq!(ra.total_win, rb.total_win);
        }
    }
}
