//! # reel-spin-engine — Slot spin outcome engine
//!
//! Computes a single slot-machine spin outcome: validates the bet, generates
//! a weighted 5×3 reel grid, evaluates the fixed 25 paylines with wild
//! substitution and consecutive-run scoring, and returns the winning lines
//! and total payout. Presentation layers (reel animation, sound, UI panels)
//! consume the result and play it back; none of that lives here.
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine
//!     │
//!     ├── EngineConfig (grid spec, bet schedule, RTP target)
//!     ├── SymbolGenerator (RTP-weighted draws)
//!     ├── Grid generation (free-spin wild guarantee)
//!     └── Paytable (25 paylines, run scoring)
//!           │
//!           v
//!     SpinResult → SpinResponse (wire shape)
//! ```
//!
//! The engine is an explicit instance — construct it with its configuration,
//! seed it for deterministic tests, retune its RTP target at runtime.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod paytable;
pub mod spin;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use paytable::*;
pub use spin::*;
pub use symbols::*;
