//! # sg-slot — Slot grid game core
//!
//! Win evaluation and the reel animation state machine behind a small
//! browser slot game, with rendering and audio injected as collaborators.
//!
//! ## Features
//!
//! - **Win Evaluation**: Horizontal runs of two or more equal symbols, one credit per winning cell
//! - **Reel Animation**: Spin, snap, two-segment bounce, settle, per column
//! - **Fast-Forward**: A second press collapses the remaining spin time
//! - **Timing Profiles**: Normal, Turbo and scaled timing
//! - **Session**: Balance, bet and running statistics owned by the caller
//!
//! ## Architecture
//!
//! ```text
//! Command (RequestSpin | Tick)
//!     │
//!     v
//! SlotMachine ──── Session (balance, bet, stats)
//!     │
//!     ├── ReelAnimation × reels ──► ReelSurface
//!     ├── AudioSink (spin, reel, win)
//!     └── WinPulse
//!           │
//!           v
//!     Grid → evaluate() → SpinOutcome ──► SpinPresenter
//! ```

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod grid;
pub mod pulse;
pub mod reel;
pub mod session;
pub mod spin;
pub mod surface;
pub mod symbols;
pub mod timing;

pub use config::*;
pub use engine::*;
pub use evaluator::*;
pub use grid::*;
pub use pulse::*;
pub use reel::*;
pub use session::*;
pub use spin::*;
pub use surface::*;
pub use symbols::*;
pub use timing::*;
