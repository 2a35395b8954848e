//! Turn-by-turn play over a probabilistic Reversi ensemble.
//!
//! ## State Machine
//!
//! - [`Session`]: Alternates colors, drives the ensemble, detects the end
//! - [`Status`]: Whose move it is, or how the game ended
//! - [`Outcome`]: Winner or draw
//!
//! ## Scoring
//!
//! - [`Tone`]: Classification of a cell's black probability
//! - [`Score`]: Stone counts under the bucketing rule
//!
//! ## Views
//!
//! - [`Snapshot`]: Everything a renderer reads, in one value
//! - [`Shade`]: How a single square should be drawn
mod error;
mod score;
mod session;
mod snapshot;
mod status;
mod tone;

pub use error::*;
pub use score::*;
pub use session::*;
pub use snapshot::*;
pub use status::*;
pub use tone::*;
