//! Weighted ensembles of board realizations.
//!
//! A move whose stone color is ambiguous forks every realization into one
//! child per legal color. This crate holds the collections that result and
//! the transition that produces them.
//!
//! ## Collections
//!
//! - [`Generation`]: Every realization alive after a given number of moves
//! - [`Ensemble`]: The current generation plus its [`Lineage`] of past plies
//!
//! ## Policy
//!
//! - [`Ceiling`]: Optional cap on generation population
//!
//! ## Errors
//!
//! - [`Illegal`]: A rejected move, recoverable with no state change
//! - [`Invariant`]: A structural defect, fatal to the session
mod ceiling;
mod ensemble;
mod error;
mod generation;
mod lineage;

pub use ceiling::*;
pub use ensemble::*;
pub use error::*;
pub use generation::*;
pub use lineage::*;
