//! Board primitives and the deterministic Reversi rules.
//!
//! ## Primitives
//!
//! - [`Color`]: A stone color, Black or White
//! - [`Cell`]: The contents of one square: a stone or nothing
//! - [`Square`]: A coordinate on the board
//! - [`Direction`]: One of the 8 compass offsets scanned for flips
//!
//! ## Boards
//!
//! - [`Grid`]: One fully deterministic board, stored as two occupancy masks
//! - [`Realization`]: A grid paired with its relative weight in the ensemble
mod cell;
mod color;
mod direction;
mod grid;
mod realization;
mod square;

pub use cell::*;
pub use color::*;
pub use direction::*;
pub use grid::*;
pub use realization::*;
pub use square::*;
