//! `stowage-units` — quantity value types of the warehouse domain.
//!
//! A quantity value pairs a numeric amount with a unit enumerant: a count of
//! pieces ([`Piece`]) or a weight ([`Weight`]). Values are immutable, compared
//! and hashed by `(unit, amount)`, and cheap to copy. [`Quantity`] is the
//! closed sum over all quantity kinds.

pub mod piece;
pub mod quantity;
pub mod weight;

pub use piece::{Piece, PieceUnit};
pub use quantity::Quantity;
pub use weight::{Weight, WeightUnit};
