use serde::{Deserialize, Serialize};

use stowage_core::ValueObject;

use crate::piece::Piece;
use crate::weight::Weight;

/// The closed set of quantity kinds the warehouse domain knows.
///
/// New kinds are added here and nowhere else; every consumer dispatches with
/// an exhaustive `match`, so an unhandled kind is a compile error rather than
/// a runtime fall-through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Piece(Piece),
    Weight(Weight),
}

impl Quantity {
    /// Canonical text of the value's unit enumerant.
    pub fn unit_text(&self) -> &'static str {
        match self {
            Quantity::Piece(p) => p.unit().as_str(),
            Quantity::Weight(w) => w.unit().as_str(),
        }
    }

    /// The amount as plain decimal text (no exponent, no grouping).
    pub fn amount_text(&self) -> String {
        match self {
            Quantity::Piece(p) => p.amount().to_string(),
            Quantity::Weight(w) => w.amount().to_string(),
        }
    }
}

impl From<Piece> for Quantity {
    fn from(value: Piece) -> Self {
        Quantity::Piece(value)
    }
}

impl From<Weight> for Quantity {
    fn from(value: Weight) -> Self {
        Quantity::Weight(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Quantity::Piece(p) => core::fmt::Display::fmt(p, f),
            Quantity::Weight(w) => core::fmt::Display::fmt(w, f),
        }
    }
}

impl ValueObject for Quantity {}
