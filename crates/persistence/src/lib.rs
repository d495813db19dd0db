//! `stowage-persistence` — flat-row persistence for quantity values.
//!
//! Storage keeps a [`stowage_units::Quantity`] in two text columns: the unit
//! enumerant plus a variant tag in one, the amount in the other.
//! [`codec::QuantityCodec`] is the lossless bridge between the two shapes.

pub mod codec;
pub mod error;

pub use codec::{CodecProperty, QuantityCodec, QuantityRow, PIECE_TAG, WEIGHT_TAG};
pub use error::{ConversionError, ConversionResult};
