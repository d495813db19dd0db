//! The quantity codec: two text columns <-> [`Quantity`].
//!
//! Column layout (a stable wire contract, reproduced bit-for-bit by any
//! other implementation):
//!
//! - unit column: `"<canonical unit text>@<variant tag>"`, e.g.
//!   `"PC@stowage_units::Piece"`
//! - amount column: the amount as plain decimal text, e.g. `"5"` or `"12.50"`
//!
//! An absent quantity is stored as NULL in **both** columns, never as empty
//! strings.

use core::str::FromStr;

use rust_decimal::Decimal;

use stowage_units::{Piece, PieceUnit, Quantity, Weight, WeightUnit};

use crate::error::{ConversionError, ConversionResult};

/// Variant tag for piece counts in the unit column.
pub const PIECE_TAG: &str = "stowage_units::Piece";

/// Variant tag for weights in the unit column.
pub const WEIGHT_TAG: &str = "stowage_units::Weight";

/// The two-column flat representation of an optional quantity value.
///
/// `None` models SQL NULL. The invariant "both columns absent, or both
/// present" is produced by [`QuantityCodec::encode`] and checked by
/// [`QuantityCodec::decode`]; rows written by foreign code may violate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityRow {
    pub unit_type: Option<String>,
    pub amount: Option<String>,
}

impl QuantityRow {
    /// The row of an absent quantity.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn new(unit_type: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            unit_type: Some(unit_type.into()),
            amount: Some(amount.into()),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.unit_type.is_none()
    }
}

/// The two logical columns, as probed by persistence frameworks that walk
/// component properties.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodecProperty {
    UnitType,
    Amount,
}

/// Stateless codec between [`Quantity`] and [`QuantityRow`].
///
/// Pure functions over owned data: no shared state, no I/O, safe to call
/// from any thread. Equality and hashing of quantity values are entirely the
/// values' own (`Quantity` derives them); the codec adds no identity
/// semantics, and `Option<Quantity>` already gives "two absents are equal,
/// absent never equals a value".
pub struct QuantityCodec;

impl QuantityCodec {
    /// Render a quantity value into its two-column row.
    ///
    /// Infallible: [`Quantity`] is a closed sum, so there is no "unknown
    /// variant" left to reject at this side; adding a quantity kind extends
    /// the `match` here under exhaustiveness checking.
    pub fn encode(value: Option<&Quantity>) -> QuantityRow {
        let Some(quantity) = value else {
            return QuantityRow::absent();
        };
        let tag = match quantity {
            Quantity::Piece(_) => PIECE_TAG,
            Quantity::Weight(_) => WEIGHT_TAG,
        };
        let unit_type = format!("{}@{}", quantity.unit_text(), tag);
        let amount = quantity.amount_text();
        tracing::trace!("binding '{}' to unit column", unit_type);
        tracing::trace!("binding '{}' to amount column", amount);
        QuantityRow::new(unit_type, amount)
    }

    /// Reconstruct the quantity value a row encodes.
    ///
    /// An absent unit column yields `Ok(None)` without inspecting the amount
    /// column. Every decode produces a fresh, independently owned value.
    pub fn decode(row: &QuantityRow) -> ConversionResult<Option<Quantity>> {
        let Some(unit_col) = row.unit_type.as_deref() else {
            return Ok(None);
        };
        // Split on the FIRST '@': canonical unit text never contains one.
        let Some((unit_text, tag)) = unit_col.split_once('@') else {
            return Err(ConversionError::malformed_row(format!(
                "unit column '{unit_col}' has no '@' separator"
            )));
        };
        match tag {
            PIECE_TAG => {
                let amount = parse_amount::<i64>(row)?;
                let unit = parse_unit::<PieceUnit>(unit_text)?;
                Ok(Some(Quantity::Piece(Piece::new(amount, unit))))
            }
            WEIGHT_TAG => {
                let amount = parse_amount::<Decimal>(row)?;
                let unit = parse_unit::<WeightUnit>(unit_text)?;
                Ok(Some(Quantity::Weight(Weight::new(amount, unit))))
            }
            unknown => Err(ConversionError::incompatible_type(unknown)),
        }
    }

    /// Textual projection of one logical column of a value.
    pub fn property_value(value: &Quantity, property: CodecProperty) -> String {
        match property {
            CodecProperty::UnitType => value.unit_text().to_string(),
            CodecProperty::Amount => value.amount_text(),
        }
    }

    /// Refuse in-place mutation of a quantity value.
    ///
    /// Frameworks probing component settability must learn immediately that
    /// quantity values are immutable; silently ignoring the write would hide
    /// the misuse.
    pub fn set_property_value(
        _value: &mut Quantity,
        _property: CodecProperty,
        _text: &str,
    ) -> ConversionResult<()> {
        Err(ConversionError::ImmutableValue)
    }
}

fn parse_amount<T: FromStr>(row: &QuantityRow) -> ConversionResult<T> {
    let Some(text) = row.amount.as_deref() else {
        return Err(ConversionError::malformed_row(
            "amount column is absent but the unit column is not",
        ));
    };
    text.parse::<T>()
        .map_err(|_| ConversionError::malformed_row(format!("unparsable amount '{text}'")))
}

fn parse_unit<T: FromStr>(text: &str) -> ConversionResult<T> {
    text.parse::<T>()
        .map_err(|_| ConversionError::malformed_row(format!("unknown unit '{text}'")))
}
