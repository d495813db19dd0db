use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stowage_core::{DomainError, DomainResult, ValueObject};

/// Unit enumerants for counted goods.
///
/// The canonical text (`"PC"`, `"DOZ"`) is the persisted spelling; it never
/// contains `@`, which the persistence layer relies on as a field separator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceUnit {
    /// A single piece.
    Pc,
    /// A dozen, 12 pieces.
    Doz,
}

impl PieceUnit {
    /// Canonical text of the enumerant.
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceUnit::Pc => "PC",
            PieceUnit::Doz => "DOZ",
        }
    }

    /// How many single pieces one of this unit holds.
    pub const fn pieces_per_unit(self) -> i64 {
        match self {
            PieceUnit::Pc => 1,
            PieceUnit::Doz => 12,
        }
    }
}

impl core::fmt::Display for PieceUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceUnit {
    type Err = DomainError;

    /// Case- and spelling-exact; anything but the canonical text is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PC" => Ok(PieceUnit::Pc),
            "DOZ" => Ok(PieceUnit::Doz),
            _ => Err(DomainError::validation(format!("unknown piece unit: {s}"))),
        }
    }
}

/// An amount of counted goods, e.g. `5 PC` or `2 DOZ`.
///
/// Immutable once constructed; equality and hashing compare `(unit, amount)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    amount: i64,
    unit: PieceUnit,
}

impl Piece {
    pub const fn new(amount: i64, unit: PieceUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn amount(&self) -> i64 {
        self.amount
    }

    pub const fn unit(&self) -> PieceUnit {
        self.unit
    }

    /// Magnitude in single pieces, regardless of the enumerant.
    ///
    /// Use this to compare piece counts across units; `PartialEq` stays
    /// strict `(unit, amount)` equality, so `12 PC != 1 DOZ` even though the
    /// magnitudes match. Saturates at the `i64` bounds on overflow;
    /// [`Piece::convert_to`] reports the same condition as an error instead.
    pub fn total_pieces(&self) -> i64 {
        self.amount.saturating_mul(self.unit.pieces_per_unit())
    }

    /// Re-express this count in another unit, exactly.
    ///
    /// Converting to a coarser unit with a remainder (e.g. `5 PC` to `DOZ`)
    /// violates the exactness invariant and is rejected rather than truncated.
    pub fn convert_to(&self, unit: PieceUnit) -> DomainResult<Piece> {
        if unit == self.unit {
            return Ok(*self);
        }
        let pieces = self
            .amount
            .checked_mul(self.unit.pieces_per_unit())
            .ok_or_else(|| DomainError::invariant("piece amount overflow"))?;
        let per_unit = unit.pieces_per_unit();
        if pieces % per_unit != 0 {
            return Err(DomainError::invariant(format!(
                "{self} is not an exact number of {unit}"
            )));
        }
        Ok(Piece::new(pieces / per_unit, unit))
    }
}

impl core::fmt::Display for Piece {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl ValueObject for Piece {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn canonical_text_round_trips_through_from_str() {
        for unit in [PieceUnit::Pc, PieceUnit::Doz] {
            assert_eq!(unit.as_str().parse::<PieceUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn from_str_is_case_exact() {
        for text in ["pc", "Pc", "DOZEN", "", " PC"] {
            let err = text.parse::<PieceUnit>().unwrap_err();
            match err {
                DomainError::Validation(msg) => assert!(msg.contains("unknown piece unit")),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn equality_compares_unit_and_amount() {
        assert_eq!(Piece::new(5, PieceUnit::Pc), Piece::new(5, PieceUnit::Pc));
        assert_ne!(Piece::new(12, PieceUnit::Pc), Piece::new(1, PieceUnit::Doz));
        assert_ne!(Piece::new(5, PieceUnit::Pc), Piece::new(6, PieceUnit::Pc));
    }

    #[test]
    fn total_pieces_normalizes_across_units() {
        assert_eq!(Piece::new(12, PieceUnit::Pc).total_pieces(), 12);
        assert_eq!(Piece::new(1, PieceUnit::Doz).total_pieces(), 12);
        assert!(
            Piece::new(1, PieceUnit::Doz).total_pieces()
                > Piece::new(11, PieceUnit::Pc).total_pieces()
        );
    }

    #[test]
    fn exact_conversion_succeeds() {
        let two_dozen = Piece::new(24, PieceUnit::Pc).convert_to(PieceUnit::Doz).unwrap();
        assert_eq!(two_dozen, Piece::new(2, PieceUnit::Doz));

        let pieces = Piece::new(2, PieceUnit::Doz).convert_to(PieceUnit::Pc).unwrap();
        assert_eq!(pieces, Piece::new(24, PieceUnit::Pc));
    }

    #[test]
    fn conversion_with_remainder_is_rejected() {
        let err = Piece::new(5, PieceUnit::Pc).convert_to(PieceUnit::Doz).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("5 PC")),
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let five = Piece::new(5, PieceUnit::Pc);
        assert_eq!(five.convert_to(PieceUnit::Pc).unwrap(), five);
    }

    #[test]
    fn total_pieces_saturates_at_the_i64_bounds() {
        assert_eq!(Piece::new(i64::MAX, PieceUnit::Doz).total_pieces(), i64::MAX);
        assert_eq!(Piece::new(i64::MIN, PieceUnit::Doz).total_pieces(), i64::MIN);
    }

    #[test]
    fn conversion_overflow_is_rejected() {
        let err = Piece::new(i64::MAX, PieceUnit::Doz).convert_to(PieceUnit::Pc).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("overflow")),
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    fn unit_strategy() -> impl Strategy<Value = PieceUnit> {
        prop_oneof![Just(PieceUnit::Pc), Just(PieceUnit::Doz)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: an exact conversion preserves the magnitude and converts
        /// back to the original value; an inexact one is rejected, never
        /// truncated.
        #[test]
        fn exact_conversion_round_trips(
            amount in -1_000_000i64..1_000_000i64,
            from in unit_strategy(),
            to in unit_strategy(),
        ) {
            let piece = Piece::new(amount, from);
            match piece.convert_to(to) {
                Ok(converted) => {
                    prop_assert_eq!(converted.unit(), to);
                    prop_assert_eq!(converted.total_pieces(), piece.total_pieces());
                    prop_assert_eq!(converted.convert_to(from).unwrap(), piece);
                }
                Err(_) => {
                    prop_assert_ne!(piece.total_pieces() % to.pieces_per_unit(), 0);
                }
            }
        }
    }
}
