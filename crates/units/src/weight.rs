use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stowage_core::{DomainError, ValueObject};

/// Unit enumerants for weighed goods, the metric ladder from milligrams up
/// to metric tons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Mg,
    G,
    Kg,
    T,
}

impl WeightUnit {
    /// Canonical text of the enumerant.
    pub const fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Mg => "MG",
            WeightUnit::G => "G",
            WeightUnit::Kg => "KG",
            WeightUnit::T => "T",
        }
    }

    /// Milligrams per one of this unit.
    pub fn milligram_factor(self) -> Decimal {
        match self {
            WeightUnit::Mg => Decimal::ONE,
            WeightUnit::G => Decimal::from(1_000u32),
            WeightUnit::Kg => Decimal::from(1_000_000u32),
            WeightUnit::T => Decimal::from(1_000_000_000u32),
        }
    }
}

impl core::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = DomainError;

    /// Case- and spelling-exact; anything but the canonical text is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MG" => Ok(WeightUnit::Mg),
            "G" => Ok(WeightUnit::G),
            "KG" => Ok(WeightUnit::Kg),
            "T" => Ok(WeightUnit::T),
            _ => Err(DomainError::validation(format!("unknown weight unit: {s}"))),
        }
    }
}

/// A weight, e.g. `12.50 KG`.
///
/// The amount is an exact decimal ([`rust_decimal::Decimal`]); its scale is
/// part of the value's rendering (`12.50` keeps its trailing zero) while
/// equality and hashing compare the numeric value, so `12.5 KG == 12.50 KG`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weight {
    amount: Decimal,
    unit: WeightUnit,
}

impl Weight {
    pub const fn new(amount: Decimal, unit: WeightUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Magnitude in milligrams, regardless of the enumerant.
    ///
    /// Use this to compare weights across units.
    pub fn milligrams(&self) -> Decimal {
        self.amount * self.unit.milligram_factor()
    }

    /// Re-express this weight in another unit.
    ///
    /// Metric rescaling by powers of ten is exact while the result fits
    /// `Decimal`'s 28 significant digits; past that bound the division
    /// rounds (e.g. a scale-28 amount converted `MG` to `T`).
    pub fn convert_to(&self, unit: WeightUnit) -> Weight {
        if unit == self.unit {
            return *self;
        }
        let amount = self.amount * self.unit.milligram_factor() / unit.milligram_factor();
        Weight::new(amount, unit)
    }
}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl ValueObject for Weight {}
