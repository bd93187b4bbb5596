use crate::error::CalcError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of fractional digits money amounts are reported with.
pub const CENT_DIGITS: u32 = 2;

/// Rounds a money amount to whole cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a user-entered number, accepting either `.` or `,` as the decimal
/// separator.
///
/// Whitespace anywhere in the input is ignored. When both separators appear,
/// `.` groups thousands and `,` marks the decimals (`1.234,56`). Exponent
/// notation (`1e3`) is accepted since JSON serializers emit it.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let normalized = if compact.contains(',') && compact.contains('.') {
        compact.replace('.', "").replacen(',', ".", 1)
    } else {
        compact.replacen(',', ".", 1)
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// The amount a rate is applied to. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Principal(Decimal);

impl Principal {
    pub fn new(value: Decimal) -> Result<Self, CalcError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidField {
                field: "principal",
                reason: "must not be negative".to_string(),
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Principal {
    type Error = CalcError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Principal> for Decimal {
    fn from(principal: Principal) -> Self {
        principal.0
    }
}

/// A percentage applied once per period.
///
/// Negative rates are legal and model deflation or a markdown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// The rate as a plain factor, e.g. `1.5%` becomes `0.015`.
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// A whole number of periods, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Months(u32);

impl Months {
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    /// Truncates toward zero and floors at one period.
    ///
    /// Counts beyond `u32::MAX` are rejected rather than clamped.
    pub fn from_decimal(value: Decimal) -> Result<Self, CalcError> {
        let whole = value.trunc();
        if whole < Decimal::ONE {
            return Ok(Self(1));
        }
        whole
            .to_u32()
            .map(Self)
            .ok_or_else(|| CalcError::InvalidField {
                field: "months",
                reason: format!("{whole} periods is more than can be represented"),
            })
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl From<u32> for Months {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl From<Months> for u32 {
    fn from(months: Months) -> Self {
        months.0
    }
}

/// A fixed amount paid every period. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Payment(Decimal);

impl Payment {
    pub fn new(value: Decimal) -> Result<Self, CalcError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CalcError::PaymentTooLow {
                payment: value,
                interest: Decimal::ZERO,
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Payment {
    type Error = CalcError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Payment> for Decimal {
    fn from(payment: Payment) -> Self {
        payment.0
    }
}
