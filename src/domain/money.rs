use crate::error::CartError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so that catalog prices, line totals and the
/// gift threshold are exact and can never go below zero. Deserialization goes
/// through the same check as [`Price::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(pub(crate) Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CartError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(CartError::ValidationError(format!(
                "Price must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Drops trailing zeros so `500.00` renders as `500`.
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CartError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic saturates at `Decimal::MAX` so cart totals stay total functions.
impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Line totals: unit price times quantity.
impl Mul<u32> for Price {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
