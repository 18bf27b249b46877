use rust_decimal::Decimal;
use std::fmt;

/// Amount type a [`Ledger`](super::Ledger) can track.
///
/// Signed types are allowed; the ledger itself rejects non-positive amounts
/// and never lets a balance fall below zero.
pub trait Quantity: Copy + PartialOrd + fmt::Debug + fmt::Display {
    fn zero() -> Self;

    /// `true` only for values strictly greater than zero.
    fn is_strictly_positive(&self) -> bool {
        *self > Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Converts the quantity for valuation, `None` if it does not fit a
    /// `Decimal` (96-bit mantissa).
    fn to_decimal(self) -> Option<Decimal>;
}

macro_rules! impl_integer_quantity {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn to_decimal(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }
            }
        )*
    };
}

impl_integer_quantity!(u32, u64, i32, i64);

impl Quantity for u128 {
    fn zero() -> Self {
        0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        u128::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        u128::checked_sub(self, rhs)
    }

    fn to_decimal(self) -> Option<Decimal> {
        let wide = i128::try_from(self).ok()?;
        Decimal::try_from_i128_with_scale(wide, 0).ok()
    }
}

impl Quantity for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    fn to_decimal(self) -> Option<Decimal> {
        Some(self)
    }
}
