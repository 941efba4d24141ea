use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// Monetary value stored as an integer count of 1/10000 currency units.
///
/// Balances and amounts never pass through floating point: text is parsed
/// with `BigDecimal`, rounded to four decimal places and kept as an `i64`.
/// Interest is computed in `BigDecimal` as well and rounded back on the way in.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use account_ledger::common::money::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.as_i64(), 105_000);
/// assert_eq!(amount.to_string_4dp(), "10.5000");
/// ```
pub struct Money(i64);

impl Money {
    /// Wraps a raw value already expressed in 1/10000 units.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(100)` is 100.0000.
    ///
    /// # Panics
    ///
    /// Panics if `units` does not fit once scaled, i.e. when its magnitude
    /// exceeds `i64::MAX / 10_000`. Use [`Money::checked_from_units`] for
    /// values that are not known to be small.
    pub const fn from_units(units: i64) -> Self {
        match Self::checked_from_units(units) {
            Some(money) => money,
            None => panic!("Money::from_units overflow"),
        }
    }

    /// Like [`Money::from_units`], returning `None` instead of panicking.
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(SCALE) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// `self × factor`, rounded to four decimal places.
    /// Returns `None` if the product does not fit.
    pub fn checked_mul_decimal(self, factor: &BigDecimal) -> Option<Money> {
        let product = (BigDecimal::from(self.0) * factor).round(0);
        product.to_i64().map(Money)
    }

    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }

    pub fn to_string_4dp(&self) -> String {
        format!("{:.4}", self.to_decimal())
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// # Panics
///
/// Panics on overflow in every build profile. Balance updates go through
/// [`Money::checked_add`].
impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        self.checked_add(rhs).expect("Money addition overflow")
    }
}

/// # Panics
///
/// Panics on overflow in every build profile. Balance updates go through
/// [`Money::checked_sub`].
impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        self.checked_sub(rhs).expect("Money subtraction overflow")
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
