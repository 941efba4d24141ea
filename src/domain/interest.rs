use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::common::{error::LedgerError, money::Money};

/// A non-negative per-call interest rate, e.g. `0.005` for half a percent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct InterestRate(BigDecimal);

impl InterestRate {
    pub fn new(value: BigDecimal) -> Result<Self, LedgerError> {
        if value < BigDecimal::zero() {
            return Err(LedgerError::invalid("Interest rate cannot be negative."));
        }
        Ok(Self(value))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Interest earned on `balance` at this rate.
    pub fn interest_on(&self, balance: Money) -> Result<Money, LedgerError> {
        balance
            .checked_mul_decimal(&self.0)
            .ok_or(LedgerError::BalanceOverflow)
    }
}

impl Default for InterestRate {
    fn default() -> Self {
        Self(BigDecimal::new(5.into(), 3))
    }
}

impl FromStr for InterestRate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: BigDecimal = s
            .trim()
            .parse()
            .map_err(|_| LedgerError::invalid("Interest rate must be a real number."))?;
        Self::new(value)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared rate applied to every account that carries no override of its own.
#[derive(Debug, Clone, Default)]
pub struct RatePolicy {
    rate: InterestRate,
}

impl RatePolicy {
    pub fn new(rate: InterestRate) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> &InterestRate {
        &self.rate
    }

    pub fn set_rate(&mut self, rate: InterestRate) {
        self.rate = rate;
    }

    /// The rate that applies to an account: its override if any, else the shared one.
    pub fn effective<'a>(&'a self, override_rate: Option<&'a InterestRate>) -> &'a InterestRate {
        override_rate.unwrap_or(&self.rate)
    }
}
