use std::cell::OnceCell;

use crate::{
    common::{error::LedgerError, event::AccountEvent, money::Money, zone::TimeZone},
    domain::{
        confirmation::ConfirmationCode,
        interest::InterestRate,
        ledger::Ledger,
        transaction::Transaction,
        validation::{validate_initial_balance, validate_name},
    },
    worker::{
        handlers::{deposit, interest, withdrawal},
        processor::Processor,
    },
};

/// One bank account: identity, balance and display zone.
///
/// Shared state (transaction ids, the interest rate, the registry) lives in
/// the [`Ledger`] passed to each operation.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: String,
    first_name: String,
    last_name: String,
    /// Filled on first read, cleared whenever a name changes.
    full_name: OnceCell<String>,
    balance: Money,
    time_zone: TimeZone,
    interest_rate: Option<InterestRate>,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        first_name: &str,
        last_name: &str,
        initial_balance: Money,
        zone: Option<&str>,
    ) -> Result<Self, LedgerError> {
        let time_zone = match zone {
            Some(name) => TimeZone::new(name)?,
            None => TimeZone::utc(),
        };
        Ok(Self {
            account_number: number.into(),
            first_name: validate_name(first_name, "first name")?,
            last_name: validate_name(last_name, "last name")?,
            full_name: OnceCell::new(),
            balance: validate_initial_balance(initial_balance, Some(Money::zero()))?,
            time_zone,
            interest_rate: None,
        })
    }

    /// Zero balance, UTC.
    pub fn open(
        number: impl Into<String>,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, LedgerError> {
        Self::new(number, first_name, last_name, Money::zero(), None)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, name: &str) -> Result<(), LedgerError> {
        self.first_name = validate_name(name, "first name")?;
        self.full_name.take();
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, name: &str) -> Result<(), LedgerError> {
        self.last_name = validate_name(name, "last name")?;
        self.full_name.take();
        Ok(())
    }

    pub fn full_name(&self) -> &str {
        self.full_name
            .get_or_init(|| format!("{} {}", self.first_name, self.last_name))
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn set_time_zone(&mut self, zone: TimeZone) {
        self.time_zone = zone;
    }

    pub fn set_time_zone_name(&mut self, name: &str) -> Result<(), LedgerError> {
        self.time_zone = TimeZone::new(name)?;
        Ok(())
    }

    /// Pins this account to its own rate, or (`None`) back to the ledger's shared one.
    pub fn set_interest_rate_override(&mut self, rate: Option<InterestRate>) {
        self.interest_rate = rate;
    }

    pub fn interest_rate_override(&self) -> Option<&InterestRate> {
        self.interest_rate.as_ref()
    }

    /// Rate `pay_interest` would apply right now.
    pub fn interest_rate<'a>(&'a self, ledger: &'a Ledger) -> &'a InterestRate {
        ledger.rate_policy().effective(self.interest_rate.as_ref())
    }

    pub fn deposit(
        &mut self,
        ledger: &mut Ledger,
        amount: Money,
    ) -> Result<ConfirmationCode, LedgerError> {
        deposit::handle(ledger, self, amount)
    }

    /// Insufficient funds is not an error: the attempt is recorded and an
    /// `X` code comes back with the balance untouched.
    pub fn withdraw(
        &mut self,
        ledger: &mut Ledger,
        amount: Money,
    ) -> Result<ConfirmationCode, LedgerError> {
        withdrawal::handle(ledger, self, amount)
    }

    pub fn pay_interest(&mut self, ledger: &mut Ledger) -> Result<ConfirmationCode, LedgerError> {
        interest::handle(ledger, self)
    }

    pub fn apply(
        &mut self,
        ledger: &mut Ledger,
        event: AccountEvent,
    ) -> Result<ConfirmationCode, LedgerError> {
        Processor::new().process(ledger, self, event)
    }

    pub fn get_transaction(
        ledger: &Ledger,
        confirmation: &str,
        zone: &TimeZone,
    ) -> Result<Transaction, LedgerError> {
        ledger.get_transaction(confirmation, zone)
    }
}
