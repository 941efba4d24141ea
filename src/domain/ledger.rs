use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::{
    common::{
        clock::{Clock, SystemClock},
        error::LedgerError,
        money::Money,
        zone::TimeZone,
    },
    config::LedgerConfig,
    domain::{
        account::Account,
        confirmation::{ConfirmationCode, TxCode},
        interest::{InterestRate, RatePolicy},
        transaction::{Transaction, TransactionEntry},
    },
};

/// Hands out transaction ids in strictly increasing order. Ids are never reused.
#[derive(Debug, Clone)]
pub struct TransactionIds {
    /// `None` once `u64::MAX` has been handed out.
    next: Option<u64>,
}

impl TransactionIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    pub fn allocate(&mut self) -> Result<u64, LedgerError> {
        let id = self.next.ok_or(LedgerError::TransactionIdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}

impl Default for TransactionIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Owns everything accounts share: the id allocator, the interest rate,
/// the clock and the append-only transaction registry.
///
/// Accounts borrow a `Ledger` mutably for each operation. Separate ledgers
/// share nothing, so ids and rates never leak between them.
#[derive(Debug)]
pub struct Ledger {
    txs: BTreeMap<u64, TransactionEntry>,
    ids: TransactionIds,
    rates: RatePolicy,
    default_zone: TimeZone,
    clock: Box<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            txs: BTreeMap::new(),
            ids: TransactionIds::default(),
            rates: RatePolicy::default(),
            default_zone: TimeZone::utc(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let rate: InterestRate = config.interest_rate.parse()?;
        let default_zone = TimeZone::new(&config.default_zone)?;
        Ok(Self {
            ids: TransactionIds::starting_at(config.first_transaction_id),
            rates: RatePolicy::new(rate),
            default_zone,
            ..Self::new()
        })
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn interest_rate(&self) -> &InterestRate {
        self.rates.rate()
    }

    /// Replaces the shared rate. Accounts with their own override are unaffected.
    pub fn set_interest_rate(&mut self, rate: InterestRate) {
        self.rates.set_rate(rate);
        info!(rate = %self.rates.rate(), "interest rate changed");
    }

    pub fn rate_policy(&self) -> &RatePolicy {
        &self.rates
    }

    /// Zone used for accounts opened through the ledger and for audit output
    /// when the caller names none.
    pub fn default_zone(&self) -> &TimeZone {
        &self.default_zone
    }

    /// Opens an account displayed in the ledger's default zone.
    pub fn open_account(
        &self,
        number: impl Into<String>,
        first_name: &str,
        last_name: &str,
        initial_balance: Money,
    ) -> Result<Account, LedgerError> {
        let mut account = Account::new(number, first_name, last_name, initial_balance, None)?;
        account.set_time_zone(self.default_zone);
        Ok(account)
    }

    /// Allocates the next id, stamps it with the current instant and stores
    /// the entry. The returned code embeds the very same instant.
    pub(crate) fn record(
        &mut self,
        code: TxCode,
        account_number: &str,
    ) -> Result<ConfirmationCode, LedgerError> {
        let id = self.ids.allocate()?;
        let entry = TransactionEntry::new(id, code, account_number, self.clock.now());
        let confirmation = entry.confirmation();
        debug!(id, code = %code, account = account_number, "transaction recorded");
        self.txs.insert(id, entry);
        Ok(confirmation)
    }

    /// Looks a transaction up by the trailing id of `confirmation` alone.
    pub fn get_transaction(
        &self,
        confirmation: &str,
        zone: &TimeZone,
    ) -> Result<Transaction, LedgerError> {
        let id = ConfirmationCode::transaction_id_of(confirmation)?;
        let entry = self.lookup(id)?;
        Ok(Transaction::from_entry(entry, zone))
    }

    /// Like [`Ledger::get_transaction`], but the code must parse completely and
    /// every field must agree with the stored entry.
    pub fn get_verified_transaction(
        &self,
        confirmation: &str,
        zone: &TimeZone,
    ) -> Result<Transaction, LedgerError> {
        let parsed: ConfirmationCode = confirmation.parse()?;
        let entry = self.lookup(parsed.transaction_id())?;
        let stored = entry.confirmation();

        let field = if parsed.code() != stored.code() {
            Some("code")
        } else if parsed.account_number() != stored.account_number() {
            Some("account number")
        } else if parsed.timestamp() != stored.timestamp() {
            Some("timestamp")
        } else {
            None
        };
        if let Some(field) = field {
            warn!(id = entry.id_num, field, "confirmation code does not match registry");
            return Err(LedgerError::ConfirmationMismatch {
                field,
                id: entry.id_num,
            });
        }

        Ok(Transaction::from_entry(entry, zone))
    }

    pub fn entry(&self, id: u64) -> Option<&TransactionEntry> {
        self.txs.get(&id)
    }

    /// All entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &TransactionEntry> {
        self.txs.values()
    }

    pub fn entries_for<'a>(
        &'a self,
        account_number: &'a str,
    ) -> impl Iterator<Item = &'a TransactionEntry> {
        self.txs
            .values()
            .filter(move |e| e.account_number == account_number)
    }

    pub fn len(&self) -> usize {
        self.txs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// Id the next operation will receive, `None` once ids are used up.
    pub fn next_transaction_id(&self) -> Option<u64> {
        self.ids.peek()
    }

    fn lookup(&self, id: u64) -> Result<&TransactionEntry, LedgerError> {
        self.txs.get(&id).ok_or_else(|| {
            warn!(id, "transaction not found");
            LedgerError::TransactionNotFound(id)
        })
    }
}
