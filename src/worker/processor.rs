use crate::{
    common::{error::LedgerError, event::AccountEvent},
    domain::{account::Account, confirmation::ConfirmationCode, ledger::Ledger},
    worker::handlers::{deposit, interest, withdrawal},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        account: &mut Account,
        event: AccountEvent,
    ) -> Result<ConfirmationCode, LedgerError> {
        match event {
            AccountEvent::Deposit { amount } => deposit::handle(ledger, account, amount),
            AccountEvent::Withdraw { amount } => withdrawal::handle(ledger, account, amount),
            AccountEvent::PayInterest => interest::handle(ledger, account),
        }
    }

    /// Applies `events` in order, stopping at the first invalid one.
    pub fn process_all<I>(
        &mut self,
        ledger: &mut Ledger,
        account: &mut Account,
        events: I,
    ) -> Result<Vec<ConfirmationCode>, LedgerError>
    where
        I: IntoIterator<Item = AccountEvent>,
    {
        events
            .into_iter()
            .map(|event| self.process(ledger, account, event))
            .collect()
    }
}
