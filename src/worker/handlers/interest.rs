use tracing::info;

use crate::{
    common::error::LedgerError,
    domain::{
        account::Account,
        confirmation::{ConfirmationCode, TxCode},
        ledger::Ledger,
    },
};

/// Credits `balance × rate` using the account's effective rate. Never rejected.
pub fn handle(ledger: &mut Ledger, acc: &mut Account) -> Result<ConfirmationCode, LedgerError> {
    let interest = acc.interest_rate(ledger).interest_on(acc.balance())?;
    let balance = acc
        .balance()
        .checked_add(interest)
        .ok_or(LedgerError::BalanceOverflow)?;

    let confirmation = ledger.record(TxCode::Interest, acc.account_number())?;
    acc.set_balance(balance);

    info!(
        account = acc.account_number(),
        id = confirmation.transaction_id(),
        %interest,
        %balance,
        "interest paid"
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{common::money::Money, domain::interest::InterestRate};

    #[test]
    fn pays_interest_at_the_shared_rate() {
        let mut ledger = Ledger::new();
        let mut acc = Account::new("1", "A", "B", Money::from_units(60), None).unwrap();

        let code = handle(&mut ledger, &mut acc).unwrap();

        assert_eq!(acc.balance(), Money::from_str("60.3").unwrap());
        assert_eq!(code.code(), TxCode::Interest);
    }

    #[test]
    fn paying_twice_compounds() {
        let mut ledger = Ledger::new();
        let mut acc = Account::new("1", "A", "B", Money::from_units(100), None).unwrap();

        handle(&mut ledger, &mut acc).unwrap();
        assert_eq!(acc.balance(), Money::from_str("100.5").unwrap());
        handle(&mut ledger, &mut acc).unwrap();
        assert_eq!(acc.balance(), Money::from_str("101.0025").unwrap());
    }

    #[test]
    fn zero_balance_still_records_a_transaction() {
        let mut ledger = Ledger::new();
        let mut acc = Account::open("1", "A", "B").unwrap();

        let code = handle(&mut ledger, &mut acc).unwrap();

        assert_eq!(acc.balance(), Money::zero());
        assert!(ledger.entry(code.transaction_id()).is_some());
    }

    #[test]
    fn override_rate_takes_precedence() {
        let mut ledger = Ledger::new();
        ledger.set_interest_rate(InterestRate::from_str("0.5").unwrap());
        let mut acc = Account::new("1", "A", "B", Money::from_units(100), None).unwrap();
        acc.set_interest_rate_override(Some(InterestRate::from_str("0.1").unwrap()));

        handle(&mut ledger, &mut acc).unwrap();

        assert_eq!(acc.balance(), Money::from_units(110));
    }

    #[test]
    fn overflowing_interest_is_rejected_before_recording() {
        let mut ledger = Ledger::new();
        ledger.set_interest_rate(InterestRate::from_str("1").unwrap());
        let mut acc = Account::new("1", "A", "B", Money::new(i64::MAX / 2 + 1), None).unwrap();

        let err = handle(&mut ledger, &mut acc).unwrap_err();

        assert!(matches!(err, LedgerError::BalanceOverflow));
        assert!(ledger.is_empty());
    }
}
