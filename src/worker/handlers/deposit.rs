use tracing::info;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        account::Account,
        confirmation::{ConfirmationCode, TxCode},
        ledger::Ledger,
        validation::{MIN_OPERATION_AMOUNT, validate_real_number},
    },
};

pub fn handle(
    ledger: &mut Ledger,
    acc: &mut Account,
    amount: Money,
) -> Result<ConfirmationCode, LedgerError> {
    // validation happens before anything is recorded
    let amount = validate_real_number(amount, Some(MIN_OPERATION_AMOUNT))?;
    let balance = acc
        .balance()
        .checked_add(amount)
        .ok_or(LedgerError::BalanceOverflow)?;

    let confirmation = ledger.record(TxCode::Deposit, acc.account_number())?;
    acc.set_balance(balance);

    info!(
        account = acc.account_number(),
        id = confirmation.transaction_id(),
        %amount,
        %balance,
        "deposit accepted"
    );
    Ok(confirmation)
}
