use tracing::{info, warn};

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
    let amount = validate_real_number(amount, Some(MIN_OPERATION_AMOUNT))?;

    // the code is chosen before recording so a declined attempt is audited as X
    let remaining = acc
        .balance()
        .checked_sub(amount)
        .filter(|remaining| !remaining.is_negative());

    let Some(remaining) = remaining else {
        let confirmation = ledger.record(TxCode::Rejected, acc.account_number())?;
        warn!(
            account = acc.account_number(),
            id = confirmation.transaction_id(),
            %amount,
            balance = %acc.balance(),
            "withdrawal rejected: insufficient funds"
        );
        return Ok(confirmation);
    };

    let confirmation = ledger.record(TxCode::Withdraw, acc.account_number())?;
    acc.set_balance(remaining);

    info!(
        account = acc.account_number(),
        id = confirmation.transaction_id(),
        %amount,
        balance = %remaining,
        "withdrawal accepted"
    );
    Ok(confirmation)
}
