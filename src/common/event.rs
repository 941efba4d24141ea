use crate::common::money::Money;

/// A balance-affecting request against one account, dispatched by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEvent {
    Deposit { amount: Money },
    Withdraw { amount: Money },
    PayInterest,
}
