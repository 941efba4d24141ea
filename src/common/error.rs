use bigdecimal::ParseBigDecimalError;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("transaction {0} not found")]
    TransactionNotFound(u64),
    #[error("invalid confirmation code: {0}")]
    InvalidConfirmation(String),
    #[error("confirmation code {field} does not match transaction {id}")]
    ConfirmationMismatch { field: &'static str, id: u64 },
    #[error("balance overflow")]
    BalanceOverflow,
    #[error("transaction ids exhausted")]
    TransactionIdsExhausted,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LedgerError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LedgerError::InvalidArgument(_))
    }
}

// amounts parsed from text surface as invalid arguments
impl From<ParseBigDecimalError> for LedgerError {
    fn from(e: ParseBigDecimalError) -> Self {
        LedgerError::InvalidArgument(format!("the value must be a real number ({e})"))
    }
}
