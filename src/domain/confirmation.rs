use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};

use crate::common::error::LedgerError;

/// Compact timestamp embedded in confirmation codes, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One-letter operation tag carried by registry entries and confirmation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "char")]
pub enum TxCode {
    Deposit,
    Withdraw,
    Interest,
    Rejected,
}

impl TxCode {
    pub fn letter(self) -> char {
        match self {
            TxCode::Deposit => 'D',
            TxCode::Withdraw => 'W',
            TxCode::Interest => 'I',
            TxCode::Rejected => 'X',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'D' => Some(TxCode::Deposit),
            'W' => Some(TxCode::Withdraw),
            'I' => Some(TxCode::Interest),
            'X' => Some(TxCode::Rejected),
            _ => None,
        }
    }
}

impl From<TxCode> for char {
    fn from(code: TxCode) -> char {
        code.letter()
    }
}

impl fmt::Display for TxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Decoded form of `<CODE>-<ACCOUNT_NUMBER>-<YYYYMMDDHHMMSS>-<TRANSACTION_ID>`.
///
/// `Display` produces the wire string and `FromStr` parses it back. The
/// account number is opaque and may itself contain hyphens, so parsing takes
/// the code from the front, the id and timestamp from the back, and treats
/// whatever is left in the middle as the account number.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use account_ledger::domain::confirmation::{ConfirmationCode, TxCode};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 42).unwrap();
/// let code = ConfirmationCode::new(TxCode::Deposit, "140568", at, 7);
/// assert_eq!(code.to_string(), "D-140568-20240309170542-7");
///
/// let parsed: ConfirmationCode = "D-140568-20240309170542-7".parse().unwrap();
/// assert_eq!(parsed, code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationCode {
    code: TxCode,
    account_number: String,
    timestamp: NaiveDateTime,
    transaction_id: u64,
}

impl ConfirmationCode {
    pub fn new(
        code: TxCode,
        account_number: impl Into<String>,
        timestamp: DateTime<Utc>,
        transaction_id: u64,
    ) -> Self {
        Self {
            code,
            account_number: account_number.into(),
            timestamp: timestamp.naive_utc().trunc_subsecs(0),
            transaction_id,
        }
    }

    pub fn code(&self) -> TxCode {
        self.code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Embedded instant, second precision.
    pub fn timestamp(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.timestamp)
    }

    pub fn transaction_id(&self) -> u64 {
        self.transaction_id
    }

    /// Reads only the trailing id segment, ignoring the rest of the code.
    pub fn transaction_id_of(confirmation: &str) -> Result<u64, LedgerError> {
        let trailing = confirmation
            .rsplit_once('-')
            .map_or(confirmation, |(_, id)| id);
        parse_id(trailing)
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.code,
            self.account_number,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.transaction_id
        )
    }
}

impl FromStr for ConfirmationCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LedgerError::InvalidConfirmation(s.to_string());

        let (letter, rest) = s.split_once('-').ok_or_else(malformed)?;
        let (rest, id) = rest.rsplit_once('-').ok_or_else(malformed)?;
        let (account_number, stamp) = rest.rsplit_once('-').ok_or_else(malformed)?;

        let mut letters = letter.chars();
        let code = match (letters.next(), letters.next()) {
            (Some(c), None) => TxCode::from_letter(c).ok_or_else(malformed)?,
            _ => return Err(malformed()),
        };

        if stamp.len() != 14 || !stamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let timestamp =
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).map_err(|_| malformed())?;

        Ok(Self {
            code,
            account_number: account_number.to_string(),
            timestamp,
            transaction_id: parse_id(id)?,
        })
    }
}

fn parse_id(segment: &str) -> Result<u64, LedgerError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::InvalidConfirmation(format!(
            "transaction id {segment:?} is not a number"
        )));
    }
    segment
        .parse()
        .map_err(|_| LedgerError::InvalidConfirmation(format!("transaction id {segment:?} out of range")))
}
