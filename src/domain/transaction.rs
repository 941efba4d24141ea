use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::{
    common::zone::TimeZone,
    domain::confirmation::{ConfirmationCode, TxCode},
};

/// Format used when rendering instants for people, e.g. `2024-03-09 19:05:02 (IST)`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S (%Z)";

/// One registry row. Written once per operation attempt, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    pub id_num: u64,
    pub code: TxCode,
    pub account_number: String,
    pub dt: DateTime<Utc>,
}

impl TransactionEntry {
    pub fn new(id_num: u64, code: TxCode, account_number: &str, dt: DateTime<Utc>) -> Self {
        Self {
            id_num,
            code,
            account_number: account_number.to_string(),
            dt,
        }
    }

    pub fn confirmation(&self) -> ConfirmationCode {
        ConfirmationCode::new(self.code, self.account_number.as_str(), self.dt, self.id_num)
    }
}

/// A past operation as returned by lookup, with its time shown in the caller's zone.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub account_number: String,
    pub transaction_code: TxCode,
    pub transaction_id: u64,
    pub time_utc: DateTime<Utc>,
    pub time: DateTime<FixedOffset>,
    pub zone: TimeZone,
}

impl Transaction {
    pub fn from_entry(entry: &TransactionEntry, zone: &TimeZone) -> Self {
        Self {
            account_number: entry.account_number.clone(),
            transaction_code: entry.code,
            transaction_id: entry.id_num,
            time_utc: entry.dt,
            time: entry.dt.with_timezone(&zone.offset_at(entry.dt)),
            zone: *zone,
        }
    }

    pub fn time_utc_display(&self) -> String {
        self.time_utc.format(DISPLAY_FORMAT).to_string()
    }

    pub fn time_display(&self) -> String {
        self.zone
            .convert(self.time_utc)
            .format(DISPLAY_FORMAT)
            .to_string()
    }
}
