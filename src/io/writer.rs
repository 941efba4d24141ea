use std::io::Write;

use crate::{
    common::zone::TimeZone,
    domain::{confirmation::TxCode, ledger::Ledger, transaction::Transaction},
};

#[derive(serde::Serialize)]
/// Internal CSV output row for one registry entry.
///
/// Headers written (in this order): `id,code,account,time_utc,time`.
struct AuditRow<'a> {
    id: u64,
    code: TxCode,
    account: &'a str,
    time_utc: String,
    time: String,
}

/// Writes the full audit trail of `ledger` as CSV, ordered by transaction id.
///
/// Rejected withdrawals are included: every attempt that reached the
/// registry shows up. `zone` only affects the `time` column; without one
/// the ledger's default zone is used.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use account_ledger::common::{money::Money, zone::TimeZone};
/// use account_ledger::domain::{account::Account, ledger::Ledger};
/// use account_ledger::io::writer::write_audit_trail;
///
/// let mut ledger = Ledger::new();
/// let mut acc = Account::open("42", "Ada", "Lovelace").unwrap();
/// acc.deposit(&mut ledger, Money::from_units(5)).unwrap();
/// acc.withdraw(&mut ledger, Money::from_units(9)).unwrap();
///
/// let mut out = Vec::new();
/// write_audit_trail(&mut out, &ledger, Some(&TimeZone::utc())).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("id,code,account,time_utc,time\n"));
/// assert!(s.contains("\n1,D,42,"));
/// assert!(s.contains("\n2,X,42,"));
/// ```
pub fn write_audit_trail<W: Write>(
    writer: W,
    ledger: &Ledger,
    zone: Option<&TimeZone>,
) -> Result<(), csv::Error> {
    let zone = zone.unwrap_or(ledger.default_zone());
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for entry in ledger.entries() {
        let tx = Transaction::from_entry(entry, zone);
        let row = AuditRow {
            id: entry.id_num,
            code: entry.code,
            account: &entry.account_number,
            time_utc: tx.time_utc_display(),
            time: tx.time_display(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
