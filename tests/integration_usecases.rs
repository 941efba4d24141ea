use std::fs;
use std::str::FromStr;

use account_ledger::{
    common::{clock::FixedClock, event::AccountEvent, money::Money, zone::TimeZone},
    domain::{
        account::Account, confirmation::TxCode, ledger::Ledger,
        transaction::DISPLAY_FORMAT,
    },
    io::writer::write_audit_trail,
    worker::processor::Processor,
};
use chrono::{TimeZone as _, Utc};

fn fixed_ledger() -> Ledger {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 42).unwrap();
    Ledger::new().with_clock(FixedClock(at))
}

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

fn audit(ledger: &Ledger, zone: &TimeZone) -> String {
    let mut out = Vec::<u8>::new();
    write_audit_trail(&mut out, ledger, Some(zone)).expect("failed to write audit CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_deposit_reject_withdraw_interest() {
    let mut ledger = fixed_ledger();
    let mut acc =
        Account::new("123456", "Name", "Surname", Money::zero(), Some("Asia/Jerusalem")).unwrap();

    let d = acc.deposit(&mut ledger, money("100")).unwrap();
    assert_eq!(acc.balance(), money("100"));
    assert!(d.to_string().starts_with('D'));

    let x = acc.withdraw(&mut ledger, money("150")).unwrap();
    assert_eq!(acc.balance(), money("100"));
    assert!(x.to_string().starts_with('X'));

    let w = acc.withdraw(&mut ledger, money("40")).unwrap();
    assert_eq!(acc.balance(), money("60"));
    assert!(w.to_string().starts_with('W'));

    let i = acc.pay_interest(&mut ledger).unwrap();
    assert_eq!(acc.balance(), money("60.3"));
    assert!(i.to_string().starts_with('I'));

    let expected = fs::read_to_string("tests/fixtures/scenario_audit.csv").unwrap();
    assert_eq!(
        normalize_csv(&audit(&ledger, acc.time_zone())),
        normalize_csv(&expected)
    );
}

#[test]
fn case2_two_accounts_share_one_id_sequence() {
    let mut ledger = fixed_ledger();
    let mut a = Account::open("A", "Ann", "Lee").unwrap();
    let mut b = Account::open("B", "Bo", "Kim").unwrap();
    let mut processor = Processor::new();

    processor
        .process(&mut ledger, &mut a, AccountEvent::Deposit { amount: money("10") })
        .unwrap();
    processor
        .process(&mut ledger, &mut b, AccountEvent::Deposit { amount: money("20") })
        .unwrap();
    processor
        .process(&mut ledger, &mut a, AccountEvent::Withdraw { amount: money("15") })
        .unwrap();
    processor
        .process(&mut ledger, &mut b, AccountEvent::Withdraw { amount: money("15") })
        .unwrap();
    processor
        .process(&mut ledger, &mut a, AccountEvent::PayInterest)
        .unwrap();

    assert_eq!(a.balance(), money("10.05"));
    assert_eq!(b.balance(), money("5"));

    let expected = fs::read_to_string("tests/fixtures/two_accounts_audit.csv").unwrap();
    assert_eq!(
        normalize_csv(&audit(&ledger, &TimeZone::utc())),
        normalize_csv(&expected)
    );
}

#[test]
fn case3_invalid_amounts_raise_and_leave_no_trace() {
    let mut ledger = fixed_ledger();
    let mut acc = Account::open("123456", "Name", "Surname").unwrap();

    assert!(acc.deposit(&mut ledger, money("0")).unwrap_err().is_invalid_argument());
    assert!(acc.deposit(&mut ledger, money("-5")).unwrap_err().is_invalid_argument());
    assert!(acc.withdraw(&mut ledger, money("0")).unwrap_err().is_invalid_argument());

    assert_eq!(acc.balance(), Money::zero());
    assert!(ledger.is_empty());
    assert_eq!(ledger.next_transaction_id(), Some(1));
}

#[test]
fn case4_lookup_returns_the_originating_operation() {
    let mut ledger = Ledger::new();
    let mut acc =
        Account::new("123456", "Name", "Surname", Money::zero(), Some("Asia/Jerusalem")).unwrap();

    let confirmation = acc.deposit(&mut ledger, money("100")).unwrap().to_string();

    let tx = Account::get_transaction(&ledger, &confirmation, acc.time_zone()).unwrap();

    let parts: Vec<&str> = confirmation.split('-').collect();
    let id: u64 = parts[3].parse().unwrap();
    let stamp = chrono::NaiveDateTime::parse_from_str(parts[2], "%Y%m%d%H%M%S").unwrap();
    let instant = Utc.from_utc_datetime(&stamp);

    assert_eq!(tx.account_number, acc.account_number());
    assert_eq!(tx.transaction_code, TxCode::Deposit);
    assert_eq!(tx.transaction_id, id);
    assert_eq!(tx.time_utc_display(), instant.format(DISPLAY_FORMAT).to_string());
    assert_eq!(
        tx.time_display(),
        acc.time_zone().convert(instant).format(DISPLAY_FORMAT).to_string()
    );
}

#[test]
fn case5_lookup_of_never_issued_id_is_not_found() {
    let mut ledger = fixed_ledger();
    let mut acc = Account::open("123456", "Name", "Surname").unwrap();
    acc.deposit(&mut ledger, money("1")).unwrap();

    let err = Account::get_transaction(&ledger, "D-123456-20240309170542-77", &TimeZone::utc())
        .unwrap_err();

    assert!(matches!(
        err,
        account_ledger::common::error::LedgerError::TransactionNotFound(77)
    ));
}

#[test]
fn case6_rate_change_applies_to_accounts_without_override() {
    let mut ledger = fixed_ledger();
    let mut plain = Account::new("1", "A", "B", money("100"), None).unwrap();
    let mut pinned = Account::new("2", "C", "D", money("100"), None).unwrap();
    pinned.set_interest_rate_override(Some("0.005".parse().unwrap()));

    ledger.set_interest_rate("0.1".parse().unwrap());
    plain.pay_interest(&mut ledger).unwrap();
    pinned.pay_interest(&mut ledger).unwrap();

    assert_eq!(plain.balance(), money("110"));
    assert_eq!(pinned.balance(), money("100.5"));
}
