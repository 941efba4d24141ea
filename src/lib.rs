//! Single-account ledger: deposits, withdrawals and interest payments, each
//! answered with a confirmation code that resolves back to its audit entry.
//!
//! ```
//! use std::str::FromStr;
//! use account_ledger::common::money::Money;
//! use account_ledger::common::zone::TimeZone;
//! use account_ledger::domain::{account::Account, ledger::Ledger};
//!
//! let mut ledger = Ledger::new();
//! let mut account = Account::open("123456", "Jane", "Doe").unwrap();
//!
//! let code = account.deposit(&mut ledger, Money::from_str("100").unwrap()).unwrap();
//! assert!(code.to_string().starts_with("D-123456-"));
//!
//! let tx = Account::get_transaction(&ledger, &code.to_string(), &TimeZone::utc()).unwrap();
//! assert_eq!(tx.transaction_id, code.transaction_id());
//! ```

pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod worker;
