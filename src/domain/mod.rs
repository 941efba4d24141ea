pub mod account;
pub mod confirmation;
pub mod interest;
pub mod ledger;
pub mod transaction;
pub mod validation;
