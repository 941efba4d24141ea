pub mod deposit;
pub mod interest;
pub mod withdrawal;
