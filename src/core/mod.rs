pub mod checkin;
pub mod ledger;
pub mod matcher;
pub mod payroll;
pub mod reports;
pub mod roster;
