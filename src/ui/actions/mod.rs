pub mod checkin;
pub mod enroll;
pub mod export;
pub mod maintenance;
pub mod purge;
pub mod records;
pub mod reports;
pub mod sync;
pub mod workdays;
