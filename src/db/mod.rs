pub mod initialize;
pub mod log;
pub mod pool;
pub mod slots;
pub mod stats;
