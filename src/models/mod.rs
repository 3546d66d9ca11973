pub mod catalog;
pub mod embedding;
pub mod entry;
pub mod worker;

pub use embedding::{EMBEDDING_DIM, Embedding};
pub use entry::WorkdayEntry;
pub use worker::Worker;
