use super::embedding::Embedding;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An enrolled worker.
///
/// On-disk field names ("descriptor", "registeredAt") match the documents
/// written by the capture front-end, so existing stores load unchanged.
/// Workers are immutable after enrollment; only bulk clearing removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub descriptor: Embedding,
    /// Signature image as a data URL ("data:image/png;base64,…").
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Local>,
}

impl Worker {
    pub fn new(id: String, name: String, descriptor: Embedding, signature: Option<String>) -> Self {
        Self {
            id,
            name,
            descriptor,
            signature,
            registered_at: Local::now(),
        }
    }
}
