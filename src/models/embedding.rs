use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Dimensionality of the face descriptors produced by the extraction model.
/// Embeddings from a different model are not comparable.
pub const EMBEDDING_DIM: usize = 128;

/// A face descriptor. Serializes as a bare float array, the same shape the
/// capture front-end stores under `descriptor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    pub fn new(values: Vec<f32>) -> AppResult<Self> {
        if values.len() != EMBEDDING_DIM {
            return Err(AppError::InvalidEmbedding {
                expected: EMBEDDING_DIM,
                got: values.len(),
            });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }

    /// Deserialized documents bypass `new`, so dimensionality is re-checked
    /// wherever an embedding enters a comparison.
    pub fn check_dim(&self) -> AppResult<()> {
        if self.0.len() != EMBEDDING_DIM {
            return Err(AppError::InvalidEmbedding {
                expected: EMBEDDING_DIM,
                got: self.0.len(),
            });
        }
        Ok(())
    }

    /// Euclidean distance between two descriptors.
    pub fn distance(&self, other: &Embedding) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }
}
