use dinerank_model::{ItemId, ModelError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Sort level out of range: {0} (expected 0..6)")]
    InvalidLevel(usize),

    #[error("Criterion code out of range: {0} (expected 0..16)")]
    InvalidCriterionCode(u8),

    #[error("Duplicate item in catalog: {0}")]
    DuplicateItem(ItemId),

    #[error("Item not found: {0}")]
    UnknownItem(ItemId),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RankError>;
