// src/tree/error.rs

use thiserror::Error;

/// Failures surfaced by [`BalancedTree`](super::balanced::BalancedTree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("element already exists in the tree")]
    DuplicateKey,

    #[error("element not found in the tree")]
    NotFound,
}

pub type TreeResult<T> = Result<T, TreeError>;
