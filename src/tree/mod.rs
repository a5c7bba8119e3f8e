// src/tree/mod.rs

pub mod balanced;
pub mod error;

pub use balanced::{BalancedTree, Iter};
pub use error::{TreeError, TreeResult};
