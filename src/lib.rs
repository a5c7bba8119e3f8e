//! # AVL tree collection
//!
//! A generic height-balanced binary search tree. Elements are ordered by a
//! caller-supplied three-way comparator, which also decides what counts as a
//! duplicate; trees over [`Ord`] types get the natural order for free.
//!
//! The engine lives in [`tree::balanced`], its typed failures in
//! [`tree::error`]. The [`config`] module only parameterizes the
//! demonstration driver shipped as this crate's binary.

pub mod config;
pub mod tree;

pub use tree::balanced::{BalancedTree, Iter};
pub use tree::error::{TreeError, TreeResult};
