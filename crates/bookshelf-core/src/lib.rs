//! Core types and configuration for Bookshelf.
//!
//! This crate provides the building blocks shared across the Bookshelf
//! crates: environment-driven configuration, the infrastructure error type,
//! and the [`BookId`] identifier.

mod config;
mod error;
mod types;

pub use config::BookshelfConfig;
pub use error::BookshelfCoreError;
pub use types::BookId;
