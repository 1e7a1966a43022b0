//! URL normalization for Bookshelf.
//!
//! This crate turns an arbitrary absolute URL into one of two normalized
//! forms, selected by [`UrlOperation`]:
//!
//! - **canonical**: drop the query string and a single trailing `/` from the path
//! - **redirection**: pin the host to a configured domain and lowercase scheme and path
//! - **all**: canonical first, then redirection
//!
//! Normalization is pure: no I/O, no shared state, safe to call from any
//! number of threads.
//!
//! # Usage
//!
//! ```rust
//! use bookshelf_url::{UrlOperation, normalize};
//!
//! let out = normalize("https://BYFOOD.com/food-EXPeriences?query=abc/", UrlOperation::All).unwrap();
//! assert_eq!(out, "https://www.byfood.com/food-experiences");
//! ```
//!
//! # Modules
//!
//! - [`error`] - Normalization error type
//! - [`normalize`] - The [`UrlNormalizer`] and its transformation steps
//! - [`operation`] - The closed set of normalization operations

pub mod error;
pub mod normalize;
pub mod operation;

pub use error::NormalizeError;
pub use normalize::{DEFAULT_CANONICAL_DOMAIN, UrlNormalizer, normalize};
pub use operation::UrlOperation;
