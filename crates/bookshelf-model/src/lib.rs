//! Bookshelf API model types.
//!
//! Request inputs, response outputs, the operation enum, and the wire error
//! type shared by the HTTP layer and the business logic. All types are plain
//! serde structs using `snake_case` JSON field names.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;

pub use error::{BookshelfError, BookshelfErrorCode};
pub use operations::BookshelfOperation;
pub use output::Book;
