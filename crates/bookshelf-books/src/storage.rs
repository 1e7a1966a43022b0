//! SQLite-backed book store.
//!
//! Connection and schema live here; the provider owns a [`BookStore`] and
//! never touches SQL directly.

use chrono::Utc;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use bookshelf_core::BookId;
use bookshelf_model::input::BookInput;
use bookshelf_model::output::Book;

/// Errors returned by the book store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row with this id.
    #[error("book {0} not found")]
    NotFound(BookId),

    /// A stored row cannot be represented as a [`Book`].
    #[error("invalid book row: {0}")]
    Corrupt(String),

    /// The database rejected the statement or the connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the error means the book does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Handle to the book table.
#[derive(Debug, Clone)]
pub struct BookStore {
    pool: Pool<Sqlite>,
}

impl BookStore {
    /// Connect to `url` and create the schema if it is missing.
    ///
    /// `url` is any sqlx SQLite URL, e.g. `sqlite://bookshelf.db?mode=rwc`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        tracing::info!(url, max_connections, "connected to book store");
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                year INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Every book, ordered by id.
    pub async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, title, author, year, created_at, updated_at
            FROM books
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(book_from_row).collect()
    }

    /// The book with `id`.
    pub async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        let row = sqlx::query(
            r"
            SELECT id, title, author, year, created_at, updated_at
            FROM books
            WHERE id = ?1
            ",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => book_from_row(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Insert a new book and return it as stored.
    pub async fn insert(&self, input: &BookInput) -> Result<Book, StoreError> {
        let now = Utc::now();
        let row_id = sqlx::query(
            r"
            INSERT INTO books (title, author, year, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(input.title.as_str())
        .bind(input.author.as_str())
        .bind(i64::from(input.year))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        let id = BookId::new(row_id).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.get(id).await
    }

    /// Replace title, author and year of an existing book.
    pub async fn update(&self, id: BookId, input: &BookInput) -> Result<Book, StoreError> {
        let result = sqlx::query(
            r"
            UPDATE books
            SET title = ?1,
                author = ?2,
                year = ?3,
                updated_at = ?4
            WHERE id = ?5
            ",
        )
        .bind(input.title.as_str())
        .bind(input.author.as_str())
        .bind(i64::from(input.year))
        .bind(Utc::now())
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        self.get(id).await
    }

    /// Remove a book permanently.
    pub async fn delete(&self, id: BookId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn book_from_row(row: &SqliteRow) -> Result<Book, StoreError> {
    let id: i64 = row.try_get("id")?;
    let year: i64 = row.try_get("year")?;

    Ok(Book {
        id: BookId::new(id).map_err(|e| StoreError::Corrupt(e.to_string()))?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        year: u32::try_from(year)
            .map_err(|_| StoreError::Corrupt(format!("book {id} has year {year}")))?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[cfg(test)]
/// Open an in-memory store for tests.
pub(crate) async fn open_memory() -> Result<BookStore, StoreError> {
    // A single connection: every `:memory:` connection is its own database.
    BookStore::connect("sqlite::memory:", 1).await
}
