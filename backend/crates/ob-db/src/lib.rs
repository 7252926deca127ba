pub mod connection;
pub mod error;
pub mod repositories;

#[cfg(test)]
mod tests;

pub use connection::database::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use sqlx::SqlitePool;
