//! Shared testing utilities for the clinic backend.
//!
//! Provides a builder for test contexts with in-memory SQLite databases,
//! a session instance backed by the same database, and entity factories
//! with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Treatment;
//!
//! #[tokio::test]
//! async fn test_treatments() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Treatment).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
