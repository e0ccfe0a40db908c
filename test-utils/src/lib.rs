//! Test support for the workmanager crates.
//!
//! - `builder` - `TestBuilder`, creates an in-memory SQLite database with the tables a test needs
//! - `context` - `TestContext`, owns that database for the duration of a test
//! - `factory` - inserts people, work orders, addresses and images with defaults
//! - `fixture` - entity models built in memory, for mapping tests without a database
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn assigns_workorder() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_workmanager_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let person = factory::create_person(db).await?;
//!     let workorder = factory::create_workorder_for_person(db, person.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
