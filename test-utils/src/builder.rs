use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory database.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_workmanager_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Executed in insertion order, so referenced tables must come first.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the CREATE TABLE statement SeaORM derives from `entity`, foreign keys included.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds address, image, person and work order tables, in that order.
    pub fn with_workmanager_tables(self) -> Self {
        self.with_table(Address)
            .with_table(Image)
            .with_table(Person)
            .with_table(Workorder)
    }

    /// Connects to the in-memory database and creates the collected tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the prepared connection
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
