use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for test contexts with a configurable database schema.
///
/// Add entity tables with [`with_table`](Self::with_table) (or one of the
/// convenience methods), then call [`build`](Self::build) to create the
/// context.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a CREATE TABLE statement generated from the entity's schema,
    /// unique constraints included.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every content table. Convenient for sitemap-style tests that
    /// read across all entities.
    pub fn with_content_tables(self) -> Self {
        self.with_table(TeamMember)
            .with_table(Treatment)
            .with_table(Project)
            .with_table(Sponsor)
            .with_table(Research)
            .with_table(MediaItem)
            .with_table(Innovation)
            .with_table(News)
            .with_table(Faq)
            .with_table(Education)
    }

    /// Creates the context and executes the configured statements.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
