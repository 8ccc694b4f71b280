pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_admin_table;
mod m20260105_000002_create_team_member_table;
mod m20260105_000003_create_treatment_table;
mod m20260105_000004_create_project_table;
mod m20260105_000005_create_sponsor_table;
mod m20260105_000006_create_research_table;
mod m20260105_000007_create_media_item_table;
mod m20260105_000008_create_innovation_table;
mod m20260105_000009_create_news_table;
mod m20260105_000010_create_faq_table;
mod m20260105_000011_create_education_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_admin_table::Migration),
            Box::new(m20260105_000002_create_team_member_table::Migration),
            Box::new(m20260105_000003_create_treatment_table::Migration),
            Box::new(m20260105_000004_create_project_table::Migration),
            Box::new(m20260105_000005_create_sponsor_table::Migration),
            Box::new(m20260105_000006_create_research_table::Migration),
            Box::new(m20260105_000007_create_media_item_table::Migration),
            Box::new(m20260105_000008_create_innovation_table::Migration),
            Box::new(m20260105_000009_create_news_table::Migration),
            Box::new(m20260105_000010_create_faq_table::Migration),
            Box::new(m20260105_000011_create_education_table::Migration),
        ]
    }
}
