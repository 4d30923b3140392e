pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_content_tables;
mod m20240601_000002_create_blog_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_content_tables::Migration),
            Box::new(m20240601_000002_create_blog_indexes::Migration),
        ]
    }
}
