//! Database migrations for the developer registry

use sea_orm_migration::prelude::*;

mod m20261001_000001_create_departments;
mod m20261001_000002_create_developers;
mod m20261001_000003_create_accounts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_departments::Migration),
            Box::new(m20261001_000002_create_developers::Migration),
            Box::new(m20261001_000003_create_accounts::Migration),
        ]
    }
}
