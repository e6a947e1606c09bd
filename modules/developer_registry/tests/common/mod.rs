//! Common test utilities: a migrated SQLite store per test and builders

#![allow(dead_code)]

use chrono::NaiveDate;
use developer_registry::config::Config;
use developer_registry::contract::{NewDepartment, NewDeveloper};
use developer_registry::domain::Service;
use developer_registry::infra::storage::migrations::Migrator;
use developer_registry::infra::storage::repositories::SeaOrmRepositoryWrapperFactory;
use developer_registry::DeveloperRegistryModule;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tempfile::TempDir;

/// Migrated database living in a temporary directory
///
/// Keep the value alive for the whole test; dropping it removes the file.
pub struct TestDb {
    pub conn: Arc<DatabaseConnection>,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("registry.db").display());
        let conn = Database::connect(url).await.unwrap();
        Migrator::up(&conn, None).await.unwrap();

        Self {
            conn: Arc::new(conn),
            _dir: dir,
        }
    }

    pub fn service(&self) -> Service {
        Service::new(Arc::new(SeaOrmRepositoryWrapperFactory::new(
            self.conn.clone(),
        )))
    }

    /// Full HTTP router over this database
    pub async fn router(&self, cfg: Config) -> axum::Router {
        let module = DeveloperRegistryModule::default();
        module.init(self.conn.clone(), cfg).await.unwrap();
        module.register_rest(axum::Router::new()).unwrap()
    }
}

pub fn new_developer(name: &str, department_id: i32) -> NewDeveloper {
    NewDeveloper {
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        address: format!("{name} Street 1"),
        department_id,
    }
}

pub fn new_department(name: &str) -> NewDepartment {
    NewDepartment {
        name: name.to_string(),
        description: None,
    }
}
