//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::{DeveloperRegistryApi, NewDepartment};
use crate::domain::Service;
use crate::infra::storage::repositories::SeaOrmRepositoryWrapperFactory;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Developer registry module
///
/// Lifecycle: `migrate` once per database, `init` to wire the service, then
/// `register_rest` to mount both HTTP adapters.
pub struct DeveloperRegistryModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for DeveloperRegistryModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl DeveloperRegistryModule {
    /// Wire repositories and the domain service, then seed departments
    pub async fn init(&self, db: Arc<DatabaseConnection>, cfg: Config) -> Result<()> {
        let factory = Arc::new(SeaOrmRepositoryWrapperFactory::new(db));
        let service = Arc::new(Service::new(factory));

        let seed: Vec<NewDepartment> = cfg
            .seed_departments
            .iter()
            .map(|d| NewDepartment {
                name: d.name.clone(),
                description: d.description.clone(),
            })
            .collect();
        let seeded = service.seed_departments(&seed).await?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded departments");
        }

        *self.config.write() = cfg;
        *self.service.write() = Some(service);

        tracing::info!("Developer registry initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Developer registry migrations completed");
        Ok(())
    }

    /// In-process client over the initialized service
    pub fn client(&self) -> Result<Arc<dyn DeveloperRegistryApi>> {
        let service = self
            .service
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))?
            .clone();
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Mount the JSON API and the grid routes
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let api = self.client()?;
        let default_page_size = self.config.read().grid_page_size;

        tracing::info!("Registering developer registry REST routes");
        let router = crate::api::rest::routes::register_routes(router, api.clone())?;
        crate::api::grid::routes::register_routes(
            router,
            crate::api::grid::handlers::GridContext {
                api,
                default_page_size,
            },
        )
    }
}
