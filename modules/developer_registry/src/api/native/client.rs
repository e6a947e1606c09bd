//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Account, Department, Developer, DeveloperRegistryApi, DeveloperUpdate, NewAccount,
    NewDepartment, NewDeveloper, RegistryError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// Both HTTP adapters hold this behind `Arc<dyn DeveloperRegistryApi>`.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl DeveloperRegistryApi for NativeClient {
    async fn list_developers(&self) -> Result<Vec<Developer>, RegistryError> {
        self.service.list_developers().await
    }

    async fn list_developers_with_details(&self) -> Result<Vec<Developer>, RegistryError> {
        self.service.list_developers_with_details().await
    }

    async fn list_developers_by_department(
        &self,
        department_id: i32,
    ) -> Result<Vec<Developer>, RegistryError> {
        self.service.list_developers_by_department(department_id).await
    }

    async fn get_developer(&self, developer_id: Uuid) -> Result<Developer, RegistryError> {
        self.service.get_developer(developer_id).await
    }

    async fn get_developer_with_details(
        &self,
        developer_id: Uuid,
    ) -> Result<Developer, RegistryError> {
        self.service.get_developer_with_details(developer_id).await
    }

    async fn create_developer(&self, new: NewDeveloper) -> Result<Developer, RegistryError> {
        self.service.create_developer(new).await
    }

    async fn update_developer(
        &self,
        update: DeveloperUpdate,
    ) -> Result<Developer, RegistryError> {
        self.service.update_developer(update).await
    }

    async fn delete_developer(&self, developer_id: Uuid) -> Result<(), RegistryError> {
        self.service.delete_developer(developer_id).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>, RegistryError> {
        self.service.list_departments().await
    }

    async fn create_department(&self, new: NewDepartment) -> Result<Department, RegistryError> {
        self.service.create_department(new).await
    }

    async fn list_accounts(&self, developer_id: Uuid) -> Result<Vec<Account>, RegistryError> {
        self.service.list_accounts(developer_id).await
    }

    async fn open_account(&self, new: NewAccount) -> Result<Account, RegistryError> {
        self.service.open_account(new).await
    }
}
