//! Native client trait for inter-module communication
//!
//! Both HTTP adapters (JSON API and server-driven grid) talk to the registry
//! through this trait only.

use super::{
    error::RegistryError,
    model::{
        Account, Department, Developer, DeveloperUpdate, NewAccount, NewDepartment, NewDeveloper,
    },
};
use async_trait::async_trait;
use uuid::Uuid;

/// Developer registry API for inter-module communication
#[async_trait]
pub trait DeveloperRegistryApi: Send + Sync {
    // ===== Developer Operations =====

    /// All developers sorted by name, relations not loaded
    async fn list_developers(&self) -> Result<Vec<Developer>, RegistryError>;

    /// All developers sorted by name with accounts and department loaded
    async fn list_developers_with_details(&self) -> Result<Vec<Developer>, RegistryError>;

    /// Developers of one department sorted by name, department loaded
    async fn list_developers_by_department(
        &self,
        department_id: i32,
    ) -> Result<Vec<Developer>, RegistryError>;

    /// Get a developer by id
    async fn get_developer(&self, developer_id: Uuid) -> Result<Developer, RegistryError>;

    /// Get a developer by id with accounts and department loaded
    async fn get_developer_with_details(
        &self,
        developer_id: Uuid,
    ) -> Result<Developer, RegistryError>;

    /// Create a developer
    async fn create_developer(&self, new: NewDeveloper) -> Result<Developer, RegistryError>;

    /// Update an existing developer's scalar fields
    async fn update_developer(&self, update: DeveloperUpdate)
        -> Result<Developer, RegistryError>;

    /// Delete a developer (and, through the store, its accounts)
    async fn delete_developer(&self, developer_id: Uuid) -> Result<(), RegistryError>;

    // ===== Department Operations =====

    /// All departments sorted by name
    async fn list_departments(&self) -> Result<Vec<Department>, RegistryError>;

    /// Create a department
    async fn create_department(&self, new: NewDepartment) -> Result<Department, RegistryError>;

    // ===== Account Operations =====

    /// Accounts owned by a developer
    async fn list_accounts(&self, developer_id: Uuid) -> Result<Vec<Account>, RegistryError>;

    /// Open a new account for an existing developer
    async fn open_account(&self, new: NewAccount) -> Result<Account, RegistryError>;
}
