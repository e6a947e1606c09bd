//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Reads hit the store immediately. `create`/`update`/`delete` only stage a
//! write in the wrapper's unit of work; nothing reaches the store until
//! [`RepositoryWrapper::save`].

use crate::contract::{Account, Department, Developer};
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Repository for developers
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// All developers sorted by name
    async fn all_developers(&self) -> Result<Vec<Developer>>;

    /// All developers sorted by name, accounts and department loaded
    async fn all_developers_with_details(&self) -> Result<Vec<Developer>>;

    /// Developers of a department sorted by name, department loaded
    async fn developers_by_department(&self, department_id: i32) -> Result<Vec<Developer>>;

    /// Find a developer by id
    async fn developer_by_id(&self, developer_id: Uuid) -> Result<Option<Developer>>;

    /// Find a developer by id, accounts and department loaded
    async fn developer_with_details(&self, developer_id: Uuid) -> Result<Option<Developer>>;

    /// Stage an insert
    fn create(&self, developer: &Developer);

    /// Stage a full-row replace
    fn update(&self, developer: &Developer);

    /// Stage a removal
    fn delete(&self, developer: &Developer);
}

/// Repository for accounts
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Accounts owned by a developer
    async fn accounts_by_developer(&self, developer_id: Uuid) -> Result<Vec<Account>>;

    /// Find an account by id
    async fn account_by_id(&self, account_id: Uuid) -> Result<Option<Account>>;

    /// Stage an insert
    fn create(&self, account: &Account);
}

/// Repository for departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All departments sorted by name
    async fn all_departments(&self) -> Result<Vec<Department>>;

    /// Find a department by id
    async fn department_by_id(&self, department_id: i32) -> Result<Option<Department>>;

    /// Stage an insert; the returned handle receives the store-assigned id
    fn create(&self, name: &str, description: Option<&str>) -> AssignedId;
}

/// Id assigned by the store to one staged insert
///
/// Empty until the insert has been applied by [`RepositoryWrapper::save`].
#[derive(Debug, Clone, Default)]
pub struct AssignedId(Arc<Mutex<Option<i32>>>);

impl AssignedId {
    pub fn set(&self, id: i32) {
        *self.0.lock() = Some(id);
    }

    pub fn get(&self) -> Option<i32> {
        *self.0.lock()
    }
}

/// Unit-of-work facade over the three repositories
#[async_trait]
pub trait RepositoryWrapper: Send + Sync {
    fn developer(&self) -> &dyn DeveloperRepository;

    fn account(&self) -> &dyn AccountRepository;

    fn department(&self) -> &dyn DepartmentRepository;

    /// Flush every staged write atomically
    async fn save(&self) -> Result<()>;
}

/// Creates one repository wrapper per request
pub trait RepositoryWrapperFactory: Send + Sync {
    fn create(&self) -> Box<dyn RepositoryWrapper>;
}
