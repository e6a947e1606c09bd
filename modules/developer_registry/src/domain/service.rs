//! Domain service - business logic orchestration
//!
//! Every public method opens its own repository wrapper, so each call is one
//! unit of work. Validation runs before the wrapper is created.

use super::repository::{RepositoryWrapper, RepositoryWrapperFactory};
use super::validation;
use crate::contract::{
    Account, Department, Developer, DeveloperUpdate, NewAccount, NewDepartment, NewDeveloper,
    RegistryError,
};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for developer registry management
pub struct Service {
    repositories: Arc<dyn RepositoryWrapperFactory>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repositories: Arc<dyn RepositoryWrapperFactory>) -> Self {
        Self { repositories }
    }

    fn wrapper(&self) -> Box<dyn RepositoryWrapper> {
        self.repositories.create()
    }

    // ===== Developer Operations =====

    pub async fn list_developers(&self) -> Result<Vec<Developer>, RegistryError> {
        self.wrapper()
            .developer()
            .all_developers()
            .await
            .map_err(RegistryError::storage)
    }

    pub async fn list_developers_with_details(&self) -> Result<Vec<Developer>, RegistryError> {
        self.wrapper()
            .developer()
            .all_developers_with_details()
            .await
            .map_err(RegistryError::storage)
    }

    pub async fn list_developers_by_department(
        &self,
        department_id: i32,
    ) -> Result<Vec<Developer>, RegistryError> {
        self.wrapper()
            .developer()
            .developers_by_department(department_id)
            .await
            .map_err(RegistryError::storage)
    }

    pub async fn get_developer(&self, developer_id: Uuid) -> Result<Developer, RegistryError> {
        self.wrapper()
            .developer()
            .developer_by_id(developer_id)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::not_found("developer", developer_id))
    }

    pub async fn get_developer_with_details(
        &self,
        developer_id: Uuid,
    ) -> Result<Developer, RegistryError> {
        self.wrapper()
            .developer()
            .developer_with_details(developer_id)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::not_found("developer", developer_id))
    }

    /// Create a developer with a freshly assigned id
    pub async fn create_developer(&self, new: NewDeveloper) -> Result<Developer, RegistryError> {
        validation::validate_new_developer(&new)?;

        let developer = Developer::from_new(new);
        let repo = self.wrapper();
        repo.developer().create(&developer);
        repo.save().await.map_err(RegistryError::storage)?;

        tracing::debug!(developer_id = %developer.id, "developer created");
        Ok(developer)
    }

    /// Overwrite an existing developer's scalar fields
    pub async fn update_developer(
        &self,
        update: DeveloperUpdate,
    ) -> Result<Developer, RegistryError> {
        validation::validate_developer_update(&update)?;

        let repo = self.wrapper();
        let mut developer = repo
            .developer()
            .developer_by_id(update.id)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::not_found("developer", update.id))?;

        developer.apply_update(&update);
        repo.developer().update(&developer);
        repo.save().await.map_err(RegistryError::storage)?;

        tracing::debug!(developer_id = %developer.id, "developer updated");
        Ok(developer)
    }

    pub async fn delete_developer(&self, developer_id: Uuid) -> Result<(), RegistryError> {
        let repo = self.wrapper();
        let developer = repo
            .developer()
            .developer_by_id(developer_id)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::not_found("developer", developer_id))?;

        repo.developer().delete(&developer);
        repo.save().await.map_err(RegistryError::storage)?;

        tracing::debug!(%developer_id, "developer deleted");
        Ok(())
    }

    // ===== Department Operations =====

    pub async fn list_departments(&self) -> Result<Vec<Department>, RegistryError> {
        self.wrapper()
            .department()
            .all_departments()
            .await
            .map_err(RegistryError::storage)
    }

    /// Create a department; the store assigns the id
    pub async fn create_department(
        &self,
        new: NewDepartment,
    ) -> Result<Department, RegistryError> {
        validation::validate_new_department(&new)?;

        let repo = self.wrapper();
        let assigned = repo
            .department()
            .create(&new.name, new.description.as_deref());
        repo.save().await.map_err(RegistryError::storage)?;

        let id = assigned.get().ok_or_else(|| {
            RegistryError::storage(anyhow::anyhow!("store assigned no id to department"))
        })?;
        tracing::debug!(department_id = id, "department created");

        Ok(Department {
            id,
            name: new.name,
            description: new.description,
            deleted: false,
        })
    }

    /// Insert each department unless the table already has rows
    pub async fn seed_departments(&self, seed: &[NewDepartment]) -> Result<usize, RegistryError> {
        if seed.is_empty() {
            return Ok(0);
        }
        for new in seed {
            validation::validate_new_department(new)?;
        }

        let repo = self.wrapper();
        let existing = repo
            .department()
            .all_departments()
            .await
            .map_err(RegistryError::storage)?;
        if !existing.is_empty() {
            return Ok(0);
        }

        for new in seed {
            repo.department()
                .create(&new.name, new.description.as_deref());
        }
        repo.save().await.map_err(RegistryError::storage)?;
        Ok(seed.len())
    }

    // ===== Account Operations =====

    pub async fn list_accounts(&self, developer_id: Uuid) -> Result<Vec<Account>, RegistryError> {
        self.wrapper()
            .account()
            .accounts_by_developer(developer_id)
            .await
            .map_err(RegistryError::storage)
    }

    /// Open an account for an existing developer
    pub async fn open_account(&self, new: NewAccount) -> Result<Account, RegistryError> {
        validation::validate_new_account(&new)?;

        let repo = self.wrapper();
        repo.developer()
            .developer_by_id(new.developer_id)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::not_found("developer", new.developer_id))?;

        let account = Account {
            id: Uuid::new_v4(),
            date_created: chrono::Utc::now(),
            account_type: new.account_type,
            developer_id: new.developer_id,
        };
        repo.account().create(&account);
        repo.save().await.map_err(RegistryError::storage)?;

        Ok(account)
    }
}
