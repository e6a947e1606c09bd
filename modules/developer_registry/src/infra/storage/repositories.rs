//! SeaORM repository implementations

use super::entity::{account, department, developer};
use super::mapper;
use super::repository_base::RepositoryBase;
use super::unit_of_work::UnitOfWork;
use crate::contract::{Account, Department, Developer};
use crate::domain::repository::{
    AccountRepository, AssignedId, DepartmentRepository, DeveloperRepository,
    RepositoryWrapper, RepositoryWrapperFactory,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, LoaderTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

// ===== Developer Repository =====

pub struct SeaOrmDeveloperRepository {
    uow: UnitOfWork,
}

impl SeaOrmDeveloperRepository {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Load accounts for all rows in one batched query and attach relations
    async fn with_details(
        &self,
        rows: Vec<(developer::Model, Option<department::Model>)>,
    ) -> Result<Vec<Developer>> {
        let developers: Vec<developer::Model> = rows.iter().map(|(d, _)| d.clone()).collect();
        let accounts = developers.load_many(account::Entity, self.conn()).await?;

        Ok(rows
            .into_iter()
            .zip(accounts)
            .map(|((developer, department), accounts)| {
                mapper::developer_with_details(developer, department, accounts)
            })
            .collect())
    }
}

impl RepositoryBase<developer::Entity> for SeaOrmDeveloperRepository {
    fn unit_of_work(&self) -> &UnitOfWork {
        &self.uow
    }
}

#[async_trait]
impl DeveloperRepository for SeaOrmDeveloperRepository {
    async fn all_developers(&self) -> Result<Vec<Developer>> {
        let results = self
            .find_all()
            .order_by_asc(developer::Column::Name)
            .all(self.conn())
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn all_developers_with_details(&self) -> Result<Vec<Developer>> {
        let rows = self
            .find_all()
            .find_also_related(department::Entity)
            .order_by_asc(developer::Column::Name)
            .all(self.conn())
            .await?;

        self.with_details(rows).await
    }

    async fn developers_by_department(&self, department_id: i32) -> Result<Vec<Developer>> {
        let rows = self
            .find_by_condition(developer::Column::DepartmentId.eq(department_id))
            .find_also_related(department::Entity)
            .order_by_asc(developer::Column::Name)
            .all(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(developer, department)| {
                mapper::developer_with_department(developer, department)
            })
            .collect())
    }

    async fn developer_by_id(&self, developer_id: Uuid) -> Result<Option<Developer>> {
        let result = self
            .find_by_condition(developer::Column::Id.eq(developer_id))
            .one(self.conn())
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn developer_with_details(&self, developer_id: Uuid) -> Result<Option<Developer>> {
        let row = self
            .find_by_condition(developer::Column::Id.eq(developer_id))
            .find_also_related(department::Entity)
            .one(self.conn())
            .await?;

        match row {
            Some(row) => Ok(self.with_details(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    fn create(&self, developer: &Developer) {
        RepositoryBase::<developer::Entity>::create(self, developer.into());
    }

    fn update(&self, developer: &Developer) {
        RepositoryBase::<developer::Entity>::update(self, developer.into());
    }

    fn delete(&self, developer: &Developer) {
        RepositoryBase::<developer::Entity>::delete(self, developer.into());
    }
}

// ===== Account Repository =====

pub struct SeaOrmAccountRepository {
    uow: UnitOfWork,
}

impl SeaOrmAccountRepository {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }
}

impl RepositoryBase<account::Entity> for SeaOrmAccountRepository {
    fn unit_of_work(&self) -> &UnitOfWork {
        &self.uow
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn accounts_by_developer(&self, developer_id: Uuid) -> Result<Vec<Account>> {
        let results = self
            .find_by_condition(account::Column::DeveloperId.eq(developer_id))
            .order_by_asc(account::Column::DateCreated)
            .all(self.conn())
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn account_by_id(&self, account_id: Uuid) -> Result<Option<Account>> {
        let result = self
            .find_by_condition(account::Column::Id.eq(account_id))
            .one(self.conn())
            .await?;

        Ok(result.map(|e| e.into()))
    }

    fn create(&self, account: &Account) {
        RepositoryBase::<account::Entity>::create(self, account.into());
    }
}

// ===== Department Repository =====

pub struct SeaOrmDepartmentRepository {
    uow: UnitOfWork,
}

impl SeaOrmDepartmentRepository {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }
}

impl RepositoryBase<department::Entity> for SeaOrmDepartmentRepository {
    fn unit_of_work(&self) -> &UnitOfWork {
        &self.uow
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn all_departments(&self) -> Result<Vec<Department>> {
        let results = self
            .find_all()
            .order_by_asc(department::Column::Name)
            .all(self.conn())
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn department_by_id(&self, department_id: i32) -> Result<Option<Department>> {
        let result = self
            .find_by_condition(department::Column::Id.eq(department_id))
            .one(self.conn())
            .await?;

        Ok(result.map(|e| e.into()))
    }

    fn create(&self, name: &str, description: Option<&str>) -> AssignedId {
        let assigned = AssignedId::default();
        let slot = assigned.clone();
        self.create_with_key(mapper::new_department(name, description), move |id| {
            slot.set(id)
        });
        assigned
    }
}

// ===== Repository Wrapper =====

/// One unit of work and the three repositories sharing it
pub struct SeaOrmRepositoryWrapper {
    uow: UnitOfWork,
    developer: SeaOrmDeveloperRepository,
    account: SeaOrmAccountRepository,
    department: SeaOrmDepartmentRepository,
}

impl SeaOrmRepositoryWrapper {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let uow = UnitOfWork::new(db);
        Self {
            developer: SeaOrmDeveloperRepository::new(uow.clone()),
            account: SeaOrmAccountRepository::new(uow.clone()),
            department: SeaOrmDepartmentRepository::new(uow.clone()),
            uow,
        }
    }

    /// Number of writes waiting for `save`
    pub fn pending_len(&self) -> usize {
        self.uow.pending_len()
    }
}

#[async_trait]
impl RepositoryWrapper for SeaOrmRepositoryWrapper {
    fn developer(&self) -> &dyn DeveloperRepository {
        &self.developer
    }

    fn account(&self) -> &dyn AccountRepository {
        &self.account
    }

    fn department(&self) -> &dyn DepartmentRepository {
        &self.department
    }

    async fn save(&self) -> Result<()> {
        let applied = self.uow.commit().await?;
        tracing::debug!(applied, "unit of work committed");
        Ok(())
    }
}

/// Builds a fresh [`SeaOrmRepositoryWrapper`] per call
pub struct SeaOrmRepositoryWrapperFactory {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRepositoryWrapperFactory {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl RepositoryWrapperFactory for SeaOrmRepositoryWrapperFactory {
    fn create(&self) -> Box<dyn RepositoryWrapper> {
        Box::new(SeaOrmRepositoryWrapper::new(self.db.clone()))
    }
}
