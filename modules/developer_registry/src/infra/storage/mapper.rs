//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Contract to
//! ActiveModel conversions set every column, so a staged update replaces the
//! whole row.

use super::entity::{account, department, developer};
use crate::contract::{Account, Department, Developer};

// ===== Department Conversions =====

impl From<department::Model> for Department {
    fn from(entity: department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            deleted: entity.deleted,
        }
    }
}

/// Insert model for a new department; the id is left to the store
pub fn new_department(name: &str, description: Option<&str>) -> department::ActiveModel {
    use sea_orm::ActiveValue::*;

    department::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        deleted: Set(false),
    }
}

// ===== Developer Conversions =====

impl From<developer::Model> for Developer {
    fn from(entity: developer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date_of_birth: entity.date_of_birth,
            address: entity.address,
            department_id: entity.department_id,
            department: None,
            accounts: None,
        }
    }
}

impl From<&Developer> for developer::ActiveModel {
    fn from(model: &Developer) -> Self {
        use sea_orm::ActiveValue::*;

        // `department` and `accounts` are separate rows and never written here
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            date_of_birth: Set(model.date_of_birth),
            address: Set(model.address.clone()),
            department_id: Set(model.department_id),
        }
    }
}

/// Attach eagerly loaded relations to a developer row
pub fn developer_with_details(
    entity: developer::Model,
    department: Option<department::Model>,
    accounts: Vec<account::Model>,
) -> Developer {
    Developer {
        department: department.map(Into::into),
        accounts: Some(accounts.into_iter().map(Into::into).collect()),
        ..entity.into()
    }
}

/// Attach an eagerly loaded department to a developer row
pub fn developer_with_department(
    entity: developer::Model,
    department: Option<department::Model>,
) -> Developer {
    Developer {
        department: department.map(Into::into),
        ..entity.into()
    }
}

// ===== Account Conversions =====

impl From<account::Model> for Account {
    fn from(entity: account::Model) -> Self {
        Self {
            id: entity.id,
            date_created: entity.date_created,
            account_type: entity.account_type,
            developer_id: entity.developer_id,
        }
    }
}

impl From<&Account> for account::ActiveModel {
    fn from(model: &Account) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            date_created: Set(model.date_created),
            account_type: Set(model.account_type.clone()),
            developer_id: Set(model.developer_id),
        }
    }
}
