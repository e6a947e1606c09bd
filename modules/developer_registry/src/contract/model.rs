//! Contract models for the developer registry
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Organizational unit that developers belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Store-assigned identifier
    pub id: i32,
    /// Display name (required, at most 200 characters)
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Soft delete flag
    pub deleted: bool,
}

/// Developer record
///
/// `department` and `accounts` are only populated by reads that eagerly load
/// them; `None` means "not loaded", not "empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    /// Identifier assigned at creation, never changed afterwards
    pub id: Uuid,
    /// Full name (required, at most 60 characters)
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Postal address (required, at most 100 characters)
    pub address: String,
    /// Owning department
    pub department_id: i32,
    /// Owning department, when eagerly loaded
    pub department: Option<Department>,
    /// Owned accounts, when eagerly loaded
    pub accounts: Option<Vec<Account>>,
}

/// Account owned by a developer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    /// Creation timestamp
    pub date_created: DateTime<Utc>,
    /// Account type (required)
    pub account_type: String,
    /// Owning developer
    pub developer_id: Uuid,
}

/// Input for creating a developer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeveloper {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub department_id: i32,
}

/// Input for updating an existing developer
///
/// Carries scalars only. Relationship collections are never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperUpdate {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub department_id: i32,
}

/// Input for creating a department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

/// Input for opening an account for a developer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub developer_id: Uuid,
    pub account_type: String,
}

impl Developer {
    /// Build a fresh developer from creation input with a new identifier
    pub fn from_new(new: NewDeveloper) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            date_of_birth: new.date_of_birth,
            address: new.address,
            department_id: new.department_id,
            department: None,
            accounts: None,
        }
    }

    /// Copy the update's scalar fields onto this developer.
    ///
    /// The identifier and any loaded `department`/`accounts` are left as they are.
    pub fn apply_update(&mut self, update: &DeveloperUpdate) {
        self.name.clone_from(&update.name);
        self.date_of_birth = update.date_of_birth;
        self.address.clone_from(&update.address);
        self.department_id = update.department_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_developer() -> Developer {
        let id = Uuid::new_v4();
        Developer {
            id,
            name: "Ada".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 2).unwrap(),
            address: "1 Main St".to_string(),
            department_id: 1,
            department: Some(Department {
                id: 1,
                name: "Platform".to_string(),
                description: None,
                deleted: false,
            }),
            accounts: Some(vec![Account {
                id: Uuid::new_v4(),
                date_created: Utc::now(),
                account_type: "github".to_string(),
                developer_id: id,
            }]),
        }
    }

    #[test]
    fn apply_update_keeps_identity_and_relations() {
        let mut developer = loaded_developer();
        let before = developer.clone();

        developer.apply_update(&DeveloperUpdate {
            id: Uuid::new_v4(),
            name: "Grace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 7).unwrap(),
            address: "2 Side St".to_string(),
            department_id: 7,
        });

        assert_eq!(developer.id, before.id);
        assert_eq!(developer.name, "Grace");
        assert_eq!(developer.address, "2 Side St");
        assert_eq!(developer.department_id, 7);
        assert_eq!(developer.department, before.department);
        assert_eq!(developer.accounts, before.accounts);
    }
}
