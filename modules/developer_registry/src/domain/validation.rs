//! Field constraint validation for creation and update inputs

use crate::contract::{DeveloperUpdate, NewAccount, NewDepartment, NewDeveloper, RegistryError};

pub const DEVELOPER_NAME_MAX_LEN: usize = 60;
pub const DEVELOPER_ADDRESS_MAX_LEN: usize = 100;
pub const DEPARTMENT_NAME_MAX_LEN: usize = 200;

/// Check that a field is present and no longer than `max_len` characters
fn validate_text(value: &str, label: &str, max_len: usize) -> Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(RegistryError::validation(format!("{label} is required")));
    }

    if value.chars().count() > max_len {
        return Err(RegistryError::validation(format!(
            "{label} can't be longer than {max_len} characters"
        )));
    }

    Ok(())
}

fn validate_developer_fields(name: &str, address: &str) -> Result<(), RegistryError> {
    validate_text(name, "Name", DEVELOPER_NAME_MAX_LEN)?;
    validate_text(address, "Address", DEVELOPER_ADDRESS_MAX_LEN)
}

pub fn validate_new_developer(new: &NewDeveloper) -> Result<(), RegistryError> {
    validate_developer_fields(&new.name, &new.address)
}

pub fn validate_developer_update(update: &DeveloperUpdate) -> Result<(), RegistryError> {
    validate_developer_fields(&update.name, &update.address)
}

pub fn validate_new_department(new: &NewDepartment) -> Result<(), RegistryError> {
    validate_text(&new.name, "Name", DEPARTMENT_NAME_MAX_LEN)
}

pub fn validate_new_account(new: &NewAccount) -> Result<(), RegistryError> {
    if new.account_type.trim().is_empty() {
        return Err(RegistryError::validation("Account type is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn new_developer(name: &str, address: &str) -> NewDeveloper {
        NewDeveloper {
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: address.to_string(),
            department_id: 1,
        }
    }

    #[test]
    fn test_name_length_boundary() {
        let at_limit = "a".repeat(DEVELOPER_NAME_MAX_LEN);
        assert!(validate_new_developer(&new_developer(&at_limit, "Somewhere")).is_ok());

        let over_limit = "a".repeat(DEVELOPER_NAME_MAX_LEN + 1);
        let err = validate_new_developer(&new_developer(&over_limit, "Somewhere")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::validation("Name can't be longer than 60 characters")
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 60 two-byte characters
        let name = "é".repeat(DEVELOPER_NAME_MAX_LEN);
        assert!(validate_new_developer(&new_developer(&name, "Somewhere")).is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert!(validate_new_developer(&new_developer("", "Somewhere")).is_err());
        assert!(validate_new_developer(&new_developer("Ada", "   ")).is_err());
    }

    #[test]
    fn test_address_length() {
        let address = "x".repeat(DEVELOPER_ADDRESS_MAX_LEN + 1);
        assert!(validate_new_developer(&new_developer("Ada", &address)).is_err());
    }

    #[test]
    fn test_department_name() {
        let ok = NewDepartment {
            name: "d".repeat(DEPARTMENT_NAME_MAX_LEN),
            description: None,
        };
        assert!(validate_new_department(&ok).is_ok());

        let too_long = NewDepartment {
            name: "d".repeat(DEPARTMENT_NAME_MAX_LEN + 1),
            description: None,
        };
        assert!(validate_new_department(&too_long).is_err());
    }

    #[test]
    fn test_account_type_required() {
        let new = NewAccount {
            developer_id: Uuid::new_v4(),
            account_type: String::new(),
        };
        assert!(validate_new_account(&new).is_err());
    }
}
