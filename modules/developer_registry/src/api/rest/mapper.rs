//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract::{self, RegistryError};

// ===== Developer conversions =====

impl From<contract::Developer> for DeveloperDto {
    fn from(developer: contract::Developer) -> Self {
        Self {
            id: developer.id,
            name: developer.name,
            date_of_birth: developer.date_of_birth,
            address: developer.address,
            accounts: developer
                .accounts
                .map(|accounts| accounts.into_iter().map(Into::into).collect()),
            department_id: Some(developer.department_id),
            department: developer.department.map(Into::into),
        }
    }
}

/// Update path: `accounts` and `department` are ignored, except that the
/// nested department's id, when present, decides `department_id`. A body
/// naming no department at all is rejected.
impl TryFrom<DeveloperDto> for contract::DeveloperUpdate {
    type Error = RegistryError;

    fn try_from(dto: DeveloperDto) -> Result<Self, Self::Error> {
        let department_id = dto
            .department
            .as_ref()
            .map(|department| department.id)
            .or(dto.department_id)
            .ok_or_else(|| RegistryError::validation("Department is required"))?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            department_id,
        })
    }
}

impl From<DeveloperForCreationDto> for contract::NewDeveloper {
    fn from(dto: DeveloperForCreationDto) -> Self {
        Self {
            name: dto.name,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            department_id: dto.department_id,
        }
    }
}

// ===== Department conversions =====

impl From<contract::Department> for DepartmentDto {
    fn from(department: contract::Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            description: department.description,
        }
    }
}

impl From<CreateDepartmentRequest> for contract::NewDepartment {
    fn from(req: CreateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

// ===== Account conversions =====

impl From<contract::Account> for AccountDto {
    fn from(account: contract::Account) -> Self {
        Self {
            id: account.id,
            date_created: account.date_created,
            account_type: account.account_type,
            developer_id: account.developer_id,
        }
    }
}
