//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{
    AccountRepository, AssignedId, DepartmentRepository, DeveloperRepository, RepositoryWrapper,
    RepositoryWrapperFactory,
};
pub use service::Service;
