//! Developer Registry Module
//!
//! Record management for developers, the departments they belong to and the
//! accounts they own, served over a JSON API and a server-driven grid.

// Public exports
pub mod contract;
pub use contract::{
    client::DeveloperRegistryApi, error::RegistryError, Account, Department, Developer,
    DeveloperUpdate, NewAccount, NewDepartment, NewDeveloper,
};

pub mod module;
pub use module::DeveloperRegistryModule;

pub mod config;
pub use config::{Config, SeedDepartment};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
