//! Configuration for the developer registry module

use serde::{Deserialize, Serialize};

/// Developer registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rows per page for the server-driven grid when the request has none
    #[serde(default = "default_grid_page_size")]
    pub grid_page_size: u64,

    /// Departments inserted at startup when the table is empty
    #[serde(default)]
    pub seed_departments: Vec<SeedDepartment>,
}

/// Department row to seed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDepartment {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_page_size: default_grid_page_size(),
            seed_departments: Vec::new(),
        }
    }
}

fn default_grid_page_size() -> u64 {
    5
}
