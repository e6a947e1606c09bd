//! Grid request and response shapes

use serde::{Deserialize, Serialize};

/// Paging and sorting parameters sent by the grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceRequest {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<u64>,
    /// Rows per page; the configured default applies when absent or zero
    #[serde(default)]
    pub page_size: Option<u64>,
    /// Sort descriptor `field-dir`, e.g. `name-asc`
    #[serde(default)]
    pub sort: Option<String>,
}

/// One page of rows plus the size of the full set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceResult<T> {
    pub data: Vec<T>,
    pub total: u64,
}

/// State of the grid page after a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// Posted form, echoed back when the page is re-rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev: Option<DeveloperForm>,
}

impl PageState {
    pub fn with_status(status_message: impl Into<String>) -> Self {
        Self {
            status_message: Some(status_message.into()),
            dev: None,
        }
    }
}

/// Developer creation form
///
/// Every field is taken as raw text so that malformed input re-renders the
/// page with a warning instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeveloperForm {
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub department_id: String,
}

/// Query of the grid page
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub status: Option<String>,
}
