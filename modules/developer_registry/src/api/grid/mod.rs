//! Server-driven grid adapter
//!
//! Pages and sorts developer rows on the server and reports the outcome of
//! form posts through a status message carried across a redirect.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod paging;
pub mod routes;
