//! API layer - native client and HTTP adapters

pub mod grid;
pub mod native;
pub mod rest;
