//! Serializable request and response shapes of the HTTP API.

pub mod address;
pub mod api;
pub mod image;
pub mod person;
pub mod workorder;
