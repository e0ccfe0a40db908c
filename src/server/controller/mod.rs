//! HTTP request handlers.
//!
//! Handlers extract the request, call the matching service and map its result to
//! a status code and DTO. Every handler carries a `#[utoipa::path]` annotation that
//! feeds the OpenAPI document served next to Swagger UI.

pub mod address;
pub mod error;
pub mod image;
pub mod person;
pub mod workorder;

#[cfg(test)]
mod test;
