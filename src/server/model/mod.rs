//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the fields
//! of create and update operations from the controller into the service layer.

pub mod address;
pub mod image;
pub mod person;
pub mod workorder;
