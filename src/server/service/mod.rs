//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Id assignment, conflict detection and reference checks
//! - **Orchestration**: Coordinating repository calls, e.g. image records and image files
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod address;
pub mod image;
pub mod person;
pub mod workorder;
