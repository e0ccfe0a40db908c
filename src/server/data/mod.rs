//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! `ImageFileRepository` is the one exception, it manages image files on disk.

pub mod address;
pub mod image;
pub mod image_file;
pub mod person;
pub mod workorder;

#[cfg(test)]
mod test;
