//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! mapping and conversion tests that only need an entity model value.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let person = fixture::person::entity();
//! let workorder = fixture::workorder::entity_builder()
//!     .person_id(Some(person.id))
//!     .build();
//! ```

pub mod person;
pub mod workorder;

pub use person::entity as person_entity;
pub use workorder::{entity as workorder_entity, entity_builder as workorder_entity_builder};
