//! Inserts test rows with defaults.
//!
//! Each entity has a builder style factory (`PersonFactory::new(db).last_name("Arndt").build()`)
//! and a `create_*` shortcut for the all-defaults case. Work orders attach to an
//! existing person through `create_workorder_for_person`; `helpers` builds whole
//! graphs such as a person with their work orders.

pub mod address;
pub mod helpers;
pub mod image;
pub mod person;
pub mod workorder;

pub use address::create_address;
pub use image::create_image;
pub use person::create_person;
pub use workorder::{create_workorder, create_workorder_for_person};
