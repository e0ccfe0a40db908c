pub use super::address::Entity as Address;
pub use super::image::Entity as Image;
pub use super::person::Entity as Person;
pub use super::workorder::Entity as Workorder;
