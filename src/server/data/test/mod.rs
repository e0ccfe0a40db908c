mod address;
mod image;
mod person;
mod workorder;
