//! Workmanager API server.
//!
//! Requests pass through the layers in this order and back:
//!
//! `router` -> `controller` -> `service` -> `data` -> SeaORM / image directory
//!
//! - `controller` turns requests into params and domain models into DTOs
//! - `service` assigns ids, checks conflicts and references, keeps image files and records in step
//! - `data` wraps SeaORM queries and the image directory, returning domain models
//! - `model` holds the domain models and their params
//! - `error` maps every failure to a status code and `ErrorDto`
//!
//! `config`, `startup` and `state` set the server up; `util` has the ISO-8601
//! timestamp handling shared with the DTOs.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
