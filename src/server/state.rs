//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool,
//! the directory uploaded image files live in, and the public application URL.

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};

use crate::server::router::API_PREFIX;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the image directory sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory uploaded image files are stored in.
    pub image_dir: Arc<PathBuf>,

    /// Application base URL without trailing slash, e.g. `http://localhost:5010`.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `image_dir` - Directory for uploaded image files
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, image_dir: PathBuf, app_url: String) -> Self {
        Self {
            db,
            image_dir: Arc::new(image_dir),
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URI image files are served from, `{app_url}/workmanagerapi/v1/imageFiles`.
    pub fn image_base_uri(&self) -> String {
        format!("{}{}/imageFiles", self.app_url, API_PREFIX)
    }
}
