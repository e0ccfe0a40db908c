//! Request level tests driving the full router against an in-memory database and a
//! temporary image directory.


use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    model::api::ErrorDto,
    server::{config::Config, router, startup, state::AppState},
};

/// Matches `test_utils::factory::image::DEFAULT_BASE_URI`.
const APP_URL: &str = "http://localhost:5010";
const BOUNDARY: &str = "workmanager-test-boundary";

/// Router wired to an isolated database and image directory.
struct TestApp {
    test: TestContext,
    image_dir: TempDir,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_workmanager_tables()
            .build()
            .await
            .unwrap();

        Self::with_context(test)
    }

    /// Uses the schema created by the migrations instead of the entity definitions.
    async fn migrated() -> Self {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            app_url: APP_URL.to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            image_dir: Default::default(),
            cors_origins: Vec::new(),
        };
        let db = startup::connect_to_database(&config).await.unwrap();

        Self::with_context(TestContext { db: Some(db) })
    }

    fn with_context(test: TestContext) -> Self {
        let db = test.db.clone().unwrap();
        let image_dir = tempfile::tempdir().unwrap();

        let state = AppState::new(db, image_dir.path().to_path_buf(), APP_URL.to_string());

        Self {
            router: router::router(state),
            test,
            image_dir,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(empty_request(Method::GET, uri)).await
    }

    async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    fn image_file_exists(&self, file_name: &str) -> bool {
        self.image_dir.path().join(file_name).exists()
    }
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Builds a single part multipart request named `file`.
fn multipart_request(
    method: Method,
    uri: &str,
    file_name: Option<&str>,
    content_type: &str,
    bytes: &[u8],
) -> Request<Body> {
    let disposition = match file_name {
        Some(file_name) => format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        ),
        None => "Content-Disposition: form-data; name=\"file\"\r\n".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn read_error(response: Response<Body>) -> String {
    read_json::<ErrorDto>(response).await.error
}

fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}
