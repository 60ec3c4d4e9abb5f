//! Router harness shared by the handler tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use catsapi_adapter_storage_memory::InMemoryCatRepository;
use catsapi_app::id_generator::SequentialIdGenerator;
use catsapi_app::services::cat_service::CatService;
use catsapi_domain::id::CatId;

use crate::router;
use crate::state::AppState;

pub type TestService = CatService<InMemoryCatRepository, SequentialIdGenerator>;

/// A fully built router plus a handle on the service behind it.
pub struct TestApp {
    pub router: Router,
    pub service: Arc<TestService>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let service = Arc::new(CatService::new(
            InMemoryCatRepository::new(),
            SequentialIdGenerator::new("cat-"),
        ));
        let state = AppState::from_arc(Arc::clone(&service), "0.0.0-test");
        Self {
            router: router::build(state),
            service,
        }
    }

    pub async fn call(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
        let body = body.map_or_else(Body::empty, |text| Body::from(text.to_string()));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }

    pub async fn stored_ids(&self) -> Vec<CatId> {
        self.service.list_cat_ids().await.unwrap()
    }
}

pub fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
