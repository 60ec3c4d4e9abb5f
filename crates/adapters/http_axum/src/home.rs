//! Home page — software version and a link to the API docs.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use catsapi_app::ports::{CatRepository, IdGenerator};

use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    version: Arc<str>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`
pub async fn index<R, G>(State(state): State<AppState<R, G>>) -> HomeTemplate
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    HomeTemplate {
        version: Arc::clone(&state.version),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::testing::TestApp;

    #[tokio::test]
    async fn should_render_version_and_docs_link() {
        let app = TestApp::spawn();

        let (status, body) = app.call(Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<title>Cats API</title>"));
        assert!(html.contains("Software version: 0.0.0-test"));
        assert!(html.contains("Swagger OpenAPI UI"));
    }
}
