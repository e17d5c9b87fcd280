//! HTTP routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use forgefolio::Aggregator;

/// Query parameters for the lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Username to look up. A missing parameter behaves like an empty
    /// username: every platform independently reports no such user.
    #[serde(default)]
    pub q: String,
}

/// Build the application router.
///
/// `GET /` is the only route; anything else falls through to axum's default
/// 404. Panics become 500 responses instead of dropped connections.
pub fn router(aggregator: Arc<Aggregator>) -> Router {
    Router::new()
        .route("/", get(lookup))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator)
}

/// Handle `GET /?q={username}`.
async fn lookup(
    State(aggregator): State<Arc<Aggregator>>,
    Query(params): Query<LookupParams>,
) -> Json<forgefolio::AggregateResult> {
    let result = aggregator.aggregate(&params.q).await;
    Json(result)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use forgefolio::bitbucket::BitbucketClient;
    use forgefolio::github::GitHubClient;
    use forgefolio::gitlab::GitLabClient;
    use forgefolio::http::{HttpError, HttpResponse, HttpTransport};

    use super::*;

    /// Stub transport serving a fixed response per URL.
    #[derive(Default)]
    struct StubTransport {
        routes: Mutex<HashMap<String, (u16, String)>>,
    }

    impl StubTransport {
        fn route(&self, url: &str, status: u16, body: &Value) {
            self.routes
                .lock()
                .unwrap()
                .insert(url.to_string(), (status, body.to_string()));
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
            match self.routes.lock().unwrap().get(url) {
                Some((status, body)) => Ok(HttpResponse {
                    status: *status,
                    body: body.clone().into_bytes(),
                }),
                None => Err(HttpError::Transport(format!("no stub route for {url}"))),
            }
        }
    }

    fn test_router(transport: StubTransport) -> Router {
        let transport: Arc<dyn HttpTransport> = Arc::new(transport);
        let aggregator = Aggregator::with_clients(
            GitHubClient::with_host("https://gh.test", Arc::clone(&transport)),
            GitLabClient::with_host("https://gl.test", Arc::clone(&transport)),
            BitbucketClient::with_host("https://bb.test", transport),
        );
        router(Arc::new(aggregator))
    }

    fn stub_not_found(transport: &StubTransport, username: &str) {
        transport.route(
            &format!("https://gh.test/users/{username}"),
            404,
            &json!({"message": "Not Found"}),
        );
        transport.route(
            &format!("https://gl.test/api/v4/users?username={username}"),
            200,
            &json!([]),
        );
        transport.route(
            &format!("https://bb.test/2.0/workspaces/{username}"),
            404,
            &json!({"type": "error"}),
        );
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_user_returns_200_with_three_empty_arrays() {
        let transport = StubTransport::default();
        stub_not_found(&transport, "ghost");

        let response = test_router(transport)
            .oneshot(Request::get("/?q=ghost").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([[], [], []]));
    }

    #[tokio::test]
    async fn missing_query_parameter_behaves_like_empty_username() {
        let transport = StubTransport::default();
        stub_not_found(&transport, "");

        let response = test_router(transport)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([[], [], []]));
    }

    #[tokio::test]
    async fn found_user_returns_profile_and_repos_pair() {
        let transport = StubTransport::default();
        stub_not_found(&transport, "ada");
        transport.route(
            "https://gh.test/users/ada",
            200,
            &json!({
                "name": "Ada Lovelace",
                "avatar_url": "https://gh.test/a.png",
                "bio": null,
                "html_url": "https://gh.test/ada",
                "repos_url": "https://gh.test/users/ada/repos"
            }),
        );
        transport.route("https://gh.test/users/ada/repos", 200, &json!([]));

        let response = test_router(transport)
            .oneshot(Request::get("/?q=ada").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value[0][0]["username"], "Ada Lovelace");
        assert_eq!(value[0][0]["bio"], "");
        assert_eq!(value[0][1], json!([]));
        assert_eq!(value[1], json!([]));
        assert_eq!(value[2], json!([]));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let transport = StubTransport::default();
        let response = test_router(transport)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
