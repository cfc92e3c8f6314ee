#![allow(dead_code)]

use std::sync::Arc;

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use axum_test::TestServer;
use safecheck_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const PROVIDER_KEY: &str = "sk-test";

pub const CRUNCHY_BAR_REPLY: &str = r#"Here is my analysis:
```json
{
  "productName": "Crunchy Bar",
  "safetyRating": "2",
  "overallSafety": "Caution",
  "harmfulIngredients": [{"ingredient": "BHA", "description": "preservative"}],
  "allergyWarnings": ["Contains peanuts"],
  "ageSpecificWarnings": {"children": "High sugar"}
}
```"#;

pub async fn test_server(configure: impl FnOnce(&mut Args)) -> TestServer {
    let mut args = Args::default();
    args.server.metrics_enabled = false;
    configure(&mut args);

    let state = state(Arc::new(args)).await.expect("state");
    TestServer::new(router(state).expect("router")).expect("test server")
}

/// Chat completion endpoint answering `reply` to requests authorized with
/// [`PROVIDER_KEY`]. Returns its base URL.
pub async fn spawn_provider(reply: &'static str) -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(_body): Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                == Some(&format!("Bearer {}", PROVIDER_KEY));

            if !authorized {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": { "message": "Incorrect API key provided" } })),
                );
            }

            (
                StatusCode::OK,
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": reply } }] })),
            )
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind provider");
    let addr = listener.local_addr().expect("provider address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("provider server");
    });

    format!("http://{}/v1", addr)
}

pub fn profile_body(name: &str, age: &str, allergies: &[&str]) -> Value {
    json!({ "name": name, "age": age, "allergies": allergies })
}
