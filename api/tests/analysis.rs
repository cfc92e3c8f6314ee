mod common;

use std::num::NonZeroUsize;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{CRUNCHY_BAR_REPLY, PROVIDER_KEY, spawn_provider, test_server};
use serde_json::{Value, json};

fn image_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
            .file_name("label.jpg")
            .mime_type("image/jpeg"),
    )
}

#[tokio::test]
async fn upload_without_image_is_rejected() {
    let server = test_server(|_| {}).await;

    let response = server
        .post("/analysis/image")
        .authorization_bearer(PROVIDER_KEY)
        .multipart(MultipartForm::new().add_text("note", "no image"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Please upload or capture an image first."
    );
}

#[tokio::test]
async fn missing_credential_is_rejected() {
    let server = test_server(|_| {}).await;

    let response = server
        .post("/analysis/url")
        .json(&json!({ "image_url": "https://cdn.example.com/label.jpg" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Please configure your OpenAI API key."
    );
}

#[tokio::test]
async fn unsupported_image_urls_are_rejected() {
    let server = test_server(|_| {}).await;

    server
        .post("/analysis/url")
        .authorization_bearer(PROVIDER_KEY)
        .json(&json!({ "image_url": "ftp://cdn.example.com/label.jpg" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_is_analyzed_and_recorded() {
    let base_url = spawn_provider(CRUNCHY_BAR_REPLY).await;
    let server = test_server(|args| args.openai.base_url = base_url).await;

    let response = server
        .post("/analysis/image")
        .authorization_bearer(PROVIDER_KEY)
        .multipart(image_form())
        .await;

    response.assert_status_ok();
    let entry = response.json::<Value>()["data"].clone();
    assert!(
        entry["image_reference"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
    let report = &entry["report"];
    assert_eq!(report["productName"], "Crunchy Bar");
    assert_eq!(report["safetyRating"], 2);
    assert_eq!(report["harmfulIngredients"], json!(["BHA: preservative"]));
    assert_eq!(report["ageSpecificWarnings"]["children"], "High sugar");
    assert_eq!(report["ageSpecificWarnings"]["elderly"], "");
    assert_eq!(report["familyWarnings"], json!([]));

    let id = entry["id"].as_str().unwrap();
    let history = server.get("/analysis/history").await.json::<Value>();
    assert_eq!(history["data"][0]["id"], id);

    server
        .get(&format!("/analysis/history/{}", id))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn configured_key_is_used_without_a_bearer_token() {
    let base_url = spawn_provider(CRUNCHY_BAR_REPLY).await;
    let server = test_server(|args| {
        args.openai.base_url = base_url;
        args.openai.api_key = Some(PROVIDER_KEY.to_string());
    })
    .await;

    server
        .post("/analysis/url")
        .json(&json!({ "image_url": "https://cdn.example.com/label.jpg" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn provider_errors_are_bad_gateway() {
    let base_url = spawn_provider(CRUNCHY_BAR_REPLY).await;
    let server = test_server(|args| args.openai.base_url = base_url).await;

    let response = server
        .post("/analysis/url")
        .authorization_bearer("sk-wrong")
        .json(&json!({ "image_url": "https://cdn.example.com/label.jpg" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>()["message"],
        "Incorrect API key provided"
    );
    let history = server.get("/analysis/history").await.json::<Value>();
    assert_eq!(history["data"], json!([]));
}

#[tokio::test]
async fn unparseable_replies_are_bad_gateway() {
    let base_url = spawn_provider("I cannot help with that.").await;
    let server = test_server(|args| args.openai.base_url = base_url).await;

    let response = server
        .post("/analysis/image")
        .authorization_bearer(PROVIDER_KEY)
        .multipart(image_form())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>()["message"],
        "Analysis failed: could not parse result"
    );
}

#[tokio::test]
async fn history_is_capped_and_paged() {
    let base_url = spawn_provider(CRUNCHY_BAR_REPLY).await;
    let server = test_server(|args| {
        args.openai.base_url = base_url;
        args.storage.history_limit = NonZeroUsize::new(2);
    })
    .await;

    for _ in 0..3 {
        server
            .post("/analysis/image")
            .authorization_bearer(PROVIDER_KEY)
            .multipart(image_form())
            .await
            .assert_status_ok();
    }

    let history = server.get("/analysis/history").await.json::<Value>();
    assert_eq!(history["data"].as_array().unwrap().len(), 2);

    let page = server
        .get("/analysis/history")
        .add_query_params(json!({ "offset": 1, "limit": 5 }))
        .await
        .json::<Value>();
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn favorites_toggle() {
    let base_url = spawn_provider(CRUNCHY_BAR_REPLY).await;
    let server = test_server(|args| args.openai.base_url = base_url).await;

    let entry = server
        .post("/analysis/image")
        .authorization_bearer(PROVIDER_KEY)
        .multipart(image_form())
        .await
        .json::<Value>();
    let id = entry["data"]["id"].as_str().unwrap().to_string();
    let path = format!("/analysis/history/{}/favorite", id);

    let on = server.post(&path).await.json::<Value>();
    assert_eq!(on["data"], json!({ "entry_id": id, "favorite": true }));

    let favorites = server.get("/analysis/favorites").await.json::<Value>();
    assert_eq!(favorites["data"][0]["id"], id);
    assert_eq!(favorites["data"][0]["product_name"], "Crunchy Bar");

    let off = server.post(&path).await.json::<Value>();
    assert_eq!(off["data"]["favorite"], false);
    let favorites = server.get("/analysis/favorites").await.json::<Value>();
    assert_eq!(favorites["data"], json!([]));
}

#[tokio::test]
async fn unknown_history_entry_is_not_found() {
    let server = test_server(|_| {}).await;

    server
        .get("/analysis/history/01890a5d-ac96-774b-bcce-b302099a8057")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post("/analysis/history/01890a5d-ac96-774b-bcce-b302099a8057/favorite")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_requests_are_rate_limited() {
    let server = test_server(|args| args.server.rate_limit_per_minute = 2).await;
    let body = json!({ "image_url": "https://cdn.example.com/label.jpg" });

    for _ in 0..2 {
        server
            .post("/analysis/url")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let limited = server.post("/analysis/url").json(&body).await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let error = limited.json::<Value>();
    assert_eq!(error["code"], "E_TOO_MANY_REQUESTS");
    assert_eq!(error["status"], 429);

    server
        .post("/analysis/image")
        .multipart(image_form())
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
    server.get("/analysis/history").await.assert_status_ok();
}

#[tokio::test]
async fn zero_rate_limit_disables_throttling() {
    let server = test_server(|args| args.server.rate_limit_per_minute = 0).await;
    let body = json!({ "image_url": "https://cdn.example.com/label.jpg" });

    for _ in 0..12 {
        server
            .post("/analysis/url")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
