mod common;

use axum::http::StatusCode;
use common::{profile_body, test_server};
use serde_json::{Value, json};

async fn create_profile(server: &axum_test::TestServer, name: &str, age: &str, allergies: &[&str]) -> String {
    let response = server
        .post("/profiles")
        .json(&profile_body(name, age, allergies))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_family(server: &axum_test::TestServer, name: &str) -> String {
    let response = server.post("/families").json(&json!({ "name": name })).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn members_toggle_in_and_out() {
    let server = test_server(|_| {}).await;
    let al = create_profile(&server, "Al", "8", &["peanuts"]).await;
    let family = create_family(&server, "Home").await;
    let path = format!("/families/{}/members/{}", family, al);

    let added = server.post(&path).await.json::<Value>();
    assert_eq!(added["data"]["member_ids"], json!([al]));

    let removed = server.post(&path).await.json::<Value>();
    assert_eq!(removed["data"]["member_ids"], json!([]));
}

#[tokio::test]
async fn deleting_a_profile_removes_its_memberships() {
    let server = test_server(|_| {}).await;
    let al = create_profile(&server, "Al", "8", &[]).await;
    let family = create_family(&server, "Home").await;
    server
        .post(&format!("/families/{}/members/{}", family, al))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/profiles/{}", al))
        .await
        .assert_status_ok();

    let family = server
        .get(&format!("/families/{}", family))
        .await
        .json::<Value>();
    assert_eq!(family["data"]["member_ids"], json!([]));
}

#[tokio::test]
async fn rename_and_delete_family() {
    let server = test_server(|_| {}).await;
    let family = create_family(&server, "Home").await;

    let renamed = server
        .put(&format!("/families/{}", family))
        .json(&json!({ "name": "Cabin" }))
        .await
        .json::<Value>();
    assert_eq!(renamed["data"]["name"], "Cabin");

    server
        .put(&format!("/families/{}", family))
        .json(&json!({ "name": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .delete(&format!("/families/{}", family))
        .await
        .assert_status_ok();
    let families = server.get("/families").await.json::<Value>();
    assert_eq!(families["data"], json!([]));
}

#[tokio::test]
async fn selection_drives_the_context_preview() {
    let server = test_server(|_| {}).await;
    let al = create_profile(&server, "Al", "8", &["Peanuts"]).await;
    let bo = create_profile(&server, "Bo", "70", &["milk", "peanuts"]).await;
    let family = create_family(&server, "Home").await;
    for member in [&al, &bo] {
        server
            .post(&format!("/families/{}/members/{}", family, member))
            .await
            .assert_status_ok();
    }

    let empty = server.get("/selection/context").await.json::<Value>();
    assert_eq!(empty["data"]["selection"], json!({ "type": "none" }));
    assert_eq!(empty["data"]["profiles"], json!([]));

    let selected = server
        .put("/selection")
        .json(&json!({ "family_id": family }))
        .await
        .json::<Value>();
    assert_eq!(
        selected["data"],
        json!({ "type": "family", "family_id": family })
    );

    let preview = server.get("/selection/context").await.json::<Value>();
    let data = &preview["data"];
    assert_eq!(data["profiles"].as_array().unwrap().len(), 2);
    assert_eq!(
        data["risk_context"]["combined_allergies"],
        json!(["peanuts", "milk"])
    );
    assert_eq!(data["risk_context"]["age_groups"]["children"], true);
    assert_eq!(data["risk_context"]["age_groups"]["elderly"], true);
    assert_eq!(data["risk_context"]["age_groups"]["adults"], false);
    assert!(
        data["instructions"]
            .as_str()
            .unwrap()
            .contains("COMBINED ALLERGIES: peanuts, milk")
    );

    let cleared = server.delete("/selection").await.json::<Value>();
    assert_eq!(cleared["data"], json!({ "type": "none" }));
}

#[tokio::test]
async fn selection_requires_a_single_existing_target() {
    let server = test_server(|_| {}).await;
    let al = create_profile(&server, "Al", "8", &[]).await;
    let family = create_family(&server, "Home").await;

    server
        .put("/selection")
        .json(&json!({ "profile_id": al, "family_id": family }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .put("/selection")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .put("/selection")
        .json(&json!({ "profile_id": "01890a5d-ac96-774b-bcce-b302099a8057" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
