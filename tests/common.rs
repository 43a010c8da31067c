use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_TOKEN: &str = "test-token";

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount a single-page folder listing for the account.
pub async fn mount_folders(mock_server: &MockServer, folders: Value) {
    let count = folders.as_array().map_or(0, |folders| folders.len());
    Mock::given(method("GET"))
        .and(path("/@me/folders/"))
        .and(header("authorization", format!("Token {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "results": folders
        })))
        .mount(mock_server)
        .await;
}

/// Mount a single-page bookmark listing for a folder.
pub async fn mount_bookmarks(mock_server: &MockServer, folder_id: &str, bookmarks: Value) {
    let count = bookmarks.as_array().map_or(0, |bookmarks| bookmarks.len());
    Mock::given(method("GET"))
        .and(path(format!("/@me/folders/{folder_id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "results": bookmarks
        })))
        .mount(mock_server)
        .await;
}
