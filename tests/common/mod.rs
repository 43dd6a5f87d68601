//! In-process mock of the YouTube Data API `commentThreads` endpoint.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use yt_sentiment::config::Settings;

pub const API_KEY: &str = "test-key";

/// Query strings of every request the mock received.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<HashMap<String, String>>>>);

impl Recorded {
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.0.lock().unwrap().clone()
    }
}

pub struct MockApi {
    pub base_url: String,
    pub recorded: Recorded,
}

impl MockApi {
    /// Settings pointing the comment client at this mock.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default().with_api_key(Some(API_KEY.to_string()));
        settings.youtube.api_base_url = self.base_url.clone();
        settings.youtube.timeout_seconds = Some(5);
        settings
    }
}

fn thread(text: &str) -> Value {
    json!({
        "kind": "youtube#commentThread",
        "snippet": {
            "topLevelComment": {
                "kind": "youtube#comment",
                "snippet": { "textDisplay": text, "likeCount": 0 }
            },
            "totalReplyCount": 0
        }
    })
}

fn api_error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({ "error": { "code": status.as_u16(), "message": message, "errors": [] } })),
    )
}

async fn comment_threads(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    recorded.0.lock().unwrap().push(params.clone());

    if params.get("key").map(String::as_str) != Some(API_KEY) {
        return api_error(
            StatusCode::BAD_REQUEST,
            "API key not valid. Please pass a valid API key.",
        );
    }

    let video_id = params.get("videoId").cloned().unwrap_or_default();
    let texts: Vec<&str> = match video_id.as_str() {
        "abc123" | "xyz789" => vec!["I love this!", "I hate this.", "It's okay."],
        "empty" => vec![],
        "broken" => return (StatusCode::OK, Json(json!({ "kind": "youtube#unexpected" }))),
        _ => {
            return api_error(
                StatusCode::NOT_FOUND,
                "The video identified by the videoId parameter could not be found.",
            )
        }
    };

    let items: Vec<Value> = texts.into_iter().map(thread).collect();
    (
        StatusCode::OK,
        Json(json!({ "kind": "youtube#commentThreadListResponse", "items": items })),
    )
}

/// Start the mock on an ephemeral local port.
pub async fn spawn_mock_api() -> MockApi {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/youtube/v3/commentThreads", get(comment_threads))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}/youtube/v3/", addr),
        recorded,
    }
}
