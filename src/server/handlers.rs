use crate::engine::Engine;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const NO_SEARCH_STRING: &str = "No search string";
const EMPTY_SEARCH_STRING: &str = "Empty search string";

/// Response envelope. `list` is `null` whenever nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub list: Option<Vec<String>>,
    pub error: String,
}

impl SearchResponse {
    fn error(message: &str) -> Self {
        Self {
            list: None,
            error: message.to_string(),
        }
    }
}

/// Map a raw `q` value to the status and envelope sent back
fn respond(engine: &Engine, query: Option<&str>) -> (StatusCode, SearchResponse) {
    let word = match query {
        None => return (StatusCode::NOT_FOUND, SearchResponse::error(NO_SEARCH_STRING)),
        Some("") => return (StatusCode::NOT_FOUND, SearchResponse::error(EMPTY_SEARCH_STRING)),
        Some(word) => word,
    };

    let files = engine.search(word);
    debug!("search {:?}: {} files", word, files.len());

    if files.is_empty() {
        (StatusCode::NOT_FOUND, SearchResponse::error(""))
    } else {
        (
            StatusCode::OK,
            SearchResponse {
                list: Some(files),
                error: String::new(),
            },
        )
    }
}

/// `GET /files/search?q=<word>`. The first `q` wins when repeated.
pub async fn search_handler(
    State(engine): State<Arc<Engine>>,
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<SearchResponse>) {
    let query = params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str());

    let (status, body) = respond(&engine, query);
    (status, Json(body))
}
