use contracts::queries::{GenerateQueryResponse, QueryRequest, QueryResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Translate and execute a natural-language question.
///
/// `Err` is a transport failure; a populated `error` field inside the
/// response is a translation/execution failure the caller renders inline.
pub async fn process_query(request: &QueryRequest) -> Result<QueryResponse, String> {
    let response = Request::post(&api_url("/api/query"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Query request failed: {}", response.status()));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend to synthesize an example question over the loaded tables.
pub async fn generate_query() -> Result<GenerateQueryResponse, String> {
    let response = Request::post(&api_url("/api/generate-query"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Query generation failed: {}", response.status()));
    }

    response
        .json::<GenerateQueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
