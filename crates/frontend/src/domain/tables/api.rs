use contracts::tables::{FileUploadResponse, SchemaResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the full schema snapshot for all loaded tables
pub async fn fetch_schema() -> Result<SchemaResponse, String> {
    let response = Request::get(&api_url("/api/schema"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch schema: {}", response.status()));
    }

    response
        .json::<SchemaResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Upload one data file as a new table. The server infers the format from
/// the file extension; nothing is validated client-side.
pub async fn upload_file(file: &web_sys::File) -> Result<FileUploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;

    let response = Request::post(&api_url("/api/upload"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status()));
    }

    response
        .json::<FileUploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Remove a table by name. Success is the status line; there is no body
/// contract for this endpoint.
pub async fn delete_table(name: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!(
        "/api/table/{}",
        urlencoding::encode(name)
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to remove table: {}", response.status()));
    }

    Ok(())
}

/// Download a bundled sample dataset and wrap it as a `File`, so sample
/// loading enters the same upload path as a browsed or dropped file.
pub async fn fetch_sample(filename: &str) -> Result<web_sys::File, String> {
    let response = Request::get(&api_url(&format!("/sample-data/{}", filename)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load sample data: {}", response.status()));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read sample data: {}", e))?;

    let buffer = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&buffer);
    web_sys::File::new_with_u8_array_sequence(&parts, filename)
        .map_err(|_| "Failed to construct sample file".to_string())
}
