//! HTTP service for uploading a product's main image to the backend.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::FILE_FIELD_NAME;
use crate::{AppError, AppResult, HttpReply, UploadOutcome, UploadTarget};

/// Sends one multipart POST and hands back the raw reply.
///
/// `Err` means no response was received at all.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    async fn post_multipart(
        &self,
        url: &str,
        authorization: &str,
        field: &str,
        file: &F,
    ) -> AppResult<HttpReply>;
}

/// Browser transport backed by `fetch` via gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl UploadTransport<File> for HttpTransport {
    async fn post_multipart(
        &self,
        url: &str,
        authorization: &str,
        field: &str,
        file: &File,
    ) -> AppResult<HttpReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob(field, file)
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(url)
            .header("Authorization", authorization)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("Could not read response body ({}): {}", status, e);
                None
            }
        };

        Ok(HttpReply { status, body })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Tries, in order: a JSON object's `error` field, its `detail` field, the
/// raw text. An unreadable body yields an empty string. Never fails.
pub fn extract_error_message(body: Option<&str>) -> String {
    let Some(text) = body else {
        return String::new();
    };

    let structured = serde_json::from_str::<Value>(text).ok().and_then(|json| {
        ["error", "detail"]
            .iter()
            .find_map(|key| json.get(key).and_then(field_message))
    });

    structured.unwrap_or_else(|| text.to_string())
}

/// Text for an `error`/`detail` value, `None` when the field is unusable.
///
/// Empty strings, zero, `false` and null are skipped. Lists are joined with
/// `,` (DRF reports field errors as `["msg", ...]`). Objects fall through to
/// the raw body.
fn field_message(value: &Value) -> Option<String> {
    match value {
        Value::String(msg) if !msg.is_empty() => Some(msg.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => Some(items.iter().map(list_item).collect::<Vec<_>>().join(",")),
        _ => None,
    }
}

fn list_item(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(msg) => msg.clone(),
        Value::Array(items) => items.iter().map(list_item).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Display message for a non-2xx reply.
pub fn failure_message(reply: &HttpReply) -> String {
    let message = extract_error_message(reply.body.as_deref());
    if message.is_empty() {
        format!("Upload failed ({})", reply.status)
    } else {
        message
    }
}

/// Upload `file` as the main image of `target.product_id`.
///
/// `wants_body` controls whether a successful reply is parsed as JSON; a
/// parse failure then turns the upload into a failure.
pub async fn upload_main_image<F, T>(
    transport: &T,
    target: &UploadTarget,
    file: &F,
    wants_body: bool,
) -> UploadOutcome
where
    T: UploadTransport<F>,
{
    let url = target.url();
    log::info!("📤 Uploading main image for product {}", target.product_id);

    let reply = match transport
        .post_multipart(&url, &target.authorization(), FILE_FIELD_NAME, file)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("❌ Upload failed: {}", e);
            return UploadOutcome::failed(e.message());
        }
    };

    if !reply.is_success() {
        let message = failure_message(&reply);
        log::error!("❌ Upload rejected ({}): {}", reply.status, message);
        return UploadOutcome::failed(message);
    }

    if !wants_body {
        log::info!("✅ Image uploaded for product {}", target.product_id);
        return UploadOutcome::Succeeded { body: None };
    }

    match parse_success_body(reply.body.as_deref()) {
        Ok(body) => {
            log::info!("✅ Image uploaded for product {}", target.product_id);
            UploadOutcome::Succeeded { body: Some(body) }
        }
        Err(e) => {
            log::error!("❌ {}", e);
            UploadOutcome::failed(e.message())
        }
    }
}

fn parse_success_body(body: Option<&str>) -> AppResult<Value> {
    let text = body.ok_or_else(|| AppError::Parse("Response body is unreadable".to_string()))?;
    serde_json::from_str(text)
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryFile, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn target() -> UploadTarget {
        UploadTarget::new("https://api.example.com/api", "42", "secret")
    }

    #[test]
    fn test_extract_detail_field() {
        assert_eq!(extract_error_message(Some(r#"{"detail": "bad format"}"#)), "bad format");
    }

    #[test]
    fn test_extract_prefers_error_over_detail() {
        let body = r#"{"error": "not an image", "detail": "ignored"}"#;
        assert_eq!(extract_error_message(Some(body)), "not an image");
    }

    #[test]
    fn test_extract_falls_back_to_raw_text() {
        assert_eq!(extract_error_message(Some("server exploded")), "server exploded");

        // JSON without a usable field is shown as-is
        let body = r#"{"file": ["This field is required."]}"#;
        assert_eq!(extract_error_message(Some(body)), body);

        // Nested objects are not flattened
        let body = r#"{"error": {"code": "bad_image"}}"#;
        assert_eq!(extract_error_message(Some(body)), body);
    }

    #[test]
    fn test_extract_list_field() {
        let body = r#"{"error": ["Only image files are allowed"]}"#;
        assert_eq!(extract_error_message(Some(body)), "Only image files are allowed");

        let body = r#"{"detail": ["Too large", "Unsupported format"]}"#;
        assert_eq!(extract_error_message(Some(body)), "Too large,Unsupported format");
    }

    #[test]
    fn test_extract_scalar_field() {
        assert_eq!(extract_error_message(Some(r#"{"detail": 413}"#)), "413");
        assert_eq!(extract_error_message(Some(r#"{"error": true}"#)), "true");

        // Falsy values move on to the next field
        let body = r#"{"error": 0, "detail": "Product not found"}"#;
        assert_eq!(extract_error_message(Some(body)), "Product not found");
        let body = r#"{"error": false, "detail": null}"#;
        assert_eq!(extract_error_message(Some(body)), body);
    }

    #[test]
    fn test_empty_list_uses_generic_message() {
        let reply = HttpReply { status: 400, body: Some(r#"{"error": []}"#.to_string()) };
        assert_eq!(failure_message(&reply), "Upload failed (400)");
    }

    #[test]
    fn test_extract_unreadable_body() {
        assert_eq!(extract_error_message(None), "");
        assert_eq!(extract_error_message(Some("")), "");
    }

    #[test]
    fn test_failure_message_generic_fallback() {
        let reply = HttpReply { status: 500, body: None };
        assert_eq!(failure_message(&reply), "Upload failed (500)");

        let empty = HttpReply { status: 502, body: Some(String::new()) };
        assert_eq!(failure_message(&empty), "Upload failed (502)");
    }

    #[test]
    fn test_upload_sends_multipart_with_bearer() {
        let transport = MockTransport::replying(200, r#"{"id": 42}"#);
        let file = MemoryFile::new("sofa.jpg", 1024);

        let outcome = block_on(upload_main_image(&transport, &target(), &file, false));
        assert_eq!(outcome, UploadOutcome::Succeeded { body: None });

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].url,
            "https://api.example.com/api/orders/products/42/upload_main_image/"
        );
        assert_eq!(calls[0].authorization, "Bearer secret");
        assert_eq!(calls[0].field, "file");
        assert_eq!(calls[0].file_name, "sofa.jpg");
    }

    #[test]
    fn test_upload_parses_body_when_wanted() {
        let transport = MockTransport::replying(201, r#"{"id": 42, "image_url": "https://x/y.jpg"}"#);
        let file = MemoryFile::new("sofa.jpg", 1024);

        let outcome = block_on(upload_main_image(&transport, &target(), &file, true));
        assert_eq!(
            outcome,
            UploadOutcome::Succeeded {
                body: Some(json!({"id": 42, "image_url": "https://x/y.jpg"}))
            }
        );
    }

    #[test]
    fn test_upload_unparseable_success_body_is_failure() {
        let transport = MockTransport::replying(200, "<html>ok</html>");
        let file = MemoryFile::new("sofa.jpg", 1024);

        match block_on(upload_main_image(&transport, &target(), &file, true)) {
            UploadOutcome::Failed { message } => {
                assert!(message.starts_with("Failed to parse response"), "{}", message);
            }
            other => panic!("expected failure, got {:?}", other),
        }

        // Nobody asked for the body, so it is never parsed
        let outcome = block_on(upload_main_image(&transport, &target(), &file, false));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_upload_error_statuses() {
        let file = MemoryFile::new("sofa.jpg", 1024);

        let bad_request = MockTransport::replying(400, r#"{"detail": "bad format"}"#);
        assert_eq!(
            block_on(upload_main_image(&bad_request, &target(), &file, true)),
            UploadOutcome::failed("bad format")
        );

        let plain = MockTransport::replying(500, "server exploded");
        assert_eq!(
            block_on(upload_main_image(&plain, &target(), &file, true)),
            UploadOutcome::failed("server exploded")
        );

        let unreadable = MockTransport::unreadable(500);
        assert_eq!(
            block_on(upload_main_image(&unreadable, &target(), &file, true)),
            UploadOutcome::failed("Upload failed (500)")
        );
    }

    #[test]
    fn test_upload_network_error() {
        let transport = MockTransport::offline("HTTP request failed: TypeError: Failed to fetch");
        let file = MemoryFile::new("sofa.jpg", 1024);

        assert_eq!(
            block_on(upload_main_image(&transport, &target(), &file, true)),
            UploadOutcome::failed("HTTP request failed: TypeError: Failed to fetch")
        );
    }
}
