//! API client for the form backend.
//!
//! Three endpoints, one attempt each per render cycle: the short-form config
//! lookup, schema generation, and submission. A reload is the only retry
//! path.

use gloo_net::http::{Request, Response};
use serde_json::{Map, Value};

use crate::error::FormError;
use crate::types::{ErrorBody, FormConfig, GeneratedForm, SubmitResult};

const API_BASE: &str = "/api";

/// Resolves a short-form session into its form configuration.
pub async fn fetch_form_config(session_id: &str) -> Result<FormConfig, FormError> {
    let url = format!("{}/form-config/{}", API_BASE, urlencoding::encode(session_id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FormError::Resolution(format!("request failed: {e}")))?;

    if !response.ok() {
        let message = error_message(response, "form link not found").await;
        return Err(FormError::Resolution(message));
    }

    let config: FormConfig = response
        .json()
        .await
        .map_err(|e| FormError::Resolution(format!("invalid response: {e}")))?;

    if !config.success {
        let message = config
            .error
            .unwrap_or_else(|| "form link not found".to_string());
        return Err(FormError::Resolution(message));
    }

    Ok(config)
}

/// Requests a generated schema for the resolved fields and context.
pub async fn generate_schema(
    fields: &[String],
    context: Option<&str>,
) -> Result<GeneratedForm, FormError> {
    let url = schema_url(fields, context);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FormError::SchemaFetch(format!("request failed: {e}")))?;

    if !response.ok() {
        let message = error_message(response, "schema generation failed").await;
        return Err(FormError::SchemaFetch(message));
    }

    response
        .json()
        .await
        .map_err(|e| FormError::SchemaFetch(format!("invalid schema response: {e}")))
}

/// Posts a submission payload.
pub async fn submit_form(payload: &Map<String, Value>) -> Result<SubmitResult, FormError> {
    let url = format!("{}/submit", API_BASE);
    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| FormError::Submission(format!("failed to encode payload: {e}")))?
        .send()
        .await
        .map_err(|e| FormError::Submission(format!("request failed: {e}")))?;

    if !response.ok() {
        let message = error_message(response, "submission failed").await;
        return Err(FormError::Submission(message));
    }

    let mut result: SubmitResult = response.json().await.unwrap_or_default();
    if let Some(error) = result.error.take() {
        return Err(FormError::Submission(error));
    }
    Ok(result)
}

/// Builds the schema-generation URL: `fields` is percent-encoded as one
/// comma-joined string; `context` is appended only when present.
fn schema_url(fields: &[String], context: Option<&str>) -> String {
    let joined = fields.join(",");
    let mut url = format!("{}/schema?fields={}", API_BASE, urlencoding::encode(&joined));
    if let Some(context) = context {
        url.push_str("&context=");
        url.push_str(&urlencoding::encode(context));
    }
    url
}

/// Extracts the server-supplied error message from a failed response,
/// falling back to a status-tagged generic message.
async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body: Option<ErrorBody> = response.json().await.ok();
    body.and_then(|body| body.error)
        .unwrap_or_else(|| format!("{fallback} (HTTP {status})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_url_percent_encodes_the_joined_fields() {
        let fields = vec!["username".to_string(), "email".to_string()];
        assert_eq!(
            schema_url(&fields, None),
            "/api/schema?fields=username%2Cemail"
        );
    }

    #[test]
    fn schema_url_appends_context_only_when_present() {
        let fields = vec!["age".to_string()];
        assert_eq!(
            schema_url(&fields, Some("user signup")),
            "/api/schema?fields=age&context=user%20signup"
        );
        assert_eq!(schema_url(&fields, None), "/api/schema?fields=age");
    }
}
