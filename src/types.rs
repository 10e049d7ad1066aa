//! Wire types for the form backend API.
//!
//! These mirror the JSON shapes produced by the schema-generation service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One field definition inside the generated schema's `properties` map.
///
/// Constraint keywords (`minLength`, `maxLength`, `minimum`, `maximum`,
/// `pattern`) may appear on the wire but are deliberately not modeled:
/// validation belongs to the server-side validator, and no constraint ever
/// reaches a rendered control.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldSchema {
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

fn default_field_type() -> String {
    "string".to_string()
}

/// Per-field UI hints delivered alongside the schema (`uiSchema` entries).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiHint {
    #[serde(rename = "ui:widget", default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(rename = "ui:placeholder", default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// The `schema` object of a generated form: a flat JSON-Schema object whose
/// property order is the rendering order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SchemaObject {
    #[serde(default)]
    pub properties: IndexMap<String, FieldSchema>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// A complete renderable form, as returned by `/api/schema` and as embedded
/// in short-form config lookups.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedForm {
    #[serde(default)]
    pub form_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub schema: SchemaObject,
    #[serde(default)]
    pub ui_schema: HashMap<String, UiHint>,
    #[serde(default = "default_submit_label")]
    pub submit_button_text: String,
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

/// Response of the short-form config lookup `/api/form-config/{sessionId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub success: bool,
    /// Echo of the looked-up session id.
    #[allow(dead_code)]
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
    /// Whether the server holds an API key and can pre-generate schemas.
    #[allow(dead_code)]
    #[serde(default)]
    pub has_api_key: bool,
    /// Pre-generated schema; when present the schema-generation call is
    /// skipped entirely.
    #[serde(default)]
    pub schema: Option<GeneratedForm>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a submit response. Everything beyond these fields is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body optionally attached to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_generated_form_payload() {
        let payload = json!({
            "formId": "form_abc",
            "title": "Sign Up",
            "description": "Create an account",
            "schema": {
                "$schema": "https://json-schema.org/draft/2020-12/schema",
                "type": "object",
                "title": "Sign Up",
                "properties": {
                    "username": { "type": "string", "title": "Username" },
                    "age": { "type": "integer", "title": "Age", "minimum": 0 },
                    "newsletter": { "type": "boolean", "title": "Newsletter" }
                },
                "required": ["username"]
            },
            "uiSchema": {
                "username": { "ui:widget": "text", "ui:placeholder": "yourname" }
            },
            "submitButtonText": "Create account"
        });

        let form: GeneratedForm = serde_json::from_value(payload).unwrap();
        assert_eq!(form.form_id.as_deref(), Some("form_abc"));
        assert_eq!(form.title, "Sign Up");
        assert_eq!(form.submit_button_text, "Create account");
        assert_eq!(form.schema.required, vec!["username".to_string()]);

        let hint = form.ui_schema.get("username").unwrap();
        assert_eq!(hint.widget.as_deref(), Some("text"));
        assert_eq!(hint.placeholder.as_deref(), Some("yourname"));

        // Unmodeled constraint keywords are dropped, not errors.
        let age = form.schema.properties.get("age").unwrap();
        assert_eq!(age.field_type, "integer");
    }

    #[test]
    fn property_order_follows_the_document() {
        let payload = json!({
            "title": "Ordered",
            "schema": {
                "type": "object",
                "properties": {
                    "zulu": { "type": "string" },
                    "alpha": { "type": "string" },
                    "mike": { "type": "string" }
                },
                "required": []
            }
        });

        let form: GeneratedForm = serde_json::from_value(payload).unwrap();
        let names: Vec<&str> = form.schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn submit_label_defaults_when_absent() {
        let payload = json!({
            "title": "Minimal",
            "schema": { "type": "object", "properties": {}, "required": [] }
        });

        let form: GeneratedForm = serde_json::from_value(payload).unwrap();
        assert_eq!(form.submit_button_text, "Submit");
        assert!(form.ui_schema.is_empty());
    }

    #[test]
    fn form_config_carries_optional_schema_and_error() {
        let missing: FormConfig = serde_json::from_value(json!({
            "success": false,
            "error": "Form config not found"
        }))
        .unwrap();
        assert!(!missing.success);
        assert_eq!(missing.error.as_deref(), Some("Form config not found"));
        assert!(missing.schema.is_none());

        let found: FormConfig = serde_json::from_value(json!({
            "success": true,
            "session_id": "abc123",
            "fields": ["age"],
            "context": "signup",
            "has_api_key": true,
            "schema": {
                "title": "Signup",
                "schema": {
                    "type": "object",
                    "properties": { "age": { "type": "integer" } },
                    "required": ["age"]
                }
            }
        }))
        .unwrap();
        assert_eq!(found.fields, vec!["age".to_string()]);
        assert_eq!(found.context.as_deref(), Some("signup"));
        assert_eq!(found.schema.unwrap().title, "Signup");
    }

    #[test]
    fn submit_result_ignores_unknown_fields() {
        let result: SubmitResult = serde_json::from_value(json!({
            "success": true,
            "message": "Form submitted successfully",
            "session_id": "abc123",
            "data": { "username": "ada" }
        }))
        .unwrap();
        assert_eq!(result.message.as_deref(), Some("Form submitted successfully"));
        assert!(result.error.is_none());
    }
}
