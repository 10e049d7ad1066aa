//! Request resolution: what form does this page load ask for?
//!
//! A [`FormRequest`] is built once per page load from the location. It comes
//! from either inline query parameters (`?fields=a,b&context=...`) or a
//! short-form path (`/form/{sessionId}`) whose session must be resolved
//! against the backend before anything can be rendered.

use crate::types::{FormConfig, GeneratedForm};

/// Path prefix that marks a short-form URL.
pub const SHORT_FORM_PREFIX: &str = "/form/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRequest {
    pub fields: Vec<String>,
    pub context: Option<String>,
    pub session_id: Option<String>,
    pub is_short_form: bool,
}

impl FormRequest {
    /// Builds a request from the page's pathname and query string.
    ///
    /// A short-form path segment wins over a `session_id` query parameter
    /// when both are present.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        let mut fields = Vec::new();
        let mut context = None;
        let mut session_id = None;

        for (key, value) in parse_query(search) {
            match key.as_str() {
                "fields" => fields = split_fields(&value),
                "context" if !value.is_empty() => context = Some(value),
                "session_id" if !value.is_empty() => session_id = Some(value),
                _ => {}
            }
        }

        let mut is_short_form = false;
        if let Some(session) = short_form_session(pathname) {
            session_id = Some(session.to_string());
            is_short_form = true;
        }

        Self {
            fields,
            context,
            session_id,
            is_short_form,
        }
    }

    /// Applies a resolved session config: the lookup's fields and context
    /// overwrite whatever was parsed from the URL; the session id stays as
    /// parsed. Returns the pre-generated schema when the lookup carried one.
    pub fn apply_config(&mut self, config: FormConfig) -> Option<GeneratedForm> {
        self.fields = config.fields;
        if config.context.is_some() {
            self.context = config.context;
        }
        config.schema
    }
}

fn split_fields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Matches `/form/{segment}` where the segment is one non-empty run of
/// ASCII-alphanumeric characters. A trailing slash is tolerated.
fn short_form_session(pathname: &str) -> Option<&str> {
    let segment = pathname.strip_prefix(SHORT_FORM_PREFIX)?.trim_end_matches('/');
    let valid = !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(segment)
}

fn parse_query(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.clone(),
    }
}
