//! Form page controller.
//!
//! Owns the request, the most recently rendered schema, the live field
//! values, and the view state. One resolve-then-fetch chain runs per page
//! load and one submit chain per user-initiated submit; the chains are
//! strictly sequential, so at most one request is in flight at a time.

use leptos::prelude::*;
use leptos::web_sys;
use leptos_router::hooks::use_location;
use serde_json::Value;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::error::FormError;
use crate::request::FormRequest;
use crate::types::GeneratedForm;

use super::schema_form::{build_payload, default_values, plan_controls, FieldRow};

/// Which of the four mutually exclusive sections is visible. Rendering
/// matches on this, so entering a state hides all others by construction.
#[derive(Debug, Clone, PartialEq)]
enum ViewState {
    Loading,
    Form,
    Success {
        title: String,
        message: Option<String>,
        echo: String,
    },
    Error(String),
}

#[component]
pub fn FormPage() -> impl IntoView {
    let location = use_location();
    let request = FormRequest::from_location(
        &location.pathname.get_untracked(),
        &location.search.get_untracked(),
    );
    let session_id = request.session_id.clone();

    let view_state = RwSignal::new(ViewState::Loading);
    let form = RwSignal::new(Option::<GeneratedForm>::None);
    let values = RwSignal::new(HashMap::<String, Value>::new());
    let submitting = RwSignal::new(false);

    {
        let request = request.clone();
        spawn_local(async move {
            match load_form(request).await {
                Ok(loaded) => {
                    log::info!(
                        "form ready: {} ({} fields)",
                        loaded.form_id.as_deref().unwrap_or("inline"),
                        loaded.schema.properties.len()
                    );
                    values.set(default_values(&plan_controls(&loaded)));
                    form.set(Some(loaded));
                    view_state.set(ViewState::Form);
                }
                Err(err) => {
                    log::error!("failed to load form: {err}");
                    view_state.set(ViewState::Error(err.to_string()));
                }
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(current) = form.get_untracked() else {
            return;
        };

        let descriptors = plan_controls(&current);
        let payload = build_payload(&descriptors, &values.get_untracked(), session_id.as_deref());
        let title = current.title.clone();
        submitting.set(true);

        spawn_local(async move {
            match api::submit_form(&payload).await {
                Ok(result) => {
                    let echo = serde_json::to_string_pretty(&Value::Object(payload))
                        .unwrap_or_default();
                    view_state.set(ViewState::Success {
                        title,
                        message: result.message,
                        echo,
                    });
                }
                Err(err) => {
                    log::error!("submission failed: {err}");
                    view_state.set(ViewState::Error(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    // Back from the success section: same schema, fresh values, no refetch.
    let on_fill_again = move |_: web_sys::MouseEvent| {
        if let Some(current) = form.get_untracked() {
            values.set(default_values(&plan_controls(&current)));
        }
        view_state.set(ViewState::Form);
    };

    view! {
        {move || match view_state.get() {
            ViewState::Loading => view! {
                <div class="bg-white rounded-lg shadow p-6 text-gray-500">
                    "Loading form..."
                </div>
            }
            .into_any(),
            ViewState::Form => {
                let Some(current) = form.get() else {
                    return view! { <div></div> }.into_any();
                };
                let descriptors = plan_controls(&current);
                let submit_label = current.submit_button_text.clone();

                view! {
                    <div class="bg-white rounded-lg shadow p-6">
                        <h2 class="text-2xl font-bold text-gray-900">{current.title.clone()}</h2>
                        {current.description.clone().map(|text| view! {
                            <p class="text-gray-600 text-sm mt-1">{text}</p>
                        })}
                        <form on:submit=on_submit.clone() class="mt-6 space-y-4">
                            {descriptors.iter().map(|descriptor| view! {
                                <FieldRow descriptor=descriptor.clone() values=values />
                            }).collect::<Vec<_>>()}
                            <button
                                type="submit"
                                class="w-full bg-blue-500 hover:bg-blue-600 text-white font-medium px-4 py-2 rounded disabled:opacity-50"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() {
                                    "Submitting...".to_string()
                                } else {
                                    submit_label.clone()
                                }}
                            </button>
                        </form>
                    </div>
                }
                .into_any()
            }
            ViewState::Success { title, message, echo } => view! {
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-2xl font-bold text-gray-900">{title}</h2>
                    <p class="text-green-600 font-medium mt-2">
                        {message.unwrap_or_else(|| "Form submitted successfully".to_string())}
                    </p>
                    <pre class="mt-4 p-4 bg-gray-50 border border-gray-200 rounded text-xs font-mono overflow-x-auto">
                        {echo}
                    </pre>
                    <button
                        class="mt-4 px-4 py-2 text-sm text-blue-600 border border-blue-300 rounded hover:bg-blue-50"
                        on:click=on_fill_again
                    >
                        "Fill again"
                    </button>
                </div>
            }
            .into_any(),
            ViewState::Error(message) => view! {
                <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                    <p class="text-red-800">{message}</p>
                </div>
            }
            .into_any(),
        }}
    }
}

/// Resolves the request and produces a renderable form.
///
/// Short-form sessions are resolved first; a pre-generated schema from the
/// lookup bypasses schema generation entirely. Only after resolution is the
/// empty-fields case an error, and it never issues a network call by itself.
async fn load_form(mut request: FormRequest) -> Result<GeneratedForm, FormError> {
    if request.is_short_form {
        if let Some(session_id) = request.session_id.clone() {
            let config = api::fetch_form_config(&session_id).await?;
            if let Some(schema) = request.apply_config(config) {
                log::info!("using pre-generated schema for session {session_id}");
                return Ok(schema);
            }
        }
    }

    if request.fields.is_empty() {
        return Err(FormError::MissingFields);
    }

    api::generate_schema(&request.fields, request.context.as_deref()).await
}
