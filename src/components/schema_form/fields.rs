//! Rendering adapter: materializes planned controls into live inputs.
//!
//! One labeled control per descriptor. No length, pattern, or range
//! constraint is ever attached here; validation belongs to the server-side
//! validator and browser-native checks must not short-circuit it.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use super::plan::{ControlDescriptor, WidgetKind};

/// Label, control, and optional help text for one planned field.
#[component]
pub fn FieldRow(
    descriptor: ControlDescriptor,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    let label = descriptor.label.clone();
    let description = descriptor.description.clone();
    let required = descriptor.required;

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">
                {label}
                {required.then(|| view! {
                    <span class="ml-1 text-xs text-red-500 font-medium">"*"</span>
                })}
            </label>
            <FieldControl descriptor=descriptor values=values />
            {description.map(|text| view! {
                <p class="mt-1 text-xs text-gray-500">{text}</p>
            })}
        </div>
    }
}

/// Dispatches a descriptor to its widget component.
#[component]
pub fn FieldControl(
    descriptor: ControlDescriptor,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    match descriptor.widget.clone() {
        WidgetKind::Select { options } => view! {
            <SelectControl descriptor=descriptor options=options values=values />
        }
        .into_any(),
        WidgetKind::Toggle => view! {
            <ToggleControl descriptor=descriptor values=values />
        }
        .into_any(),
        WidgetKind::Password => view! {
            <TextControl descriptor=descriptor input_type="password" values=values />
        }
        .into_any(),
        WidgetKind::Textarea => view! {
            <TextareaControl descriptor=descriptor values=values />
        }
        .into_any(),
        WidgetKind::NumberText | WidgetKind::Text => view! {
            <TextControl descriptor=descriptor input_type="text" values=values />
        }
        .into_any(),
    }
}

#[component]
fn TextControl(
    descriptor: ControlDescriptor,
    input_type: &'static str,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    let name = descriptor.name.clone();
    let name_for_input = name.clone();

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        let value = input.value();
        values.update(|v| {
            v.insert(name_for_input.clone(), Value::String(value));
        });
    };

    view! {
        <input
            type=input_type
            name=descriptor.name.clone()
            required=descriptor.required
            class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            placeholder=descriptor.placeholder.clone().unwrap_or_default()
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .unwrap_or_default()
            }
            on:input=on_input
        />
    }
}

#[component]
fn TextareaControl(
    descriptor: ControlDescriptor,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    let name = descriptor.name.clone();
    let name_for_input = name.clone();

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea: web_sys::HtmlTextAreaElement = target.dyn_into().unwrap();
        let value = textarea.value();
        values.update(|v| {
            v.insert(name_for_input.clone(), Value::String(value));
        });
    };

    view! {
        <textarea
            name=descriptor.name.clone()
            required=descriptor.required
            rows=4
            class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            placeholder=descriptor.placeholder.clone().unwrap_or_default()
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .unwrap_or_default()
            }
            on:input=on_input
        />
    }
}

#[component]
fn SelectControl(
    descriptor: ControlDescriptor,
    options: Vec<String>,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    let name = descriptor.name.clone();
    let name_for_change = name.clone();
    let prompt = format!("Select {}", descriptor.label);

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
        let value = select.value();
        values.update(|v| {
            v.insert(name_for_change.clone(), Value::String(value));
        });
    };

    view! {
        <select
            name=descriptor.name.clone()
            required=descriptor.required
            class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            prop:value=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .unwrap_or_default()
            }
            on:change=on_change
        >
            <option value="">{prompt}</option>
            {options.into_iter().map(|option| {
                let value = option.clone();
                view! { <option value=value>{option}</option> }
            }).collect_view()}
        </select>
    }
}

#[component]
fn ToggleControl(
    descriptor: ControlDescriptor,
    values: RwSignal<HashMap<String, Value>>,
) -> impl IntoView {
    let name = descriptor.name.clone();
    let name_for_change = name.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        let checked = input.checked();
        values.update(|v| {
            v.insert(name_for_change.clone(), Value::Bool(checked));
        });
    };

    view! {
        <input
            type="checkbox"
            name=descriptor.name.clone()
            class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
            prop:checked=move || {
                values
                    .get()
                    .get(&name)
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false)
            }
            on:change=on_change
        />
    }
}
