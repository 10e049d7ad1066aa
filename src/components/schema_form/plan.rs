//! Control planning: which widget does each schema field get?
//!
//! Planning is a pure function from a [`GeneratedForm`] to an ordered list of
//! [`ControlDescriptor`]s, decoupled from any UI-tree mutation. Widget
//! selection is an ordered list of predicate rules evaluated top-down; the
//! first match wins and free text is the fallthrough.

use crate::types::{FieldSchema, GeneratedForm, UiHint};

/// The concrete input control kind assigned to a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Selection control: a blank prompt option followed by one option per
    /// enum value.
    Select { options: Vec<String> },
    /// Checkbox; an unchecked box is a valid `false`, so it is never
    /// marked required.
    Toggle,
    /// Free-text control whose value is coerced to a number (or null) at
    /// submit time. Never a native numeric input: browser-native validation
    /// would short-circuit the server-side validator.
    NumberText,
    /// Masked free-text control.
    Password,
    /// Multi-line control with a fixed visible height.
    Textarea,
    /// Single-line free-text control.
    Text,
}

/// A planned control: everything the rendering adapter needs for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDescriptor {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub widget: WidgetKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

struct FieldView<'a> {
    schema: &'a FieldSchema,
    hint: &'a UiHint,
}

type WidgetRule = for<'a> fn(&FieldView<'a>) -> Option<WidgetKind>;

/// Precedence order of the widget rules. The fallthrough is [`WidgetKind::Text`].
const WIDGET_RULES: &[WidgetRule] = &[
    enum_rule,
    toggle_rule,
    numeric_rule,
    password_rule,
    textarea_rule,
];

fn enum_rule(field: &FieldView) -> Option<WidgetKind> {
    let options = field.schema.enum_values.as_ref()?;
    if options.is_empty() {
        return None;
    }
    Some(WidgetKind::Select {
        options: options.clone(),
    })
}

fn toggle_rule(field: &FieldView) -> Option<WidgetKind> {
    (field.schema.field_type == "boolean").then_some(WidgetKind::Toggle)
}

fn numeric_rule(field: &FieldView) -> Option<WidgetKind> {
    matches!(field.schema.field_type.as_str(), "integer" | "number")
        .then_some(WidgetKind::NumberText)
}

fn password_rule(field: &FieldView) -> Option<WidgetKind> {
    let hinted = field.hint.widget.as_deref() == Some("password");
    let formatted = field.schema.format.as_deref() == Some("password");
    (hinted || formatted).then_some(WidgetKind::Password)
}

fn textarea_rule(field: &FieldView) -> Option<WidgetKind> {
    (field.hint.widget.as_deref() == Some("textarea")).then_some(WidgetKind::Textarea)
}

fn select_widget(field: &FieldView) -> WidgetKind {
    WIDGET_RULES
        .iter()
        .find_map(|rule| rule(field))
        .unwrap_or(WidgetKind::Text)
}

/// Placeholder resolution: the explicit hint wins; integer fields fall back
/// to a default prompt. Selection and toggle controls have no placeholder
/// semantics.
fn placeholder_for(widget: &WidgetKind, field: &FieldView) -> Option<String> {
    match widget {
        WidgetKind::Select { .. } | WidgetKind::Toggle => None,
        WidgetKind::NumberText => field.hint.placeholder.clone().or_else(|| {
            (field.schema.field_type == "integer").then(|| "Enter a number".to_string())
        }),
        _ => field.hint.placeholder.clone(),
    }
}

/// Plans one control per `properties` entry, in the iteration order of that
/// map. Deterministic: the same form always yields the same plan.
pub fn plan_controls(form: &GeneratedForm) -> Vec<ControlDescriptor> {
    let default_hint = UiHint::default();
    form.schema
        .properties
        .iter()
        .map(|(name, schema)| {
            let hint = form.ui_schema.get(name).unwrap_or(&default_hint);
            let field = FieldView { schema, hint };
            let widget = select_widget(&field);
            let required =
                widget != WidgetKind::Toggle && form.schema.required.iter().any(|r| r == name);
            let placeholder = placeholder_for(&widget, &field);

            ControlDescriptor {
                name: name.clone(),
                label: schema.title.clone().unwrap_or_else(|| name.clone()),
                description: schema.description.clone(),
                widget,
                required,
                placeholder,
            }
        })
        .collect()
}
