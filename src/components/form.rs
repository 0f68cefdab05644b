//! Form Helpers
//!
//! Inline field errors, the form-level error area, and focus handling for
//! the first invalid field.

use leptos::html;
use leptos::*;

/// Inline error under a single field
#[component]
pub fn FieldError(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <p class="field-error is-visible">{msg}</p>
        })}
    }
}

/// Form-level error area for backend and network messages
#[component]
pub fn FormError(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="form-error is-visible" data-form-error="">{msg}</div>
        })}
    }
}

/// Move focus to an invalid input.
pub fn focus_field(field: NodeRef<html::Input>) {
    if let Some(input) = field.get_untracked() {
        let _ = input.focus();
    }
}
