use leptos::prelude::*;

use crate::services::ToastKind;

/// Inline counterpart to a toast, for messages that belong to a form.
#[component]
pub fn Alert(#[prop(into)] message: String, #[prop(optional)] kind: ToastKind) -> impl IntoView {
    let (icon, classes) = match kind {
        ToastKind::Success => ("✓", "bg-emerald-500/10 border-emerald-500/30 text-emerald-400"),
        ToastKind::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-400"),
        ToastKind::Info => ("ℹ", "bg-sky-500/10 border-sky-500/30 text-sky-400"),
    };

    view! {
        <div role="alert" class=format!("mb-6 p-4 rounded-lg border text-sm {classes}")>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message kind=ToastKind::Error /> }
}
