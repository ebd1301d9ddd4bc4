use leptos::prelude::*;

use crate::services::{use_toaster, Toast, ToastKind};

fn toast_classes(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Success => ("✓", "border-emerald-500/40"),
        ToastKind::Error => ("✕", "border-red-500/40"),
        ToastKind::Info => ("ℹ", "border-sky-500/40"),
    }
}

/// Renders the site-wide toasts in the bottom-right corner.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-6 right-6 z-[60] flex flex-col gap-3 w-80" aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (icon, border) = toast_classes(toast.kind);
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "p-4 rounded-lg bg-slate-900 border shadow-xl shadow-black/40 {border}",
                        )>
                            <div class="flex items-start gap-3">
                                <span class="text-lg">{icon}</span>
                                <div class="flex-grow">
                                    <p class="text-white font-medium">{toast.message}</p>
                                    {toast.description.map(|d| view! { <p class="text-slate-400 text-sm mt-1">{d}</p> })}
                                    {toast.action.map(|action| view! {
                                        <a
                                            href=action.href
                                            class="inline-block mt-2 text-sm text-orange-400 hover:text-orange-300 font-medium"
                                            on:click=move |_| toaster.dismiss(id)
                                        >
                                            {action.label}
                                        </a>
                                    })}
                                </div>
                                <button
                                    type="button"
                                    class="text-slate-500 hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
