use leptos::prelude::*;

const INPUT_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 \
    text-white placeholder-slate-500 \
    focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent transition-all";

/// Labelled form input bound to `value`. The `name` doubles as the element id
/// and the form field submitted to server functions.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let hint = (!hint.is_empty()).then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint}</p> });

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                class=INPUT_CLASSES
                bind:value=value
            />
            {hint}
        </div>
    }
}

#[component]
pub fn EmailInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            hint=hint
            value=value
        />
    }
}
