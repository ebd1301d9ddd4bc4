use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::SignIn;
use crate::frontend::components::{Button, EmailInput, ErrorAlert, PasswordInput, TextInput};
use crate::services::{use_session, use_toaster, Notifier, ToastOptions, MIN_PASSWORD_LEN};

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let sign_in = ServerAction::<SignIn>::new();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending = sign_in.pending();
    let result = sign_in.value();

    Effect::new(move |_| {
        if let Some(Ok(user)) = result.get() {
            toaster.success(
                "Signed in",
                ToastOptions::described(format!("Welcome, {}!", user.display_name())),
            );
            session.login(user);
            navigate("/profile", Default::default());
        }
    });

    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="w-full max-w-md">
                <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-4xl mb-4 hover:animate-bounce">"🧩"</a>
                        <h1 class="text-2xl font-bold text-white">"Sign In"</h1>
                        <p class="text-slate-400 mt-2">"Continue learning with CodeCraft"</p>
                    </div>

                    <Show when=move || error_message().is_some()>
                        <ErrorAlert message=error_message().unwrap_or_default() />
                    </Show>

                    <ActionForm action=sign_in attr:class="space-y-5">
                        <TextInput
                            label="Name (optional)"
                            name="name"
                            placeholder="Ada Lovelace"
                            value=name
                        />
                        <EmailInput label="Email" value=email />
                        <PasswordInput
                            label="Password"
                            hint=format!("Must be at least {MIN_PASSWORD_LEN} characters")
                            value=password
                        />
                        <Button full_width=true loading=pending loading_text="Signing in...">
                            "Sign In"
                        </Button>
                    </ActionForm>
                </div>

                <a href="/" class="block text-center text-slate-500 hover:text-slate-300 mt-6 text-sm transition-colors">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
