use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{Footer, Nav};
use crate::services::{use_session, use_toaster, Notifier, ToastOptions};

pub const LOGGED_OUT: &str = "Logged out successfully";

pub fn announce_logout<N: Notifier + ?Sized>(notifier: &N) {
    notifier.info(LOGGED_OUT, ToastOptions::default());
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let leaving = RwSignal::new(false);

    let redirect = use_navigate();
    Effect::new(move |_| {
        if !session.is_authenticated() && !leaving.get_untracked() {
            redirect("/auth", Default::default());
        }
    });

    let navigate = use_navigate();
    let logout = move |_: ev::MouseEvent| {
        leaving.set(true);
        session.logout();
        announce_logout(&toaster);
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>
            <section class="pt-32 pb-20 px-6">
                {move || session.user().map(|user| view! {
                    <div class="max-w-md mx-auto rounded-2xl border border-slate-800 bg-slate-900/80 p-8 text-center shadow-xl">
                        <div class="w-24 h-24 mx-auto mb-6 rounded-full bg-gradient-to-br from-orange-500 to-amber-500
                                    flex items-center justify-center text-3xl font-bold text-white">
                            {user.initials()}
                        </div>
                        <h1 class="text-2xl font-bold text-white">{user.display_name().to_string()}</h1>
                        <p class="text-slate-400 mt-1 mb-8">{user.email.clone()}</p>
                        <div class="flex flex-col gap-3">
                            <a href="/courses" class="btn-ghost">"Browse courses"</a>
                            <button type="button" class="btn-primary" on:click=logout.clone()>"Log out"</button>
                        </div>
                    </div>
                })}
            </section>
            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}
