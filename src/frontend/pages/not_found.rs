//! 404 page for unknown routes

use leptos::prelude::*;

use crate::frontend::components::Nav;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Nav/>
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-white mb-2">"Oops! Page not found"</p>
                <p class="text-slate-400 mb-8 max-w-md">
                    "This lesson doesn't exist yet. Head back and pick another course."
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <a href="/" class="btn-primary">"Return Home"</a>
                    <a href="/courses" class="btn-ghost">"Browse Courses"</a>
                </div>
            </div>
        </div>
    }
}
