use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-slate-800 bg-slate-900/50">
            <div class="max-w-6xl mx-auto px-6 py-12 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <p class="text-2xl font-bold mb-2">"🧩 CodeCraft"</p>
                    <p class="text-slate-400 text-sm">
                        "Learn programming through interactive 3D visualizations."
                    </p>
                </div>
                <div class="flex flex-col gap-2 text-sm">
                    <p class="text-white font-semibold mb-1">"Explore"</p>
                    <a href="/courses" class="text-slate-400 hover:text-white transition-colors">"Courses"</a>
                    <a href="/about" class="text-slate-400 hover:text-white transition-colors">"About"</a>
                    <a href="/auth" class="text-slate-400 hover:text-white transition-colors">"Sign In"</a>
                </div>
                <div class="text-sm">
                    <p class="text-white font-semibold mb-1">"Contact"</p>
                    <p class="text-slate-400">"hello@codecraft.dev"</p>
                </div>
            </div>
            <p class="pb-8 text-center text-xs text-slate-600">
                {format!("© {year} CodeCraft. All rights reserved.")}
            </p>
        </footer>
    }
}
