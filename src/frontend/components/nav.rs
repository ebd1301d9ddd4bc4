use leptos::ev;
use leptos::prelude::*;

use crate::services::use_session;

/// Page scroll offset, in pixels, past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

const LINKS: [(&str, &str); 3] = [("/", "Home"), ("/courses", "Courses"), ("/about", "About")];

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let (scrolled, set_scrolled) = signal(false);
    let menu_open = RwSignal::new(false);

    let scroll = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_scrolled.set(is_scrolled(y));
    });
    on_cleanup(move || scroll.remove());

    let header_class = move || {
        let skin = if scrolled.get() {
            "bg-slate-950/90 backdrop-blur-md border-b border-slate-800 shadow-lg shadow-black/20"
        } else {
            "bg-transparent border-b border-transparent"
        };
        format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {skin}")
    };

    let account_link = move || {
        if session.is_authenticated() {
            view! { <a href="/profile" class="btn-ghost text-sm px-4 py-2">"Profile"</a> }.into_any()
        } else {
            view! { <a href="/auth" class="btn-primary text-sm px-4 py-2">"Sign In"</a> }.into_any()
        }
    };

    view! {
        <nav class=header_class>
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3 group">
                    <span class="text-3xl group-hover:animate-bounce">"🧩"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-orange-400 to-amber-400 bg-clip-text text-transparent">
                        "CodeCraft"
                    </span>
                </a>
                <div class="hidden md:flex items-center gap-6">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="text-slate-400 hover:text-white transition-colors">{label}</a>
                            }
                        })
                        .collect_view()}
                    {account_link}
                </div>
                <button
                    type="button"
                    class="md:hidden text-slate-300 hover:text-white text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden px-6 pb-4 flex flex-col gap-3 bg-slate-950/95 border-b border-slate-800">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="text-slate-300 hover:text-white py-1"
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div on:click=move |_| menu_open.set(false)>{account_link}</div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_opaque_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
    }
}
