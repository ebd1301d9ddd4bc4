//! Full course listing with search and filters.

use leptos::ev;
use leptos::prelude::*;

use crate::catalog::{all_courses, CourseFilter};
use crate::frontend::components::{CourseCard, Footer, Nav};
use crate::models::{CourseCategory, CourseLevel, Selection};

const SELECT_CLASSES: &str = "px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white \
    focus:outline-none focus:ring-2 focus:ring-orange-500";

/// The selects always show from `md` up; below that they follow the toggle.
pub fn filter_panel_classes(open: bool) -> &'static str {
    if open {
        "flex flex-col md:flex-row gap-4"
    } else {
        "hidden md:flex md:flex-row gap-4"
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let filter = RwSignal::new(CourseFilter::default());
    let results = Memo::new(move |_| {
        filter.with(|f| f.apply(all_courses()).into_iter().cloned().collect::<Vec<_>>())
    });
    let clear = move |_: ev::MouseEvent| filter.update(CourseFilter::reset);
    let filters_open = RwSignal::new(false);

    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>

            <section class="pt-32 pb-12 px-6 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"All Courses"</h1>
                <p class="text-slate-400 max-w-2xl mx-auto">
                    "Browse the full CodeCraft catalog and find the course that fits where you are."
                </p>
            </section>

            <section class="px-6 pb-20">
                <div class="max-w-6xl mx-auto">
                    <div class="flex flex-col md:flex-row gap-4 mb-6">
                        <input
                            type="search"
                            placeholder="Search courses..."
                            aria-label="Search courses"
                            class=format!("flex-grow {SELECT_CLASSES} placeholder-slate-500")
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filter.update(|f| f.query = query);
                            }
                        />
                        <button
                            type="button"
                            class="md:hidden btn-ghost"
                            aria-expanded=move || filters_open.get().to_string()
                            on:click=move |_| filters_open.update(|open| *open = !*open)
                        >
                            {move || if filters_open.get() { "Hide filters" } else { "Filters" }}
                        </button>
                        <div class=move || filter_panel_classes(filters_open.get())>
                            <select
                                aria-label="Category"
                                class=SELECT_CLASSES
                                prop:value=move || filter.with(|f| f.category.label())
                                on:change=move |ev| {
                                    if let Ok(category) = Selection::<CourseCategory>::parse(&event_target_value(&ev)) {
                                        filter.update(|f| f.category = category);
                                    }
                                }
                            >
                                {Selection::<CourseCategory>::options()
                                    .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                    .collect_view()}
                            </select>
                            <select
                                aria-label="Level"
                                class=SELECT_CLASSES
                                prop:value=move || filter.with(|f| f.level.label())
                                on:change=move |ev| {
                                    if let Ok(level) = Selection::<CourseLevel>::parse(&event_target_value(&ev)) {
                                        filter.update(|f| f.level = level);
                                    }
                                }
                            >
                                {Selection::<CourseLevel>::options()
                                    .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                    .collect_view()}
                            </select>
                            <Show when=move || filter.with(CourseFilter::is_active)>
                                <button type="button" class="btn-ghost text-sm px-4 py-2" on:click=clear>
                                    "Clear filters"
                                </button>
                            </Show>
                        </div>
                    </div>

                    <Show when=move || filter.with(CourseFilter::is_active)>
                        <p class="text-sm text-slate-400 mb-6">
                            {move || {
                                let count = results.with(Vec::len);
                                format!("{count} course{} found", if count == 1 { "" } else { "s" })
                            }}
                        </p>
                    </Show>

                    <Show
                        when=move || results.with(|r| !r.is_empty())
                        fallback=move || view! {
                            <div class="text-center py-20">
                                <p class="text-2xl font-semibold text-white mb-2">"No courses found"</p>
                                <p class="text-slate-400 mb-6">"Try a different search term or filter."</p>
                                <button type="button" class="btn-primary" on:click=clear>"Reset filters"</button>
                            </div>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For each=move || results.get() key=|course| course.id.clone() let:course>
                                <CourseCard course/>
                            </For>
                        </div>
                    </Show>
                </div>
            </section>

            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_filter_panel_hides_on_mobile_only() {
        let classes = filter_panel_classes(false);
        assert!(classes.split_whitespace().any(|c| c == "hidden"));
        assert!(classes.contains("md:flex"));
    }

    #[test]
    fn open_filter_panel_is_visible() {
        assert!(!filter_panel_classes(true).split_whitespace().any(|c| c == "hidden"));
    }
}
