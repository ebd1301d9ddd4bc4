//! Course detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::get_course;
use crate::catalog::related_courses;
use crate::common::CatalogError;
use crate::frontend::components::{CourseCard, Footer, LevelBadge, Nav};
use crate::models::Course;
use crate::services::{report_lookup, use_toaster, Notifier, ToastOptions};

pub const ENROLLED: &str = "Course added to cart";

/// Folds a `get_course` response into a lookup result. Transport failures
/// count as cancelled and stay silent.
pub fn lookup_outcome(
    id: &str,
    response: Result<Option<Course>, ServerFnError>,
) -> Result<Course, CatalogError> {
    match response {
        Ok(Some(course)) => Ok(course),
        Ok(None) => Err(CatalogError::NotFound(id.to_string())),
        Err(err) => {
            tracing::debug!(%id, %err, "course lookup failed");
            Err(CatalogError::Cancelled)
        }
    }
}

/// Reports a `get_course` response for `id` through `notifier` and hands back
/// the course when there is one.
pub fn surface_lookup<N>(
    notifier: &N,
    id: &str,
    response: Result<Option<Course>, ServerFnError>,
) -> Option<Course>
where
    N: Notifier + ?Sized,
{
    report_lookup(notifier, lookup_outcome(id, response))
}

#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let toaster = use_toaster();
    let course_id = move || params.read().get("id").unwrap_or_default();
    let course = Resource::new(course_id, get_course);

    Effect::new(move |_| {
        if let Some(response) = course.get() {
            let id = params.read_untracked().get("id").unwrap_or_default();
            surface_lookup(&toaster, &id, response);
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>
            <Suspense fallback=|| view! { <Spinner/> }>
                {move || Suspend::new(async move {
                    match course.await {
                        Ok(Some(course)) => view! { <CourseDetail course/> }.into_any(),
                        _ => view! { <CourseMissing/> }.into_any(),
                    }
                })}
            </Suspense>
            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="pt-40 pb-32 flex justify-center" aria-busy="true">
            <span class="w-12 h-12 border-4 border-slate-700 border-t-orange-500 rounded-full animate-spin"></span>
        </div>
    }
}

#[component]
fn CourseMissing() -> impl IntoView {
    view! {
        <section class="pt-40 pb-32 px-6 text-center">
            <h1 class="text-4xl font-bold text-white mb-4">"Course Not Found"</h1>
            <p class="text-slate-400 mb-8">"The course you're looking for doesn't exist or has been removed."</p>
            <a href="/courses" class="btn-primary">"Browse Courses"</a>
        </section>
    }
}

#[component]
fn CourseDetail(course: Course) -> impl IntoView {
    let toaster = use_toaster();
    let enrolled_in = format!("You've enrolled in {}.", course.title);
    let related = related_courses(&course.id)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <section class="pt-32 pb-12 px-6">
            <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-3 gap-10">
                <div class="lg:col-span-2">
                    <a href="/courses" class="text-sm text-slate-500 hover:text-slate-300">"← All courses"</a>
                    <div class="flex items-center gap-3 mt-6 mb-4">
                        <LevelBadge level=course.level />
                        <span class="text-sm text-slate-500">{course.category.as_str()}</span>
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold text-white mb-6">{course.title.clone()}</h1>
                    <p class="text-lg text-slate-400 leading-relaxed mb-8">{course.long_description.clone()}</p>

                    <h2 class="text-2xl font-semibold text-white mb-4">"What you'll learn"</h2>
                    <ol class="space-y-3 mb-8">
                        {course
                            .modules
                            .iter()
                            .enumerate()
                            .map(|(i, module)| {
                                view! {
                                    <li class="flex gap-4 p-4 rounded-lg bg-slate-900/50 border border-slate-800">
                                        <span class="text-orange-400 font-mono">{format!("{:02}", i + 1)}</span>
                                        <span class="text-slate-300">{module.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>

                <aside class="rounded-xl overflow-hidden border border-slate-800 bg-slate-900/50 h-fit">
                    <img src=course.image.clone() alt=course.title.clone() class="w-full aspect-video object-cover"/>
                    <div class="p-6 space-y-4">
                        <dl class="grid grid-cols-2 gap-4 text-sm">
                            <dt class="text-slate-500">"Duration"</dt>
                            <dd class="text-white text-right">{course.duration.clone()}</dd>
                            <dt class="text-slate-500">"Rating"</dt>
                            <dd class="text-white text-right">{format!("★ {:.1}", course.rating)}</dd>
                            <dt class="text-slate-500">"Students"</dt>
                            <dd class="text-white text-right">{course.students_display()}</dd>
                        </dl>
                        <div>
                            <p class="text-sm text-slate-500 mb-2">"Instructors"</p>
                            <ul class="text-white text-sm space-y-1">
                                {course
                                    .instructors
                                    .iter()
                                    .map(|name| view! { <li>{name.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <button
                            type="button"
                            class="btn-primary w-full"
                            on:click=move |_| {
                                toaster.success(ENROLLED, ToastOptions::described(enrolled_in.clone()))
                            }
                        >
                            "Enroll Now"
                        </button>
                    </div>
                </aside>
            </div>
        </section>

        <Show when={
            let empty = related.is_empty();
            move || !empty
        }>
            <section class="py-16 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-2xl font-semibold text-white mb-8">"More courses you may like"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {related.clone().into_iter().map(|course| view! { <CourseCard course/> }).collect_view()}
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::services::{ToastKind, COURSE_NOT_FOUND};

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(ToastKind, String)>>);

    impl Notifier for Recorder {
        fn notify(&self, kind: ToastKind, message: &str, _options: ToastOptions) {
            self.0.borrow_mut().push((kind, message.to_string()));
        }
    }

    #[test]
    fn empty_response_means_not_found() {
        assert_eq!(
            lookup_outcome("ghost", Ok(None)),
            Err(CatalogError::NotFound("ghost".into()))
        );
    }

    #[test]
    fn transport_errors_are_silent() {
        let outcome = lookup_outcome("3d-modeling", Err(ServerFnError::new("offline")));
        assert_eq!(outcome, Err(CatalogError::Cancelled));
    }

    #[test]
    fn found_course_passes_through() {
        let course = crate::catalog::find_course("3d-modeling").cloned().unwrap();
        assert_eq!(lookup_outcome("3d-modeling", Ok(Some(course.clone()))), Ok(course));
    }

    #[test]
    fn unknown_course_page_raises_exactly_one_error_toast() {
        let recorder = Recorder::default();
        assert!(surface_lookup(&recorder, "rust-for-cats", Ok(None)).is_none());
        assert_eq!(
            *recorder.0.borrow(),
            vec![(ToastKind::Error, COURSE_NOT_FOUND.to_string())]
        );
    }

    #[test]
    fn failed_transport_on_course_page_raises_nothing() {
        let recorder = Recorder::default();
        let response = Err(ServerFnError::new("offline"));
        assert!(surface_lookup(&recorder, "3d-modeling", response).is_none());
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn found_course_page_raises_nothing() {
        let recorder = Recorder::default();
        let course = crate::catalog::find_course("3d-modeling").cloned().ok();
        assert_eq!(surface_lookup(&recorder, "3d-modeling", Ok(course.clone())), course);
        assert!(recorder.0.borrow().is_empty());
    }
}
