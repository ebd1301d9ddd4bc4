use leptos::prelude::*;

use crate::models::{Course, CourseLevel};

fn level_badge_classes(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "bg-emerald-500/10 text-emerald-400 border-emerald-500/30",
        CourseLevel::Intermediate => "bg-sky-500/10 text-sky-400 border-sky-500/30",
        CourseLevel::Advanced => "bg-purple-500/10 text-purple-400 border-purple-500/30",
    }
}

#[component]
pub fn LevelBadge(level: CourseLevel) -> impl IntoView {
    view! {
        <span class=format!(
            "px-3 py-1 rounded-full border text-xs font-medium {}",
            level_badge_classes(level),
        )>{level.as_str()}</span>
    }
}

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = course.detail_href();

    view! {
        <a
            href=href
            class="group flex flex-col rounded-xl overflow-hidden bg-slate-900/50 border border-slate-800
                   hover:border-orange-500/50 transition-all duration-300 hover:-translate-y-1"
        >
            <div class="aspect-video overflow-hidden bg-slate-800">
                <img
                    src=course.image.clone()
                    alt=course.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="flex flex-col flex-grow p-6">
                <div class="flex items-center justify-between mb-3">
                    <LevelBadge level=course.level />
                    <span class="text-xs text-slate-500">{course.category.as_str()}</span>
                </div>
                <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-orange-400 transition-colors">
                    {course.title.clone()}
                </h3>
                <p class="text-slate-400 text-sm leading-relaxed flex-grow">{course.description.clone()}</p>
                <div class="flex items-center justify-between mt-4 pt-4 border-t border-slate-800 text-sm text-slate-400">
                    <span>{format!("⏱ {}", course.duration)}</span>
                    <span>{format!("★ {:.1}", course.rating)}</span>
                    <span>{format!("👥 {}", course.students_display())}</span>
                </div>
            </div>
        </a>
    }
}
