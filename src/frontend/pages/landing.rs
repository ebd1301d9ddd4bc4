use std::time::Duration;

use leptos::prelude::*;

use crate::api::Subscribe;
use crate::catalog::{filter_by_level, landing_courses};
use crate::frontend::components::{
    Button, ButtonSize, ButtonVariant, CourseCard, ErrorAlert, FeatureCard, Footer, LearningWidget, Nav, TextInput,
};
use crate::models::{CourseLevel, Selection};
use crate::services::{use_toaster, Notifier, ToastOptions};

/// Delay before the welcome toast shows up after the landing page mounts.
pub const WELCOME_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn LandingPage() -> impl IntoView {
    let toaster = use_toaster();

    Effect::new(move |_| {
        let shown = set_timeout_with_handle(
            move || {
                toaster.info(
                    "Welcome to CodeCraft",
                    ToastOptions::described("Explore our interactive 3D programming courses")
                        .with_action("Explore", "#courses"),
                )
            },
            WELCOME_DELAY,
        );
        if let Ok(handle) = shown {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>

            <section class="min-h-screen pt-32 pb-20 px-6 flex flex-col items-center justify-center text-center">
                <span class="mb-4 px-3 py-1 rounded-full bg-slate-800 text-slate-300 text-xs font-medium tracking-wider">
                    "LEARN. CREATE. INNOVATE."
                </span>
                <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                    "Master Programming Through"<br/>
                    <span class="bg-gradient-to-r from-orange-400 via-amber-400 to-orange-500 bg-clip-text text-transparent">
                        "Interactive Learning"
                    </span>
                </h1>
                <p class="text-xl text-slate-400 max-w-2xl mb-10">
                    "Discover a revolutionary approach to learning programming with immersive visualization "
                    "and hands-on projects that transform abstract concepts into tangible experiences."
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <Button href="#courses" size=ButtonSize::Large>"Explore Courses"</Button>
                    <Button href="#about" variant=ButtonVariant::Ghost size=ButtonSize::Large>"Learn More"</Button>
                </div>
            </section>

            <section id="interactive-learning" class="py-20 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center max-w-3xl mx-auto mb-12">
                        <span class="text-xs font-medium tracking-wider text-orange-400">"3D LEARNING TECHNOLOGY"</span>
                        <h2 class="text-3xl md:text-4xl font-bold mt-3 mb-4">
                            "Learn Programming Through 3D Visualization"
                        </h2>
                        <p class="text-slate-400">
                            "Our 3D visualizations turn abstract programming concepts into "
                            "tangible models you can explore and understand intuitively."
                        </p>
                    </div>
                    <LearningWidget/>
                </div>
            </section>

            <CourseGrid/>

            <section id="about" class="py-20 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center max-w-3xl mx-auto mb-12">
                        <span class="text-xs font-medium tracking-wider text-orange-400">"OUR APPROACH"</span>
                        <h2 class="text-3xl md:text-4xl font-bold mt-3 mb-4">"Why Learn With 3D Visualizations?"</h2>
                        <p class="text-slate-400">
                            "Our teaching approach uses 3D models to make programming concepts tangible and interactive."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <FeatureCard
                            icon="💡"
                            title="Visual Learning"
                            desc="Transform abstract concepts into visual, interactive 3D models that enhance understanding and retention."
                        />
                        <FeatureCard
                            icon="🛠"
                            title="Hands-On Projects"
                            desc="Apply your knowledge through practical, project-based learning experiences with real-time feedback."
                        />
                        <FeatureCard
                            icon="🤝"
                            title="Community Learning"
                            desc="Join a supportive community of learners and instructors who are passionate about programming."
                        />
                    </div>
                    <p class="text-center mt-10">
                        <a href="/about" class="text-orange-400 hover:text-orange-300 font-medium">
                            "Learn more about our methodology →"
                        </a>
                    </p>
                </div>
            </section>

            <Newsletter/>

            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}

/// Landing page course grid with a level filter.
#[component]
fn CourseGrid() -> impl IntoView {
    let level = RwSignal::new(Selection::<CourseLevel>::All);
    let visible = move || {
        filter_by_level(landing_courses(), level.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <section id="courses" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center max-w-3xl mx-auto mb-10">
                    <span class="text-xs font-medium tracking-wider text-orange-400">"OUR CURRICULUM"</span>
                    <h2 class="text-3xl md:text-4xl font-bold mt-3 mb-4">"Explore Our Courses"</h2>
                    <p class="text-slate-400">
                        "Programming fundamentals paired with interactive 3D visualizations, "
                        "so complex concepts are easier to understand."
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-10">
                    {Selection::<CourseLevel>::options()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if level.get() == option {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-orange-500 text-white"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-slate-800 text-slate-300 hover:bg-slate-700"
                                        }
                                    }
                                    on:click=move |_| level.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <For each=visible key=|course| course.id.clone() let:course>
                        <CourseCard course/>
                    </For>
                </div>
                <p class="text-center mt-10">
                    <Button href="/courses" variant=ButtonVariant::Ghost size=ButtonSize::Small>"View all courses"</Button>
                </p>
            </div>
        </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let toaster = use_toaster();
    let subscribe = ServerAction::<Subscribe>::new();
    let email = RwSignal::new(String::new());
    let pending = subscribe.pending();
    let result = subscribe.value();

    Effect::new(move |_| {
        if let Some(Ok(response)) = result.get() {
            toaster.success("Subscribed!", ToastOptions::described(response.message));
            email.set(String::new());
        }
    });

    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    view! {
        <section class="py-24 px-6">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-6">"Join Our Community"</h2>
                <p class="text-slate-400 mb-8">
                    "Subscribe to our newsletter for the latest courses, tutorials, and programming resources."
                </p>
                <Show when=move || error_message().is_some()>
                    <ErrorAlert message=error_message().unwrap_or_default() />
                </Show>
                <ActionForm action=subscribe attr:class="max-w-md mx-auto flex items-end gap-2 text-left">
                    <div class="flex-grow">
                        <TextInput
                            label="Email"
                            name="email"
                            placeholder="Your email address"
                            input_type="email"
                            required=true
                            value=email
                        />
                    </div>
                    <Button loading=pending loading_text="Subscribing...">"Subscribe →"</Button>
                </ActionForm>
                <p class="text-xs text-slate-500 mt-4">
                    "By subscribing, you agree to our Privacy Policy and Terms of Service."
                </p>
            </div>
        </section>
    }
}
