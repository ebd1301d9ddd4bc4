pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::services::{AuthSession, Toaster};
use components::ToastStack;
use pages::{AboutPage, AuthPage, CoursePage, CoursesPage, LandingPage, NotFound, ProfilePage};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-slate-950 text-slate-100 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root component: shared session and toaster, routes, toast overlay
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthSession::new());
    provide_context(Toaster::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/codecraft.css"/>
        <Title text="CodeCraft - Learn Programming Through 3D Visualization"/>
        <Meta name="description" content="Interactive programming courses that turn abstract concepts into 3D models you can explore"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/courses") view=CoursesPage/>
                    <Route path=path!("/courses/:id") view=CoursePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/auth") view=AuthPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
