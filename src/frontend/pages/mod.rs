//! Page components for the CodeCraft frontend

mod about;
mod auth;
mod course;
mod courses;
mod landing;
mod not_found;
mod profile;

pub use about::AboutPage;
pub use auth::AuthPage;
pub use course::{lookup_outcome, CoursePage, ENROLLED};
pub use courses::CoursesPage;
pub use landing::{LandingPage, WELCOME_DELAY};
pub use not_found::NotFound;
pub use profile::{ProfilePage, LOGGED_OUT};
