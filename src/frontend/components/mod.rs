//! Reusable UI components for the CodeCraft frontend

mod alert;
mod button;
mod course_card;
mod feature_card;
mod footer;
mod input;
mod learning_widget;
mod nav;
mod toaster;

pub use alert::ErrorAlert;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use course_card::{CourseCard, LevelBadge};
pub use feature_card::{FeatureCard, TestimonialCard};
pub use footer::Footer;
pub use input::{EmailInput, PasswordInput, TextInput};
pub use learning_widget::LearningWidget;
pub use nav::{is_scrolled, Nav, SCROLL_THRESHOLD};
pub use toaster::ToastStack;
