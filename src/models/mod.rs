pub use course::*;
pub use course_category::*;
pub use course_level::*;

mod course;
mod course_category;
mod course_level;
