use serde::{Deserialize, Serialize};

use super::{CourseCategory, CourseLevel};

/// One offered course, as shown on the listing and detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub level: CourseLevel,
    pub duration: String,
    pub category: CourseCategory,
    pub rating: f32,
    pub students: u32,
    pub image: String,
    pub instructors: Vec<String>,
    pub modules: Vec<String>,
}

impl Course {
    /// Enrollment count with thousands separators, e.g. `2,456`.
    pub fn students_display(&self) -> String {
        let digits = self.students.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    pub fn detail_href(&self) -> String {
        format!("/courses/{}", self.id)
    }
}

/// A filter selection that is either the "all" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Selection<CourseLevel> {
    pub const ALL_LABEL: &'static str = "All Levels";

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(level) => level.as_str(),
        }
    }

    /// Parses a select-box value; the sentinel label and `all` both mean [`Selection::All`].
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.eq_ignore_ascii_case(Self::ALL_LABEL) || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }

    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(CourseLevel::ALL.into_iter().map(Self::Only))
    }
}

impl Selection<CourseCategory> {
    pub const ALL_LABEL: &'static str = "All Categories";

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        if s.eq_ignore_ascii_case(Self::ALL_LABEL) || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }

    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(CourseCategory::ALL.into_iter().map(Self::Only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_display_groups_thousands() {
        let mut course = crate::catalog::all_courses()[0].clone();
        course.students = 2456;
        assert_eq!(course.students_display(), "2,456");
        course.students = 999;
        assert_eq!(course.students_display(), "999");
        course.students = 1_234_567;
        assert_eq!(course.students_display(), "1,234,567");
    }

    #[test]
    fn selection_parses_sentinels_and_values() {
        assert_eq!(Selection::<CourseLevel>::parse("All Levels"), Ok(Selection::All));
        assert_eq!(Selection::<CourseLevel>::parse("all"), Ok(Selection::All));
        assert_eq!(
            Selection::<CourseLevel>::parse("beginner"),
            Ok(Selection::Only(CourseLevel::Beginner))
        );
        assert_eq!(
            Selection::<CourseCategory>::parse("3D Graphics"),
            Ok(Selection::Only(CourseCategory::Graphics3d))
        );
        assert!(Selection::<CourseCategory>::parse("Cooking").is_err());
    }

    #[test]
    fn selection_options_start_with_sentinel() {
        let labels: Vec<_> = Selection::<CourseLevel>::options().map(|s| s.label()).collect();
        assert_eq!(labels, ["All Levels", "Beginner", "Intermediate", "Advanced"]);
    }
}
