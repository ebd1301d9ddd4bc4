use crate::models::{Course, CourseCategory, CourseLevel, Selection};

/// Filter values driving the course listing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub query: String,
    pub category: Selection<CourseCategory>,
    pub level: Selection<CourseLevel>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        matches_query(course, &self.query)
            && self.category.admits(&course.category)
            && self.level.admits(&course.level)
    }

    /// The matching courses, in input order.
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }

    /// True when any filter differs from the cleared state.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.category.is_all() || !self.level.is_all()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring match over title and description. An empty query matches.
pub fn matches_query(course: &Course, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    course.title.to_lowercase().contains(&needle)
        || course.description.to_lowercase().contains(&needle)
}

/// Level-only filter used by the landing page grid.
pub fn filter_by_level<'a>(courses: &'a [Course], level: Selection<CourseLevel>) -> Vec<&'a Course> {
    courses.iter().filter(|c| level.admits(&c.level)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_courses;

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn default_filter_is_inactive_and_admits_everything() {
        let filter = CourseFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(all_courses()).len(), all_courses().len());
    }

    #[test]
    fn query_is_case_insensitive() {
        let filter = CourseFilter {
            query: "WEBGL".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(all_courses())), ["3d-modeling", "advanced-webgl"]);
    }

    #[test]
    fn category_filter_keeps_input_order() {
        let filter = CourseFilter {
            category: Selection::Only(CourseCategory::WebDevelopment),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter.apply(all_courses())),
            ["web-fundamentals", "responsive-design", "javascript-advanced"]
        );
    }

    #[test]
    fn landing_level_filter() {
        let courses = crate::catalog::landing_courses();
        let picked = filter_by_level(courses, Selection::Only(CourseLevel::Intermediate));
        assert_eq!(ids(&picked), ["3d-modeling", "algorithms-visualized"]);
        assert_eq!(filter_by_level(courses, Selection::All).len(), courses.len());
    }
}
