//! The fixed course catalog and lookups over it.

mod filter;

pub use filter::*;

use std::sync::LazyLock;

use crate::common::CatalogError;
use crate::models::{Course, CourseCategory, CourseLevel};

/// Number of courses featured in the landing page grid.
pub const LANDING_COURSE_COUNT: usize = 4;

/// Number of related courses suggested on a detail page.
pub const RELATED_COURSE_COUNT: usize = 3;

static CATALOG: LazyLock<Vec<Course>> = LazyLock::new(build_catalog);

/// Every course, in catalog order.
pub fn all_courses() -> &'static [Course] {
    &CATALOG
}

/// The courses shown in the landing page grid.
pub fn landing_courses() -> &'static [Course] {
    &CATALOG[..LANDING_COURSE_COUNT.min(CATALOG.len())]
}

pub fn find_course(id: &str) -> Result<&'static Course, CatalogError> {
    CATALOG
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

/// Up to [`RELATED_COURSE_COUNT`] other courses, in catalog order.
pub fn related_courses(id: &str) -> Vec<&'static Course> {
    CATALOG
        .iter()
        .filter(|c| c.id != id)
        .take(RELATED_COURSE_COUNT)
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_catalog() -> Vec<Course> {
    vec![
        Course {
            id: "web-fundamentals".into(),
            title: "Web Development Fundamentals".into(),
            description: "Learn HTML, CSS, and JavaScript with interactive 3D visualizations of the DOM and CSS box model.".into(),
            long_description: "This comprehensive course introduces you to the core technologies of web development through interactive 3D visualizations. Instead of just reading about how the DOM works, you'll see it visualized in 3D space. You'll learn how CSS affects layout through actual 3D models of the box model, and understand JavaScript execution through visual animations of the event loop and call stack.".into(),
            level: CourseLevel::Beginner,
            duration: "6 weeks".into(),
            category: CourseCategory::WebDevelopment,
            rating: 4.8,
            students: 2456,
            image: "https://images.unsplash.com/photo-1593720213428-28a5b9e94613?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["Sarah Johnson", "Michael Chen"]),
            modules: strings(&[
                "Introduction to HTML and the DOM Visualized",
                "CSS Fundamentals and the 3D Box Model",
                "JavaScript Basics and Visual Execution",
                "Responsive Design Principles",
                "Introduction to Web APIs",
                "Building Your First Interactive Website",
            ]),
        },
        Course {
            id: "3d-modeling".into(),
            title: "3D Modeling for Developers".into(),
            description: "Explore 3D modeling principles using WebGL and Three.js to create interactive visualizations.".into(),
            long_description: "This intermediate course bridges the gap between web development and 3D graphics programming. You'll learn fundamental 3D concepts like meshes, materials, lighting, and cameras, all using JavaScript and popular libraries like Three.js. By the end of the course, you'll be able to create interactive 3D visualizations that can be embedded in websites and web applications.".into(),
            level: CourseLevel::Intermediate,
            duration: "8 weeks".into(),
            category: CourseCategory::Graphics3d,
            rating: 4.7,
            students: 1879,
            image: "https://images.unsplash.com/photo-1569748130764-3fed0c102c59?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["Alex Rivera", "Priya Patel"]),
            modules: strings(&[
                "Introduction to 3D Graphics Concepts",
                "Setting Up Three.js in Web Projects",
                "Working with Meshes and Materials",
                "Lighting and Cameras",
                "Animation and Interaction",
                "Performance Optimization",
                "Building Complex 3D Scenes",
                "Final Project: Interactive 3D Visualization",
            ]),
        },
        Course {
            id: "algorithms-visualized".into(),
            title: "Algorithms Visualized".into(),
            description: "Master algorithms and data structures through interactive 3D visualizations and animations.".into(),
            long_description: "Understanding algorithms and data structures is essential for any programmer, but these concepts can be difficult to grasp through text alone. This course uses interactive 3D visualizations to make these abstract concepts concrete. You'll see sorting algorithms manipulate 3D objects in real-time, understand tree structures through explorable 3D models, and learn graph algorithms through interactive network visualizations.".into(),
            level: CourseLevel::Intermediate,
            duration: "10 weeks".into(),
            category: CourseCategory::ComputerScience,
            rating: 4.9,
            students: 2134,
            image: "https://images.unsplash.com/photo-1580927752452-89d86da3fa0a?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["David Kim", "Elena Rodriguez"]),
            modules: strings(&[
                "Introduction to Algorithm Analysis",
                "Array Operations Visualized",
                "Sorting Algorithms in 3D",
                "Tree Structures Explored",
                "Graph Algorithms and Interactive Networks",
                "Hash Tables and Collision Resolution",
                "Dynamic Programming Visualized",
                "Advanced Data Structures",
                "Algorithm Design Techniques",
                "Final Project: Visual Algorithm Explorer",
            ]),
        },
        Course {
            id: "advanced-webgl".into(),
            title: "Advanced WebGL Programming".into(),
            description: "Deep dive into WebGL shaders, advanced rendering techniques, and performance optimization.".into(),
            long_description: "This advanced course takes your WebGL and 3D programming skills to the next level. You'll learn how to write custom shaders, implement advanced rendering techniques, and optimize your 3D applications for maximum performance. Through hands-on projects, you'll create stunning visual effects and build complex 3D applications that run smoothly in web browsers.".into(),
            level: CourseLevel::Advanced,
            duration: "12 weeks".into(),
            category: CourseCategory::Graphics3d,
            rating: 4.6,
            students: 1562,
            image: "https://images.unsplash.com/photo-1550439062-609e1531270e?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["James Wilson", "Nina Takahashi"]),
            modules: strings(&[
                "WebGL Architecture Deep Dive",
                "GLSL Shader Programming Fundamentals",
                "Advanced Material Systems",
                "Post-Processing Effects",
                "Particle Systems and Simulation",
                "Shadow Mapping Techniques",
                "Physically Based Rendering",
                "Scene Organization and Management",
                "Performance Optimization Strategies",
                "Memory Management in WebGL",
                "Integration with Web Applications",
                "Final Project: Advanced 3D Web Application",
            ]),
        },
        Course {
            id: "responsive-design".into(),
            title: "Responsive Design Masterclass".into(),
            description: "Create beautiful, responsive websites that work perfectly on any device.".into(),
            long_description: "Layouts that adapt to every screen start with a clear mental model of how boxes flow, stretch, and wrap. This course visualizes flexbox and grid as layered 3D planes so you can watch content reflow as the viewport changes, then puts that intuition to work on fluid typography, responsive images, and mobile-first navigation patterns.".into(),
            level: CourseLevel::Beginner,
            duration: "4 weeks".into(),
            category: CourseCategory::WebDevelopment,
            rating: 4.5,
            students: 2890,
            image: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["Elena Rodriguez", "Sarah Johnson"]),
            modules: strings(&[
                "Fluid Layouts and the Viewport",
                "Flexbox and Grid Visualized",
                "Responsive Images and Typography",
                "Final Project: A Site for Every Screen",
            ]),
        },
        Course {
            id: "javascript-advanced".into(),
            title: "Advanced JavaScript Concepts".into(),
            description: "Master advanced JavaScript concepts with 3D visualizations of closures, prototype chains, and more.".into(),
            long_description: "Closures, prototypes, and the event loop are where most JavaScript developers get stuck. This course renders scopes as nested volumes, prototype chains as linked structures you can walk, and asynchronous code as a timeline of queued tasks, so the behavior of tricky code becomes something you can see rather than memorize.".into(),
            level: CourseLevel::Advanced,
            duration: "8 weeks".into(),
            category: CourseCategory::WebDevelopment,
            rating: 4.9,
            students: 1756,
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=2670&q=80".into(),
            instructors: strings(&["Michael Chen", "David Kim"]),
            modules: strings(&[
                "Scopes and Closures in 3D",
                "Prototype Chains Explored",
                "The Event Loop Visualized",
                "Promises and Async Functions",
                "Iterators and Generators",
                "Proxies and Reflection",
                "Memory and Garbage Collection",
                "Final Project: Visual Debugger",
            ]),
        },
    ]
}
