#![allow(dead_code)]

use codecraft::catalog::CourseFilter;
use codecraft::models::*;
use codecraft::scene::Scene;

pub const FRAME: f32 = 1.0 / 60.0;

pub fn course_ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

pub fn get_seed_filter(query: &str, category: Option<CourseCategory>, level: Option<CourseLevel>) -> CourseFilter {
    CourseFilter {
        query: query.to_string(),
        category: category.map_or(Selection::All, Selection::Only),
        level: level.map_or(Selection::All, Selection::Only),
    }
}

/// Advances `scene` by `frames` 60 Hz frames.
pub fn run_frames(scene: &mut Scene, frames: usize) {
    for _ in 0..frames {
        scene.advance(FRAME);
    }
}

/// Frames until the sort demo of `scene` reports a finished pass, bounded by `limit`.
pub fn frames_until_sorted(scene: &mut Scene, limit: usize) -> Option<usize> {
    for frame in 0..limit {
        if scene.sort()?.pass_complete() {
            return Some(frame);
        }
        scene.advance(FRAME);
    }
    None
}

pub fn sort_values(scene: &Scene) -> Vec<u32> {
    scene
        .sort()
        .map(|sort| sort.values(scene.shapes()))
        .unwrap_or_default()
}
