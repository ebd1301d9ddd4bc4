//! The decorative "learning" animation: a small scene of labelled shapes
//! that walks through four programming concepts.
//!
//! [`Scene`] is plain data advanced by [`Scene::advance`]; rendering goes
//! through [`camera::draw_list`] so none of this touches the DOM.

pub mod camera;
pub mod frame_loop;
pub mod shape;
pub mod sort;
pub mod steps;

use glam::{EulerRot, Quat, Vec2};

pub use camera::{draw_list, Camera, DrawCmd};
pub use frame_loop::{FrameLoop, FrameScheduler};
pub use shape::{Behavior, Color, Primitive, Shape};
pub use sort::SortAnimation;
pub use steps::{build_shapes, step, Step, STEPS, STEP_COUNT};

/// Longest frame gap fed to the animation, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;
/// Largest scene tilt in radians when the pointer sits at a viewport edge.
pub const TILT_LIMIT: f32 = 0.35;
/// Fraction of the remaining tilt closed each 60th of a second.
const TILT_EASING: f32 = 0.08;

pub struct Scene {
    step: usize,
    playing: bool,
    shapes: Vec<Shape>,
    sort: Option<SortAnimation>,
    clock: f32,
    frames: u64,
    camera: Camera,
    tilt: Vec2,
    tilt_target: Vec2,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let shapes = build_shapes(0);
        Self {
            step: 0,
            playing: true,
            sort: SortAnimation::from_shapes(&shapes),
            shapes,
            clock: 0.0,
            frames: 0,
            camera: Camera::default(),
            tilt: Vec2::ZERO,
            tilt_target: Vec2::ZERO,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static Step {
        step(self.step)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn sort(&self) -> Option<&SortAnimation> {
        self.sort.as_ref()
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    /// Jumps to step `index` (modulo the step count). Selecting the current
    /// step keeps its shapes where they are.
    pub fn select(&mut self, index: usize) {
        let index = index % STEP_COUNT;
        if index == self.step {
            return;
        }
        tracing::debug!(from = self.step, to = index, "scene step selected");
        self.step = index;
        self.shapes = build_shapes(index);
        self.sort = SortAnimation::from_shapes(&self.shapes);
        self.clock = 0.0;
    }

    pub fn next(&mut self) {
        self.select((self.step + 1) % STEP_COUNT);
    }

    pub fn prev(&mut self) {
        self.select((self.step + STEP_COUNT - 1) % STEP_COUNT);
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Points the scene tilt toward a pointer at normalized viewport
    /// coordinates, `-1.0..=1.0` on both axes.
    pub fn point_at(&mut self, nx: f32, ny: f32) {
        self.tilt_target = Vec2::new(ny.clamp(-1.0, 1.0), nx.clamp(-1.0, 1.0)) * TILT_LIMIT;
    }

    /// Moves the scene `dt` seconds forward. Tilt keeps easing while paused;
    /// shapes only move while playing. Returns whether the shapes moved.
    pub fn advance(&mut self, dt: f32) -> bool {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DELTA) } else { 0.0 };
        let ease = 1.0 - (1.0 - TILT_EASING).powf(dt * 60.0);
        self.tilt += (self.tilt_target - self.tilt) * ease;

        if !self.playing {
            return false;
        }
        self.clock += dt;
        self.frames += 1;
        for shape in &mut self.shapes {
            shape.animate(self.clock, dt);
        }
        if let Some(sort) = &mut self.sort {
            sort.tick(&mut self.shapes);
        }
        true
    }

    pub fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, 0.0)
    }

    pub fn draw_list(&self) -> Vec<DrawCmd> {
        draw_list(&self.shapes, self.view_rotation(), &self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn starts_playing_on_the_first_step() {
        let scene = Scene::new();
        assert_eq!(scene.step(), 0);
        assert!(scene.is_playing());
        assert_eq!(scene.shapes().len(), steps::SHAPE_COUNTS[0]);
        assert!(scene.sort().is_none());
    }

    #[test]
    fn select_wraps_and_rebuilds() {
        let mut scene = Scene::new();
        scene.select(7);
        assert_eq!(scene.step(), 3);
        assert_eq!(scene.current().title, STEPS[3].title);
        assert_eq!(scene.shapes().len(), steps::SHAPE_COUNTS[3]);
        assert!(scene.sort().is_some());
    }

    #[test]
    fn reselecting_the_current_step_keeps_progress() {
        let mut scene = Scene::new();
        scene.advance(FRAME);
        let clock = scene.clock();
        let shapes = scene.shapes().to_vec();
        scene.select(0);
        assert_eq!(scene.clock(), clock);
        assert_eq!(scene.shapes(), shapes.as_slice());
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut scene = Scene::new();
        scene.prev();
        assert_eq!(scene.step(), STEP_COUNT - 1);
        scene.next();
        assert_eq!(scene.step(), 0);
    }

    #[test]
    fn paused_scene_holds_shapes_but_eases_tilt() {
        let mut scene = Scene::new();
        scene.toggle_playing();
        scene.point_at(1.0, 0.0);
        let shapes = scene.shapes().to_vec();

        assert!(!scene.advance(FRAME));
        assert_eq!(scene.shapes(), shapes.as_slice());
        assert_eq!(scene.frames(), 0);
        assert!(scene.tilt().y > 0.0);
    }

    #[test]
    fn tilt_settles_within_limit() {
        let mut scene = Scene::new();
        scene.point_at(5.0, -5.0);
        for _ in 0..600 {
            scene.advance(FRAME);
        }
        assert!((scene.tilt().y - TILT_LIMIT).abs() < 1e-3);
        assert!((scene.tilt().x + TILT_LIMIT).abs() < 1e-3);
    }

    #[test]
    fn long_frame_gaps_are_clamped() {
        let mut scene = Scene::new();
        scene.advance(5.0);
        assert!((scene.clock() - MAX_FRAME_DELTA).abs() < 1e-6);
        scene.advance(f32::NAN);
        assert!((scene.clock() - MAX_FRAME_DELTA).abs() < 1e-6);
    }

    #[test]
    fn resize_reaches_the_camera() {
        let mut scene = Scene::new();
        scene.resize(300.0, 150.0);
        assert_eq!(scene.camera().width, 300.0);
        assert!(!scene.draw_list().is_empty());
    }
}
