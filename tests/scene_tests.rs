mod common;

#[cfg(test)]
pub mod scene_tests {
    use super::common::*;

    use codecraft::scene::steps::{SHAPE_COUNTS, SORT_VALUES};
    use codecraft::scene::*;

    #[test]
    fn test_select_takes_index_modulo_step_count() {
        let mut scene = Scene::new();
        for i in 0..12 {
            scene.select(i);
            assert_eq!(scene.step(), i % STEP_COUNT);
            assert_eq!(scene.current().title, STEPS[i % STEP_COUNT].title);
            assert_eq!(scene.shapes().len(), SHAPE_COUNTS[i % STEP_COUNT]);
        }
    }

    #[test]
    fn test_next_then_prev_returns_to_step() {
        let mut scene = Scene::new();
        for start in 0..STEP_COUNT {
            scene.select(start);
            scene.next();
            scene.prev();
            assert_eq!(scene.step(), start);
        }
    }

    #[test]
    fn test_toggle_twice_restores_running_state() {
        let mut scene = Scene::new();
        scene.select(1);
        run_frames(&mut scene, 10);
        let count = scene.shapes().len();

        scene.toggle_playing();
        assert!(!scene.is_playing());
        scene.toggle_playing();
        assert!(scene.is_playing());
        assert_eq!(scene.shapes().len(), count);
        assert!(scene.advance(FRAME));
    }

    #[test]
    fn test_step_change_rebuilds_shapes() {
        let mut scene = Scene::new();
        let fresh = build_shapes(0);
        run_frames(&mut scene, 30);
        assert_ne!(scene.shapes(), fresh.as_slice());

        scene.next();
        scene.prev();
        assert_eq!(scene.shapes(), fresh.as_slice());
        assert_eq!(scene.clock(), 0.0);
    }

    #[test]
    fn test_sort_demo_finishes_ascending() {
        let mut scene = Scene::new();
        scene.select(3);
        assert_eq!(sort_values(&scene), SORT_VALUES);

        let frames = frames_until_sorted(&mut scene, 20_000).expect("sort should finish");
        assert!(frames > 0);
        let mut expected = SORT_VALUES.to_vec();
        expected.sort_unstable();
        assert_eq!(sort_values(&scene), expected);
    }

    #[test]
    fn test_sort_demo_loops_forever() {
        let mut scene = Scene::new();
        scene.select(3);
        for _ in 0..3 {
            frames_until_sorted(&mut scene, 20_000).expect("sort should finish");
            // Run past the hold so the bars go back to their starting order.
            while scene.sort().is_some_and(|s| s.pass_complete()) {
                scene.advance(FRAME);
            }
            assert_eq!(sort_values(&scene), SORT_VALUES);
        }
    }

    #[test]
    fn test_paused_sort_does_not_advance() {
        let mut scene = Scene::new();
        scene.select(3);
        run_frames(&mut scene, 40);
        scene.set_playing(false);
        let before = scene.shapes().to_vec();
        run_frames(&mut scene, 200);
        assert_eq!(scene.shapes(), before.as_slice());
    }

    #[test]
    fn test_draw_list_covers_every_shape() {
        let mut scene = Scene::new();
        scene.resize(800.0, 450.0);
        for step in 0..STEP_COUNT {
            scene.select(step);
            run_frames(&mut scene, 5);
            let cmds = scene.draw_list();
            let labels = cmds.iter().filter(|c| c.is_label()).count();
            let labelled = scene.shapes().iter().filter(|s| s.label.is_some()).count();
            assert_eq!(labels, labelled, "step {step}");
            assert!(cmds.len() > labels, "step {step}");
        }
    }
}
