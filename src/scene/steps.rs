//! The four tutorial steps and the shapes each one shows.

use std::f32::consts::PI;

use glam::Vec3;

use super::shape::{Behavior, Color, Primitive, Shape};

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub const STEP_COUNT: usize = 4;

pub static STEPS: [Step; STEP_COUNT] = [
    Step {
        title: "Variables and Data Types",
        description: "Variables store data in memory. Each data type is represented differently.",
        code: "let count = 42; // Number\nlet name = \"CodeCraft\"; // String\nlet isActive = true; // Boolean",
    },
    Step {
        title: "Arrays and Objects",
        description: "Arrays store ordered collections, while objects represent key-value structures.",
        code: "const numbers = [1, 2, 3, 4];\nconst user = {\n  name: \"Alex\",\n  role: \"Student\"\n};",
    },
    Step {
        title: "Functions and Scope",
        description: "Functions encapsulate code blocks with their own scope and execution context.",
        code: "function calculate(a, b) {\n  let result = a + b;\n  return result;\n}\n\nlet sum = calculate(5, 3);",
    },
    Step {
        title: "Algorithms in Action",
        description: "Watch as sorting algorithms reorganize data in real-time with visual feedback.",
        code: "function bubbleSort(arr) {\n  for(let i = 0; i < arr.length; i++) {\n    for(let j = 0; j < arr.length - i - 1; j++) {\n      if(arr[j] > arr[j+1]) {\n        [arr[j], arr[j+1]] = [arr[j+1], arr[j]];\n      }\n    }\n  }\n  return arr;\n}",
    },
];

/// Shapes built for each step, by index.
pub const SHAPE_COUNTS: [usize; STEP_COUNT] = [3, 9, 5, 8];

/// Starting arrangement of the sorting demo bars.
pub const SORT_VALUES: [u32; 8] = [6, 2, 9, 4, 1, 8, 3, 7];

const BLUE: Color = Color::hex(0x3b82f6);
const GREEN: Color = Color::hex(0x22c55e);
const ORANGE: Color = Color::hex(0xf97316);
const PINK: Color = Color::hex(0xec4899);
const GRAY: Color = Color::hex(0x9ca3af);

const BAR_SPACING: f32 = 0.6;
const BAR_UNIT_HEIGHT: f32 = 0.3;
const BAR_FLOOR: f32 = -1.5;

pub fn step(index: usize) -> &'static Step {
    &STEPS[index % STEP_COUNT]
}

/// Fresh shapes for step `index` (taken modulo the step count).
pub fn build_shapes(index: usize) -> Vec<Shape> {
    match index % STEP_COUNT {
        0 => variables(),
        1 => arrays_and_objects(),
        2 => functions(),
        _ => algorithms(),
    }
}

/// Horizontal position of bar `slot` out of `count`, centered on the origin.
pub fn bar_slot_x(slot: usize, count: usize) -> f32 {
    (slot as f32 - (count.saturating_sub(1)) as f32 / 2.0) * BAR_SPACING
}

fn variables() -> Vec<Shape> {
    vec![
        Shape::new(
            Primitive::Box {
                size: Vec3::splat(1.2),
            },
            Vec3::new(-2.2, 0.0, 0.0),
            BLUE,
            Behavior::Rotate {
                velocity: Vec3::new(0.4, 0.8, 0.0),
            },
        )
        .labeled("42"),
        Shape::new(
            Primitive::Cylinder {
                radius: 0.5,
                height: 1.4,
            },
            Vec3::ZERO,
            GREEN,
            Behavior::Wave {
                amplitude: 0.25,
                frequency: 2.0,
                phase: 0.0,
            },
        )
        .labeled("\"CodeCraft\""),
        Shape::new(
            Primitive::Sphere { radius: 0.7 },
            Vec3::new(2.2, 0.0, 0.0),
            GREEN,
            Behavior::Pulse {
                base: 1.0,
                amplitude: 0.12,
                frequency: 3.0,
            },
        )
        .labeled("true"),
    ]
}

fn arrays_and_objects() -> Vec<Shape> {
    const OBJECT_CENTER: Vec3 = Vec3::new(0.0, -0.8, 0.0);
    const ORBIT_RADIUS: f32 = 1.6;
    const ORBIT_SPEED: f32 = 0.9;

    let mut shapes: Vec<Shape> = (0..4)
        .map(|i| {
            Shape::new(
                Primitive::Box {
                    size: Vec3::splat(0.6),
                },
                Vec3::new(-1.2 + i as f32 * 0.8, 1.4, 0.0),
                BLUE,
                Behavior::Wave {
                    amplitude: 0.15,
                    frequency: 2.5,
                    phase: i as f32 * 0.6,
                },
            )
            .labeled((i + 1).to_string())
        })
        .collect();

    shapes.push(
        Shape::new(
            Primitive::Sphere { radius: 0.6 },
            OBJECT_CENTER,
            ORANGE,
            Behavior::Rotate {
                velocity: Vec3::new(0.0, 0.5, 0.0),
            },
        )
        .labeled("Object"),
    );

    for (phase, color, key) in [(0.0, GREEN, "name"), (PI, PINK, "role")] {
        shapes.push(
            Shape::new(
                Primitive::Sphere { radius: 0.35 },
                OBJECT_CENTER,
                color,
                Behavior::Orbit {
                    center: OBJECT_CENTER,
                    radius: ORBIT_RADIUS,
                    speed: ORBIT_SPEED,
                    phase,
                },
            )
            .labeled(key),
        );
        // Spoke turning at the orbit speed so it stays attached to its key.
        shapes.push(
            Shape::new(
                Primitive::Line {
                    end: Vec3::new(ORBIT_RADIUS, 0.0, 0.0),
                },
                OBJECT_CENTER,
                GRAY,
                Behavior::Rotate {
                    velocity: Vec3::new(0.0, ORBIT_SPEED, 0.0),
                },
            )
            .rotated(Vec3::new(0.0, phase, 0.0)),
        );
    }

    shapes
}

fn functions() -> Vec<Shape> {
    let param = |x: f32, label: &str| {
        Shape::new(
            Primitive::Sphere { radius: 0.4 },
            Vec3::new(x, 1.3, 0.0),
            ORANGE,
            Behavior::Bounce {
                height: 0.3,
                speed: 3.0,
            },
        )
        .labeled(label)
    };

    vec![
        param(-1.2, "a:5"),
        param(1.2, "b:3"),
        Shape::new(
            Primitive::Box {
                size: Vec3::splat(0.8),
            },
            Vec3::new(0.0, 0.1, 0.0),
            GREEN,
            Behavior::Pulse {
                base: 1.0,
                amplitude: 0.1,
                frequency: 2.5,
            },
        )
        .labeled("8"),
        Shape::new(
            Primitive::Line {
                end: Vec3::new(0.0, -0.8, 0.0),
            },
            Vec3::new(0.0, -0.4, 0.0),
            PINK,
            Behavior::Wave {
                amplitude: 0.08,
                frequency: 2.0,
                phase: 0.0,
            },
        ),
        Shape::new(
            Primitive::Cylinder {
                radius: 0.45,
                height: 0.6,
            },
            Vec3::new(0.0, -1.7, 0.0),
            GREEN,
            Behavior::Rotate {
                velocity: Vec3::new(0.0, 1.0, 0.0),
            },
        )
        .labeled("return"),
    ]
}

fn algorithms() -> Vec<Shape> {
    let count = SORT_VALUES.len();
    SORT_VALUES
        .iter()
        .enumerate()
        .map(|(slot, &value)| {
            let height = value as f32 * BAR_UNIT_HEIGHT;
            let hue = value as f32 / 9.0 * 90.0;
            Shape::new(
                Primitive::Box {
                    size: Vec3::new(0.4, height, 0.4),
                },
                Vec3::new(bar_slot_x(slot, count), BAR_FLOOR + height / 2.0, 0.0),
                Color::from_hsl(hue, 0.8, 0.6),
                Behavior::Sort { value },
            )
            .labeled(value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_builds_its_expected_shape_count() {
        for (index, expected) in SHAPE_COUNTS.iter().enumerate() {
            assert_eq!(build_shapes(index).len(), *expected, "step {index}");
        }
    }

    #[test]
    fn step_lookup_wraps() {
        assert_eq!(step(5).title, STEPS[1].title);
        assert_eq!(build_shapes(7).len(), SHAPE_COUNTS[3]);
    }

    #[test]
    fn only_the_algorithms_step_has_sort_bars() {
        for index in 0..STEP_COUNT {
            let bars = build_shapes(index)
                .iter()
                .filter(|s| s.sort_value().is_some())
                .count();
            let expected = if index == 3 { SORT_VALUES.len() } else { 0 };
            assert_eq!(bars, expected, "step {index}");
        }
    }

    #[test]
    fn bar_slots_are_centered() {
        assert_eq!(bar_slot_x(0, 1), 0.0);
        let left = bar_slot_x(0, 8);
        let right = bar_slot_x(7, 8);
        assert!((left + right).abs() < 1e-6);
        assert!(left < right);
    }

    #[test]
    fn orbit_spokes_follow_their_keys() {
        let mut shapes = build_shapes(1);
        let dt = 1.0 / 60.0;
        let mut t = 0.0;
        for _ in 0..120 {
            t += dt;
            for shape in &mut shapes {
                shape.animate(t, dt);
            }
        }
        for pair in shapes[5..].chunks(2) {
            let (key, spoke) = (&pair[0], &pair[1]);
            let Primitive::Line { end } = spoke.primitive else {
                panic!("expected spoke after orbiting key");
            };
            let tip = spoke.position + spoke.orientation() * end;
            assert!((tip - key.position).length() < 1e-2);
        }
    }
}
