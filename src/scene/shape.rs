use glam::{EulerRot, Quat, Vec3};

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// `hue` in degrees, `saturation` and `lightness` in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// Multiplies every channel by `factor`, saturating at white.
    pub fn shaded(self, factor: f32) -> Self {
        let scale = |v: u8| (v as f32 * factor).clamp(0.0, 255.0).round() as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Geometry of a shape in its local space, before scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Box { size: Vec3 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
    /// Segment from the shape origin to `end`.
    Line { end: Vec3 },
}

/// Per-frame animation applied to a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    /// Euler angles advance by `velocity` radians per second.
    Rotate { velocity: Vec3 },
    Pulse {
        base: f32,
        amplitude: f32,
        frequency: f32,
    },
    Wave {
        amplitude: f32,
        frequency: f32,
        phase: f32,
    },
    Bounce { height: f32, speed: f32 },
    Orbit {
        center: Vec3,
        radius: f32,
        speed: f32,
        phase: f32,
    },
    /// Bar in the sorting demo; moved by `SortAnimation`, not by `animate`.
    Sort { value: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub behavior: Behavior,
    pub color: Color,
    pub label: Option<String>,
    /// Rest position that wave and bounce offsets are measured from.
    pub anchor: Vec3,
    pub position: Vec3,
    /// Euler angles (XYZ order) in radians.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Shape {
    pub fn new(primitive: Primitive, anchor: Vec3, color: Color, behavior: Behavior) -> Self {
        let mut shape = Self {
            primitive,
            behavior,
            color,
            label: None,
            anchor,
            position: anchor,
            rotation: Vec3::ZERO,
            scale: 1.0,
        };
        shape.animate(0.0, 0.0);
        shape
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn sort_value(&self) -> Option<u32> {
        match self.behavior {
            Behavior::Sort { value } => Some(value),
            _ => None,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Applies this shape's behavior at scene time `t`, `dt` seconds after the previous frame.
    pub fn animate(&mut self, t: f32, dt: f32) {
        match self.behavior {
            Behavior::Rotate { velocity } => {
                self.rotation += velocity * dt;
            }
            Behavior::Pulse {
                base,
                amplitude,
                frequency,
            } => {
                self.scale = base + amplitude * (t * frequency).sin();
            }
            Behavior::Wave {
                amplitude,
                frequency,
                phase,
            } => {
                self.position.y = self.anchor.y + amplitude * (t * frequency + phase).sin();
            }
            Behavior::Bounce { height, speed } => {
                self.position.y = self.anchor.y + height * (t * speed).sin().abs();
            }
            Behavior::Orbit {
                center,
                radius,
                speed,
                phase,
            } => {
                let angle = t * speed + phase;
                self.position = Vec3::new(
                    center.x + radius * angle.cos(),
                    center.y,
                    center.z - radius * angle.sin(),
                );
            }
            Behavior::Sort { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn sphere(behavior: Behavior) -> Shape {
        Shape::new(
            Primitive::Sphere { radius: 1.0 },
            Vec3::new(0.0, 1.0, 0.0),
            Color::hex(0xffffff),
            behavior,
        )
    }

    #[test]
    fn hex_and_hsl_colors() {
        assert_eq!(Color::hex(0x3b82f6), Color { r: 0x3b, g: 0x82, b: 0xf6 });
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color { r: 255, g: 0, b: 0 });
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color { r: 0, g: 255, b: 0 });
        assert_eq!(Color::hex(0x102030).css(), "rgb(16, 32, 48)");
    }

    #[test]
    fn rotate_integrates_velocity() {
        let mut shape = sphere(Behavior::Rotate {
            velocity: Vec3::new(0.0, 2.0, 0.0),
        });
        shape.animate(0.5, 0.5);
        shape.animate(1.0, 0.5);
        assert!((shape.rotation.y - 2.0).abs() < EPS);
    }

    #[test]
    fn pulse_scales_around_base() {
        let mut shape = sphere(Behavior::Pulse {
            base: 1.0,
            amplitude: 0.2,
            frequency: 1.0,
        });
        shape.animate(FRAC_PI_2, 0.0);
        assert!((shape.scale - 1.2).abs() < EPS);
    }

    #[test]
    fn wave_and_bounce_offset_from_anchor() {
        let mut wave = sphere(Behavior::Wave {
            amplitude: 0.5,
            frequency: 1.0,
            phase: 0.0,
        });
        wave.animate(-FRAC_PI_2, 0.0);
        assert!((wave.position.y - 0.5).abs() < EPS);

        let mut bounce = sphere(Behavior::Bounce {
            height: 0.5,
            speed: 1.0,
        });
        bounce.animate(-FRAC_PI_2, 0.0);
        assert!((bounce.position.y - 1.5).abs() < EPS);
    }

    #[test]
    fn orbit_circles_center() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let mut shape = sphere(Behavior::Orbit {
            center,
            radius: 2.0,
            speed: 1.0,
            phase: 0.0,
        });
        assert!((shape.position - Vec3::new(3.0, 2.0, 3.0)).length() < EPS);
        shape.animate(PI, 0.0);
        assert!((shape.position - Vec3::new(-1.0, 2.0, 3.0)).length() < EPS);
        assert!(((shape.position - center).length() - 2.0).abs() < EPS);
    }

    #[test]
    fn sort_bars_are_not_moved_by_animate() {
        let mut bar = sphere(Behavior::Sort { value: 3 });
        let before = bar.clone();
        bar.animate(10.0, 0.1);
        assert_eq!(bar, before);
        assert_eq!(bar.sort_value(), Some(3));
    }
}
