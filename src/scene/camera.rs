//! Perspective projection of scene shapes into 2D draw commands.
//!
//! Everything here is pure so the canvas painter only has to replay the
//! commands in order.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::shape::{Color, Primitive, Shape};

pub const CAMERA_DISTANCE: f32 = 7.0;
pub const FIELD_OF_VIEW: f32 = 50.0;

/// Points closer to the eye than this are dropped.
const NEAR_PLANE: f32 = 0.1;
const CYLINDER_SEGMENTS: usize = 16;
const AMBIENT: f32 = 0.45;
const DIFFUSE: f32 = 0.55;
const LABEL_GAP: f32 = 0.3;
const LINE_WIDTH: f32 = 3.0;

fn light_direction() -> Vec3 {
    Vec3::new(0.4, 0.8, 0.6).normalize()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640.0, 400.0)
    }
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            distance: CAMERA_DISTANCE,
            fov_y: FIELD_OF_VIEW,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    /// Pixels per world unit at depth one.
    pub fn focal(&self) -> f32 {
        let half_fov = self.fov_y.to_radians() / 2.0;
        self.width.min(self.height) / 2.0 / half_fov.tan()
    }

    /// Screen position and depth of a world point, or `None` behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<(Vec2, f32)> {
        let depth = self.distance - point.z;
        if depth < NEAR_PLANE {
            return None;
        }
        let f = self.focal() / depth;
        let screen = Vec2::new(self.width / 2.0 + point.x * f, self.height / 2.0 - point.y * f);
        Some((screen, depth))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        depth: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        fill: Color,
        depth: f32,
    },
    Segment {
        from: Vec2,
        to: Vec2,
        stroke: Color,
        width: f32,
        depth: f32,
    },
    Label {
        at: Vec2,
        text: String,
    },
}

impl DrawCmd {
    /// Distance from the eye; labels report zero and always paint last.
    pub fn depth(&self) -> f32 {
        match self {
            Self::Polygon { depth, .. } | Self::Disc { depth, .. } | Self::Segment { depth, .. } => *depth,
            Self::Label { .. } => 0.0,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label { .. })
    }
}

struct Face {
    normal: Vec3,
    points: Vec<Vec3>,
}

fn box_faces(size: Vec3) -> Vec<Face> {
    let half = size / 2.0;
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    let mut faces = Vec::with_capacity(6);
    for (i, axis) in axes.iter().enumerate() {
        let du = axes[(i + 1) % 3] * half;
        let dv = axes[(i + 2) % 3] * half;
        for sign in [1.0, -1.0] {
            let normal = *axis * sign;
            let center = normal * half;
            faces.push(Face {
                normal,
                points: vec![center - du - dv, center + du - dv, center + du + dv, center - du + dv],
            });
        }
    }
    faces
}

fn cylinder_faces(radius: f32, height: f32) -> Vec<Face> {
    let top = height / 2.0;
    let rim = |k: usize, y: f32| {
        let a = k as f32 / CYLINDER_SEGMENTS as f32 * TAU;
        Vec3::new(radius * a.cos(), y, radius * a.sin())
    };

    let mut faces: Vec<Face> = (0..CYLINDER_SEGMENTS)
        .map(|k| {
            let mid = (k as f32 + 0.5) / CYLINDER_SEGMENTS as f32 * TAU;
            Face {
                normal: Vec3::new(mid.cos(), 0.0, mid.sin()),
                points: vec![rim(k, -top), rim(k + 1, -top), rim(k + 1, top), rim(k, top)],
            }
        })
        .collect();
    for y in [top, -top] {
        faces.push(Face {
            normal: Vec3::new(0.0, y.signum(), 0.0),
            points: (0..CYLINDER_SEGMENTS).map(|k| rim(k, y)).collect(),
        });
    }
    faces
}

/// Half the vertical extent of a primitive at unit scale.
fn half_height(primitive: &Primitive) -> f32 {
    match primitive {
        Primitive::Box { size } => size.y / 2.0,
        Primitive::Sphere { radius } => *radius,
        Primitive::Cylinder { height, .. } => height / 2.0,
        Primitive::Line { end } => end.y.max(0.0),
    }
}

fn shade(color: Color, normal: Vec3) -> Color {
    color.shaded(AMBIENT + DIFFUSE * normal.dot(light_direction()).max(0.0))
}

/// Draw commands for `shapes` seen through `camera` with the whole scene
/// turned by `view`. Solids come back far to near, followed by labels.
pub fn draw_list(shapes: &[Shape], view: Quat, camera: &Camera) -> Vec<DrawCmd> {
    let eye = camera.eye();
    let mut solids = Vec::new();
    let mut labels = Vec::new();

    for shape in shapes {
        let orient = view * shape.orientation();
        let origin = view * shape.position;
        let to_world = |p: Vec3| origin + orient * (p * shape.scale);

        match shape.primitive {
            Primitive::Sphere { radius } => {
                if let Some((center, depth)) = camera.project(origin) {
                    solids.push(DrawCmd::Disc {
                        center,
                        radius: radius * shape.scale * camera.focal() / depth,
                        fill: shape.color,
                        depth,
                    });
                }
            }
            Primitive::Line { end } => {
                if let (Some((from, d0)), Some((to, d1))) =
                    (camera.project(origin), camera.project(to_world(end)))
                {
                    solids.push(DrawCmd::Segment {
                        from,
                        to,
                        stroke: shape.color,
                        width: LINE_WIDTH,
                        depth: (d0 + d1) / 2.0,
                    });
                }
            }
            Primitive::Box { size } => {
                push_faces(&mut solids, box_faces(size), shape.color, orient, &to_world, eye, camera);
            }
            Primitive::Cylinder { radius, height } => {
                push_faces(
                    &mut solids,
                    cylinder_faces(radius, height),
                    shape.color,
                    orient,
                    &to_world,
                    eye,
                    camera,
                );
            }
        }

        if let Some(text) = &shape.label {
            let above = shape.position + Vec3::Y * (half_height(&shape.primitive) * shape.scale + LABEL_GAP);
            if let Some((at, _)) = camera.project(view * above) {
                labels.push(DrawCmd::Label {
                    at,
                    text: text.clone(),
                });
            }
        }
    }

    solids.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
    solids.extend(labels);
    solids
}

fn push_faces(
    out: &mut Vec<DrawCmd>,
    faces: Vec<Face>,
    color: Color,
    orient: Quat,
    to_world: &impl Fn(Vec3) -> Vec3,
    eye: Vec3,
    camera: &Camera,
) {
    for face in faces {
        let normal = orient * face.normal;
        let world: Vec<Vec3> = face.points.iter().map(|&p| to_world(p)).collect();
        let center = world.iter().copied().sum::<Vec3>() / world.len() as f32;
        if normal.dot(eye - center) <= 0.0 {
            continue;
        }
        let Some(projected) = world
            .iter()
            .map(|&p| camera.project(p))
            .collect::<Option<Vec<_>>>()
        else {
            continue;
        };
        let depth = projected.iter().map(|(_, d)| d).sum::<f32>() / projected.len() as f32;
        out.push(DrawCmd::Polygon {
            points: projected.into_iter().map(|(p, _)| p).collect(),
            fill: shade(color, normal),
            depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shape::Behavior;
    use crate::scene::steps::build_shapes;

    const STILL: Behavior = Behavior::Rotate { velocity: Vec3::ZERO };

    fn solid(primitive: Primitive, at: Vec3) -> Shape {
        Shape::new(primitive, at, Color::hex(0x808080), STILL)
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let camera = Camera::new(800.0, 600.0);
        let (screen, depth) = camera.project(Vec3::ZERO).unwrap();
        assert_eq!(screen, Vec2::new(400.0, 300.0));
        assert_eq!(depth, CAMERA_DISTANCE);
        assert!(camera.project(Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).is_none());
    }

    #[test]
    fn nearer_points_spread_further_from_center() {
        let camera = Camera::default();
        let (far, _) = camera.project(Vec3::new(1.0, 0.0, -2.0)).unwrap();
        let (near, _) = camera.project(Vec3::new(1.0, 0.0, 2.0)).unwrap();
        assert!(near.x > far.x);
    }

    #[test]
    fn facing_box_shows_only_front_face() {
        let cube = solid(Primitive::Box { size: Vec3::ONE }, Vec3::ZERO);
        let cmds = draw_list(&[cube], Quat::IDENTITY, &Camera::default());
        assert_eq!(cmds.len(), 1);
        let DrawCmd::Polygon { points, .. } = &cmds[0] else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn turned_box_shows_three_faces() {
        let cube = solid(Primitive::Box { size: Vec3::ONE }, Vec3::ZERO).rotated(Vec3::new(0.5, 0.7, 0.0));
        let cmds = draw_list(&[cube], Quat::IDENTITY, &Camera::default());
        assert_eq!(cmds.len(), 3);
    }

    #[test]
    fn solids_paint_far_to_near_then_labels() {
        let back = solid(Primitive::Sphere { radius: 0.5 }, Vec3::new(0.0, 0.0, -3.0)).labeled("back");
        let front = solid(Primitive::Sphere { radius: 0.5 }, Vec3::new(0.0, 0.0, 2.0));
        let cmds = draw_list(&[front, back], Quat::IDENTITY, &Camera::default());
        assert_eq!(cmds.len(), 3);
        assert!(cmds[0].depth() > cmds[1].depth());
        assert!(cmds[2].is_label());
    }

    #[test]
    fn every_step_draws_without_labels_interleaving() {
        let camera = Camera::default();
        let view = Quat::from_rotation_x(0.2);
        for step in 0..4 {
            let cmds = draw_list(&build_shapes(step), view, &camera);
            let first_label = cmds.iter().position(DrawCmd::is_label).unwrap_or(cmds.len());
            assert!(cmds[first_label..].iter().all(DrawCmd::is_label));
            assert!(cmds[..first_label].windows(2).all(|w| w[0].depth() >= w[1].depth()));
        }
    }
}
