//! Mutable panel and group transforms plus the queries the renderer and the
//! click dispatcher run against them.

use crate::constants::PANEL_SIZE;
use crate::error::{ensure_count, Result};
use crate::layout::{Layout, LayoutStore};
use crate::mesh::InstanceRaw;
use crate::state::{Camera, Ray};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position plus XYZ Euler rotation (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub index: usize,
    pub transform: Transform,
    pub opacity: f32,
    /// Layer in the loaded texture set.
    pub texture: u32,
}

/// Panels nested in a cube group, nested in a pointer-driven tilt group.
#[derive(Clone, Debug)]
pub struct Scene {
    pub panels: Vec<Panel>,
    pub cube_group: Transform,
    pub tilt_group: Transform,
}

impl Scene {
    /// Places every panel at its grid coordinate, fully transparent.
    ///
    /// Fails fast when the texture set does not provide one image per panel.
    pub fn new(store: &LayoutStore, texture_count: usize) -> Result<Self> {
        ensure_count("panel textures", store.len(), texture_count)?;
        let panels = (0..store.len())
            .map(|index| Panel {
                index,
                transform: Transform {
                    position: store.target(Layout::Grid, index),
                    rotation: Vec3::ZERO,
                },
                opacity: 0.0,
                texture: index as u32,
            })
            .collect();
        Ok(Self {
            panels,
            cube_group: Transform::default(),
            tilt_group: Transform::default(),
        })
    }

    pub fn group_matrix(&self) -> Mat4 {
        self.tilt_group.matrix() * self.cube_group.matrix()
    }

    pub fn panel_world_position(&self, index: usize) -> Vec3 {
        self.group_matrix()
            .transform_point3(self.panels[index].transform.position)
    }

    /// Nearest panel hit by `ray`, with the hit distance along the ray.
    pub fn pick(&self, ray: &Ray) -> Option<(usize, f32)> {
        let half = Vec3::from(PANEL_SIZE) * 0.5;
        let group = self.group_matrix();
        let mut best = None::<(usize, f32)>;
        for panel in &self.panels {
            let to_local = (group * panel.transform.matrix()).inverse();
            let origin = to_local.transform_point3(ray.origin);
            let dir = to_local.transform_vector3(ray.dir);
            if let Some(t) = ray_box(origin, dir, half) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((panel.index, t)),
                }
            }
        }
        best
    }

    /// Render instances for every visible panel, sorted back to front.
    pub fn instances(&self, camera: &Camera) -> Vec<InstanceRaw> {
        let group = self.group_matrix();
        let mut keyed: Vec<(f32, InstanceRaw)> = self
            .panels
            .iter()
            .filter(|p| p.opacity > 0.0)
            .map(|p| {
                let model = group * p.transform.matrix();
                let depth = model.w_axis.truncate().distance_squared(camera.eye);
                let raw = InstanceRaw {
                    model: model.to_cols_array_2d(),
                    opacity: p.opacity.clamp(0.0, 1.0),
                    layer: p.texture,
                    _pad: [0; 2],
                };
                (depth, raw)
            })
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, raw)| raw).collect()
    }
}

/// Slab test of a ray against an origin-centered box with `half` extents.
/// Returns the entry distance, or the exit distance when starting inside.
pub fn ray_box(origin: Vec3, dir: Vec3, half: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let h = half[axis];
        if d.abs() < 1e-8 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}
