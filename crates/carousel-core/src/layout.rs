//! Named panel layouts and the per-panel base targets for each of them.
//!
//! The store is pure data: it never mutates panels, it only answers "where
//! should panel `i` sit in layout `L`".

use crate::constants::{CIRCLE_RADIUS, GRID_POSITIONS, LINE_SPACING, PANEL_COUNT};
use crate::error::{ensure_count, Result};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Scattered fly-in coordinates.
    Grid,
    /// Evenly spaced along X, centered on the origin.
    Line,
    /// Side profile: the ring's X/Z mapped onto the XY plane.
    Fold,
    /// Full ring in the XZ plane.
    Circle,
}

/// Point on the ring for panel `index` of `count`.
pub fn circle_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = (index as f32 / count as f32) * TAU;
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// X coordinate of panel `index` in a centered line of `count` panels.
pub fn line_x(index: usize, count: usize, spacing: f32) -> f32 {
    let total_width = count.saturating_sub(1) as f32 * spacing;
    -total_width / 2.0 + index as f32 * spacing
}

/// Yaw that turns a panel on the ring away from the center.
#[inline]
pub fn outward_yaw(circle: Vec3) -> f32 {
    (-circle.x).atan2(-circle.z)
}

#[derive(Clone, Debug)]
pub struct LayoutStore {
    grid: Vec<Vec3>,
    circle: Vec<Vec3>,
    spacing: f32,
}

impl LayoutStore {
    /// Builds the tables for `count` panels.
    ///
    /// `grid` must carry exactly one coordinate per panel.
    pub fn new(count: usize, grid: &[[f32; 3]], radius: f32, spacing: f32) -> Result<Self> {
        ensure_count("grid positions", count, grid.len())?;
        let grid = grid.iter().copied().map(Vec3::from).collect();
        let circle = (0..count)
            .map(|i| circle_position(i, count, radius))
            .collect::<Vec<_>>();
        ensure_count("circle positions", count, circle.len())?;
        Ok(Self {
            grid,
            circle,
            spacing,
        })
    }

    pub fn len(&self) -> usize {
        self.circle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circle.is_empty()
    }

    pub fn circle(&self, index: usize) -> Vec3 {
        self.circle[index]
    }

    pub fn target(&self, layout: Layout, index: usize) -> Vec3 {
        match layout {
            Layout::Grid => self.grid[index],
            Layout::Line => Vec3::new(line_x(index, self.len(), self.spacing), 0.0, 0.0),
            Layout::Fold => {
                let c = self.circle[index];
                Vec3::new(c.x, c.z, 0.0)
            }
            Layout::Circle => self.circle[index],
        }
    }

    /// Resting yaw of panel `index` once the ring faces forward.
    pub fn circle_yaw(&self, index: usize) -> f32 {
        outward_yaw(self.circle[index])
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        let grid = GRID_POSITIONS.iter().copied().map(Vec3::from).collect();
        let circle = (0..PANEL_COUNT)
            .map(|i| circle_position(i, PANEL_COUNT, CIRCLE_RADIUS))
            .collect();
        Self {
            grid,
            circle,
            spacing: LINE_SPACING,
        }
    }
}
