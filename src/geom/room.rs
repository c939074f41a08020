use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Immutable room snapshot for one computation.
///
/// The room is a box of `width` x `depth` x `height` meters whose east and
/// west ceiling edges are cut by 45 degree bevels of size `chamfer`. The
/// inspected body is an axis-aligned box centered on the floor plan, raised
/// `body_clearance` above the floor.
///
/// Field names serialize in camelCase to stay readable by the editor's
/// project files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Size of the 45 degree ceiling-wall bevel.
    pub chamfer: f64,
    /// Measurement height of the floor-mode work plane.
    pub work_plane_height: f64,
    pub body_width: f64,
    pub body_height: f64,
    pub body_length: f64,
    /// Height from the floor to the bottom of the inspected body.
    pub body_clearance: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            depth: 8.0,
            height: 3.5,
            chamfer: 0.5,
            work_plane_height: 0.8,
            body_width: 1.8,
            body_height: 1.5,
            body_length: 4.8,
            body_clearance: 0.5,
        }
    }
}

impl RoomConfig {
    /// Checks that the geometry is consistent.
    ///
    /// Invalid rooms are rejected, never clamped: a chamfer larger than half
    /// the width or half the height makes the surface mapping fold onto
    /// itself, and a body larger than the room has no valid sample grids.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.depth > 0.0 && self.height > 0.0,
            "room dimensions must be positive ({} x {} x {})",
            self.width,
            self.depth,
            self.height
        );
        ensure!(self.chamfer >= 0.0, "chamfer must not be negative");
        ensure!(
            self.chamfer <= self.width / 2.0 && self.chamfer <= self.height / 2.0,
            "chamfer {} exceeds half of room width or height",
            self.chamfer
        );
        ensure!(
            (0.0..=self.height).contains(&self.work_plane_height),
            "work plane height {} outside the room",
            self.work_plane_height
        );
        ensure!(
            self.body_width > 0.0 && self.body_height > 0.0 && self.body_length > 0.0,
            "body dimensions must be positive ({} x {} x {})",
            self.body_width,
            self.body_height,
            self.body_length
        );
        ensure!(
            self.body_width <= self.width && self.body_length <= self.depth,
            "body footprint {} x {} exceeds the floor plan",
            self.body_width,
            self.body_length
        );
        ensure!(
            self.body_clearance >= 0.0 && self.body_clearance + self.body_height <= self.height,
            "body top at {} exceeds the room height",
            self.body_clearance + self.body_height
        );
        Ok(())
    }
}
