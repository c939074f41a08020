use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geom::room::RoomConfig;
use crate::geom::surface::Surface;
use crate::random_id;
use crate::{Point, Vector};

/// Tolerance for tiled instances landing exactly on a depth boundary.
const TILING_EPS: f64 = 1e-3;

/// An authored fixture placed parametrically on a room surface.
///
/// Owned and mutated by the editing layer; the engine reads it as an
/// immutable value per computation. Serializes with the editor's field names
/// (`lights` entries in project files).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub name: String,
    pub surface: Surface,
    /// Normalized placement coordinate across the surface (0-1).
    pub u: f64,
    /// Normalized placement coordinate along the depth axis (0-1).
    pub v: f64,
    /// Total luminous flux in lumens.
    pub lumens: f64,
    /// Display color as hex text, opaque to the engine.
    pub color: String,
    /// Tiling pitch in meters along the depth axis; <= 0 disables tiling.
    pub pitch: f64,
}

/// One world-space emitter derived from a fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightInstance {
    pub position: Point,
    /// Unit emission normal.
    pub normal: Vector,
    /// Total luminous flux in lumens.
    pub lumens: f64,
}

impl Fixture {
    pub fn new(name: &str, surface: Surface, u: f64, v: f64, lumens: f64) -> Self {
        Self {
            id: random_id(),
            name: name.to_string(),
            surface,
            u,
            v,
            lumens,
            color: "#facc15".to_string(),
            pitch: 0.0,
        }
    }

    /// Checks the editing-boundary contract: placement coordinates in [0, 1]
    /// and non-negative flux. Zero lumens is valid and contributes nothing.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.u) && (0.0..=1.0).contains(&self.v),
            "fixture '{}': placement coordinates (u={}, v={}) outside [0, 1]",
            self.name,
            self.u,
            self.v
        );
        ensure!(
            self.lumens >= 0.0,
            "fixture '{}': negative luminous flux {}",
            self.name,
            self.lumens
        );
        Ok(())
    }

    /// Expands the fixture into world-space light instances.
    ///
    /// With a positive pitch the authored depth position anchors a continuous
    /// run: instances step forward to the far wall and backward to the near
    /// wall, keeping points that land on either boundary within
    /// [`TILING_EPS`]. All instances share the fixture's `u` and the
    /// surface's fixed emission normal.
    pub fn expand(&self, room: &RoomConfig) -> Vec<LightInstance> {
        let normal = self.surface.normal();
        let at = |v: f64| LightInstance {
            position: self.surface.map(self.u, v, room),
            normal,
            lumens: self.lumens,
        };

        if self.pitch <= 0.0 {
            return vec![at(self.v)];
        }

        let depth = room.depth;
        let start_z = self.v * depth;
        let mut instances = Vec::new();
        let mut z = start_z;
        while z <= depth + TILING_EPS {
            instances.push(at(z.clamp(0.0, depth) / depth));
            z += self.pitch;
        }
        let mut z = start_z - self.pitch;
        while z >= -TILING_EPS {
            instances.push(at(z.clamp(0.0, depth) / depth));
            z -= self.pitch;
        }
        instances
    }
}

/// Total instance count across a fixture list (the editor's light-point
/// readout).
pub fn instance_count(fixtures: &[Fixture], room: &RoomConfig) -> usize {
    fixtures.iter().map(|f| f.expand(room).len()).sum()
}
