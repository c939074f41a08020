use std::f64::consts::FRAC_1_SQRT_2;

use serde::{Deserialize, Serialize};

use crate::geom::room::RoomConfig;
use crate::{Point, Vector};

/// Named emitting surfaces of the chamfered room.
///
/// Tags serialize in SCREAMING_SNAKE_CASE (`"CEILING"`, `"SLOPE_EAST"`, ...)
/// to match the editor's project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Surface {
    Ceiling,
    WallEast,
    WallWest,
    SlopeEast,
    SlopeWest,
}

impl Surface {
    /// Maps normalized surface coordinates to a world position.
    ///
    /// `u` runs across the surface: along the width on the ceiling, up the
    /// wall on the vertical walls, and from wall edge to ceiling edge on the
    /// slopes. `v` always runs along the depth axis. Callers must pass
    /// coordinates in [0, 1]; out-of-range values are a contract violation.
    pub fn map(&self, u: f64, v: f64, room: &RoomConfig) -> Point {
        debug_assert!(
            (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v),
            "surface coordinates (u={u}, v={v}) outside [0, 1]"
        );
        let (w, h, c) = (room.width, room.height, room.chamfer);
        let z = v * room.depth;
        match self {
            Surface::Ceiling => Point::new(u * (w - 2.0 * c) + c, h, z),
            Surface::WallEast => Point::new(w, u * (h - c), z),
            Surface::WallWest => Point::new(0.0, u * (h - c), z),
            Surface::SlopeEast => Point::new(w - u * c, (h - c) + u * c, z),
            Surface::SlopeWest => Point::new(u * c, (h - c) + u * c, z),
        }
    }

    /// Unit emission normal, pointing into the room interior.
    pub fn normal(&self) -> Vector {
        match self {
            Surface::Ceiling => Vector::new(0.0, -1.0, 0.0),
            Surface::WallEast => Vector::new(-1.0, 0.0, 0.0),
            Surface::WallWest => Vector::new(1.0, 0.0, 0.0),
            Surface::SlopeEast => Vector::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
            Surface::SlopeWest => Vector::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
        }
    }
}
