use crate::geom::room::RoomConfig;
use crate::sim::config::CalcMode;
use crate::{Point, Vector};

/// Sample cells per grid axis. Shared with renderers so drawn cell boundaries
/// line up with computed values.
pub const GRID_RESOLUTION: usize = 30;

/// Receiving surface a sample point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleSurface {
    Floor,
    BodyTop,
    BodySide,
}

/// A single measurement point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub position: Point,
    /// Unit receiving normal.
    pub normal: Vector,
    pub surface: SampleSurface,
}

/// Builds the measurement grid for the given mode.
///
/// Every grid is [`GRID_RESOLUTION`] squared with points at cell centers
/// (half-step offsets). Order is row-major with the depth axis innermost and
/// stable across runs; body mode lists the top grid before the side grid.
pub fn build_grid(mode: CalcMode, room: &RoomConfig) -> Vec<SamplePoint> {
    let r = GRID_RESOLUTION;
    match mode {
        CalcMode::Floor => {
            let step_x = room.width / r as f64;
            let step_z = room.depth / r as f64;
            let mut points = Vec::with_capacity(r * r);
            for i in 0..r {
                for j in 0..r {
                    points.push(SamplePoint {
                        position: Point::new(
                            (i as f64 + 0.5) * step_x,
                            room.work_plane_height,
                            (j as f64 + 0.5) * step_z,
                        ),
                        normal: Vector::new(0.0, 1.0, 0.0),
                        surface: SampleSurface::Floor,
                    });
                }
            }
            points
        }
        CalcMode::Body => {
            let west_x = (room.width - room.body_width) / 2.0;
            let near_z = (room.depth - room.body_length) / 2.0;
            let step_z = room.body_length / r as f64;
            let mut points = Vec::with_capacity(2 * r * r);

            // Top face, looking up.
            let step_x = room.body_width / r as f64;
            let top_y = room.body_clearance + room.body_height;
            for i in 0..r {
                for j in 0..r {
                    points.push(SamplePoint {
                        position: Point::new(
                            west_x + (i as f64 + 0.5) * step_x,
                            top_y,
                            near_z + (j as f64 + 0.5) * step_z,
                        ),
                        normal: Vector::new(0.0, 1.0, 0.0),
                        surface: SampleSurface::BodyTop,
                    });
                }
            }

            // West face, looking toward the west wall.
            let step_y = room.body_height / r as f64;
            for i in 0..r {
                for j in 0..r {
                    points.push(SamplePoint {
                        position: Point::new(
                            west_x,
                            room.body_clearance + (i as f64 + 0.5) * step_y,
                            near_z + (j as f64 + 0.5) * step_z,
                        ),
                        normal: Vector::new(-1.0, 0.0, 0.0),
                        surface: SampleSurface::BodySide,
                    });
                }
            }
            points
        }
    }
}
