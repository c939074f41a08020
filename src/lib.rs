pub mod draw;
pub mod geom;
mod id;
pub mod io;
pub mod sim;

// Prelude
pub use geom::point::Point;
pub use geom::room::RoomConfig;
pub use geom::surface::Surface;
pub use geom::vector::Vector;
pub use sim::config::{CalcMode, PhotometricModel};
pub use sim::field::{FieldOutput, compute_field};
pub use sim::fixture::{Fixture, LightInstance};
pub use sim::grid::{SamplePoint, SampleSurface};
pub use sim::result::{FieldResult, Stats};
use id::random_id;
