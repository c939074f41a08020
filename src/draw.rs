pub mod colormap;

pub use colormap::{Rgb, color_for};
