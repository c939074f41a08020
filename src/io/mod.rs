pub mod project;
pub mod suggest;
