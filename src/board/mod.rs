pub mod cell;
pub mod topology;

pub use cell::{Cell, Label};
pub use topology::Board;
