pub mod geometry;
pub mod ramp;
pub mod scroll;
pub mod time;
