pub mod controls;
pub mod handler;
pub mod queue;
