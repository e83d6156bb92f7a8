pub mod fade;
pub mod measure;
pub mod presentation;
pub mod tiling;
