pub mod color;
pub mod config;
pub mod error;
pub mod graphics;
pub mod image;
pub mod input;
pub mod raster;
pub mod render;
pub mod session;
pub mod surface;
