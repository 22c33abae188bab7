pub mod decode;
pub mod raster;
