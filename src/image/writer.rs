pub mod bmp;

pub use bmp::BmpImageWriter;
