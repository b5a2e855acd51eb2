use std::io::Write;

mod encoder;
mod header;
mod scanline;

pub use encoder::{encode, Encoder};

use crate::error::Error;
use crate::image::{Image, ImageWriter};

/// Encodes `image` and commits the bytes to `writer`.
pub fn write_to<T: Write>(image: &Image, writer: &mut T) -> crate::Result<()> {
    BmpImageWriter::new(writer, image).write_image()
}

pub struct BmpImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
}

impl<'a, T: Write> BmpImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image) -> Self {
        Self { writer, image }
    }
}

impl<T: Write> ImageWriter for BmpImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let mut encoder = Encoder::new(&mut self.writer, self.image);
        encoder.encode()?;
        self.writer.flush().map_err(Error::FailedToWriteImageData)
    }
}
