use std::io::Write;

use super::header::{FileHeader, InfoHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use super::scanline::ScanlineLayout;
use crate::error::Error;
use crate::image::Image;
use crate::logger;
use crate::Result;

/// Builds the complete bitmap file for `image` in memory.
pub fn encode(image: &Image) -> Vec<u8> {
    let layout = ScanlineLayout::new(image.width());
    let info_header = InfoHeader::new(image, &layout);
    let file_header = FileHeader::new(info_header.image_data_size());
    let mut bytes = Vec::with_capacity(file_header.file_size() as usize);
    bytes.extend_from_slice(&file_header.to_bytes());
    bytes.extend_from_slice(&info_header.to_bytes());
    bytes.extend(image_data(image, &layout));
    bytes
}

fn image_data(image: &Image, layout: &ScanlineLayout) -> Vec<u8> {
    let mut data = Vec::with_capacity(layout.image_data_size(image.height()) as usize);
    for row in image.rows().rev() {
        layout.append_scanline(row, &mut data);
    }
    data
}

pub struct Encoder<'a, T> {
    writer: &'a mut T,
    image: &'a Image,
    layout: ScanlineLayout,
}

impl<'a, T: Write> Encoder<'a, T> {
    pub fn new(writer: &'a mut T, image: &'a Image) -> Encoder<'a, T> {
        let layout = ScanlineLayout::new(image.width());
        Encoder {
            writer,
            image,
            layout,
        }
    }

    pub fn encode(&mut self) -> Result<()> {
        let info_header = InfoHeader::new(self.image, &self.layout);
        let file_header = FileHeader::new(info_header.image_data_size());
        self.write_file_header(&file_header)?;
        self.write_info_header(&info_header)?;
        self.write_image_data()?;
        Ok(())
    }

    fn write_file_header(&mut self, header: &FileHeader) -> Result<()> {
        let bytes: [u8; FILE_HEADER_SIZE] = header.to_bytes();
        logger::log_header("File Header", &bytes);
        self.writer
            .write_all(&bytes)
            .map_err(Error::FailedToWriteFileHeader)
    }

    fn write_info_header(&mut self, header: &InfoHeader) -> Result<()> {
        let bytes: [u8; INFO_HEADER_SIZE] = header.to_bytes();
        logger::log_header("Info Header", &bytes);
        self.writer
            .write_all(&bytes)
            .map_err(Error::FailedToWriteInfoHeader)
    }

    fn write_image_data(&mut self) -> Result<()> {
        log::info!(
            "Writing {} scanlines of {} bytes",
            self.image.height(),
            self.layout.stride()
        );
        self.writer
            .write_all(&image_data(self.image, &self.layout))
            .map_err(Error::FailedToWriteImageData)
    }
}
