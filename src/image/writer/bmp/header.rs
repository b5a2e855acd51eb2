use super::scanline::ScanlineLayout;
use crate::binary_stream::LittleEndianRecord;
use crate::image::Image;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;

/// "BM"
const BITMAP_SIGNATURE: u16 = 0x4D42;
const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 24;
/// BI_RGB
const COMPRESSION_NONE: u32 = 0;
/// Roughly 72 DPI.
const PIXELS_PER_METER: i32 = 2835;
const COLORS_USED: u32 = 0;
const IMPORTANT_COLORS: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    file_size: u32,
}

impl FileHeader {
    pub fn new(image_data_size: u32) -> Self {
        Self {
            file_size: PIXEL_DATA_OFFSET + image_data_size,
        }
    }

    pub fn file_size(&self) -> u32 {
        self.file_size
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut record = LittleEndianRecord::<FILE_HEADER_SIZE>::new();
        record
            .put_u16(BITMAP_SIGNATURE)
            .put_u32(self.file_size)
            .put_u16(0)
            .put_u16(0)
            .put_u32(PIXEL_DATA_OFFSET);
        record.into_bytes()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    width: i32,
    height: i32,
    image_data_size: u32,
}

impl InfoHeader {
    pub fn new(image: &Image, layout: &ScanlineLayout) -> Self {
        Self {
            width: i32::from(image.width()),
            height: i32::from(image.height()),
            image_data_size: layout.image_data_size(image.height()),
        }
    }

    pub fn image_data_size(&self) -> u32 {
        self.image_data_size
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut record = LittleEndianRecord::<INFO_HEADER_SIZE>::new();
        record
            .put_u32(INFO_HEADER_SIZE as u32)
            .put_i32(self.width)
            .put_i32(self.height)
            .put_u16(COLOR_PLANES)
            .put_u16(BITS_PER_PIXEL)
            .put_u32(COMPRESSION_NONE)
            .put_u32(self.image_data_size)
            .put_i32(PIXELS_PER_METER)
            .put_i32(PIXELS_PER_METER)
            .put_u32(COLORS_USED)
            .put_u32(IMPORTANT_COLORS);
        record.into_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::{FileHeader, InfoHeader, ScanlineLayout};
    use crate::image::{Dot, Image};

    #[test]
    fn file_header_layout() {
        let bytes = FileHeader::new(16).to_bytes();
        assert_eq!(
            bytes,
            [0x42, 0x4D, 70, 0, 0, 0, 0, 0, 0, 0, 54, 0, 0, 0],
            "file header does not match"
        );
    }

    #[test]
    fn info_header_layout() {
        let image = Image::new(3, 1, vec![Dot::default(); 3]).unwrap();
        let layout = ScanlineLayout::new(image.width());
        let header = InfoHeader::new(&image, &layout);
        assert_eq!(header.image_data_size(), 12);
        let bytes = header.to_bytes();
        assert_eq!(&bytes[0..4], &[40, 0, 0, 0], "header size");
        assert_eq!(&bytes[4..8], &[3, 0, 0, 0], "width");
        assert_eq!(&bytes[8..12], &[1, 0, 0, 0], "height");
        assert_eq!(&bytes[12..14], &[1, 0], "planes");
        assert_eq!(&bytes[14..16], &[24, 0], "bits per pixel");
        assert_eq!(&bytes[16..20], &[0, 0, 0, 0], "compression");
        assert_eq!(&bytes[20..24], &[12, 0, 0, 0], "image data size");
        assert_eq!(&bytes[24..28], &[0x13, 0x0B, 0, 0], "horizontal resolution");
        assert_eq!(&bytes[28..32], &[0x13, 0x0B, 0, 0], "vertical resolution");
        assert_eq!(&bytes[32..40], &[0; 8], "color counts");
    }
}
