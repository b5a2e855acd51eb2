use crate::image::Dot;

pub const BYTES_PER_DOT: u32 = 3;
const ROW_ALIGNMENT: u32 = 4;

/// Byte layout of one bitmap row: BGR dots followed by zero padding up to
/// the next multiple of four bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanlineLayout {
    width: u16,
    padding: u32,
}

impl ScanlineLayout {
    pub fn new(width: u16) -> Self {
        let unpadded_length = u32::from(width) * BYTES_PER_DOT;
        let padding = (ROW_ALIGNMENT - unpadded_length % ROW_ALIGNMENT) % ROW_ALIGNMENT;
        Self { width, padding }
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn unpadded_length(&self) -> u32 {
        u32::from(self.width) * BYTES_PER_DOT
    }

    pub fn stride(&self) -> u32 {
        self.unpadded_length() + self.padding()
    }

    pub fn image_data_size(&self, height: u16) -> u32 {
        self.stride() * u32::from(height)
    }

    pub fn append_scanline(&self, row: &[Dot], buffer: &mut Vec<u8>) {
        debug_assert_eq!(row.len(), self.width as usize);
        for dot in row {
            buffer.extend_from_slice(&dot.to_bgr_bytes());
        }
        buffer.resize(buffer.len() + self.padding as usize, 0);
    }
}

#[cfg(test)]
mod test {
    use super::ScanlineLayout;
    use crate::color::PaletteColor;
    use crate::image::Dot;

    #[test]
    fn padding_for_small_widths() {
        let expected = [(0, 0, 0), (1, 1, 4), (2, 2, 8), (3, 3, 12), (4, 0, 12), (5, 1, 16)];
        for (width, padding, stride) in expected {
            let layout = ScanlineLayout::new(width);
            assert_eq!(layout.padding(), padding, "padding for width {}", width);
            assert_eq!(layout.stride(), stride, "stride for width {}", width);
        }
    }

    #[test]
    fn image_data_size_counts_padding() {
        let layout = ScanlineLayout::new(2);
        assert_eq!(layout.image_data_size(2), 16);
        assert_eq!(layout.image_data_size(0), 0);
    }

    #[test]
    fn scanline_is_bgr_then_padding() {
        let layout = ScanlineLayout::new(1);
        let mut buffer = vec![0xAA];
        layout.append_scanline(&[Dot::from(PaletteColor::Green)], &mut buffer);
        assert_eq!(buffer, vec![0xAA, 0x00, 0xFF, 0x00, 0x00]);
    }
}
