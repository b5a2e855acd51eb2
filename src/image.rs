use crate::color::RGBColorFormat;
use crate::error::Error;

pub mod reader;
pub mod writer;

/// Upper bound on the number of dots a single image may hold.
pub const MAX_IMAGE_DOTS: usize = 1024;

pub type Dot = RGBColorFormat<u8>;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// A rectangular, row-major grid of dots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    dots: Vec<Dot>,
}

impl Image {
    pub fn new(width: u16, height: u16, dots: Vec<Dot>) -> crate::Result<Self> {
        if dots.len() > MAX_IMAGE_DOTS {
            return Err(Error::ImageTooLarge(MAX_IMAGE_DOTS));
        }
        let expected_number_of_dots = width as usize * height as usize;
        let has_zero_dimension = width == 0 || height == 0;
        if dots.len() != expected_number_of_dots || (has_zero_dimension && (width, height) != (0, 0))
        {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndDots {
                width,
                height,
                dots: dots.len(),
            });
        }
        Ok(Self {
            width,
            height,
            dots,
        })
    }

    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            dots: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dot(&self, column_index: u16, row_index: u16) -> Option<Dot> {
        if column_index >= self.width || row_index >= self.height {
            return None;
        }
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.dots.get(index).copied()
    }

    /// Rows from top to bottom; reverse it for bitmap scanline order.
    pub fn rows(&self) -> std::slice::Chunks<'_, Dot> {
        self.dots.chunks(usize::from(self.width.max(1)))
    }
}

#[cfg(test)]
mod test {
    use super::{Dot, Image, MAX_IMAGE_DOTS};
    use crate::color::PaletteColor;
    use crate::error::Error;

    fn dots(colors: &[PaletteColor]) -> Vec<Dot> {
        colors.iter().copied().map(Dot::from).collect()
    }

    #[test]
    fn rows_are_split_by_width() {
        use PaletteColor::*;
        let image = Image::new(3, 2, dots(&[Yellow, Black, Blue, Green, Yellow, Black])).unwrap();
        let rows: Vec<&[Dot]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[1], &dots(&[Green, Yellow, Black])[..]);
        let bottom_up: Vec<&[Dot]> = image.rows().rev().collect();
        assert_eq!(bottom_up[0], rows[1]);
    }

    #[test]
    fn dot_lookup() {
        use PaletteColor::*;
        let image = Image::new(2, 2, dots(&[Yellow, Black, Blue, Green])).unwrap();
        assert_eq!(image.dot(0, 1), Some(Dot::from(Blue)));
        assert_eq!(image.dot(1, 0), Some(Dot::from(Black)));
        assert_eq!(image.dot(2, 0), None);
        assert_eq!(image.dot(0, 2), None);
    }

    #[test]
    fn empty_image_has_no_rows() {
        let image = Image::empty();
        assert!(image.is_empty());
        assert_eq!(image.rows().count(), 0);
        assert_eq!(Image::new(0, 0, Vec::new()).unwrap(), image);
    }

    #[test]
    fn mismatching_dimensions_are_rejected() {
        let result = Image::new(3, 2, dots(&[PaletteColor::Black; 5]));
        assert!(matches!(
            result,
            Err(Error::MismatchOfSizeBetweenDimensionsAndDots {
                width: 3,
                height: 2,
                dots: 5
            })
        ));
    }

    #[test]
    fn zero_height_with_width_is_rejected() {
        let result = Image::new(4, 0, Vec::new());
        assert!(matches!(
            result,
            Err(Error::MismatchOfSizeBetweenDimensionsAndDots { .. })
        ));
    }

    #[test]
    fn too_many_dots_are_rejected() {
        let result = Image::new(1025, 1, vec![Dot::default(); MAX_IMAGE_DOTS + 1]);
        assert!(matches!(result, Err(Error::ImageTooLarge(MAX_IMAGE_DOTS))));
        assert!(Image::new(1024, 1, vec![Dot::default(); MAX_IMAGE_DOTS]).is_ok());
    }
}
