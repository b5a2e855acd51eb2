use std::io::{self, BufRead};

use super::super::{Dot, Image, ImageReader, MAX_IMAGE_DOTS};
use crate::color::PaletteColor;
use crate::error::Error;

const LINE_TERMINATOR: u8 = b'\n';

/// Parses a whole grid description into an image.
pub fn parse<R: BufRead>(reader: R) -> crate::Result<Image> {
    GridImageReader::new(reader).read_image()
}

pub struct GridImageReader<T: BufRead> {
    reader: T,
}

impl<T: BufRead> GridImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: BufRead> ImageReader for GridImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let mut tokenizer = GridTokenizer::new(&mut self.reader);
        let mut parser = GridParser::new(&mut tokenizer);
        let image = parser.parse_tokens()?;
        log::info!(
            "Parsed grid image of {}x{} dots",
            image.width(),
            image.height()
        );
        Ok(image)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Terminator {
    LineEnd,
    EndOfInput,
    Separator,
    Adjacent,
}

#[derive(Debug, PartialEq, Eq)]
struct Token {
    code: [u8; 2],
    terminator: Terminator,
}

struct GridTokenizer<'a, R: BufRead> {
    reader: &'a mut R,
    finished: bool,
}

impl<'a, R: BufRead> GridTokenizer<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buffer) => return Ok(buffer.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn read_token(&mut self) -> io::Result<Option<Token>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let Some(second) = self.read_byte()? else {
            return Ok(None);
        };
        let terminator = self.read_terminator()?;
        Ok(Some(Token {
            code: [first, second],
            terminator,
        }))
    }

    fn read_terminator(&mut self) -> io::Result<Terminator> {
        let terminator = match self.peek_byte()? {
            None => Terminator::EndOfInput,
            Some(LINE_TERMINATOR) => Terminator::LineEnd,
            Some(b'0' | b'1') => return Ok(Terminator::Adjacent),
            Some(byte) => {
                log::trace!("Discarding separator byte {:#04X}", byte);
                Terminator::Separator
            }
        };
        if terminator != Terminator::EndOfInput {
            self.reader.consume(1);
        }
        Ok(terminator)
    }
}

impl<R: BufRead> Iterator for GridTokenizer<'_, R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.read_token();
        match &token {
            Ok(Some(Token {
                terminator: Terminator::EndOfInput,
                ..
            }))
            | Ok(None)
            | Err(_) => self.finished = true,
            Ok(Some(_)) => {}
        }
        token.transpose()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowWidth {
    Undetermined,
    Fixed(usize),
}

struct GridParser<'a, T> {
    tokenizer: &'a mut T,
    row_width: RowWidth,
    dots: Vec<Dot>,
    row_start: usize,
    line: usize,
}

impl<'a, T> GridParser<'a, T>
where
    T: Iterator<Item = io::Result<Token>>,
{
    fn new(tokenizer: &'a mut T) -> Self {
        Self {
            tokenizer,
            row_width: RowWidth::Undetermined,
            dots: Vec::new(),
            row_start: 0,
            line: 0,
        }
    }

    fn parse_tokens(&mut self) -> crate::Result<Image> {
        while let Some(token) = self.tokenizer.next() {
            let token = token.map_err(Error::FailedToReadInputFile)?;
            self.check_capacity()?;
            let dot = Self::parse_color_code(&token.code)?;
            self.dots.push(dot);
            match token.terminator {
                Terminator::LineEnd => self.close_row()?,
                Terminator::EndOfInput => break,
                Terminator::Separator | Terminator::Adjacent => {}
            }
        }
        self.build_image()
    }

    fn check_capacity(&self) -> crate::Result<()> {
        if self.dots.len() >= MAX_IMAGE_DOTS {
            return Err(Error::ImageTooLarge(MAX_IMAGE_DOTS));
        }
        Ok(())
    }

    /// Reads the code as a base-2 number: the leading binary digits count,
    /// anything from the first non-digit on is ignored.
    fn parse_color_code(code: &[u8; 2]) -> crate::Result<Dot> {
        let value = match *code {
            [high @ (b'0' | b'1'), low @ (b'0' | b'1')] => ((high - b'0') << 1) | (low - b'0'),
            [digit @ (b'0' | b'1'), _] => digit - b'0',
            _ => return Err(Self::invalid_color_code(code)),
        };
        PaletteColor::try_from(value)
            .map(Dot::from)
            .map_err(|_| Self::invalid_color_code(code))
    }

    fn invalid_color_code(code: &[u8; 2]) -> Error {
        Error::InvalidColorCode(String::from_utf8_lossy(code).into_owned())
    }

    fn close_row(&mut self) -> crate::Result<()> {
        self.line += 1;
        let found = self.dots.len() - self.row_start;
        match self.row_width {
            RowWidth::Undetermined => {
                log::debug!("Row width fixed to {} dots", found);
                self.row_width = RowWidth::Fixed(found);
            }
            RowWidth::Fixed(width) if self.dots.len() % width != 0 => {
                return Err(Error::InconsistentRowWidth {
                    line: self.line,
                    expected_width: width,
                    found,
                });
            }
            RowWidth::Fixed(_) => {}
        }
        self.row_start = self.dots.len();
        Ok(())
    }

    fn build_image(&mut self) -> crate::Result<Image> {
        let width = match self.row_width {
            RowWidth::Undetermined => self.dots.len(),
            RowWidth::Fixed(width) => width,
        };
        if width == 0 {
            return Ok(Image::empty());
        }
        let remainder = self.dots.len() % width;
        if remainder != 0 {
            return Err(Error::IncompleteLastRow {
                expected_width: width,
                found: remainder,
            });
        }
        let height = self.dots.len() / width;
        let width = u16::try_from(width).map_err(|_| Error::ImageTooLarge(MAX_IMAGE_DOTS))?;
        let height = u16::try_from(height).map_err(|_| Error::ImageTooLarge(MAX_IMAGE_DOTS))?;
        Image::new(width, height, std::mem::take(&mut self.dots))
    }
}
