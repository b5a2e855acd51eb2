use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
pub use image::reader::grid::parse as parse_grid;
pub use image::writer::bmp::{encode as encode_bitmap, write_to as write_bitmap};
use image::{
    reader::GridImageReader, writer::BmpImageWriter, Image, ImageReader, ImageWriter,
};

mod binary_stream;
mod cli;
pub mod color;
mod error;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const OUTPUT_FILE_NAME: &str = "resultado.bmp";

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl Arguments {
    pub fn new(input_file: PathBuf, output_file: PathBuf) -> Self {
        Self {
            input_file,
            output_file,
        }
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

fn read_grid_image(file_path: &Path) -> Result<Image> {
    let input_file = open_input_file(file_path)?;
    let mut image_reader = GridImageReader::new(BufReader::new(input_file));
    image_reader.read_image()
}

/// Parses the grid file and, only if that succeeds, writes the bitmap.
pub fn convert_grid_to_bitmap(arguments: &Arguments) -> Result<()> {
    let image = read_grid_image(&arguments.input_file)?;
    let output_file = open_output_file(&arguments.output_file)?;
    let mut image_writer = BmpImageWriter::new(BufWriter::new(output_file), &image);
    image_writer.write_image()?;
    log::info!("Bitmap written to '{}'", arguments.output_file.display());
    Ok(())
}
