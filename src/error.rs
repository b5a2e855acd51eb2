use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum Error {
    InvalidColorCode(String),
    ImageTooLarge(usize),
    InconsistentRowWidth {
        line: usize,
        expected_width: usize,
        found: usize,
    },
    IncompleteLastRow {
        expected_width: usize,
        found: usize,
    },
    MismatchOfSizeBetweenDimensionsAndDots {
        width: u16,
        height: u16,
        dots: usize,
    },
    UnableToOpenInputFileForReading(String, io::Error),
    FailedToReadInputFile(io::Error),
    UnableToOpenOutputFileForWriting(String, io::Error),
    FailedToWriteFileHeader(io::Error),
    FailedToWriteInfoHeader(io::Error),
    FailedToWriteImageData(io::Error),
}

impl Error {
    /// Errors raised before any input could be read at all.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnableToOpenInputFileForReading(..))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColorCode(token) => {
                write!(f, "Invalid color code '{}'", token)
            }
            Self::ImageTooLarge(max) => {
                write!(f, "Image exceeds the maximum size of {} pixels", max)
            }
            Self::InconsistentRowWidth {
                line,
                expected_width,
                found,
            } => {
                write!(
                    f,
                    "Inconsistent row width in line {}. Expected a multiple of {} pixels, but got {}.",
                    line, expected_width, found
                )
            }
            Self::IncompleteLastRow {
                expected_width,
                found,
            } => {
                write!(
                    f,
                    "Incomplete last row. Expected {} pixels, but got {}.",
                    expected_width, found
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndDots {
                width,
                height,
                dots,
            } => {
                write!(
                    f,
                    "Number of pixels ({}) does not match the dimensions {}x{}",
                    dots, width, height
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(error) => {
                write!(f, "Failed to read input file: {}", error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteFileHeader(error) => {
                write!(f, "Failed to write bitmap file header: {}", error)
            }
            Self::FailedToWriteInfoHeader(error) => {
                write!(f, "Failed to write bitmap info header: {}", error)
            }
            Self::FailedToWriteImageData(error) => {
                write!(f, "Failed to write image data: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadInputFile(error)
            | Self::FailedToWriteFileHeader(error)
            | Self::FailedToWriteInfoHeader(error)
            | Self::FailedToWriteImageData(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use super::Error;

    #[test]
    fn only_open_failure_of_input_is_input_error() {
        let open_failure = Error::UnableToOpenInputFileForReading(
            "missing.txt".to_owned(),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(open_failure.is_input_error());
        assert!(!Error::ImageTooLarge(1024).is_input_error());
        assert!(!Error::FailedToReadInputFile(io::Error::from(io::ErrorKind::Other))
            .is_input_error());
    }

    #[test]
    fn invalid_color_code_message_names_token() {
        let message = Error::InvalidColorCode("2x".to_owned()).to_string();
        assert_eq!(message, "Invalid color code '2x'");
    }
}
