use crate::{Arguments, OUTPUT_FILE_NAME};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, value_parser,
    Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

const USAGE_ERROR_EXIT_CODE: i32 = 1;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Parses the arguments or terminates the process with a usage message.
    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse(itr).unwrap_or_else(|e| Self::exit_with_usage(e))
    }

    pub fn try_parse<I, T>(&mut self, itr: I) -> Result<Arguments, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(itr)?;
        Ok(Self::extract_arguments(&matches))
    }

    fn exit_with_usage(error: clap::Error) -> ! {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                print!("{}", error.render());
                process::exit(USAGE_ERROR_EXIT_CODE)
            }
        }
    }

    fn register_arguments(command: Command) -> Command {
        Self::register_input_file_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .after_help(format!("The bitmap is written to '{}'.", OUTPUT_FILE_NAME))
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the text file describing the pixel grid")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments::new(
            Self::extract_input_file_argument(matches),
            PathBuf::from(OUTPUT_FILE_NAME),
        )
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;
    use crate::OUTPUT_FILE_NAME;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "grid.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn output_file_is_fixed() {
        let input_file_path = "/input_directory/grid.txt";
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, input_file_path]);
        assert_eq!(
            arguments.input_file().to_str().unwrap(),
            input_file_path,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file().to_str().unwrap(),
            OUTPUT_FILE_NAME,
            "output file does not match"
        );
    }

    #[test]
    fn missing_input_file_argument() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.try_parse(vec![PROGRAM_NAME_ARGUMENT]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        } else {
            panic!("Missing input file not detected");
        }
    }

    #[test]
    fn surplus_argument_is_rejected() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.try_parse(vec![PROGRAM_NAME_ARGUMENT, "a.txt", "b.txt"]);
        assert!(result.is_err(), "Second positional argument not rejected");
    }
}
