use std::env::args_os;
use std::process::ExitCode;

use grid_bitmap::{convert_grid_to_bitmap, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match convert_grid_to_bitmap(&arguments) {
        Ok(_) => {
            println!(
                "Bitmap file '{}' written successfully",
                arguments.output_file().display()
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_input_error() => {
            eprintln!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
