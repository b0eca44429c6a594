use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use memhex_core::transcode;

/// Binary-to-hex transcoder for Verilog $readmemh
#[derive(Parser)]
#[command(
    name = "bin2hex",
    about = "Convert a binary file to one-byte-per-line hex for $readmemh",
    version,
    author
)]
struct Cli {
    /// Path to the binary input file
    #[arg(value_name = "input.bin")]
    input: PathBuf,

    /// Path of the hex file to write (created or truncated)
    #[arg(value_name = "output.hex")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "bin2hex".to_string());
            println!("Usage: {program} <input.bin> <output.hex>");
            return ExitCode::FAILURE;
        }
    };

    match transcode(&cli.input, &cli.output) {
        Ok(count) => {
            println!(
                "Successfully converted {} to {}",
                cli.input.display(),
                cli.output.display()
            );
            println!("  {count} bytes written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
