//! Command-line interface implementation for templetize.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for templetize.
#[derive(Parser, Debug)]
#[command(
    name = "templetize",
    author,
    version,
    about = "templetize: turn a project into a create-react-app template",
    long_about = None
)]
pub struct Args {
    /// Source project directory
    #[arg(short = 'i', long, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory in which the template package directory is created
    #[arg(short = 'o', long, value_name = "TARGET")]
    pub target: PathBuf,

    /// Optional JSON (or YAML) template configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
