//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::flags;
use crate::resolver::FlagSource;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: turn a package skeleton into a named package", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the skeleton placeholders and rename the service provider
    Init(InitArgs),
}

/// Options of the `init` command. Anything omitted is prompted for.
#[derive(clap::Args, Debug, Default)]
pub struct InitArgs {
    /// Root directory of the skeleton to rewrite
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Package name, e.g. "My Cool Lib"
    #[arg(long)]
    pub package_name: Option<String>,

    /// Vendor name (defaults to the author's first name)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Short package description
    #[arg(long)]
    pub description: Option<String>,

    /// Service provider class name ("ServiceProvider" is appended when missing)
    #[arg(long)]
    pub class_name: Option<String>,

    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// Author email
    #[arg(long)]
    pub author_email: Option<String>,

    /// Package homepage URL
    #[arg(long)]
    pub homepage: Option<String>,

    /// Author homepage URL
    #[arg(long)]
    pub author_homepage: Option<String>,

    /// Never prompt; missing required values fail the run
    #[arg(short = 'n', long)]
    pub no_interaction: bool,
}

impl InitArgs {
    /// Explicit flag values, keyed by flag name.
    pub fn flag_source(&self) -> FlagSource {
        FlagSource::new()
            .with(flags::PACKAGE_NAME, self.package_name.clone())
            .with(flags::VENDOR, self.vendor.clone())
            .with(flags::DESCRIPTION, self.description.clone())
            .with(flags::CLASS_NAME, self.class_name.clone())
            .with(flags::AUTHOR_NAME, self.author_name.clone())
            .with(flags::AUTHOR_EMAIL, self.author_email.clone())
            .with(flags::HOMEPAGE, self.homepage.clone())
            .with(flags::AUTHOR_HOMEPAGE, self.author_homepage.clone())
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
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
