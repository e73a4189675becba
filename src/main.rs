//! kiln's main application entry point.
//! Parses the command line, wires the prompter, flags and file system
//! together and reports each rewritten file.

use chrono::Datelike;

use kiln::{
    cli::{get_args, Commands, InitArgs},
    config::get_config,
    error::{default_error_handler, Result},
    fs::LocalFileSystem,
    logger::init_logger,
    processor::{init, Outcome},
    prompt::{DialoguerPrompter, NonInteractivePrompter, Prompter},
    resolver::{InteractiveSource, Resolver},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let result = match args.command {
        Commands::Init(init_args) => run_init(init_args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Runs the `init` command.
///
/// # Flow
/// 1. Loads the skeleton layout configuration
/// 2. Resolves metadata from flags, prompting for the rest
/// 3. Rewrites each skeleton file, printing one line per step
fn run_init(args: InitArgs) -> Result<()> {
    let config = get_config(&args.path)?;
    let fs = LocalFileSystem::new(&args.path);

    let prompter: Box<dyn Prompter> = if args.no_interaction {
        Box::new(NonInteractivePrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let flags = args.flag_source();
    let interactive = InteractiveSource::new(&*prompter);
    let resolver = Resolver::new(&flags, &interactive);

    let year = chrono::Local::now().year();
    let outcome = init(&resolver, &fs, &config, year, |report| println!("{}", report));

    if let Outcome::Failed { step: Some(step), .. } = &outcome {
        eprintln!("Failed at step '{}'; earlier steps are not rolled back.", step);
    }
    outcome.into_result()?;

    println!("Package skeleton configured successfully in {}.", fs.root().display());
    Ok(())
}
