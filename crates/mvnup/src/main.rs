use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use mvnup_version::{ComparisonMethod, SegmentLevel, Version};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod output_format;

use commands::updates::UpdatesArgs;
use config::Settings;

const LOG_ENV_VAR: &str = "MVNUP_LOG";

#[derive(Parser)]
#[command(name = "mvnup", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global_args: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
pub(crate) struct GlobalArgs {
    /// Configuration file to read instead of ./mvnup.yaml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    /// How versions are ordered: maven or mercury
    #[arg(long, global = true, value_name = "METHOD")]
    comparison_method: Option<ComparisonMethod>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl GlobalArgs {
    fn settings(&self) -> Result<Settings, config::Error> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(method) = self.comparison_method {
            settings.comparison_method = method;
        }
        Ok(settings)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two versions")]
    Compare { a: Version, b: Version },

    #[command(about = "Show the segments a version is made of")]
    Segments { version: Version },

    #[command(about = "Show the first snapshot of the next line at a segment")]
    Next {
        version: Version,

        /// Segment to increment
        #[arg(long, short, value_name = "LEVEL")]
        segment: SegmentLevel,
    },

    #[command(about = "Keep the candidate versions that fall inside a range")]
    Filter {
        /// Range such as [1.0,2.0) or (,1.0],[1.2,)
        #[arg(long, short)]
        range: String,

        candidates: Vec<Version>,
    },

    #[command(about = "Find the updates a version is allowed to take")]
    Updates(UpdatesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global_args.verbose);

    let settings = cli.global_args.settings()?;

    let Some(command) = cli.command else {
        Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "'mvnup' requires a subcommand but one was not provided",
            )
            .exit()
    };

    match command {
        Commands::Compare { a, b } => commands::compare::compare(&settings, &a, &b),
        Commands::Segments { version } => commands::segments::segments(&settings, &version),
        Commands::Next { version, segment } => {
            commands::next::next(&settings, &version, segment)?
        }
        Commands::Filter { range, candidates } => {
            commands::filter::filter(&settings, &range, &candidates)?
        }
        Commands::Updates(args) => commands::updates::updates(&settings, args)?,
    }

    Ok(())
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(anstream::stderr)
        .with_target(false)
        .without_time()
        .init();
}
