use cellsim_lib::Config;
use clap::{error::ErrorKind, CommandFactory, Parser};

/// A terminal front-end for Conway's Game of Life, falling sand, and Langton's Ant.
#[derive(Debug, Parser)]
#[command(name = "cellsim", version)]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Milliseconds between two ticks while the simulation is running.
    #[arg(short, long, default_value = "200")]
    pub interval: u64,

    /// Whether to disable the TUI interface.
    ///
    /// If the TUI interface is disabled, the program will print the world
    /// after each tick to stdout.
    #[arg(long)]
    pub no_tui: bool,

    /// Number of ticks to print when the TUI interface is disabled.
    #[arg(short, long, default_value = "10")]
    pub generations: u64,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        if args.interval == 0 {
            Self::command()
                .error(ErrorKind::ValueValidation, "interval must be > 0")
                .exit();
        }

        match args.config.clone().check() {
            Ok(config) => Self { config, ..args },
            Err(e) => Self::command().error(ErrorKind::ValueValidation, e).exit(),
        }
    }
}
