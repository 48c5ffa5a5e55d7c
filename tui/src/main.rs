mod app;
mod args;
mod event;
mod tui;
mod ui;

use crate::{args::Args, tui::Tui};
use cellsim_lib::World;
use color_eyre::Result;
use crossterm::tty::IsTty;
use std::io::stdout;

/// Run the program without the TUI interface.
///
/// Print the initial world and then the world after each tick.
fn run_no_tui(args: Args) -> Result<()> {
    let mut world = World::new(args.config)?;

    println!("Generation {}", world.generation());
    print!("{}", world.plaintext());

    for _ in 0..args.generations {
        world.step();
        println!("Generation {}", world.generation());
        print!("{}", world.plaintext());
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();

    let stdout = stdout();

    if args.no_tui || !stdout.is_tty() {
        run_no_tui(args)?;
    } else {
        let mut tui = Tui::new(args)?;
        tui.run()?;
    }

    Ok(())
}
