mod args;
mod io;
mod kernel;

use std::io::{stdin, stdout};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use args::SimulatorArgs;
use io::{Menu, ProgramInfo};
use kernel::{Driver, Memory};

fn main() -> anyhow::Result<()> {
    let args = SimulatorArgs::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let programs = load_programs(&args)?;
    let mut driver = Driver::new(programs, Memory::with_capacity(args.memory))
        .context("Failed to register processes")?;

    match args.scheduling_algorithm()? {
        Some(algorithm) => {
            let report = driver.run(algorithm)?;
            io::report::write_run_report(&mut stdout().lock(), &report)?;
        }
        None => Menu::new(stdin().lock(), stdout().lock()).run(&mut driver)?,
    }

    Ok(())
}

fn load_programs(args: &SimulatorArgs) -> anyhow::Result<Vec<ProgramInfo>> {
    if let Some(path) = &args.program_file {
        log::info!("Loading processes from {}", path.display());
        return io::load_programs(path)
            .with_context(|| format!("Failed to load processes from {}", path.display()));
    }

    if let Some(count) = args.random {
        log::info!("Generating {} random processes (seed {})", count, args.seed);
        return Ok(io::random_programs(count, args.seed));
    }

    Ok(io::sample_programs())
}
