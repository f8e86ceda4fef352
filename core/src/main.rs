mod args;
mod commands;

use args::{Args, Command};
use clap::Parser;
use evaluation::AnalysisConfig;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let (args, config) = init()?;

    match &args.command {
        Command::Eval { fen, insights } => commands::eval(fen, *insights, &config),
        Command::Compare { fen, moves } => commands::compare(fen, moves, &config),
        Command::Progression { fen, moves, limit } => {
            let limit = limit.unwrap_or(config.progression_ply_limit);
            commands::progression(fen, moves, limit)
        }
        Command::Batch { file } => commands::batch(file),
    }
}

fn init() -> Result<(Args, AnalysisConfig), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    } else {
        TermLogger::init(
            verbosity(args.verbose),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    let mut config = AnalysisConfig::default();
    for assignment in &args.overrides {
        config.apply_assignment(assignment)?;
        debug!("Applied override {}", assignment);
    }

    Ok((args, config))
}

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
