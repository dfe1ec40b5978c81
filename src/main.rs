use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contest_template::prelude::*;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Read input from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write `debug!` lines to this file instead of stderr.
    #[arg(short, long)]
    diagnostics: Option<PathBuf>,

    /// Use input.txt, output.txt and debug.txt in the working directory.
    #[arg(long, conflicts_with_all = ["input", "output", "diagnostics"])]
    files: bool,

    /// The first token of the input is the number of test cases.
    #[arg(short, long)]
    multi: bool,

    /// Fixed seed for the per-run generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the single-module source for judge submissions and exit.
    #[arg(long)]
    bundle: bool,
}

impl Args {
    fn config(self) -> Config {
        let mut config = if self.files { Config::local_files() } else { Config::default() };
        if let Some(path) = self.input {
            config = config.input(path);
        }
        if let Some(path) = self.output {
            config = config.output(path);
        }
        if let Some(path) = self.diagnostics {
            config = config.diagnostics(path);
        }
        if self.multi {
            config = config.tests(TestCount::FromInput);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        config
    }
}

fn solve(_ctx: &mut Context<'_>) -> Result<()> {
    // problem logic goes here
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    if args.bundle {
        print!("{}", contest_template::bundle::SOURCE);
        return ExitCode::SUCCESS
    }

    match Runner::new(args.config()).run(solve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
