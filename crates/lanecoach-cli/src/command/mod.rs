use clap::{Parser, Subcommand};

use self::{advise::AdviseArg, analyze_replay::AnalyzeReplayArg};

mod advise;
mod analyze_replay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score a live-match snapshot and print recommended actions
    Advise(#[clap(flatten)] AdviseArg),
    /// Mine a recorded match timeline for behavioral patterns
    AnalyzeReplay(#[clap(flatten)] AnalyzeReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Advise(arg) => advise::run(&arg)?,
        Mode::AnalyzeReplay(arg) => analyze_replay::run(&arg)?,
    }
    Ok(())
}
