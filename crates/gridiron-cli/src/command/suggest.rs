use std::path::Path;

use clap::{Args, value_parser};
use gridiron_analysis::session::PlaybookSession;
use gridiron_engine::{GameClock, Situation};

use crate::{
    command::{IndexArg, OutputArg},
    data,
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SuggestArg {
    /// Quarter (1-4)
    #[arg(long, value_parser = value_parser!(u8).range(1..=4))]
    quarter: u8,
    /// Down (1-4), or 0 for a try after a touchdown
    #[arg(long, value_parser = value_parser!(u8).range(0..=4))]
    down: u8,
    /// Yards to go (0-99)
    #[arg(long, value_parser = value_parser!(u8).range(0..=99))]
    to_go: u8,
    /// Field position (0-100, 100 is the opponent's goal line)
    #[arg(long, value_parser = value_parser!(u8).range(0..=100))]
    yard_line: u8,
    /// Time left in the quarter as mm:ss
    #[arg(long)]
    time: GameClock,
    #[arg(long, value_enum, default_value_t = IndexArg::Heap)]
    index: IndexArg,
    #[clap(flatten)]
    output: OutputArg,
}

impl SuggestArg {
    fn situation(&self) -> anyhow::Result<Situation> {
        Ok(Situation::new(
            self.quarter,
            self.down,
            self.to_go,
            self.yard_line,
            self.time,
        )?)
    }
}

pub(crate) fn run(corpus: &Path, arg: &SuggestArg) -> anyhow::Result<()> {
    let situation = arg.situation()?;
    let plays = data::read_corpus(corpus)?;
    let mut session = PlaybookSession::new(plays).with_insights(arg.output.insights);
    let recommendation = session.recommend(&situation, arg.index.into());

    let mut output = Output::from_output_path(arg.output.output.clone())?;
    output.write_recommendation(&recommendation, arg.output.json)?;
    if let Some(path) = output.path() {
        log::info!("Recommendation written to {}", path.display());
    }
    Ok(())
}
