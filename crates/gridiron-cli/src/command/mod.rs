use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridiron_analysis::session::IndexKind;

use self::{interactive::InteractiveArg, suggest::SuggestArg};

mod index_stats;
mod interactive;
mod suggest;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Play-by-play CSV corpus
    #[arg(long, global = true, default_value = "files/pbp2013-2023.csv")]
    corpus: PathBuf,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Answer situations typed at a prompt
    Interactive(#[clap(flatten)] InteractiveArg),
    /// Answer a single situation given as flags
    Suggest(#[clap(flatten)] SuggestArg),
    /// Show how the corpus spreads over the bucket index
    IndexStats,
}

/// Structure used to find similar situations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum IndexArg {
    /// Full scan of the rating-ordered heap
    #[default]
    Heap,
    /// Lookup in the situation bucket index
    Buckets,
}

impl From<IndexArg> for IndexKind {
    fn from(arg: IndexArg) -> Self {
        match arg {
            IndexArg::Heap => IndexKind::Heap,
            IndexArg::Buckets => IndexKind::Buckets,
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OutputArg {
    /// Print recommendations as JSON
    #[arg(long)]
    json: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Add run/pass and risk insights to each report
    #[arg(long)]
    insights: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let corpus = &args.corpus;
    match args
        .mode
        .unwrap_or(Mode::Interactive(InteractiveArg::default()))
    {
        Mode::Interactive(arg) => interactive::run(corpus, &arg)?,
        Mode::Suggest(arg) => suggest::run(corpus, &arg)?,
        Mode::IndexStats => index_stats::run(corpus)?,
    }
    Ok(())
}
