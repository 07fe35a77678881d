use clap::Parser;
use scrumpoker::gameplay::Table;
use scrumpoker::save::disk;
use scrumpoker::session::Session;
use std::path::PathBuf;

/// Planning Poker estimation sessions at the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// resume from a saved session record (full or setup-only shape)
    #[arg(long)]
    load: Option<PathBuf>,
    /// where snapshots and results are written
    #[arg(long, default_value = "scrumpoker.json")]
    save: PathBuf,
}

fn main() -> anyhow::Result<()> {
    scrumpoker::log();
    let args = Args::parse();
    let session = match args.load {
        Some(path) => Session::try_from(disk::read(&path)?)?,
        None => Table::setup(),
    };
    Table::new(session, args.save).play();
    Ok(())
}
