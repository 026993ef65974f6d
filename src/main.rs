//! Ringmatch CLI
//!
//! Launches an interactive provably fair rock-paper-scissors session over
//! the move names supplied on the command line.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ringmatch::cli::Session;
use ringmatch::game::moves::MoveList;
use ringmatch::VERSION;

/// Generalized rock-paper-scissors with a verifiable computer opponent.
#[derive(Debug, Parser)]
#[command(name = "ringmatch", version, about)]
struct Args {
    /// Move names in ring order; odd count, at least three, no repeats.
    #[arg(value_name = "MOVE")]
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    info!(version = VERSION, "ringmatch starting");

    let moves = match MoveList::new(args.moves) {
        Ok(moves) => moves,
        Err(rejection) => {
            // Configuration errors are terminal: one message, no session.
            println!("{}", rejection);
            return Ok(());
        }
    };

    let mut session = Session::start(moves).context("could not seal the opponent's move")?;
    session.run().context("session input/output failed")?;
    Ok(())
}

/// Install the tracing subscriber: stderr, `warn` unless RUST_LOG says
/// otherwise, so log lines never interleave with the interactive screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
