use anyhow::Result;
use clap::Parser;

use declutter::cli::CliArgs;

fn main() -> Result<()> {
    declutter::tracing::init();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    args.run(&mut stdout.lock())
}
