//! Auto-upload CSV to GitHub.

use clap::Parser;

mod banner;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "auto-upload",
    version,
    about = "Announces the battery-tester auto-upload configuration"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    let stdout = std::io::stdout();
    banner::write_banner(&mut stdout.lock())?;
    Ok(())
}
