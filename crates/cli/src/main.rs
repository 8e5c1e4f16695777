use anyhow::Result;
use clap::Parser;

use gildedrose_cli::Cli;

fn main() -> Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    gildedrose_cli::run(&cli, &mut stdout.lock())
}
