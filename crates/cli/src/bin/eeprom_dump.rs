//! eeprom-dump - hex/ASCII dump of an EEPROM image

use anyhow::Result;
use clap::Parser;
use cli_lib::{cmd, util};
use std::path::PathBuf;

/// Print a hex/ASCII dump of a binary file
#[derive(Parser)]
#[command(name = "eeprom-dump")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// EEPROM dump to print
    path: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.path {
        Some(path) => cmd::dump::run(&path, &mut out),
        None => {
            util::print_usage(&mut out, &util::program_name("eeprom-dump"), "EEPROM dump")?;
            Ok(())
        }
    }
}
