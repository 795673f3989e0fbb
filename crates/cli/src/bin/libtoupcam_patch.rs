//! libtoupcam-patch - enable debug logging in libtoupcam.so

use anyhow::Result;
use clap::Parser;
use cli_lib::{cmd, util};
use std::path::{Path, PathBuf};

/// Patch a known build of libtoupcam.so to write debug output to ./toupcam.log
#[derive(Parser)]
#[command(name = "libtoupcam-patch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to libtoupcam.so
    path: Option<PathBuf>,

    /// Only verify the library's digest; write nothing
    #[arg(long)]
    check: bool,

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
        Some(path) => {
            // Output always lands in the working directory
            cmd::patch::run(&path, Path::new("."), cli.check, &mut out)?;
            Ok(())
        }
        None => {
            let program = util::program_name("libtoupcam-patch");
            util::print_usage(&mut out, &program, "path to libtoupcam.so")?;
            Ok(())
        }
    }
}
