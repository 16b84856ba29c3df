use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use kindlefy::error::KindlefyError;
use kindlefy::output::console::ConsoleReporter;

#[derive(Parser)]
#[command(
    name = "kindlefy",
    about = "Scan web sources for constructs the Kindle WebBrowser mishandles",
    version,
    author
)]
struct Cli {
    /// File or directory to scan
    target: Option<OsString>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = target_path(cli.target).and_then(cmd_scan);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// An absent or empty target is a usage error.
fn target_path(raw: Option<OsString>) -> Result<PathBuf, KindlefyError> {
    raw.filter(|t| !t.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| KindlefyError::Usage("Please provide a file or directory.".into()))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("KINDLEFY_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Logs go to stderr; stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_scan(target: PathBuf) -> Result<(), KindlefyError> {
    let stdout = std::io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());
    kindlefy::scan(&target, &mut reporter)?;
    Ok(())
}
