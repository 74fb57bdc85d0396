use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reg::db::RegDb;
use reg::render;

/// Registrar application: show details about a class
#[derive(Debug, Parser)]
#[command(name = "regdetails", version, about)]
struct Cli {
    /// the id of the class whose details should be shown
    #[arg(value_name = "classid")]
    classid: String,

    /// Path to the registrar database file
    #[arg(long, value_name = "FILE", env = "REG_DB", default_value = "reg.sqlite")]
    db: PathBuf,
}

fn main() -> ExitCode {
    reg::logging::init();
    if let Err(err) = run() {
        let prog = std::env::args().next().unwrap_or_else(|| "regdetails".into());
        eprintln!("{prog}: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db = RegDb::open(&cli.db)?;
    let details = db.details(&cli.classid)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render::render_details(&details).as_bytes())?;
    stdout.flush()?;

    db.close()?;
    Ok(())
}
