use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reg::db::RegDb;
use reg::query::SearchFilters;
use reg::render;

/// Registrar application: show overviews of classes
#[derive(Debug, Parser)]
#[command(name = "reg", version, about)]
struct Cli {
    /// show only those classes whose department contains dept
    #[arg(short = 'd', value_name = "dept")]
    dept: Option<String>,

    /// show only those classes whose course number contains num
    #[arg(short = 'n', value_name = "num")]
    num: Option<String>,

    /// show only those classes whose distrib area contains area
    #[arg(short = 'a', value_name = "area")]
    area: Option<String>,

    /// show only those classes whose course title contains title
    #[arg(short = 't', value_name = "title")]
    title: Option<String>,

    /// Path to the registrar database file
    #[arg(long, value_name = "FILE", env = "REG_DB", default_value = "reg.sqlite")]
    db: PathBuf,
}

fn main() -> ExitCode {
    reg::logging::init();
    if let Err(err) = run() {
        let prog = std::env::args().next().unwrap_or_else(|| "reg".into());
        eprintln!("{prog}: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filters = SearchFilters {
        dept: cli.dept,
        coursenum: cli.num,
        area: cli.area,
        title: cli.title,
    };

    let db = RegDb::open(&cli.db)?;
    let rows = db.search(&filters)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render::render_table(&rows).as_bytes())?;
    stdout.flush()?;

    db.close()?;
    Ok(())
}
