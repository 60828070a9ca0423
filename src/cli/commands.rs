//! CLI command implementations
//!
//! Every command resolves configuration, loads both datasets and links them
//! before doing any work. Command output goes to the writer it is given
//! (stdout from `run`); logs go to stderr.

use std::io::{self, Write};
use std::path::Path;

use crate::database::{NeoDatabase, Query};
use crate::extract::{load_approaches, load_neos};
use crate::filters::{create_filters, limit};
use crate::observability::{log_event, Event, Logger};
use crate::write::write_to_file;

use super::args::{Cli, Command, InspectArgs, QueryArgs};
use super::config::Config;
use super::errors::CliResult;

/// Results printed to stdout when `--limit` is not given
pub const DEFAULT_PRINT_LIMIT: usize = 10;

const NO_MATCH: &str = "No matching NEOs exist in the database.";

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = Config::resolve(&cli)?;
    Logger::set_min_severity(config.severity()?);

    let neo_file = config.neo_file.display().to_string();
    let cad_file = config.cad_file.display().to_string();
    log_event(
        Event::ConfigLoaded,
        &[
            ("cad_file", cad_file.as_str()),
            ("log_level", config.log_level.as_str()),
            ("neo_file", neo_file.as_str()),
        ],
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&config, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command
pub fn run_command<W: Write>(config: &Config, cmd: Command, out: &mut W) -> CliResult<()> {
    let db = open_database(config)?;

    match cmd {
        Command::Inspect(args) => inspect(&db, &args, out),
        Command::Query(args) => query(&db, &args, out),
    }
}

/// Load both datasets and link them
pub fn open_database(config: &Config) -> CliResult<NeoDatabase> {
    let neos = load_neos(&config.neo_file)?;
    let approaches = load_approaches(&config.cad_file)?;
    let db = NeoDatabase::with_options(neos, approaches, config.link_options())?;
    Ok(db)
}

/// Print one NEO, and its approaches when verbose
pub fn inspect<W: Write>(db: &NeoDatabase, args: &InspectArgs, out: &mut W) -> CliResult<()> {
    let target = &args.target;
    let found = match (&target.pdes, &target.name) {
        (Some(pdes), _) => db.by_designation(pdes),
        (None, Some(name)) => db.by_name(name),
        (None, None) => None,
    };

    let Some(neo) = found else {
        let key = target.pdes.as_deref().or(target.name.as_deref()).unwrap_or("");
        log_event(Event::LookupMiss, &[("key", key)]);
        writeln!(out, "{}", NO_MATCH)?;
        return Ok(());
    };

    writeln!(out, "{}", neo)?;
    if args.verbose {
        for view in db.approaches_of(neo) {
            writeln!(out, "- {}", view)?;
        }
    }
    Ok(())
}

/// Run a filtered query, printing results or writing them to `--outfile`
pub fn query<W: Write>(db: &NeoDatabase, args: &QueryArgs, out: &mut W) -> CliResult<()> {
    let filters = create_filters(&args.filter_options());

    match filters.check_bounds() {
        Ok(()) => {}
        Err(e) if e.is_usage_error() => {
            let description = filters.to_string();
            let reason = e.to_string();
            log_event(
                Event::ContradictoryFilters,
                &[("filters", description.as_str()), ("reason", reason.as_str())],
            );
        }
        Err(e) => return Err(e.into()),
    }

    let mut results = db.query(&filters);
    let emitted = match &args.outfile {
        Some(path) => write_results(&mut results, args.limit, path)?,
        None => {
            let max = args.limit.or(Some(DEFAULT_PRINT_LIMIT));
            let mut printed = 0;
            for view in limit(results.by_ref(), max) {
                writeln!(out, "{}", view)?;
                printed += 1;
            }
            printed
        }
    };

    let stats = results.stats();
    let scanned = stats.scanned.to_string();
    let matched = stats.matched.to_string();
    let emitted = emitted.to_string();
    log_event(
        Event::QueryComplete,
        &[
            ("emitted", emitted.as_str()),
            ("matched", matched.as_str()),
            ("scanned", scanned.as_str()),
        ],
    );
    Ok(())
}

fn write_results(
    results: &mut Query<'_>,
    max: Option<usize>,
    path: &Path,
) -> CliResult<usize> {
    Ok(write_to_file(limit(results, max), path)?)
}
