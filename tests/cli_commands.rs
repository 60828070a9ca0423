//! CLI Command Tests
//!
//! Commands run end to end against seed files on disk.

mod common;

use clap::Parser;
use neodb::cli::{run_command, Cli, CliErrorCode, Config};

use common::{write_files, write_seed_files, SeedFiles, SEED_APPROACHES};

fn config_for(files: &SeedFiles) -> Config {
    Config {
        neo_file: files.neo_file.clone(),
        cad_file: files.cad_file.clone(),
        ..Config::default()
    }
}

fn run(config: &Config, args: &[&str]) -> Result<String, neodb::cli::CliError> {
    let cli = Cli::parse_from(std::iter::once("neodb").chain(args.iter().copied()));
    let mut out = Vec::new();
    run_command(config, cli.command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_inspect_by_designation() {
    let files = write_seed_files();
    let text = run(&config_for(&files), &["inspect", "--pdes", "1999 RQ36"]).unwrap();
    assert_eq!(
        text,
        "NEO 1999 RQ36 (Bennu) has a diameter of 0.492 km and is potentially hazardous.\n"
    );
}

#[test]
fn test_inspect_unknown_diameter() {
    let files = write_seed_files();
    let text = run(&config_for(&files), &["inspect", "--pdes", "2020 AA"]).unwrap();
    assert_eq!(
        text,
        "NEO 2020 AA has an unknown diameter and is not potentially hazardous.\n"
    );
}

#[test]
fn test_query_to_stdout() {
    let files = write_seed_files();
    let text = run(&config_for(&files), &["query", "--date", "2020-01-01"]).unwrap();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        [
            "On 2020-01-01 00:00, '2020 AA' approaches Earth at a distance of 0.10 au and a velocity of 10.00 km/s.",
            "On 2020-01-01 12:00, '1999 RQ36 (Bennu)' approaches Earth at a distance of 0.05 au and a velocity of 20.00 km/s.",
        ]
    );
}

#[test]
fn test_query_to_json_file() {
    let files = write_seed_files();
    let outfile = files.dir().join("hazardous.json");
    let text = run(
        &config_for(&files),
        &["query", "--hazardous", "--outfile", outfile.to_str().unwrap()],
    )
    .unwrap();
    assert!(text.is_empty());

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outfile).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["neo"]["name"], "Bennu");
}

#[test]
fn test_missing_catalog() {
    let files = write_seed_files();
    let mut config = config_for(&files);
    config.neo_file = files.dir().join("absent.csv");

    let err = run(&config, &["query"]).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::LoadFailed);
}

#[test]
fn test_duplicate_designation_modes() {
    let neos = [("433", "Eros", "", "16.84"), ("433", "Eros", "", "16.9")];
    let files = write_files(&neos, &SEED_APPROACHES[3..]);

    let strict = config_for(&files);
    let err = run(&strict, &["inspect", "--pdes", "433"]).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::LinkFailed);
    assert!(err.message().contains("NEO_DATA_INTEGRITY"));

    let lenient = Config {
        strict_designations: false,
        ..strict
    };
    let text = run(&lenient, &["inspect", "--pdes", "433"]).unwrap();
    assert!(text.contains("16.900 km"));
}
