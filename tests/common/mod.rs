#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use neodb::{load_approaches, load_neos, CloseApproach, NearEarthObject, NeoDatabase};
use tempfile::TempDir;

const NEO_HEADER: &str =
    "id,spkid,full_name,pdes,name,prefix,neo,pha,H,G,M1,M2,K1,K2,PC,diameter,extent,albedo";

/// (pdes, name, pha, diameter)
pub const SEED_NEOS: [(&str, &str, &str, &str); 3] = [
    ("2020 AA", "", "", ""),
    ("1999 RQ36", "Bennu", "Y", "0.492"),
    ("433", "Eros", "", "16.84"),
];

/// (des, cd, dist, v_rel)
pub const SEED_APPROACHES: [(&str, &str, &str, &str); 4] = [
    ("2020 AA", "2020-Jan-01 00:00", "0.1", "10.0"),
    ("1999 RQ36", "2020-Jan-01 12:00", "0.05", "20.0"),
    ("1999 RQ36", "2021-Sep-24 16:42", "0.002", "5.9"),
    ("433", "2025-Jun-15 00:00", "0.5", "8.0"),
];

pub struct SeedFiles {
    _dir: TempDir, // keep alive for the life of the test
    pub neo_file: PathBuf,
    pub cad_file: PathBuf,
}

impl SeedFiles {
    pub fn dir(&self) -> &std::path::Path {
        self._dir.path()
    }
}

/// NEO catalog text in the JPL small-body export layout
pub fn neo_csv(neos: &[(&str, &str, &str, &str)]) -> String {
    let mut text = format!("{}\n", NEO_HEADER);
    for (i, (pdes, name, pha, diameter)) in neos.iter().enumerate() {
        text.push_str(&format!(
            "a{i:07},{},\"{} {}\",{},{},,Y,{},10.4,,,,,,,{},,0.25\n",
            2000000 + i,
            pdes,
            name,
            pdes,
            name,
            pha,
            diameter
        ));
    }
    text
}

/// Close approach document in the SBDB close-approach API layout
pub fn cad_json(approaches: &[(&str, &str, &str, &str)]) -> String {
    let data: Vec<serde_json::Value> = approaches
        .iter()
        .map(|(des, cd, dist, v_rel)| {
            serde_json::json!([des, "1", "2458849.5", cd, dist, dist, dist, v_rel, v_rel, "00:01", "20.1"])
        })
        .collect();

    serde_json::json!({
        "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
        "count": data.len().to_string(),
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
        "data": data,
    })
    .to_string()
}

pub fn write_seed_files() -> SeedFiles {
    write_files(&SEED_NEOS, &SEED_APPROACHES)
}

pub fn write_files(
    neos: &[(&str, &str, &str, &str)],
    approaches: &[(&str, &str, &str, &str)],
) -> SeedFiles {
    let dir = TempDir::new().expect("tempdir");
    let neo_file = dir.path().join("neos.csv");
    let cad_file = dir.path().join("cad.json");
    fs::write(&neo_file, neo_csv(neos)).expect("write neos");
    fs::write(&cad_file, cad_json(approaches)).expect("write cad");

    SeedFiles {
        _dir: dir,
        neo_file,
        cad_file,
    }
}

/// The seed fixture, loaded from files and linked
pub fn seed_database() -> NeoDatabase {
    let files = write_seed_files();
    let neos = load_neos(&files.neo_file).expect("load neos");
    let approaches = load_approaches(&files.cad_file).expect("load approaches");
    NeoDatabase::new(neos, approaches).expect("link")
}

/// Builds entities directly, skipping the file formats
pub fn database_from(
    neos: &[(&str, &str, &str, &str)],
    approaches: &[(&str, &str, &str, &str)],
) -> NeoDatabase {
    let neos = neos
        .iter()
        .map(|(pdes, name, pha, diameter)| {
            NearEarthObject::from_source(pdes, name, pha, diameter).unwrap()
        })
        .collect();
    let approaches = approaches
        .iter()
        .map(|(des, cd, dist, v_rel)| CloseApproach::from_source(des, cd, dist, v_rel).unwrap())
        .collect();
    NeoDatabase::new(neos, approaches).unwrap()
}
