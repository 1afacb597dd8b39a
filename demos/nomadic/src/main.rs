//! nomadic — run the nomadic mobility model over a small edge deployment.
//!
//! ```text
//! nomadic [--stationary] [PLACES_CSV DWELL_CSV]
//! ```
//!
//! Without paths, uses a built-in catalog of eight access points across three
//! attractiveness classes (means loosely follow a campus: labs hold devices
//! longest, corridors shortest).  Writes `relocations.csv` and
//! `occupancy.csv` to `./output`.  Set `RUST_LOG=debug` for per-run detail,
//! `RUST_LOG=trace` for every relocation.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ec_catalog::{PlaceCatalog, load_catalog_csv, load_catalog_reader};
use ec_core::{SimConfig, SimTime};
use ec_mobility::{MobilityKind, MobilityModel};
use ec_output::{CsvWriter, TraceObserver};
use ec_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEVICE_COUNT:      usize = 200;
const SEED:              u64   = 42;
const SIM_SECONDS:       f64   = 4.0 * 3_600.0; // 4 simulated hours
const SNAPSHOT_INTERVAL: f64   = 600.0;         // occupancy every 10 minutes
const OUTPUT_DIR:        &str  = "output";

// ── Built-in catalog ──────────────────────────────────────────────────────────

const PLACES_CSV: &str = "\
place_id,attractiveness\n\
0,0\n\
1,0\n\
2,1\n\
3,1\n\
4,1\n\
5,2\n\
6,2\n\
7,2\n\
";

// Mean dwell per class, in seconds.
const DWELL_CSV: &str = "\
attractiveness,mean_dwell_time\n\
0,2700.0\n\
1,1200.0\n\
2,300.0\n\
";

const USAGE: &str = "usage: nomadic [--stationary] [PLACES_CSV DWELL_CSV]";

/// Split the command line into the model kind and any catalog paths.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<(MobilityKind, Vec<String>)> {
    let mut kind = MobilityKind::Nomadic;
    let mut paths = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--stationary" => kind = MobilityKind::Stationary,
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => paths.push(arg),
        }
    }
    if !(paths.is_empty() || paths.len() == 2) {
        bail!(USAGE);
    }
    Ok((kind, paths))
}

fn load_catalog(paths: &[String]) -> Result<PlaceCatalog> {
    match paths {
        [] => load_catalog_reader(Cursor::new(PLACES_CSV), Cursor::new(DWELL_CSV))
            .context("built-in catalog"),
        [places, dwell] => load_catalog_csv(Path::new(places), Path::new(dwell))
            .with_context(|| format!("loading catalog from {places} and {dwell}")),
        _ => bail!(USAGE),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (kind, paths) = parse_args(std::env::args().skip(1))?;
    let catalog = Arc::new(load_catalog(&paths)?);
    info!(places = catalog.place_count(), model = %kind, "catalog ready");

    let mut config = SimConfig::new(DEVICE_COUNT, SEED, SimTime(SIM_SECONDS));
    config.snapshot_interval = Some(SNAPSHOT_INTERVAL);

    let mut sim = SimBuilder::new(config).kind(kind).build(Arc::clone(&catalog))?;
    let mut observer = TraceObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    let started = Instant::now();
    let summary = sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }

    println!(
        "{} relocations over {} in {:.2?} ({} pending dropped)",
        summary.relocations,
        summary.end,
        started.elapsed(),
        summary.pending_discarded,
    );
    println!("final occupancy:");
    for place in catalog.places() {
        let count = sim.model.device_count(place.id).unwrap_or(0);
        println!("  {:>12} {:>24}  {count}", place.id.to_string(), place.class.to_string());
    }
    println!("output written to ./{OUTPUT_DIR}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_nomadic_with_built_in_catalog() {
        let (kind, paths) = parse_args(args(&[])).unwrap();
        assert_eq!(kind, MobilityKind::Nomadic);
        assert!(paths.is_empty());
    }

    #[test]
    fn stationary_flag_and_paths() {
        let (kind, paths) = parse_args(args(&["places.csv", "--stationary", "dwell.csv"])).unwrap();
        assert_eq!(kind, MobilityKind::Stationary);
        assert_eq!(paths, args(&["places.csv", "dwell.csv"]));
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        let err = parse_args(args(&["--statonary"])).unwrap_err().to_string();
        assert!(err.contains("unknown option --statonary"));
        assert!(err.contains("usage: nomadic"));
    }

    #[test]
    fn single_path_is_rejected() {
        let err = parse_args(args(&["places.csv"])).unwrap_err().to_string();
        assert_eq!(err, USAGE);
    }
}
