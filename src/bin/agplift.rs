//! A command line tool that lifts genomic feature annotations from
//! scaffold-local coordinates into chromosome-global coordinates using an AGP
//! assembly map.
//!
//! ```shell
//! cargo run --release --features=binaries -- --assembly-map assembly.agp annotations.gff
//! ```
//!
//! The re-projected annotation stream is written to standard out; logging
//! goes to standard error.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

use agplift::annotation;
use agplift::liftover;
use agplift::map;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Lifts feature annotations over an AGP assembly map.
#[derive(Parser)]
pub struct Args {
    /// The assembly map describing scaffold placements (`.gz` accepted).
    #[arg(short = 'm', long = "assembly-map")]
    assembly_map: PathBuf,

    /// The annotation stream to re-project (`.gz` accepted).
    annotations: PathBuf,

    /// Emit a diagnostic comment for each record whose seqid has no
    /// placement.
    #[arg(long)]
    debug: bool,

    /// The verbosity of the logging.
    #[command(flatten)]
    verbose: Verbosity,
}

/// Opens a path as a buffered reader, transparently decompressing gzipped
/// files.
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("opening `{}`", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Ok(Box::new(BufReader::new(GzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// The main method.
fn throw(args: &Args) -> Result<()> {
    let reader = map::Reader::new(open(&args.assembly_map)?);
    let machine = liftover::machine::Builder::default()
        .try_build_from(reader)
        .context("building the placement table")?;

    info!(
        "placed {} scaffolds across {} chromosomes",
        machine.placements().count(),
        machine.extents().count()
    );

    let annotations = annotation::Reader::new(open(&args.annotations)?);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for result in machine.transform(annotations, args.debug) {
        let line = result.context("transforming annotations")?;
        writeln!(handle, "{}", line)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    throw(&args)
}
