//! Command-line generator for static Sudoku peer tables.
//!
//! Writes the index, mask, and bitset tables as C (or Rust) source for
//! embedding in a solver build.
//!
//! # Usage
//!
//! Print all tables as a C header:
//!
//! ```sh
//! peertab
//! ```
//!
//! Write only the index and mask tables to a file, for 512-bit vectors:
//!
//! ```sh
//! peertab --table index,mask --lane-width 32 --alignment 64 -o peers.h
//! ```
//!
//! Emit Rust source instead:
//!
//! ```sh
//! peertab --format rust -o src/peers.rs
//! ```
//!
//! Set `RUST_LOG=debug` to see the table shapes being generated.

use std::{io, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use peertab_emitter::{BuildMode, Emitter, Format, LayoutError, MaskLayout, Tables};

mod sink;
mod version;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    C,
    Rust,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => Format::C,
            FormatArg::Rust => Format::Rust,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableArg {
    Index,
    Mask,
    Bitset,
}

impl From<TableArg> for Tables {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Index => Tables::INDEX,
            TableArg::Mask => Tables::MASK,
            TableArg::Bitset => Tables::BITSET,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// Output file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Source language of the generated tables.
    #[arg(long, value_name = "FORMAT", default_value = "c")]
    format: FormatArg,

    /// Tables to emit (comma-separated or repeated). Defaults to all.
    #[arg(short, long = "table", value_name = "TABLE", value_delimiter = ',')]
    tables: Vec<TableArg>,

    /// Mask entries per vector instruction.
    #[arg(long, value_name = "LANES", default_value_t = 16)]
    lane_width: usize,

    /// Mask table alignment, in bytes.
    #[arg(long, value_name = "BYTES", default_value_t = 32)]
    alignment: usize,

    /// Compute table rows on all cores.
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn selected_tables(&self) -> Tables {
        if self.tables.is_empty() {
            return Tables::all();
        }
        self.tables.iter().copied().map(Tables::from).collect()
    }

    fn build_mode(&self) -> BuildMode {
        if self.parallel {
            BuildMode::Parallel
        } else {
            BuildMode::Serial
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum GenerateError {
    #[display("invalid mask layout: {_0}")]
    Layout(LayoutError),
    #[display("failed to render tables: {_0}")]
    Render(io::Error),
    #[display("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[display("failed to write to stdout: {_0}")]
    Stdout(io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("peertab: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let layout = MaskLayout::new(args.lane_width, args.alignment).map_err(GenerateError::Layout)?;
    let emitter = Emitter::new(args.format.into())
        .with_layout(layout)
        .with_tables(args.selected_tables())
        .with_mode(args.build_mode());

    log::info!(
        "generating {:?} as {} (version {})",
        emitter.tables(),
        emitter.format(),
        version::build_version()
    );
    let contents = emitter.emit_to_vec().map_err(GenerateError::Render)?;

    match &args.output {
        Some(path) => {
            sink::write_file(path, &contents).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {} bytes to {}", contents.len(), path.display());
        }
        None => sink::write_stdout(&contents).map_err(GenerateError::Stdout)?,
    }
    Ok(())
}
