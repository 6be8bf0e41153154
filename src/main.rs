//! seqconvert - Sequence Representation Converter
//!
//! Converts FASTA files between DNA, mRNA, tRNA and protein.
//!
//! ## Usage
//!
//! ```bash
//! seqconvert dna-mrna sample.fas          # writes sample_(DNA-mRNA).fas
//! seqconvert dp a.fas b.fas               # DNA to protein, both files
//! seqconvert prot-dna prot.fas -o -       # write to stdout
//! ```
//!
//! ## Conversions
//!
//! - `dna-mrna` (`dm`), `mrna-trna` (`mt`), `trna-prot` (`tp`), `prot-trna` (`pt`)
//! - `trna-mrna` (`tm`), `mrna-dna` (`md`), `dna-prot` (`dp`), `prot-dna` (`pd`)

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use seqconvert::cipher::SymbolPolicy;
use seqconvert::controller::{convert_files, ConvertOptions, OutputTarget};
use seqconvert::converter::Conversion;
use seqconvert::formats::fasta::{write_fasta, DEFAULT_LINE_WIDTH};

/// Parses a conversion name or alias (`dna-mrna`, `dm`, ...).
fn parse_conversion(s: &str) -> Result<Conversion, String> {
    s.parse::<Conversion>().map_err(|e| {
        let names: Vec<String> = Conversion::ALL
            .iter()
            .map(|c| format!("{} ({})", c.name(), c.short_name()))
            .collect();
        format!("{}; expected one of: {}", e, names.join(", "))
    })
}

/// seqconvert - Convert DNA, mRNA, tRNA and protein FASTA files
///
/// Each input file is converted and written next to itself as
/// `<name>_(<Source>-<Target>).<ext>`, unless -o/--output is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Conversion to apply: dna-mrna, mrna-trna, trna-prot, prot-trna,
    /// trna-mrna, mrna-dna, dna-prot, prot-dna (or dm, mt, tp, pt, tm, md, dp, pd)
    #[arg(value_parser = parse_conversion)]
    conversion: Conversion,

    /// FASTA file(s) to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file (single input only). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Sequence line width in the output (0 = no wrapping)
    #[arg(short = 'w', long = "line-width", default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: usize,

    /// Reject symbols outside the source alphabet instead of copying them
    #[arg(long = "strict")]
    strict: bool,

    /// Also print the converted records on stdout
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = match args.output.as_deref() {
        None => OutputTarget::Derived,
        Some(_) if args.files.len() > 1 => {
            anyhow::bail!("-o/--output can only be used with a single input file");
        }
        Some("-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::Path(PathBuf::from(path)),
    };
    let to_stdout = output == OutputTarget::Stdout;

    let options = ConvertOptions {
        conversion: args.conversion,
        policy: if args.strict {
            SymbolPolicy::Reject
        } else {
            SymbolPolicy::PassThrough
        },
        line_width: args.line_width,
        output,
    };
    info!(conversion = %options.conversion, files = args.files.len(), "starting");

    let results = convert_files(&args.files, &options);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut failures = 0;
    for (path, result) in args.files.iter().zip(results) {
        match result.with_context(|| format!("Failed to convert {}", path.display())) {
            Ok(converted) => {
                if args.print || to_stdout {
                    write_fasta(&mut handle, &converted.records, options.line_width)?;
                }
            }
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }
    handle.flush()?;

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed to convert", failures, args.files.len());
    }

    Ok(())
}
