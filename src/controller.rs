//! Conversion controller.
//!
//! This module orchestrates converting whole files:
//! - Reading the records of an input file
//! - Running each record through the conversion pipeline
//! - Writing the converted records to their output file
//!
//! Several files are independent of each other and are converted in
//! parallel. Within a file, records keep their order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::cipher::SymbolPolicy;
use crate::converter::{Conversion, SequenceConverter};
use crate::formats::fasta::DEFAULT_LINE_WIDTH;
use crate::formats::{output_path, read_records, write_records, FormatError, FormatResult};
use crate::model::Record;

/// Where converted records go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Next to the input, named after the conversion
    #[default]
    Derived,
    /// An explicit file
    Path(PathBuf),
    /// Nowhere: the caller prints the returned records
    Stdout,
}

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub conversion: Conversion,
    pub policy: SymbolPolicy,
    pub line_width: usize,
    pub output: OutputTarget,
}

impl ConvertOptions {
    pub fn new(conversion: Conversion) -> Self {
        Self {
            conversion,
            policy: SymbolPolicy::default(),
            line_width: DEFAULT_LINE_WIDTH,
            output: OutputTarget::default(),
        }
    }

    fn converter(&self) -> SequenceConverter {
        SequenceConverter::new().with_policy(self.policy)
    }
}

/// Outcome of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub input: PathBuf,
    /// File the records were written to, if any
    pub output: Option<PathBuf>,
    pub records: Vec<Record>,
}

/// Header annotation of a converted record.
pub fn converted_description(conversion: Conversion) -> String {
    format!("| {} Translation", conversion)
}

/// Converts records in order. The first failing record aborts the whole
/// batch, so no partially converted file is ever produced.
pub fn convert_records(
    records: &[Record],
    conversion: Conversion,
    converter: &SequenceConverter,
) -> FormatResult<Vec<Record>> {
    records
        .iter()
        .map(|record| {
            let sequence = converter
                .convert(conversion, &record.sequence)
                .map_err(|source| FormatError::ConversionError {
                    id: record.id.clone(),
                    source,
                })?;
            Ok(Record::new(record.id.clone(), sequence)
                .with_description(converted_description(conversion)))
        })
        .collect()
}

/// Reads, converts and writes one file.
pub fn convert_file<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> FormatResult<ConvertedFile> {
    let input = input.as_ref();
    let conversion = options.conversion;
    debug!(file = %input.display(), %conversion, "converting file");

    let records = read_records(input, conversion.source())?;
    debug!(file = %input.display(), records = records.len(), "read records");

    let converted = convert_records(&records, conversion, &options.converter())?;

    let output = match &options.output {
        OutputTarget::Derived => Some(output_path(input, conversion)),
        OutputTarget::Path(path) => Some(path.clone()),
        OutputTarget::Stdout => None,
    };
    if let Some(path) = &output {
        write_records(path, &converted, options.line_width)?;
        info!(
            input = %input.display(),
            output = %path.display(),
            records = converted.len(),
            "sequence written"
        );
    }

    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output,
        records: converted,
    })
}

/// Converts several files in parallel. Results are returned in input order.
pub fn convert_files<P>(inputs: &[P], options: &ConvertOptions) -> Vec<FormatResult<ConvertedFile>>
where
    P: AsRef<Path> + Sync,
{
    inputs
        .par_iter()
        .map(|input| convert_file(input, options))
        .collect()
}
