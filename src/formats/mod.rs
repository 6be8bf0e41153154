//! Sequence file reading and writing.
//!
//! Input and output files are FASTA. Converted files are written next to
//! their input, named after the conversion:
//! `sample.fas` converted DNA → mRNA becomes `sample_(DNA-mRNA).fas`.

pub mod fasta;

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::converter::Conversion;
use crate::error::ConversionError;
use crate::model::{MoleculeType, Record};

/// Errors that can occur while reading, converting or writing a file.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Target is a directory: {0}")]
    IsDirectory(PathBuf),

    #[error("FASTA error: {0}")]
    FastaError(#[from] fasta::FastaError),

    #[error("Record {id:?}: {source}")]
    ConversionError {
        id: String,
        #[source]
        source: ConversionError,
    },
}

/// Result type for file operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Reads every record of a FASTA file, tagging them with `molecule`.
pub fn read_records<P: AsRef<Path>>(path: P, molecule: MoleculeType) -> FormatResult<Vec<Record>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(FormatError::IsDirectory(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::with_capacity(1024 * 1024, file);
    Ok(fasta::parse_fasta(reader, molecule)?)
}

/// Writes records to a FASTA file, replacing it if it exists.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[Record], line_width: usize) -> FormatResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    fasta::write_fasta(&mut writer, records, line_width)?;
    Ok(())
}

/// Output path for a converted file: `{stem}_({Source}-{Target}){.ext}` in
/// the input's directory.
pub fn output_path<P: AsRef<Path>>(input: P, conversion: Conversion) -> PathBuf {
    let input = input.as_ref();
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(format!("_({})", conversion.suffix()));
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
