//! FASTA reader and writer.
//!
//! This module handles reading and writing FASTA records.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use textwrap::{Options, WordSplitter, WrapAlgorithm};
use thiserror::Error;

use crate::model::{MoleculeType, Record, Sequence};

/// Line width used by most FASTA writers.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Sequence without header at line {0} (file does not appear to be FASTA)")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Accumulates the lines of one record.
struct PendingRecord {
    id: String,
    description: String,
    data: String,
}

impl PendingRecord {
    fn from_header(header: &str) -> Self {
        let header = header.trim();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, rest.trim_start()),
            None => (header, ""),
        };
        Self {
            id: id.to_string(),
            description: description.to_string(),
            data: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        // Fast append: most FASTA lines don't have internal whitespace
        if line.bytes().all(|b| !b.is_ascii_whitespace()) {
            self.data.push_str(line);
        } else {
            self.data.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    fn finish(self, molecule: MoleculeType) -> Record {
        Record::new(self.id, Sequence::new(molecule, self.data)).with_description(self.description)
    }
}

/// Parses FASTA content from a reader.
///
/// Every record is tagged with `molecule`. Blank lines are skipped and
/// sequence lines are concatenated with whitespace removed.
pub fn parse_fasta<R: BufRead>(reader: R, molecule: MoleculeType) -> FastaResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<PendingRecord> = None;

    for (index, line_result) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line_result?;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            // Save previous record if exists
            if let Some(pending) = current.take() {
                records.push(pending.finish(molecule));
            }
            current = Some(PendingRecord::from_header(header));
        } else {
            match current.as_mut() {
                Some(pending) => pending.push_line(line),
                None => return Err(FastaError::SequenceWithoutHeader(line_number)),
            }
        }
    }

    // Don't forget the last record
    if let Some(pending) = current {
        records.push(pending.finish(molecule));
    }

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(records)
}

/// Parses FASTA content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_fasta_str(content: &str, molecule: MoleculeType) -> FastaResult<Vec<Record>> {
    parse_fasta(content.as_bytes(), molecule)
}

/// Splits sequence data into lines of at most `width` display columns.
///
/// Sequence alphabets are ASCII, so for converted data a column is a symbol.
/// Pass-through symbols that render double-width (CJK, most emoji) take two
/// columns, which keeps every output line within `width` terminal cells.
/// A width of 0 keeps the sequence on one line.
pub fn wrap_sequence(data: &str, width: usize) -> Vec<Cow<'_, str>> {
    if data.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![Cow::Borrowed(data)];
    }

    let options = Options::new(width)
        .break_words(true)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(data, options)
}

/// Writes one record: header line, then the wrapped sequence.
pub fn write_record<W: Write>(writer: &mut W, record: &Record, width: usize) -> io::Result<()> {
    writeln!(writer, ">{}", record.header())?;
    for line in wrap_sequence(record.sequence.as_str(), width) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Writes all records in order.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[Record], width: usize) -> io::Result<()> {
    for record in records {
        write_record(writer, record, width)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> FastaResult<Vec<Record>> {
        parse_fasta_str(content, MoleculeType::Dna)
    }

    #[test]
    fn test_parse_simple_fasta() {
        let records = parse(">seq1\nACGT\n>seq2\nTGCA\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].sequence.as_str(), "ACGT");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].sequence.as_str(), "TGCA");
        assert_eq!(records[1].sequence.molecule(), MoleculeType::Dna);
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let records = parse(">seq1\nACGT\nTGCA\nAAAA\n").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence.as_str(), "ACGTTGCAAAAA");
    }

    #[test]
    fn test_parse_with_description() {
        let records = parse(">seq1 This is a description\nACGT\n").unwrap();

        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description.as_deref(), Some("This is a description"));
    }

    #[test]
    fn test_parse_header_with_leading_space() {
        let records = parse("> seqconvert.py | DNA > mRNA Translation\nUACG\n").unwrap();

        assert_eq!(records[0].id, "seqconvert.py");
        assert_eq!(records[0].description.as_deref(), Some("| DNA > mRNA Translation"));
    }

    #[test]
    fn test_parse_with_empty_lines_and_inner_whitespace() {
        let records = parse(">seq1\nAC GT\n\n>seq2\n\nTG\tCA\r\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence.as_str(), "ACGT");
        assert_eq!(records[1].sequence.as_str(), "TGCA");
    }

    #[test]
    fn test_header_only_record_is_kept() {
        let records = parse(">empty\n>seq2\nA\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].sequence.is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse(""), Err(FastaError::EmptyFile)));
        assert!(matches!(parse("\n\n"), Err(FastaError::EmptyFile)));
    }

    #[test]
    fn test_sequence_without_header() {
        let result = parse("\nACGT\n>seq1\nTGCA\n");
        assert!(matches!(result, Err(FastaError::SequenceWithoutHeader(2))));
    }

    #[test]
    fn test_case_preservation() {
        let records = parse(">seq1\nacgt\n").unwrap();
        assert_eq!(records[0].sequence.as_str(), "acgt");
    }

    #[test]
    fn test_wrap_sequence() {
        let data = "A".repeat(130);
        let lines = wrap_sequence(&data, 60);
        let lengths: Vec<usize> = lines.iter().map(|l| l.len()).collect();
        assert_eq!(lengths, [60, 60, 10]);

        assert_eq!(wrap_sequence("ACGT", 0), ["ACGT"]);
        assert!(wrap_sequence("", 60).is_empty());
    }

    #[test]
    fn test_wrap_keeps_gap_symbols() {
        let lines = wrap_sequence("AC-GT-AC", 3);
        assert_eq!(lines.concat(), "AC-GT-AC");
        assert!(lines.iter().all(|l| l.len() <= 3));
    }

    #[test]
    fn test_wrap_counts_display_columns() {
        // one column each
        let lines = wrap_sequence("AéAéAé", 4);
        assert_eq!(lines, ["AéAé", "Aé"]);

        // two columns each
        let wide = "漢".repeat(4);
        let lines = wrap_sequence(&wide, 4);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.concat(), wide);
    }

    #[test]
    fn test_write_fasta() {
        let records = vec![
            Record::new("seq1", Sequence::mrna("UACGUACG")).with_description("| DNA > mRNA Translation"),
            Record::new("seq2", Sequence::mrna("")),
        ];
        let mut out = Vec::new();
        write_fasta(&mut out, &records, 4).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">seq1 | DNA > mRNA Translation\nUACG\nUACG\n>seq2\n"
        );
    }

    #[test]
    fn test_written_records_parse_back() {
        let records = vec![Record::new("seq1", Sequence::protein("M".repeat(75)))];
        let mut out = Vec::new();
        write_fasta(&mut out, &records, DEFAULT_LINE_WIDTH).unwrap();

        let parsed = parse_fasta(&out[..], MoleculeType::Protein).unwrap();
        assert_eq!(parsed, records);
    }
}
