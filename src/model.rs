//! Data model for sequence conversion.
//!
//! This module contains the data structures shared by the converter and the
//! record reader/writer:
//! - `MoleculeType`: which representation a symbol string is in
//! - `Sequence`: a raw symbol string tagged with its molecule type
//! - `Record`: a sequence together with its FASTA identifier and description

use std::fmt;

/// The four sequence representations the converter moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoleculeType {
    Dna,
    Mrna,
    Trna,
    Protein,
}

impl MoleculeType {
    /// Label used in output headers and file names.
    pub fn label(self) -> &'static str {
        match self {
            MoleculeType::Dna => "DNA",
            MoleculeType::Mrna => "mRNA",
            MoleculeType::Trna => "tRNA",
            MoleculeType::Protein => "Protein",
        }
    }
}

impl fmt::Display for MoleculeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw symbol string of a single molecule type.
///
/// Headers and line breaks are not part of a sequence. A sequence is never
/// modified in place: every conversion step builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    molecule: MoleculeType,
    data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(molecule: MoleculeType, data: impl Into<String>) -> Self {
        Self {
            molecule,
            data: data.into(),
        }
    }

    pub fn dna(data: impl Into<String>) -> Self {
        Self::new(MoleculeType::Dna, data)
    }

    pub fn mrna(data: impl Into<String>) -> Self {
        Self::new(MoleculeType::Mrna, data)
    }

    pub fn trna(data: impl Into<String>) -> Self {
        Self::new(MoleculeType::Trna, data)
    }

    pub fn protein(data: impl Into<String>) -> Self {
        Self::new(MoleculeType::Protein, data)
    }

    /// Returns the molecule type this sequence is written in.
    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    /// Returns the length of the sequence in symbols (not bytes).
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// A FASTA record: identifier, optional description and sequence data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First whitespace-delimited token after '>' (may be empty)
    pub id: String,
    /// Remainder of the header line after the identifier
    pub description: Option<String>,
    /// The sequence data
    pub sequence: Sequence,
}

impl Record {
    /// Creates a new record without a description.
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Full header line content, without the leading '>'.
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) if self.id.is_empty() => desc.clone(),
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_creation() {
        let seq = Sequence::dna("ACGT");
        assert_eq!(seq.molecule(), MoleculeType::Dna);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.as_str(), "ACGT");
        assert!(!seq.is_empty());
        assert!(Sequence::protein("").is_empty());
    }

    #[test]
    fn test_sequence_length_counts_symbols() {
        // 'é' is two bytes but one symbol
        assert_eq!(Sequence::dna("Aé").len(), 2);
        assert_eq!(Sequence::dna("Aé").as_str().len(), 3);
    }

    #[test]
    fn test_molecule_labels() {
        assert_eq!(MoleculeType::Dna.to_string(), "DNA");
        assert_eq!(MoleculeType::Mrna.to_string(), "mRNA");
        assert_eq!(MoleculeType::Trna.to_string(), "tRNA");
        assert_eq!(MoleculeType::Protein.label(), "Protein");
    }

    #[test]
    fn test_record_header() {
        let record = Record::new("seq1", Sequence::dna("ACGT"));
        assert_eq!(record.header(), "seq1");

        let record = record.with_description("chromosome 1");
        assert_eq!(record.header(), "seq1 chromosome 1");

        let anonymous = Record::new("", Sequence::dna("A")).with_description("seqconvert.py | DNA");
        assert_eq!(anonymous.header(), "seqconvert.py | DNA");
    }
}
