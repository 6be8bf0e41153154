//! Error types for the conversion engine.

use thiserror::Error;

use crate::model::MoleculeType;

/// Errors that can occur while converting a sequence.
///
/// A conversion either returns a complete sequence or one of these; no
/// partially converted data is ever handed back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Malformed input: sequence length {length} is not a multiple of 3")]
    MalformedInput { length: usize },

    #[error("Unknown codon: {0:?}")]
    UnknownCodon(String),

    #[error("Unknown residue: {0:?}")]
    UnknownResidue(char),

    #[error("Symbol {symbol:?} at position {position} is not in the source alphabet")]
    UnsupportedAlphabetSymbol { symbol: char, position: usize },

    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),

    #[error("Expected a {expected} sequence, got {found}")]
    MoleculeMismatch {
        expected: MoleculeType,
        found: MoleculeType,
    },
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
