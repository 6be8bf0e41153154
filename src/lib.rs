//! # seqconvert - Sequence Representation Converter
//!
//! Converts sequences between DNA, mRNA, tRNA and protein, reading and
//! writing FASTA records.
//!
//! ## Architecture
//!
//! The conversion engine is pure and never touches files or logs:
//! - `cipher`: base substitution between nucleotide alphabets
//! - `genetic_code`: static codon table, decoding and encoding
//! - `converter`: the eight conversion pipelines built from those steps
//! - `model`: molecule types, sequences and records
//! - `error`: conversion errors
//!
//! Around it:
//! - `formats`: FASTA reading/writing and output file naming
//! - `controller`: converting whole files, several in parallel
//!
//! ## Example
//!
//! ```
//! use seqconvert::converter::SequenceConverter;
//!
//! let converter = SequenceConverter::new();
//! assert_eq!(converter.dna_to_mrna("ATGC").unwrap(), "UACG");
//! assert_eq!(converter.dna_to_protein("ATGGCT").unwrap(), "MA");
//! ```

pub mod cipher;
pub mod controller;
pub mod converter;
pub mod error;
pub mod formats;
pub mod genetic_code;
pub mod model;
